pub mod access;
pub mod hash;
pub mod id;
pub mod identity;
pub mod role;
pub mod server;
pub mod uri;
