use std::{
    fmt::Display,
    sync::LazyLock,
};

use crate::core::{
    id::ServerId,
    identity::{
        Identity,
        PeerAddress,
    },
    role::ServerRole,
    uri::ServerUri,
};

/// Port of the placeholder address behind [`ServerIdentity::system`].
pub const SYSTEM_PORT: u16 = 1;

static SYSTEM: LazyLock<ServerIdentity> = LazyLock::new(|| {
    ServerIdentity::with_role(
        Identity::unsecure(PeerAddress::unresolved(
            Into::<&'static str>::into(ServerRole::System),
            SYSTEM_PORT,
        )),
        None,
        ServerRole::System,
    )
});

/// The identity of a peer calling into the client, along with the role it is trusted with.
///
/// Constructed once per logical peer reference and never mutated afterwards. Two identities are
/// equal if their ID, network identity, and role are all equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerIdentity {
    id: Option<ServerId>,
    identity: Identity,
    role: ServerRole,
}

impl ServerIdentity {
    /// Creates the identity of a LwM2M management server.
    pub fn new(identity: Identity, id: Option<ServerId>) -> Self {
        Self::with_role(identity, id, ServerRole::Lwm2mServer)
    }

    /// Creates an identity with an explicit role.
    pub fn with_role(identity: Identity, id: Option<ServerId>, role: ServerRole) -> Self {
        Self { id, identity, role }
    }

    /// Creates the identity of a LwM2M bootstrap server, which is never registered.
    pub fn bootstrap(identity: Identity) -> Self {
        Self::with_role(identity, None, ServerRole::Lwm2mBootstrapServer)
    }

    /// The identity used for calls made by the client itself.
    ///
    /// Its network identity is an unresolved placeholder, so [`Self::uri`] carries no meaning for
    /// it.
    pub fn system() -> &'static ServerIdentity {
        &SYSTEM
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn id(&self) -> Option<ServerId> {
        self.id
    }

    pub fn role(&self) -> ServerRole {
        self.role
    }

    /// Checks if the identity has the [`ServerRole::System`] role.
    pub fn is_system(&self) -> bool {
        self.role == ServerRole::System
    }

    /// Checks if the identity has the [`ServerRole::Lwm2mServer`] role.
    pub fn is_lwm2m_server(&self) -> bool {
        self.role == ServerRole::Lwm2mServer
    }

    /// Checks if the identity has the [`ServerRole::Lwm2mBootstrapServer`] role.
    pub fn is_lwm2m_bootstrap_server(&self) -> bool {
        self.role == ServerRole::Lwm2mBootstrapServer
    }

    /// The URI the peer is reached at.
    ///
    /// Callers expecting a real endpoint should check [`Self::is_system`] first.
    pub fn uri(&self) -> ServerUri {
        ServerUri::from_identity(&self.identity)
    }

    /// A human-readable label for logs and diagnostics.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for ServerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.role, self.id) {
            (ServerRole::System, _) => write!(f, "System"),
            (ServerRole::Lwm2mBootstrapServer, _) | (ServerRole::Lwm2mServer, None) => {
                write!(f, "{}[{}]", self.uri(), self.role)
            }
            (ServerRole::Lwm2mServer, Some(id)) => write!(f, "{}[{} {id}]", self.uri(), self.role),
        }
    }
}
