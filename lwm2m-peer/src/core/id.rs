use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

/// A numeric identifier assigned to a registered server.
///
/// Correlates a management server's identity with its registration record. Identities without a
/// registration (the system identity and, usually, bootstrap servers) hold no ID at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ServerId(u64);

impl ServerId {
    /// Creates a new server ID.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw value of the ID.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl Display for ServerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ServerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Into<u64> for ServerId {
    fn into(self) -> u64 {
        self.0
    }
}
