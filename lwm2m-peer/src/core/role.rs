use std::{
    fmt::Display,
    str::FromStr,
};

use serde_string_enum::{
    DeserializeStringEnum,
    SerializeStringEnum,
};

/// The trust role of a peer calling into the client.
///
/// The role decides which parts of the client's state a call may touch. Only [`Self::System`] may
/// read or write protected resources, such as the credentials stored in the security object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeStringEnum, DeserializeStringEnum)]
pub enum ServerRole {
    /// Internal call.
    ///
    /// Not a real network peer. Enables the client itself to read protected resources.
    System,
    /// Call from a LwM2M management server.
    Lwm2mServer,
    /// Call from a LwM2M bootstrap server.
    Lwm2mBootstrapServer,
}

impl TryFrom<&str> for ServerRole {
    type Error = anyhow::Error;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "SYSTEM" => Ok(Self::System),
            "LWM2M_SERVER" => Ok(Self::Lwm2mServer),
            "LWM2M_BOOTSTRAP_SERVER" => Ok(Self::Lwm2mBootstrapServer),
            _ => Err(Self::Error::msg(format!("invalid server role: {value}"))),
        }
    }
}

impl FromStr for ServerRole {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Into<&'static str> for ServerRole {
    fn into(self) -> &'static str {
        match self {
            Self::System => "SYSTEM",
            Self::Lwm2mServer => "LWM2M_SERVER",
            Self::Lwm2mBootstrapServer => "LWM2M_BOOTSTRAP_SERVER",
        }
    }
}

impl Into<String> for ServerRole {
    fn into(self) -> String {
        Into::<&'static str>::into(self).to_owned()
    }
}

impl Display for ServerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Into::<&'static str>::into(*self))
    }
}
