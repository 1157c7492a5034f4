use std::{
    fmt::Display,
    str::FromStr,
    sync::LazyLock,
};

use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
    de::{
        Unexpected,
        Visitor,
    },
};
use thiserror::Error;

use crate::core::identity::Identity;

/// Default port for plain CoAP.
pub const COAP_DEFAULT_PORT: u16 = 5683;

/// Default port for CoAP over DTLS.
pub const COAPS_DEFAULT_PORT: u16 = 5684;

/// Error for an invalid server URI.
#[derive(Debug, Error)]
#[error("invalid server URI: {0}")]
pub struct InvalidServerUri(String);

/// The scheme of a server URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Coap,
    Coaps,
}

impl Scheme {
    /// The port used when a URI does not name one.
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Coap => COAP_DEFAULT_PORT,
            Self::Coaps => COAPS_DEFAULT_PORT,
        }
    }

    /// Checks if the scheme runs over DTLS.
    pub fn is_secure(&self) -> bool {
        *self == Self::Coaps
    }
}

impl TryFrom<&str> for Scheme {
    type Error = anyhow::Error;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "coap" => Ok(Self::Coap),
            "coaps" => Ok(Self::Coaps),
            _ => Err(Self::Error::msg(format!("invalid scheme: {value}"))),
        }
    }
}

impl Into<&'static str> for Scheme {
    fn into(self) -> &'static str {
        match self {
            Self::Coap => "coap",
            Self::Coaps => "coaps",
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Into::<&'static str>::into(*self))
    }
}

/// The URI a server is reached at, of the form `coap[s]://host:port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerUri {
    scheme: Scheme,
    host: String,
    port: u16,
}

impl ServerUri {
    /// Creates a new URI.
    ///
    /// IPv6 hosts must be passed without brackets.
    pub fn new<S>(scheme: Scheme, host: S, port: u16) -> Self
    where
        S: Into<String>,
    {
        Self {
            scheme,
            host: host.into(),
            port,
        }
    }

    /// Derives the URI of a peer from its network identity.
    ///
    /// The scheme follows the security of the channel, not the port.
    pub fn from_identity(identity: &Identity) -> Self {
        let scheme = if identity.is_secure() {
            Scheme::Coaps
        } else {
            Scheme::Coap
        };
        Self::new(
            scheme,
            identity.peer_address().host_string(),
            identity.peer_address().port(),
        )
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Display for ServerUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.host.contains(':') {
            write!(f, "{}://[{}]:{}", self.scheme, self.host, self.port)
        } else {
            write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
        }
    }
}

impl TryFrom<&str> for ServerUri {
    type Error = InvalidServerUri;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^(coaps?)://(?:\[([0-9A-Fa-f:.]+)\]|([^\s/:\[\]]+))(?::([0-9]{1,5}))?/?$")
                .unwrap()
        });
        let invalid = || InvalidServerUri(value.to_owned());
        let captures = RE.captures(value).ok_or_else(invalid)?;
        let scheme = Scheme::try_from(&captures[1]).map_err(|_| invalid())?;
        let host = captures
            .get(2)
            .or_else(|| captures.get(3))
            .ok_or_else(invalid)?
            .as_str();
        let port = match captures.get(4) {
            Some(port) => port.as_str().parse::<u16>().map_err(|_| invalid())?,
            None => scheme.default_port(),
        };
        Ok(Self::new(scheme, host, port))
    }
}

impl TryFrom<String> for ServerUri {
    type Error = InvalidServerUri;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl FromStr for ServerUri {
    type Err = InvalidServerUri;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Serialize for ServerUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct ServerUriVisitor;

impl<'de> Visitor<'de> for ServerUriVisitor {
    type Value = ServerUri;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a coap or coaps URI")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        ServerUri::try_from(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for ServerUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(ServerUriVisitor)
    }
}
