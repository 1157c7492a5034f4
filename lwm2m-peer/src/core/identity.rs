use std::{
    fmt::Display,
    net::{
        IpAddr,
        SocketAddr,
    },
};

/// The network address of a peer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PeerAddress {
    /// A socket address the peer was actually reached at.
    Resolved(SocketAddr),
    /// A host label and port that were never resolved to an IP address.
    ///
    /// Used for placeholders, such as the address of the system identity.
    Unresolved { host: String, port: u16 },
}

impl PeerAddress {
    /// Creates an unresolved address from a host label.
    pub fn unresolved<S>(host: S, port: u16) -> Self
    where
        S: Into<String>,
    {
        Self::Unresolved {
            host: host.into(),
            port,
        }
    }

    /// The host, as a literal IP address or the unresolved label.
    ///
    /// No reverse lookup is ever performed.
    pub fn host_string(&self) -> String {
        match self {
            Self::Resolved(addr) => addr.ip().to_string(),
            Self::Unresolved { host, .. } => host.clone(),
        }
    }

    /// The IP address, if resolved.
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Self::Resolved(addr) => Some(addr.ip()),
            Self::Unresolved { .. } => None,
        }
    }

    /// The port.
    pub fn port(&self) -> u16 {
        match self {
            Self::Resolved(addr) => addr.port(),
            Self::Unresolved { port, .. } => *port,
        }
    }

    /// Checks if the address is an unresolved placeholder.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved { .. })
    }
}

impl From<SocketAddr> for PeerAddress {
    fn from(value: SocketAddr) -> Self {
        Self::Resolved(value)
    }
}

impl Display for PeerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolved(addr) => addr.fmt(f),
            Self::Unresolved { host, port } => write!(f, "{host}/<unresolved>:{port}"),
        }
    }
}

/// How the channel to a peer is secured.
///
/// Credentials are carried as reported by the transport layer. Nothing here validates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportSecurity {
    /// Plain CoAP, no DTLS.
    Unsecure,
    /// DTLS with a pre-shared key.
    Psk { identity: String },
    /// DTLS with a raw public key.
    Rpk { public_key: Vec<u8> },
    /// DTLS with an X.509 certificate.
    X509 { common_name: String },
}

/// The network-layer identity of a peer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    peer_address: PeerAddress,
    security: TransportSecurity,
}

impl Identity {
    /// Creates an identity for a peer on an unsecured channel.
    pub fn unsecure<A>(peer_address: A) -> Self
    where
        A: Into<PeerAddress>,
    {
        Self {
            peer_address: peer_address.into(),
            security: TransportSecurity::Unsecure,
        }
    }

    /// Creates an identity for a peer authenticated with a pre-shared key.
    pub fn psk<A, S>(peer_address: A, identity: S) -> Self
    where
        A: Into<PeerAddress>,
        S: Into<String>,
    {
        Self {
            peer_address: peer_address.into(),
            security: TransportSecurity::Psk {
                identity: identity.into(),
            },
        }
    }

    /// Creates an identity for a peer authenticated with a raw public key.
    pub fn rpk<A>(peer_address: A, public_key: Vec<u8>) -> Self
    where
        A: Into<PeerAddress>,
    {
        Self {
            peer_address: peer_address.into(),
            security: TransportSecurity::Rpk { public_key },
        }
    }

    /// Creates an identity for a peer authenticated with an X.509 certificate.
    pub fn x509<A, S>(peer_address: A, common_name: S) -> Self
    where
        A: Into<PeerAddress>,
        S: Into<String>,
    {
        Self {
            peer_address: peer_address.into(),
            security: TransportSecurity::X509 {
                common_name: common_name.into(),
            },
        }
    }

    pub fn peer_address(&self) -> &PeerAddress {
        &self.peer_address
    }

    pub fn security(&self) -> &TransportSecurity {
        &self.security
    }

    /// Checks if the channel to the peer is secured by DTLS.
    pub fn is_secure(&self) -> bool {
        !matches!(self.security, TransportSecurity::Unsecure)
    }
}
