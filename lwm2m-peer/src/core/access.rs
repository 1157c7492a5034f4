use std::fmt::Display;

use log::debug;
use thiserror::Error;

use crate::core::{
    role::ServerRole,
    server::ServerIdentity,
};

/// A class of client state that a call may try to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessScope {
    /// Protected resources, such as credentials in the security object.
    ///
    /// Only readable and writable by the client itself.
    Protected,
    /// Bootstrap operations, such as bootstrap-write, bootstrap-discover, and bootstrap-finish.
    Bootstrap,
    /// Regular device management operations.
    Management,
}

impl Into<&'static str> for AccessScope {
    fn into(self) -> &'static str {
        match self {
            Self::Protected => "protected",
            Self::Bootstrap => "bootstrap",
            Self::Management => "management",
        }
    }
}

impl Display for AccessScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Into::<&'static str>::into(*self))
    }
}

/// An error for a call rejected because of the caller's role.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("{peer} is not allowed to perform {scope} operations")]
    PermissionDenied { peer: String, scope: AccessScope },
}

impl ServerIdentity {
    /// Checks if the identity's role grants access to the given scope.
    pub fn can_access(&self, scope: AccessScope) -> bool {
        match (self.role(), scope) {
            (ServerRole::System, _) => true,
            (ServerRole::Lwm2mBootstrapServer, AccessScope::Bootstrap) => true,
            (ServerRole::Lwm2mServer, AccessScope::Management) => true,
            (ServerRole::Lwm2mBootstrapServer | ServerRole::Lwm2mServer, _) => false,
        }
    }

    /// Authorizes a call on the given scope.
    pub fn authorize(&self, scope: AccessScope) -> Result<(), AccessError> {
        if self.can_access(scope) {
            return Ok(());
        }
        debug!("Denied {scope} access to {}", self);
        Err(AccessError::PermissionDenied {
            peer: self.describe(),
            scope,
        })
    }
}

#[cfg(test)]
mod access_test {
    use std::net::{
        Ipv4Addr,
        SocketAddr,
    };

    use crate::core::{
        access::{
            AccessError,
            AccessScope,
        },
        id::ServerId,
        identity::Identity,
        server::ServerIdentity,
    };

    fn identity() -> Identity {
        Identity::psk(
            SocketAddr::from((Ipv4Addr::new(203, 0, 113, 5), 5684)),
            "client-1",
        )
    }

    #[test]
    fn system_accesses_every_scope() {
        let system = ServerIdentity::system();
        assert_matches::assert_matches!(system.authorize(AccessScope::Protected), Ok(()));
        assert_matches::assert_matches!(system.authorize(AccessScope::Bootstrap), Ok(()));
        assert_matches::assert_matches!(system.authorize(AccessScope::Management), Ok(()));
    }

    #[test]
    fn only_system_accesses_protected_resources() {
        let server = ServerIdentity::new(identity(), Some(ServerId::new(1)));
        let bootstrap = ServerIdentity::bootstrap(identity());
        assert!(!server.can_access(AccessScope::Protected));
        assert!(!bootstrap.can_access(AccessScope::Protected));
        assert_matches::assert_matches!(server.authorize(AccessScope::Protected), Err(AccessError::PermissionDenied { peer, scope }) => {
            assert_eq!(peer, "coaps://203.0.113.5:5684[LWM2M_SERVER 1]");
            assert_eq!(scope, AccessScope::Protected);
        });
    }

    #[test]
    fn servers_access_their_own_scope() {
        let server = ServerIdentity::new(identity(), Some(ServerId::new(1)));
        let bootstrap = ServerIdentity::bootstrap(identity());
        assert_matches::assert_matches!(server.authorize(AccessScope::Management), Ok(()));
        assert_matches::assert_matches!(bootstrap.authorize(AccessScope::Bootstrap), Ok(()));
        assert_matches::assert_matches!(server.authorize(AccessScope::Bootstrap), Err(err) => {
            assert_eq!(
                err.to_string(),
                "coaps://203.0.113.5:5684[LWM2M_SERVER 1] is not allowed to perform bootstrap operations"
            );
        });
        assert_matches::assert_matches!(bootstrap.authorize(AccessScope::Management), Err(err) => {
            assert_eq!(
                err.to_string(),
                "coaps://203.0.113.5:5684[LWM2M_BOOTSTRAP_SERVER] is not allowed to perform management operations"
            );
        });
    }
}
