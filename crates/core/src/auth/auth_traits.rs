use std::sync::RwLock;

use super::auth_model::AuthSession;

/// Trait exposing the current authentication session.
///
/// Implementations wrap the external auth collaborator. The dashboard and
/// form services take the session value as a parameter; this trait exists for
/// embedders that need a live accessor.
pub trait AuthProviderTrait: Send + Sync {
    /// Returns the current session snapshot.
    fn session(&self) -> AuthSession;
}

/// In-process auth provider holding the session in memory.
///
/// Used by tests and by embedders that receive session updates from an
/// external channel and push them in via `login`/`logout`.
#[derive(Default)]
pub struct StaticAuthProvider {
    session: RwLock<AuthSession>,
}

impl StaticAuthProvider {
    pub fn new() -> Self {
        StaticAuthProvider {
            session: RwLock::new(AuthSession {
                user_id: None,
                loading: true,
            }),
        }
    }

    /// Marks the session as resolved for the given user.
    pub fn login(&self, user_id: impl Into<String>) {
        *self.session.write().unwrap() = AuthSession::signed_in(user_id);
    }

    /// Clears the session.
    pub fn logout(&self) {
        *self.session.write().unwrap() = AuthSession::signed_out();
    }
}

impl AuthProviderTrait for StaticAuthProvider {
    fn session(&self) -> AuthSession {
        self.session.read().unwrap().clone()
    }
}
