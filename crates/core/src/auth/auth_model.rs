//! Auth session context value.

use serde::{Deserialize, Serialize};

/// Snapshot of the authentication state, as provided by the external auth
/// collaborator.
///
/// Authentication itself (sign-in, sign-up, token refresh) is delegated to a
/// hosted provider. The rest of the application only ever sees this value:
/// populated after login, cleared after logout. It is passed explicitly into
/// the services that need it rather than read from ambient global state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Identifier of the signed-in user, if any.
    pub user_id: Option<String>,
    /// True while the provider is still resolving the initial session.
    pub loading: bool,
}

impl AuthSession {
    /// Session for a signed-in user.
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        AuthSession {
            user_id: Some(user_id.into()),
            loading: false,
        }
    }

    /// Session for a signed-out (or not yet resolved) user.
    pub fn signed_out() -> Self {
        AuthSession {
            user_id: None,
            loading: false,
        }
    }
}
