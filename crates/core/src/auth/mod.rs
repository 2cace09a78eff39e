//! Auth module - session context value and provider trait.

mod auth_model;
mod auth_traits;

pub use auth_model::AuthSession;
pub use auth_traits::{AuthProviderTrait, StaticAuthProvider};
