use async_trait::async_trait;

use super::invitations_model::Invitation;
use crate::dashboard::JarView;
use crate::errors::Result;

/// Trait defining the contract for invitation repository operations.
#[async_trait]
pub trait InvitationRepositoryTrait: Send + Sync {
    /// Fetches the pending (unaccepted) invitations addressed to a user.
    async fn list_pending_for_user(&self, invited_user_id: &str) -> Result<Vec<Invitation>>;
}

/// Trait defining the contract for invitation resolution.
#[async_trait]
pub trait InvitationServiceTrait: Send + Sync {
    /// Resolves a user's pending invitations to jar view-models.
    ///
    /// Invitations whose target jar cannot be found are dropped from the
    /// result, not surfaced as errors.
    async fn resolve_invited_jars(&self, invited_user_id: &str) -> Result<Vec<JarView>>;
}
