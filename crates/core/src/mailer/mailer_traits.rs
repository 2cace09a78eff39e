use async_trait::async_trait;

use crate::errors::Result;

/// Trait for the transactional email collaborator.
///
/// Delivery is always fire-and-forget from the caller's perspective: send
/// failures are logged by the dispatching service, never propagated to the
/// user flow.
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Sends the recipient confirmation email.
    async fn send_confirmation(&self, name: &str, email: &str) -> Result<()>;
}
