use async_trait::async_trait;

use super::contributions_model::{Contribution, ContributionRow, NewContribution};
use crate::errors::Result;

/// Trait defining the contract for contribution repository operations.
#[async_trait]
pub trait ContributionRepositoryTrait: Send + Sync {
    /// Fetches the contribution rows for all jars in the given id set in a
    /// single batched query.
    async fn list_for_jars(&self, jar_ids: &[String]) -> Result<Vec<ContributionRow>>;

    /// Records a new contribution. Rows are immutable afterwards.
    async fn create(&self, new_contribution: NewContribution) -> Result<Contribution>;
}
