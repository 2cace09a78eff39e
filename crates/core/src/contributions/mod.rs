//! Contributions module - domain models, traits, and aggregation.

mod aggregator;
mod contributions_model;
mod contributions_traits;

pub use aggregator::{aggregate_by_jar, JarContributions};
pub use contributions_model::{AmountValue, Contribution, ContributionRow, NewContribution};
pub use contributions_traits::ContributionRepositoryTrait;
