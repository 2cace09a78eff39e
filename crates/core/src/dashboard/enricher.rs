//! Enrichment of jar records into dashboard view-models.

use super::dashboard_model::{DeliveryStatus, JarView};
use crate::constants::DEFAULT_TARGET_AMOUNT;
use crate::contributions::JarContributions;
use crate::jars::Jar;

/// Computes the completion percentage for a total against a target.
///
/// Rounding is half-up (`f64::round`). The result is clamped to [0, 100]
/// for any non-negative total and positive target; a non-positive target
/// yields 0 rather than a division artifact.
pub fn percent_complete(total_amount: f64, target_amount: f64) -> i32 {
    if target_amount <= 0.0 {
        return 0;
    }
    let percent = (total_amount / target_amount * 100.0).round() as i64;
    percent.clamp(0, 100) as i32
}

/// Merges a jar with its aggregated contributions into the renderable
/// view-model.
///
/// The delivery status is selected by the caller; see
/// [`DeliveryStatus::random`] for the current placeholder source. The target
/// amount is the fixed [`DEFAULT_TARGET_AMOUNT`] until per-jar goals exist.
pub fn enrich_jar(jar: Jar, aggregated: JarContributions, status: DeliveryStatus) -> JarView {
    let total_amount = aggregated.total;
    let target_amount = DEFAULT_TARGET_AMOUNT;

    JarView {
        id: jar.id,
        name: jar.name,
        relationship: jar.relationship,
        email: jar.email,
        created_at: jar.created_at,
        creator_id: jar.creator_id,
        total_amount,
        target_amount,
        percent_complete: percent_complete(total_amount, target_amount),
        delivery_status: status,
        contribution_count: aggregated.contributions.len(),
    }
}
