//! Dashboard view-models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};
use crate::notifications::Notification;

/// Presentation status of a jar's fulfillment.
///
/// This is opaque presentation state supplied by the caller and validated to
/// be one of the three enumerated values. It is not yet derived from any real
/// business event: until fulfillment tracking lands, the dashboard assigns
/// it with [`DeliveryStatus::random`] per refresh as demo behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Processing,
    Delivered,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 3] = [
        DeliveryStatus::Pending,
        DeliveryStatus::Processing,
        DeliveryStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Processing => "processing",
            DeliveryStatus::Delivered => "delivered",
        }
    }

    /// Picks a status at random. Demo placeholder for real fulfillment data.
    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&DeliveryStatus::Pending)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DeliveryStatus::Pending),
            "processing" => Ok(DeliveryStatus::Processing),
            "delivered" => Ok(DeliveryStatus::Delivered),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown delivery status '{}'",
                other
            ))
            .into()),
        }
    }
}

/// Derived, non-persisted view-model for a jar on the dashboard.
///
/// Combines the stored jar fields with computed display fields. For invited
/// jars the `id` is the invitation id and the totals are zeroed (read-only
/// preview).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JarView {
    pub id: String,
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub creator_id: String,

    /// Sum of the jar's coerced contribution amounts.
    pub total_amount: f64,
    /// Presentation-only collection target; fixed constant until per-jar
    /// goals exist.
    pub target_amount: f64,
    /// `min(100, round(total / target * 100))`, always within [0, 100].
    pub percent_complete: i32,
    pub delivery_status: DeliveryStatus,
    pub contribution_count: usize,
}

/// The single result contract the dashboard exposes to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// True until every independent fetch has settled, successfully or with
    /// a recovered error.
    pub loading: bool,
    pub my_jars: Vec<JarView>,
    pub invited_jars: Vec<JarView>,
    pub notifications: Vec<Notification>,
}
