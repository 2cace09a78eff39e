//! Contribution domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contribution amount as it arrives from the storage collaborator.
///
/// The hosted backend serializes numeric columns inconsistently: an amount
/// may arrive as a number or as a numeric string, and historical rows have
/// carried nulls. The coercion policy is fixed: strings are parsed as
/// floating point, and anything unparseable (or NaN, or null) degrades to
/// zero instead of failing the aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Number(f64),
    Text(String),
    Null,
}

impl AmountValue {
    /// Coerces the raw amount to a number, degrading malformed input to 0.
    pub fn as_f64(&self) -> f64 {
        let parsed = match self {
            AmountValue::Number(n) => *n,
            AmountValue::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            AmountValue::Null => 0.0,
        };
        if parsed.is_nan() {
            0.0
        } else {
            parsed
        }
    }
}

impl Default for AmountValue {
    fn default() -> Self {
        AmountValue::Null
    }
}

/// The slim contribution shape fetched for dashboard aggregation.
///
/// Matches the storage collaborator contract: query by jar-id list returns
/// `{coinjar_id, amount}` rows only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRow {
    pub coinjar_id: String,
    pub amount: AmountValue,
}

/// Full domain model for a contribution.
///
/// Contributions are immutable once created: there is no update or delete
/// operation anywhere in the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub coinjar_id: String,
    pub amount: AmountValue,
    pub contributor_id: String,
    pub created_at: DateTime<Utc>,
}

/// Input model for recording a new contribution.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub id: Option<String>,
    pub coinjar_id: String,
    pub amount: f64,
    pub contributor_id: String,
}
