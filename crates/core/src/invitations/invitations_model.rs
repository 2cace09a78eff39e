//! Invitation domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A standing offer for a non-owner user to view and contribute to a jar.
///
/// Created by a jar owner; `accepted` transitions from false to true outside
/// this slice. The dashboard only ever reads pending (unaccepted) rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: String,
    pub coinjar_id: String,
    pub invited_user_id: String,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
}
