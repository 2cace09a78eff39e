//! Jar domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a CoinJar: a named collection target associated
/// with a recipient and an owning user.
///
/// A jar is owned exclusively by its creator for mutation purposes; read
/// access may be shared with invited users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Jar {
    pub id: String,
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub creator_id: String,
}

/// Input model for creating a new jar.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewJar {
    pub id: Option<String>,
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub creator_id: String,
}

/// Input model for updating an existing jar.
///
/// Updates are scoped to the creator; the repository rejects an update whose
/// `id` is not owned by the requesting user.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JarUpdate {
    pub id: String,
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
}
