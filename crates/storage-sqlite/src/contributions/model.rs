//! Database models for contributions.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use coinjar_core::contributions::{AmountValue, Contribution};

use crate::jars::JarDB;

/// Database model for a contribution row.
///
/// The amount column is text: the hosted backend this mirrors ships numeric
/// columns as numeric strings, and the coercion to a number is a core-layer
/// concern.
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(JarDB, foreign_key = coinjar_id))]
#[diesel(table_name = crate::schema::coinjar_contributions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ContributionDB {
    pub id: String,
    pub coinjar_id: String,
    pub amount: String,
    pub contributor_id: String,
    pub created_at: NaiveDateTime,
}

/// Database model for recording a new contribution.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::coinjar_contributions)]
#[serde(rename_all = "camelCase")]
pub struct NewContributionDB {
    pub id: Option<String>,
    pub coinjar_id: String,
    pub amount: String,
    pub contributor_id: String,
    pub created_at: NaiveDateTime,
}

impl From<ContributionDB> for Contribution {
    fn from(db: ContributionDB) -> Self {
        Self {
            id: db.id,
            coinjar_id: db.coinjar_id,
            amount: AmountValue::Text(db.amount),
            contributor_id: db.contributor_id,
            created_at: Utc.from_utc_datetime(&db.created_at),
        }
    }
}
