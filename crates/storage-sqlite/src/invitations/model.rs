//! Database models for invitations.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use coinjar_core::invitations::Invitation;

use crate::jars::JarDB;

/// Database model for an invitation row.
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
#[diesel(table_name = crate::schema::coinjar_invitations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct InvitationDB {
    pub id: String,
    pub coinjar_id: String,
    pub invited_user_id: String,
    pub accepted: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for issuing a new invitation.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::coinjar_invitations)]
#[serde(rename_all = "camelCase")]
pub struct NewInvitationDB {
    pub id: Option<String>,
    pub coinjar_id: String,
    pub invited_user_id: String,
    pub accepted: bool,
    pub created_at: NaiveDateTime,
}

impl From<InvitationDB> for Invitation {
    fn from(db: InvitationDB) -> Self {
        Self {
            id: db.id,
            coinjar_id: db.coinjar_id,
            invited_user_id: db.invited_user_id,
            accepted: db.accepted,
            created_at: Utc.from_utc_datetime(&db.created_at),
        }
    }
}
