//! Database models for jars.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use coinjar_core::jars::{Jar, JarUpdate};

/// Database model for a jar row.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::recipient_coinjar)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct JarDB {
    pub id: String,
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub creator_id: String,
}

/// Database model for creating a new jar.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::recipient_coinjar)]
#[serde(rename_all = "camelCase")]
pub struct NewJarDB {
    pub id: Option<String>,
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub creator_id: String,
}

/// Changeset for jar updates. `email` is cleared when None.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::recipient_coinjar)]
#[diesel(treat_none_as_null = true)]
pub struct JarChangesDB {
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
}

impl From<JarDB> for Jar {
    fn from(db: JarDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            relationship: db.relationship,
            email: db.email,
            created_at: Utc.from_utc_datetime(&db.created_at),
            creator_id: db.creator_id,
        }
    }
}

impl From<JarUpdate> for JarChangesDB {
    fn from(domain: JarUpdate) -> Self {
        Self {
            name: domain.name,
            relationship: domain.relationship,
            email: domain.email,
        }
    }
}
