//! SQLite-backed draft store.

use diesel::prelude::*;
use std::sync::Arc;

use coinjar_core::constants::RECIPIENT_DRAFT_KEY;
use coinjar_core::drafts::{DraftStoreTrait, JarDraft};
use coinjar_core::errors::{Error, Result};

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::form_drafts;
use crate::schema::form_drafts::dsl::*;

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::form_drafts)]
struct DraftRowDB {
    draft_key: String,
    draft_value: String,
}

/// Draft store backed by a single-row key-value table.
///
/// The [`DraftStoreTrait`] contract is synchronous, so this store takes pool
/// connections directly rather than going through the writer actor. The only
/// write is a keyed upsert, which SQLite serializes on its own.
pub struct SqliteDraftStore {
    pool: Arc<DbPool>,
}

impl SqliteDraftStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteDraftStore { pool }
    }
}

impl DraftStoreTrait for SqliteDraftStore {
    fn save(&self, draft: &JarDraft) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let row = DraftRowDB {
            draft_key: RECIPIENT_DRAFT_KEY.to_string(),
            draft_value: serde_json::to_string(draft)?,
        };

        diesel::replace_into(form_drafts::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<JarDraft>> {
        let mut conn = get_connection(&self.pool)?;
        let stored: Option<String> = form_drafts
            .filter(draft_key.eq(RECIPIENT_DRAFT_KEY))
            .select(draft_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        match stored {
            Some(raw) => {
                let draft = serde_json::from_str(&raw).map_err(Error::from)?;
                Ok(Some(draft))
            }
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(form_drafts.filter(draft_key.eq(RECIPIENT_DRAFT_KEY)))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(())
    }
}
