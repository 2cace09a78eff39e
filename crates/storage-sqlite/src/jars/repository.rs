use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use coinjar_core::errors::{DatabaseError, Result};
use coinjar_core::jars::{Jar, JarRepositoryTrait, JarUpdate, NewJar};

use super::model::{JarChangesDB, JarDB, NewJarDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::recipient_coinjar;
use crate::schema::recipient_coinjar::dsl::*;

/// Repository for jar rows. Reads go to the pool, writes through the
/// single-writer actor.
pub struct JarRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl JarRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        JarRepository { pool, writer }
    }
}

#[async_trait]
impl JarRepositoryTrait for JarRepository {
    async fn list_by_creator(&self, creator: &str) -> Result<Vec<Jar>> {
        let mut conn = get_connection(&self.pool)?;
        let jars_db = recipient_coinjar
            .filter(creator_id.eq(creator))
            .order(created_at.desc())
            .load::<JarDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(jars_db.into_iter().map(Jar::from).collect())
    }

    async fn get_by_ids(&self, jar_ids: &[String]) -> Result<Vec<Jar>> {
        let mut conn = get_connection(&self.pool)?;
        let jars_db = recipient_coinjar
            .filter(id.eq_any(jar_ids))
            .load::<JarDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(jars_db.into_iter().map(Jar::from).collect())
    }

    async fn get_by_id(&self, jar_id: &str) -> Result<Jar> {
        let mut conn = get_connection(&self.pool)?;
        let jar_db = recipient_coinjar
            .find(jar_id)
            .first::<JarDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Jar::from(jar_db))
    }

    async fn create(&self, new_jar: NewJar) -> Result<Jar> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Jar> {
                let new_jar_db = NewJarDB {
                    id: Some(
                        new_jar
                            .id
                            .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    ),
                    name: new_jar.name,
                    relationship: new_jar.relationship,
                    email: new_jar.email,
                    created_at: Utc::now().naive_utc(),
                    creator_id: new_jar.creator_id,
                };

                let result_db = diesel::insert_into(recipient_coinjar::table)
                    .values(&new_jar_db)
                    .returning(JarDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Jar::from(result_db))
            })
            .await
    }

    async fn update(&self, jar_update: JarUpdate, requesting_user_id: &str) -> Result<Jar> {
        let jar_id_owned = jar_update.id.clone();
        let requester = requesting_user_id.to_string();
        let changes: JarChangesDB = jar_update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Jar> {
                // Scoped to the creator: a non-owner's update matches no row.
                let affected = diesel::update(
                    recipient_coinjar
                        .filter(id.eq(&jar_id_owned))
                        .filter(creator_id.eq(&requester)),
                )
                .set(&changes)
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(DatabaseError::NotFound(format!(
                        "jar {} not found for this user",
                        jar_id_owned
                    ))
                    .into());
                }

                let result_db = recipient_coinjar
                    .find(&jar_id_owned)
                    .first::<JarDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Jar::from(result_db))
            })
            .await
    }
}
