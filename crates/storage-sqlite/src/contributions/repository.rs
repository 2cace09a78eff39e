use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use coinjar_core::contributions::{
    AmountValue, Contribution, ContributionRepositoryTrait, ContributionRow, NewContribution,
};
use coinjar_core::errors::Result;

use super::model::{ContributionDB, NewContributionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::coinjar_contributions;
use crate::schema::coinjar_contributions::dsl::*;

/// Repository for contribution rows.
pub struct ContributionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ContributionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ContributionRepository { pool, writer }
    }
}

#[async_trait]
impl ContributionRepositoryTrait for ContributionRepository {
    async fn list_for_jars(&self, jar_ids: &[String]) -> Result<Vec<ContributionRow>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = coinjar_contributions
            .filter(coinjar_id.eq_any(jar_ids))
            .select((coinjar_id, amount))
            .load::<(String, String)>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(|(jar_id, raw_amount)| ContributionRow {
                coinjar_id: jar_id,
                amount: AmountValue::Text(raw_amount),
            })
            .collect())
    }

    async fn create(&self, new_contribution: NewContribution) -> Result<Contribution> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Contribution> {
                let new_db = NewContributionDB {
                    id: Some(
                        new_contribution
                            .id
                            .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    ),
                    coinjar_id: new_contribution.coinjar_id,
                    amount: new_contribution.amount.to_string(),
                    contributor_id: new_contribution.contributor_id,
                    created_at: Utc::now().naive_utc(),
                };

                let result_db = diesel::insert_into(coinjar_contributions::table)
                    .values(&new_db)
                    .returning(ContributionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Contribution::from(result_db))
            })
            .await
    }
}
