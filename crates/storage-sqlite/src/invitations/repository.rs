use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use coinjar_core::errors::Result;
use coinjar_core::invitations::{Invitation, InvitationRepositoryTrait};

use super::model::InvitationDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::coinjar_invitations::dsl::*;

/// Repository for invitation rows. The dashboard slice only reads pending
/// invitations, so this repository carries no writer handle.
pub struct InvitationRepository {
    pool: Arc<DbPool>,
}

impl InvitationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        InvitationRepository { pool }
    }
}

#[async_trait]
impl InvitationRepositoryTrait for InvitationRepository {
    async fn list_pending_for_user(&self, user: &str) -> Result<Vec<Invitation>> {
        let mut conn = get_connection(&self.pool)?;
        let invitations_db = coinjar_invitations
            .filter(invited_user_id.eq(user))
            .filter(accepted.eq(false))
            .order(created_at.desc())
            .load::<InvitationDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(invitations_db.into_iter().map(Invitation::from).collect())
    }
}
