use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::invitations_traits::{InvitationRepositoryTrait, InvitationServiceTrait};
use crate::constants::DEFAULT_TARGET_AMOUNT;
use crate::dashboard::{DeliveryStatus, JarView};
use crate::errors::Result;
use crate::jars::{Jar, JarRepositoryTrait};

/// Service resolving pending invitations to jar previews.
pub struct InvitationService {
    invitation_repository: Arc<dyn InvitationRepositoryTrait>,
    jar_repository: Arc<dyn JarRepositoryTrait>,
}

impl InvitationService {
    pub fn new(
        invitation_repository: Arc<dyn InvitationRepositoryTrait>,
        jar_repository: Arc<dyn JarRepositoryTrait>,
    ) -> Self {
        Self {
            invitation_repository,
            jar_repository,
        }
    }

    /// Read-only preview of an invited jar: zeroed totals, pending status,
    /// keyed by the invitation id.
    fn preview(invitation_id: String, jar: &Jar) -> JarView {
        JarView {
            id: invitation_id,
            name: jar.name.clone(),
            relationship: jar.relationship.clone(),
            email: None,
            created_at: jar.created_at,
            creator_id: jar.creator_id.clone(),
            total_amount: 0.0,
            target_amount: DEFAULT_TARGET_AMOUNT,
            percent_complete: 0,
            delivery_status: DeliveryStatus::Pending,
            contribution_count: 0,
        }
    }
}

#[async_trait::async_trait]
impl InvitationServiceTrait for InvitationService {
    async fn resolve_invited_jars(&self, invited_user_id: &str) -> Result<Vec<JarView>> {
        let invitations = self
            .invitation_repository
            .list_pending_for_user(invited_user_id)
            .await?;

        if invitations.is_empty() {
            return Ok(Vec::new());
        }

        // One batched lookup for every referenced jar, never one query per
        // invitation.
        let jar_ids: Vec<String> = invitations.iter().map(|i| i.coinjar_id.clone()).collect();
        let jars_by_id: HashMap<String, Jar> = self
            .jar_repository
            .get_by_ids(&jar_ids)
            .await?
            .into_iter()
            .map(|jar| (jar.id.clone(), jar))
            .collect();

        // Invitations whose jar is missing (deleted, or access denied by the
        // backend's row policies) are silently dropped.
        let resolved: Vec<JarView> = invitations
            .into_iter()
            .filter_map(|invitation| {
                jars_by_id
                    .get(&invitation.coinjar_id)
                    .map(|jar| Self::preview(invitation.id, jar))
            })
            .collect();

        debug!(
            "Resolved {} invited jar(s) for user {}",
            resolved.len(),
            invited_user_id
        );
        Ok(resolved)
    }
}
