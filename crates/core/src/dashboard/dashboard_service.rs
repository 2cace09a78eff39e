use log::{debug, error};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::dashboard_model::{DashboardSnapshot, DeliveryStatus, JarView};
use super::enricher::enrich_jar;
use super::notice::{Notice, NoticeSinkTrait};
use crate::auth::AuthSession;
use crate::contributions::{aggregate_by_jar, ContributionRepositoryTrait};
use crate::invitations::InvitationServiceTrait;
use crate::jars::JarRepositoryTrait;
use crate::notifications::{Notification, NotificationService};

/// The dashboard composer.
///
/// Orchestrates the three independent fetch branches (owned jars with their
/// contributions, invited jars, notifications) and exposes a single
/// loading/result contract to the presentation layer.
///
/// Error policy: every branch recovers its own failure to an empty
/// collection and raises a user-facing notice; no branch failure blocks the
/// others or leaves `loading` stuck at true. There is no retry - a failed
/// branch is only re-attempted on the next identity-triggered refresh.
pub struct DashboardService {
    jar_repository: Arc<dyn JarRepositoryTrait>,
    contribution_repository: Arc<dyn ContributionRepositoryTrait>,
    invitation_service: Arc<dyn InvitationServiceTrait>,
    notification_service: Arc<NotificationService>,
    notices: Arc<dyn NoticeSinkTrait>,
    state: RwLock<DashboardSnapshot>,
    /// Refresh generation. Bumped on every identity change so results from a
    /// stale fetch are never committed over a newer user's data.
    epoch: AtomicU64,
}

impl DashboardService {
    pub fn new(
        jar_repository: Arc<dyn JarRepositoryTrait>,
        contribution_repository: Arc<dyn ContributionRepositoryTrait>,
        invitation_service: Arc<dyn InvitationServiceTrait>,
        notification_service: Arc<NotificationService>,
        notices: Arc<dyn NoticeSinkTrait>,
    ) -> Self {
        Self {
            jar_repository,
            contribution_repository,
            invitation_service,
            notification_service,
            notices,
            state: RwLock::new(DashboardSnapshot::default()),
            epoch: AtomicU64::new(0),
        }
    }

    /// Returns the current dashboard view.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.state.read().unwrap().clone()
    }

    /// Re-runs the full fetch sequence for the session's identity.
    ///
    /// Call this whenever the requesting identity changes, including the
    /// transition from "no user" to "a user" after authentication completes.
    /// With no signed-in user nothing is fetched and the dashboard shows
    /// nothing; the epoch bump also discards any fetch still in flight for
    /// the previous identity.
    pub async fn refresh(&self, session: &AuthSession) {
        // The epoch is only ever bumped while holding the state write lock;
        // together with the locked re-check at commit time this makes the
        // stale-commit guard atomic.
        let Some(user_id) = session.user_id.clone() else {
            let mut state = self.state.write().unwrap();
            self.epoch.fetch_add(1, Ordering::SeqCst);
            *state = DashboardSnapshot::default();
            return;
        };

        let epoch = {
            let mut state = self.state.write().unwrap();
            let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
            state.loading = true;
            epoch
        };
        debug!("Refreshing dashboard for user {}", user_id);

        // Three logically parallel branches; the join is the barrier the
        // loading flag waits on.
        let (my_jars, invited_jars, notifications) = tokio::join!(
            self.load_my_jars(&user_id),
            self.load_invited_jars(&user_id),
            self.load_notifications(&user_id),
        );

        // Identity changed while we were fetching: drop the stale results.
        // The epoch is re-checked under the write lock, so a newer refresh
        // cannot bump it between this check and the snapshot write.
        let mut state = self.state.write().unwrap();
        if self.epoch.load(Ordering::SeqCst) != epoch {
            debug!("Discarding stale dashboard refresh for user {}", user_id);
            return;
        }

        *state = DashboardSnapshot {
            loading: false,
            my_jars,
            invited_jars,
            notifications,
        };
    }

    /// Owned jars branch: owner query, one batched contribution query,
    /// aggregation, enrichment.
    async fn load_my_jars(&self, user_id: &str) -> Vec<JarView> {
        let jars = match self.jar_repository.list_by_creator(user_id).await {
            Ok(jars) => jars,
            Err(e) => {
                error!("Error fetching jars: {}", e);
                self.notices
                    .notify(Notice::new("Failed to load coin jars", e.to_string()));
                return Vec::new();
            }
        };

        if jars.is_empty() {
            return Vec::new();
        }

        let jar_ids: Vec<String> = jars.iter().map(|jar| jar.id.clone()).collect();
        let rows = match self.contribution_repository.list_for_jars(&jar_ids).await {
            Ok(rows) => rows,
            Err(e) => {
                // The jars themselves still render, with zero totals.
                error!("Error fetching contributions batch: {}", e);
                self.notices
                    .notify(Notice::new("Failed to load contributions", e.to_string()));
                Vec::new()
            }
        };

        let mut aggregated = aggregate_by_jar(rows);
        jars.into_iter()
            .map(|jar| {
                let group = aggregated.remove(&jar.id).unwrap_or_default();
                enrich_jar(jar, group, DeliveryStatus::random())
            })
            .collect()
    }

    async fn load_invited_jars(&self, user_id: &str) -> Vec<JarView> {
        match self.invitation_service.resolve_invited_jars(user_id).await {
            Ok(invited) => invited,
            Err(e) => {
                error!("Error fetching invitations: {}", e);
                self.notices
                    .notify(Notice::new("Failed to load invitations", e.to_string()));
                Vec::new()
            }
        }
    }

    async fn load_notifications(&self, user_id: &str) -> Vec<Notification> {
        match self.notification_service.list_for_user(user_id).await {
            Ok(notifications) => notifications,
            Err(e) => {
                error!("Error fetching notifications: {}", e);
                self.notices
                    .notify(Notice::new("Failed to load notifications", e.to_string()));
                Vec::new()
            }
        }
    }
}
