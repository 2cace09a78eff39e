use chrono::{Duration, Utc};

use super::notifications_model::{Notification, NotificationKind};
use crate::errors::Result;

/// Service producing the dashboard notification feed.
///
/// There is no notification table yet, so the feed is a fixed demo sample.
/// The service keeps the async Result contract of the other dashboard
/// branches so a persisted feed can replace it without touching the
/// composer.
#[derive(Default)]
pub struct NotificationService;

impl NotificationService {
    pub fn new() -> Self {
        NotificationService
    }

    /// Returns the notification feed for a user.
    pub async fn list_for_user(&self, _user_id: &str) -> Result<Vec<Notification>> {
        let now = Utc::now();
        Ok(vec![
            Notification {
                id: 1,
                kind: NotificationKind::Contribution,
                message: "Someone contributed $25 to Grandma's Birthday".to_string(),
                created_at: now,
                read: false,
            },
            Notification {
                id: 2,
                kind: NotificationKind::Invitation,
                message: "You've been invited to contribute to Office Party".to_string(),
                created_at: now - Duration::days(1),
                read: true,
            },
        ])
    }
}
