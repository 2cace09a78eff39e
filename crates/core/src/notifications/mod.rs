//! Notifications module - display-only activity feed.

mod notifications_model;
mod notifications_service;

pub use notifications_model::{Notification, NotificationKind};
pub use notifications_service::NotificationService;
