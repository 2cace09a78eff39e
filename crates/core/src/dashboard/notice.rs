//! User-facing notice channel.

use log::warn;

/// A transient, user-facing notice (the toast collaborator).
///
/// Notices are a side effect of recovered fetch failures; they are not part
/// of the dashboard's returned data contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Sink for user-facing notices.
///
/// The presentation layer supplies an implementation that surfaces notices
/// to the user (toast, banner, ...).
pub trait NoticeSinkTrait: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Default sink that only logs. Useful for headless embedders and tests.
#[derive(Default)]
pub struct LogNoticeSink;

impl NoticeSinkTrait for LogNoticeSink {
    fn notify(&self, notice: Notice) {
        warn!("{}: {}", notice.title, notice.description);
    }
}
