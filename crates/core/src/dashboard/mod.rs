//! Dashboard module - view-model enrichment and the dashboard composer.

mod dashboard_model;
mod dashboard_service;
mod enricher;
mod notice;

pub use dashboard_model::{DashboardSnapshot, DeliveryStatus, JarView};
pub use dashboard_service::DashboardService;
pub use enricher::{enrich_jar, percent_complete};
pub use notice::{LogNoticeSink, Notice, NoticeSinkTrait};
