//! CoinJar Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the Family Funds Circle
//! application ("CoinJars"). It is database-agnostic and defines traits that
//! are implemented by the `storage-sqlite` crate.

pub mod auth;
pub mod constants;
pub mod contributions;
pub mod dashboard;
pub mod drafts;
pub mod errors;
pub mod invitations;
pub mod jars;
pub mod mailer;
pub mod notifications;

// Re-export common types from the dashboard module
pub use dashboard::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
