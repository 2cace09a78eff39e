//! SQLite storage implementation for CoinJar.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `coinjar-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for jars, contributions, and invitations
//! - A SQLite-backed draft store
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist; `core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod contributions;
pub mod drafts;
pub mod invitations;
pub mod jars;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from coinjar-core for convenience
pub use coinjar_core::errors::{DatabaseError, Error, Result};
