//! Jar repository and service traits.
//!
//! These traits define the contract for jar operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::jars_model::{Jar, JarUpdate, NewJar};
use crate::errors::Result;

/// Trait defining the contract for jar repository operations.
///
/// Implementations handle persistence against the storage collaborator.
/// All fetches are asynchronous network/database round trips.
#[async_trait]
pub trait JarRepositoryTrait: Send + Sync {
    /// Lists the jars created by the given user.
    async fn list_by_creator(&self, creator_id: &str) -> Result<Vec<Jar>>;

    /// Fetches all jars in the given id set in a single batched query.
    ///
    /// Missing ids are simply absent from the result; this is not an error.
    async fn get_by_ids(&self, jar_ids: &[String]) -> Result<Vec<Jar>>;

    /// Retrieves a jar by its id.
    async fn get_by_id(&self, jar_id: &str) -> Result<Jar>;

    /// Creates a new jar.
    async fn create(&self, new_jar: NewJar) -> Result<Jar>;

    /// Updates an existing jar, scoped to its creator.
    ///
    /// Returns `DatabaseError::NotFound` when the jar does not exist or is
    /// not owned by `requesting_user_id`.
    async fn update(&self, jar_update: JarUpdate, requesting_user_id: &str) -> Result<Jar>;
}

/// Trait defining the contract for jar service operations.
#[async_trait]
pub trait JarServiceTrait: Send + Sync {
    /// Creates a new jar with business validation.
    async fn create_jar(&self, new_jar: NewJar) -> Result<Jar>;

    /// Updates an existing jar with business validation, scoped to its creator.
    async fn update_jar(&self, jar_update: JarUpdate, requesting_user_id: &str) -> Result<Jar>;

    /// Retrieves a jar by id.
    async fn get_jar(&self, jar_id: &str) -> Result<Jar>;

    /// Lists the jars owned by a user.
    async fn get_jars_by_creator(&self, creator_id: &str) -> Result<Vec<Jar>>;
}
