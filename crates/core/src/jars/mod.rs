//! Jars module - domain models, services, and traits.

mod jars_model;
mod jars_service;
mod jars_traits;

// Re-export the public interface
pub use jars_model::{Jar, JarUpdate, NewJar};
pub use jars_service::JarService;
pub use jars_traits::{JarRepositoryTrait, JarServiceTrait};
