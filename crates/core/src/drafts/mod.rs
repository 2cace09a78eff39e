//! Drafts module - stash/restore for in-progress recipient forms.

mod drafts_model;
mod drafts_service;
mod drafts_traits;

pub use drafts_model::JarDraft;
pub use drafts_service::DraftService;
pub use drafts_traits::{DraftStoreTrait, MemoryDraftStore};
