use std::sync::RwLock;

use super::drafts_model::JarDraft;
use crate::errors::Result;

/// Storage contract for the recipient form draft.
///
/// Implementations decide the medium (browser storage, a key-value table,
/// process memory); the save/load/clear semantics are fixed here.
pub trait DraftStoreTrait: Send + Sync {
    fn save(&self, draft: &JarDraft) -> Result<()>;
    fn load(&self) -> Result<Option<JarDraft>>;
    fn clear(&self) -> Result<()>;
}

/// Process-memory draft store.
#[derive(Default)]
pub struct MemoryDraftStore {
    draft: RwLock<Option<JarDraft>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStoreTrait for MemoryDraftStore {
    fn save(&self, draft: &JarDraft) -> Result<()> {
        *self.draft.write().unwrap() = Some(draft.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<JarDraft>> {
        Ok(self.draft.read().unwrap().clone())
    }

    fn clear(&self) -> Result<()> {
        *self.draft.write().unwrap() = None;
        Ok(())
    }
}
