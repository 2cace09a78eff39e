use log::debug;
use std::sync::Arc;

use super::drafts_model::JarDraft;
use super::drafts_traits::DraftStoreTrait;
use crate::errors::Result;

/// Service exposing the draft stash contract to the form flow.
pub struct DraftService {
    store: Arc<dyn DraftStoreTrait>,
}

impl DraftService {
    pub fn new(store: Arc<dyn DraftStoreTrait>) -> Self {
        Self { store }
    }

    /// Stashes the draft before an auth redirect. Empty drafts are not
    /// saved.
    pub fn stash(&self, draft: &JarDraft) -> Result<()> {
        if draft.is_empty() {
            return Ok(());
        }
        debug!("Stashing recipient form draft");
        self.store.save(draft)
    }

    /// Restores the stashed draft and clears it, so a draft is only ever
    /// replayed once.
    pub fn take(&self) -> Result<Option<JarDraft>> {
        let draft = self.store.load()?;
        if draft.is_some() {
            self.store.clear()?;
        }
        Ok(draft)
    }

    /// Drops any stashed draft without restoring it.
    pub fn discard(&self) -> Result<()> {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::MemoryDraftStore;

    fn draft() -> JarDraft {
        JarDraft {
            name: "Mom".to_string(),
            relationship: "Mother".to_string(),
            email: "mom@example.com".to_string(),
        }
    }

    #[test]
    fn take_returns_the_stashed_draft_and_clears_it() {
        let service = DraftService::new(Arc::new(MemoryDraftStore::new()));

        service.stash(&draft()).unwrap();
        assert_eq!(service.take().unwrap(), Some(draft()));
        // A draft is only replayed once.
        assert_eq!(service.take().unwrap(), None);
    }

    #[test]
    fn empty_drafts_are_not_stashed() {
        let service = DraftService::new(Arc::new(MemoryDraftStore::new()));

        service.stash(&JarDraft::default()).unwrap();
        assert_eq!(service.take().unwrap(), None);
    }

    #[test]
    fn discard_drops_the_stash() {
        let service = DraftService::new(Arc::new(MemoryDraftStore::new()));

        service.stash(&draft()).unwrap();
        service.discard().unwrap();
        assert_eq!(service.take().unwrap(), None);
    }
}
