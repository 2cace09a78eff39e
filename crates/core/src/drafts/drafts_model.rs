//! Draft value object for the recipient form.

use serde::{Deserialize, Serialize};

/// In-progress recipient form data, stashed across an authentication
/// redirect and restored afterwards.
///
/// The draft is an explicit value object with a save/restore/clear contract;
/// the storage medium behind it is an implementation detail of the
/// [`super::DraftStoreTrait`] in use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JarDraft {
    pub name: String,
    pub relationship: String,
    pub email: String,
}

impl JarDraft {
    /// True when no field carries user input; empty drafts are not worth
    /// stashing.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.relationship.is_empty() && self.email.is_empty()
    }
}
