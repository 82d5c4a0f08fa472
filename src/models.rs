//! Frontend Models
//!
//! Data structures matching the remote post service.

use serde::{Deserialize, Serialize};

pub type ItemId = u32;

/// Owner id sent with every write (the service has no real users)
pub const OWNER_ID: u32 = 1;

/// Item data structure (matches the service's `/posts` entries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub body: Option<String>,
    #[serde(rename = "userId", default = "default_owner")]
    pub owner_id: u32,
}

impl Item {
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            title: draft.title,
            body: draft.body,
            owner_id: OWNER_ID,
        }
    }
}

fn default_owner() -> u32 {
    OWNER_ID
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let body = Option::<String>::deserialize(deserializer)?;
    Ok(body.filter(|b| !b.trim().is_empty()))
}

/// Trimmed form input for create and edit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemDraft {
    pub title: String,
    pub body: Option<String>,
}

impl ItemDraft {
    /// Trim raw form values; an empty body becomes `None`
    pub fn from_input(title: &str, body: &str) -> Self {
        let body = body.trim();
        Self {
            title: title.trim().to_string(),
            body: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Title/body replacement applied by `update_by_id`
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPatch {
    pub title: String,
    pub body: Option<String>,
}

impl From<ItemDraft> for ItemPatch {
    fn from(draft: ItemDraft) -> Self {
        Self {
            title: draft.title,
            body: draft.body,
        }
    }
}

/// Dialogs owned by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Create,
    Edit,
}

/// Controls that can show a busy indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    CreateSubmit,
    EditSave,
    Delete(ItemId),
}
