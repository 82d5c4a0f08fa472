//! List Projection
//!
//! Turns the local item store into what the list view shows. The view rebuilds all
//! rows from this on every store change.

use crate::models::{Item, ItemId};
use crate::store::TodoList;

pub const EMPTY_PLACEHOLDER: &str = "Nothing to show yet. Add a new task!";
pub const NO_BODY_PLACEHOLDER: &str = "No description";

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: ItemId,
    /// DOM id of the row element
    pub dom_id: String,
    pub title: String,
    pub body: String,
    pub has_body: bool,
}

impl RowView {
    fn from_item(item: &Item) -> Self {
        let body = item.body.as_deref().map(str::trim).filter(|b| !b.is_empty());
        Self {
            id: item.id,
            dom_id: format!("todo-item-{}", item.id),
            title: item.title.clone(),
            body: body.unwrap_or(NO_BODY_PLACEHOLDER).to_string(),
            has_body: body.is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Nothing loaded and nothing failed
    Empty(&'static str),
    /// The initial fetch failed; carries the message for the list area
    LoadFailed(String),
    Rows(Vec<RowView>),
}

pub fn project(list: &TodoList) -> ListView {
    if !list.is_empty() {
        return ListView::Rows(list.items().iter().map(RowView::from_item).collect());
    }
    match list.load_error() {
        Some(message) => ListView::LoadFailed(format!("Failed to load tasks: {}", message)),
        None => ListView::Empty(EMPTY_PLACEHOLDER),
    }
}
