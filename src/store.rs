//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The item list itself is a
//! plain `TodoList` so every mutation has exactly one entry point.

use std::collections::HashSet;

use reactive_stores::Store;

use crate::models::{Control, Item, ItemId, ItemPatch};
use crate::notify::Toast;

/// Ordered local copy of the items. Ids are unique; order is display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoList {
    items: Vec<Item>,
    /// Set when the initial fetch failed, cleared by the next mutation
    load_error: Option<String>,
}

impl TodoList {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.find(id).is_some()
    }

    /// Replace everything. Later duplicates of an id are dropped.
    pub fn load_all(&mut self, items: Vec<Item>) {
        let mut seen = HashSet::new();
        self.items = items.into_iter().filter(|item| seen.insert(item.id)).collect();
        self.load_error = None;
    }

    /// Record a failed fetch. Items added meanwhile are kept.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.load_error = Some(message.into());
    }

    /// Prepend. An item whose id is already present replaces the old entry.
    pub fn insert_front(&mut self, item: Item) {
        self.items.retain(|existing| existing.id != item.id);
        self.items.insert(0, item);
        self.load_error = None;
    }

    /// No-op when the id is absent
    pub fn remove_by_id(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            self.load_error = None;
        }
    }

    /// Replace title/body of the matching entry; no-op when the id is absent
    pub fn update_by_id(&mut self, id: ItemId, patch: &ItemPatch) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.title = patch.title.clone();
            item.body = patch.body.clone();
            self.load_error = None;
        }
    }

    /// `preferred` if free, otherwise one past the largest id in the list.
    /// The placeholder service hands out the same id for every create.
    pub fn unique_id(&self, preferred: ItemId) -> ItemId {
        if !self.contains(preferred) {
            return preferred;
        }
        self.items.iter().map(|item| item.id).max().unwrap_or(0).saturating_add(1)
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local item store, source of truth for the list view
    pub todos: TodoList,
    /// Item targeted by the edit dialog
    pub editing: Option<ItemId>,
    /// Controls currently showing the busy indicator
    pub busy: HashSet<Control>,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    /// Id for the next toast
    pub next_toast_id: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OWNER_ID;
    use crate::render::{project, ListView};

    fn make_item(id: ItemId, title: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            body: None,
            owner_id: OWNER_ID,
        }
    }

    fn ids(list: &TodoList) -> Vec<ItemId> {
        list.items().iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_load_all_replaces_and_dedupes() {
        let mut list = TodoList::default();
        list.insert_front(make_item(50, "old"));
        list.load_all(vec![make_item(1, "a"), make_item(2, "b"), make_item(1, "dup")]);
        assert_eq!(ids(&list), vec![1, 2]);
        assert_eq!(list.find(1).unwrap().title, "a");
    }

    #[test]
    fn test_insert_front_prepends() {
        let mut list = TodoList::default();
        list.load_all(vec![make_item(1, "a"), make_item(2, "b")]);
        list.insert_front(make_item(101, "new"));
        assert_eq!(ids(&list), vec![101, 1, 2]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list = TodoList::default();
        list.load_all((1..=5).map(|id| make_item(id, "x")).collect());
        list.remove_by_id(3);
        assert_eq!(ids(&list), vec![1, 2, 4, 5]);

        list.remove_by_id(42);
        assert_eq!(ids(&list), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_update_only_touches_title_and_body() {
        let mut list = TodoList::default();
        list.load_all(vec![make_item(1, "a"), make_item(2, "b")]);
        let patch = ItemPatch { title: "B".into(), body: Some("details".into()) };
        list.update_by_id(2, &patch);

        let item = list.find(2).unwrap();
        assert_eq!(item.title, "B");
        assert_eq!(item.body.as_deref(), Some("details"));
        assert_eq!(item.owner_id, OWNER_ID);
        assert_eq!(ids(&list), vec![1, 2]);

        let before = list.clone();
        list.update_by_id(99, &patch);
        assert_eq!(list, before);
    }

    #[test]
    fn test_unique_id() {
        let mut list = TodoList::default();
        assert_eq!(list.unique_id(101), 101);
        list.load_all(vec![make_item(7, "a"), make_item(101, "b")]);
        assert_eq!(list.unique_id(101), 102);
        assert_eq!(list.unique_id(8), 8);
    }

    #[test]
    fn test_load_error_cleared_by_mutation() {
        let mut list = TodoList::default();
        list.fail_load("HTTP error! Status: 500");
        assert_eq!(list.load_error(), Some("HTTP error! Status: 500"));
        list.insert_front(make_item(1, "a"));
        assert_eq!(list.load_error(), None);
    }

    #[test]
    fn test_fail_load_keeps_existing_items() {
        let mut list = TodoList::default();
        list.insert_front(make_item(101, "created early"));
        list.fail_load("HTTP error! Status: 500");
        assert_eq!(ids(&list), vec![101]);
        assert_eq!(list.load_error(), Some("HTTP error! Status: 500"));
    }

    #[test]
    fn test_noop_mutations_keep_load_error() {
        let mut list = TodoList::default();
        list.fail_load("HTTP error! Status: 500");
        let before = list.clone();

        list.update_by_id(9, &ItemPatch { title: "t".into(), body: None });
        list.remove_by_id(9);
        assert_eq!(list, before);
    }

    #[test]
    fn test_row_count_tracks_store() {
        let mut list = TodoList::default();
        let patch = ItemPatch { title: "t".into(), body: None };
        let steps: Vec<Box<dyn Fn(&mut TodoList)>> = vec![
            Box::new(|l| l.insert_front(make_item(1, "a"))),
            Box::new(|l| l.insert_front(make_item(2, "b"))),
            Box::new(move |l| l.update_by_id(1, &patch)),
            Box::new(|l| l.remove_by_id(2)),
            Box::new(|l| l.remove_by_id(7)),
            Box::new(|l| l.remove_by_id(1)),
        ];

        for step in steps {
            step(&mut list);
            match project(&list) {
                ListView::Rows(rows) => assert_eq!(rows.len(), list.len()),
                ListView::Empty(_) => assert!(list.is_empty()),
                ListView::LoadFailed(_) => panic!("no load error expected"),
            }
        }
        assert!(matches!(project(&list), ListView::Empty(_)));
    }
}
