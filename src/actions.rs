//! Action Handlers
//!
//! User intents (load, create, delete, open edit, save edit) written against two seams:
//! `ActionHost` for everything the page owns and `TodoApi` for the network. Each
//! handler surfaces its own outcome as a toast; the returned `Result` is for the
//! caller's logging and for tests.

use crate::commands::TodoApi;
use crate::error::ActionError;
use crate::models::{Control, Item, ItemDraft, ItemId, ItemPatch, ModalKind};
use crate::notify::Severity;
use crate::store::TodoList;

pub const EMPTY_TITLE_WARNING: &str = "Task title cannot be empty!";
pub const DELETE_PROMPT: &str =
    "Are you sure? You can't undo this. (The change is lost when the page is refreshed.)";

/// Page-side effects the handlers drive
pub trait ActionHost {
    fn read_todos<R>(&self, f: impl FnOnce(&TodoList) -> R) -> R;
    fn update_todos<R>(&self, f: impl FnOnce(&mut TodoList) -> R) -> R;
    /// Ids the service does not persist; edits to them never hit the network
    fn is_local_only(&self, id: ItemId) -> bool;
    fn set_busy(&self, control: Control, busy: bool);
    fn notify(&self, message: &str, severity: Severity);
    /// Blocking yes/no prompt
    fn confirm(&self, prompt: &str) -> bool;
    fn open_modal(&self, modal: ModalKind);
    /// Starts the exit transition; the dialog hides later
    fn close_modal(&self, modal: ModalKind);
    fn fill_edit_form(&self, item: &Item);
    fn clear_create_form(&self);
}

/// Marks a control busy until dropped, so every exit path restores it
struct BusyGuard<'a, H: ActionHost> {
    host: &'a H,
    control: Control,
}

impl<'a, H: ActionHost> BusyGuard<'a, H> {
    fn acquire(host: &'a H, control: Control) -> Self {
        host.set_busy(control, true);
        Self { host, control }
    }
}

impl<H: ActionHost> Drop for BusyGuard<'_, H> {
    fn drop(&mut self) {
        self.host.set_busy(self.control, false);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    /// Applied to the local store only (id above the service threshold)
    LocalOnly,
}

/// Initial fetch; keeps the first `limit` items
pub async fn load_items<H: ActionHost, A: TodoApi>(host: &H, api: &A, limit: usize) -> Result<usize, ActionError> {
    match api.list().await {
        Ok(mut items) => {
            items.truncate(limit);
            let count = items.len();
            host.update_todos(|todos| todos.load_all(items));
            log::info!("loaded {} items", count);
            Ok(count)
        }
        Err(err) => {
            log::error!("failed to load items: {}", err);
            host.update_todos(|todos| todos.fail_load(err.to_string()));
            host.notify(
                &format!("Error loading tasks: {}. Please check your internet connection.", err),
                Severity::Error,
            );
            Err(err.into())
        }
    }
}

/// Reset and show the create dialog
pub fn open_create<H: ActionHost>(host: &H) {
    host.clear_create_form();
    host.open_modal(ModalKind::Create);
}

pub async fn submit_create<H: ActionHost, A: TodoApi>(host: &H, api: &A, draft: ItemDraft) -> Result<ItemId, ActionError> {
    if !draft.is_valid() {
        host.notify(EMPTY_TITLE_WARNING, Severity::Warning);
        return Err(ActionError::Validation);
    }

    let _busy = BusyGuard::acquire(host, Control::CreateSubmit);
    match api.create(&draft).await {
        Ok(server_id) => {
            let id = host.update_todos(|todos| {
                let id = todos.unique_id(server_id);
                todos.insert_front(Item::from_draft(id, draft));
                id
            });
            host.clear_create_form();
            host.close_modal(ModalKind::Create);
            log::info!("created item {} (service id {})", id, server_id);
            host.notify("New task added successfully!", Severity::Success);
            Ok(id)
        }
        Err(err) => {
            log::error!("failed to create item: {}", err);
            host.notify(&format!("Error adding task: {}. Please check the console.", err), Severity::Error);
            Err(err.into())
        }
    }
}

pub async fn delete_item<H: ActionHost, A: TodoApi>(host: &H, api: &A, id: ItemId) -> Result<DeleteOutcome, ActionError> {
    if !host.confirm(DELETE_PROMPT) {
        host.notify("Delete cancelled.", Severity::Info);
        return Ok(DeleteOutcome::Cancelled);
    }

    let _busy = BusyGuard::acquire(host, Control::Delete(id));
    match api.delete(id).await {
        Ok(()) => {
            host.update_todos(|todos| todos.remove_by_id(id));
            log::info!("deleted item {}", id);
            host.notify(
                "Task deleted (changes are lost when the page is refreshed).",
                Severity::Success,
            );
            Ok(DeleteOutcome::Deleted)
        }
        Err(err) => {
            log::error!("failed to delete item {}: {}", id, err);
            host.notify(&format!("Error deleting task: {}. Please check the console.", err), Severity::Error);
            Err(err.into())
        }
    }
}

/// Pre-fill and show the edit dialog for `id`
pub fn open_edit<H: ActionHost>(host: &H, id: ItemId) -> Result<(), ActionError> {
    let Some(item) = host.read_todos(|todos| todos.find(id).cloned()) else {
        host.notify("The task to edit was not found!", Severity::Error);
        return Err(ActionError::NotFoundLocal(id));
    };
    host.fill_edit_form(&item);
    host.open_modal(ModalKind::Edit);
    Ok(())
}

pub async fn submit_edit<H: ActionHost, A: TodoApi>(
    host: &H,
    api: &A,
    id: ItemId,
    draft: ItemDraft,
) -> Result<EditOutcome, ActionError> {
    if !draft.is_valid() {
        host.notify(EMPTY_TITLE_WARNING, Severity::Warning);
        return Err(ActionError::Validation);
    }

    let _busy = BusyGuard::acquire(host, Control::EditSave);
    let Some(current) = host.read_todos(|todos| todos.find(id).cloned()) else {
        host.notify("The task to edit was not found!", Severity::Error);
        return Err(ActionError::NotFoundLocal(id));
    };
    let patch = ItemPatch::from(draft);

    if host.is_local_only(id) {
        log::warn!("item {} is not backed by the service, applying the edit locally", id);
        host.update_todos(|todos| todos.update_by_id(id, &patch));
        host.close_modal(ModalKind::Edit);
        host.notify(
            "Task updated locally (changes are lost when the page is refreshed).",
            Severity::Success,
        );
        return Ok(EditOutcome::LocalOnly);
    }

    let updated = Item {
        title: patch.title.clone(),
        body: patch.body.clone(),
        ..current
    };
    match api.update(&updated).await {
        Ok(()) => {
            host.update_todos(|todos| todos.update_by_id(id, &patch));
            host.close_modal(ModalKind::Edit);
            log::info!("updated item {}", id);
            host.notify(
                "Task updated (changes are lost when the page is refreshed).",
                Severity::Success,
            );
            Ok(EditOutcome::Saved)
        }
        Err(err) => {
            log::error!("failed to update item {}: {}", id, err);
            host.notify(&format!("Error editing task: {}. Please check the console.", err), Severity::Error);
            Err(err.into())
        }
    }
}
