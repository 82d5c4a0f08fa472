//! Application Context
//!
//! Handles created once by `App` and provided via the Leptos Context API. This is the
//! page-side implementation of `ActionHost`.

use leptos::prelude::*;

use crate::actions::ActionHost;
use crate::commands::RestClient;
use crate::config::Config;
use crate::modal::ModalController;
use crate::models::{Control, Item, ItemId, ModalKind};
use crate::notify::{self, Severity};
use crate::store::{AppStateStoreFields, AppStore, TodoList};

/// Raw values of a dialog's title/body inputs
#[derive(Clone, Copy)]
pub struct FormFields {
    pub title: RwSignal<String>,
    pub body: RwSignal<String>,
}

impl FormFields {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            body: RwSignal::new(String::new()),
        }
    }

    pub fn set(&self, title: &str, body: &str) {
        self.title.set(title.to_string());
        self.body.set(body.to_string());
    }

    pub fn clear(&self) {
        self.set("", "");
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<Config>,
    api: StoredValue<RestClient, LocalStorage>,
    pub create_modal: ModalController,
    pub edit_modal: ModalController,
    pub create_form: FormFields,
    pub edit_form: FormFields,
}

impl AppContext {
    pub fn new(store: AppStore, config: Config) -> Self {
        let api = RestClient::new(config.api_base.clone());
        let transition_ms = config.modal_transition_ms;
        Self {
            store,
            config: StoredValue::new(config),
            api: StoredValue::new_local(api),
            create_modal: ModalController::new(transition_ms),
            edit_modal: ModalController::new(transition_ms),
            create_form: FormFields::new(),
            edit_form: FormFields::new(),
        }
    }

    /// Client for one action; clones share the connection pool
    pub fn api(&self) -> RestClient {
        self.api.get_value()
    }

    /// Reactive busy flag for a control
    pub fn is_busy(&self, control: Control) -> bool {
        self.store.busy().with(|busy| busy.contains(&control))
    }

    /// Item the edit dialog targets
    pub fn editing(&self) -> Option<ItemId> {
        self.store.editing().get_untracked()
    }

    fn modal(&self, kind: ModalKind) -> ModalController {
        match kind {
            ModalKind::Create => self.create_modal,
            ModalKind::Edit => self.edit_modal,
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

impl ActionHost for AppContext {
    fn read_todos<R>(&self, f: impl FnOnce(&TodoList) -> R) -> R {
        self.store.todos().with_untracked(f)
    }

    fn update_todos<R>(&self, f: impl FnOnce(&mut TodoList) -> R) -> R {
        let todos = self.store.todos();
        let mut guard = todos.write();
        f(&mut *guard)
    }

    fn is_local_only(&self, id: ItemId) -> bool {
        self.config.with_value(|config| config.is_local_only(id))
    }

    fn set_busy(&self, control: Control, busy: bool) {
        let field = self.store.busy();
        let mut controls = field.write();
        if busy {
            controls.insert(control);
        } else {
            controls.remove(&control);
        }
    }

    fn notify(&self, message: &str, severity: Severity) {
        let duration = self.config.with_value(|config| config.toast_duration_ms);
        notify::notify(self.store, duration, message, severity);
    }

    fn confirm(&self, prompt: &str) -> bool {
        window().confirm_with_message(prompt).unwrap_or(false)
    }

    fn open_modal(&self, modal: ModalKind) {
        self.modal(modal).open();
    }

    fn close_modal(&self, modal: ModalKind) {
        self.modal(modal).close();
    }

    fn fill_edit_form(&self, item: &Item) {
        self.store.editing().set(Some(item.id));
        self.edit_form.set(&item.title, item.body.as_deref().unwrap_or(""));
    }

    fn clear_create_form(&self) {
        self.create_form.clear();
    }
}
