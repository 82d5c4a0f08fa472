//! Todo Board App
//!
//! Composition root: builds the store and context, binds the page components, and
//! starts the initial load.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{CreateModal, EditModal, Header, TodoListView, ToastHost};
use crate::config::Config;
use crate::context::AppContext;
use crate::modal::set_body_scroll_locked;
use crate::store::AppState;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let limit = config.list_limit;

    // State
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    // Page scroll is blocked while either dialog is visible
    Effect::new(move |_| {
        set_body_scroll_locked(ctx.create_modal.is_visible() || ctx.edit_modal.is_visible());
    });

    // Load items on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            if let Err(err) = actions::load_items(&ctx, &api, limit).await {
                log::debug!("initial load ended with: {}", err);
            }
        });
    });

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                <TodoListView />
            </main>
            <CreateModal />
            <EditModal />
            <ToastHost />
        </div>
    }
}
