//! Toast Host Component
//!
//! Top-center stack of notifications, newest first. Each toast has a close button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::notify::dismiss_toast;
use crate::store::AppStateStoreFields;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = ctx.store.toasts();

    let newest_first = move || {
        let mut list = toasts.get();
        list.reverse();
        list
    };

    view! {
        <div class="toast-stack">
            <For
                each=newest_first
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast-{}", toast.severity.as_str())
                            style=format!("background: {};", toast.severity.background())
                            role="status"
                        >
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-close"
                                on:click=move |_| dismiss_toast(&mut *toasts.write(), id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
