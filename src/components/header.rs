//! Page Header Component
//!
//! Title and the button that opens the create dialog.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="page-header">
            <h1 class="page-title">"To-Do List"</h1>
            <button
                id="openAddModalBtn"
                class="add-btn"
                on:click=move |_| actions::open_create(&ctx)
            >
                <i class="fas fa-plus ml-2"></i>
                " Add task"
            </button>
        </header>
    }
}
