//! Modal Frame Component
//!
//! Backdrop plus content panel shared by the create and edit dialogs.

use leptos::prelude::*;

use crate::modal::ModalController;

/// Dialog shell driven by a `ModalController`
///
/// Clicking the backdrop itself closes the dialog; clicks inside the panel do not.
#[component]
pub fn ModalFrame(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    controller: ModalController,
    children: Children,
) -> impl IntoView {
    let backdrop_class = move || {
        if controller.is_visible() {
            "modal-backdrop flex"
        } else {
            "modal-backdrop hidden"
        }
    };
    let panel_class = move || {
        if controller.is_shown() {
            "modal-content-area opacity-100 scale-100"
        } else {
            "modal-content-area opacity-0 scale-95"
        }
    };

    view! {
        <div
            id=id
            class=backdrop_class
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.target() == ev.current_target() {
                    controller.close();
                }
            }
        >
            <div class=panel_class>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button type="button" class="close-btn" on:click=move |_| controller.close()>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
