//! Busy Button Component
//!
//! Button that swaps its label for a spinner and disables itself while busy.

use leptos::prelude::*;

pub const BUSY_LABEL: &str = "Processing...";

#[component]
pub fn BusyButton(
    #[prop(into)] label: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into, default = "button".to_string())] button_type: String,
    #[prop(into, default = String::new())] class: String,
    #[prop(optional, into)] data_id: Option<String>,
    #[prop(optional, into)] data_action: Option<String>,
) -> impl IntoView {
    let button_class = move || {
        if busy.get() {
            format!("{} opacity-75 cursor-not-allowed", class)
        } else {
            class.clone()
        }
    };

    view! {
        <button
            type=button_type
            class=button_class
            disabled=move || busy.get()
            data-id=data_id
            data-action=data_action
        >
            {move || if busy.get() {
                view! { <i class="fas fa-spinner fa-spin ml-2"></i> " " {BUSY_LABEL} }.into_any()
            } else {
                view! { {label.clone()} }.into_any()
            }}
        </button>
    }
}
