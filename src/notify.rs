//! Notifications
//!
//! Transient toasts kept in the app store. Each toast removes itself after the
//! configured duration unless the user closes it first.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{AppStateStoreFields, AppStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Severity::Success => "linear-gradient(to right, #10B981, #34D399)",
            Severity::Error => "linear-gradient(to right, #EF4444, #F87171)",
            Severity::Warning => "linear-gradient(to right, #F59E0B, #FBBF24)",
            Severity::Info => "linear-gradient(to right, #3B82F6, #60A5FA)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Append a toast and return its id
pub fn push_toast(toasts: &mut Vec<Toast>, next_id: &mut u64, message: String, severity: Severity) -> u64 {
    *next_id += 1;
    let id = *next_id;
    toasts.push(Toast { id, message, severity });
    id
}

pub fn dismiss_toast(toasts: &mut Vec<Toast>, id: u64) {
    toasts.retain(|toast| toast.id != id);
}

/// Show a toast and schedule its removal
pub fn notify(store: AppStore, duration_ms: u32, message: impl Into<String>, severity: Severity) {
    let message = message.into();
    log::debug!("toast [{}] {}", severity.as_str(), message);

    let mut next_id = store.next_toast_id().get_untracked();
    let id = push_toast(&mut *store.toasts().write(), &mut next_id, message, severity);
    store.next_toast_id().set(next_id);

    Timeout::new(duration_ms, move || {
        if let Some(mut toasts) = store.toasts().try_write() {
            dismiss_toast(&mut toasts, id);
        }
    })
    .forget();
}
