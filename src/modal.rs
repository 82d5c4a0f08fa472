//! Modal Controller
//!
//! Each dialog moves `Closed -> Opening -> Open -> Closing -> Closed`. The
//! `Opening`/`Closing` steps end on a timer owned by the controller; `close()` returns
//! right away while the dialog is still visible.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Transition bookkeeping. Every `open`/`close` bumps the generation so a timer
/// scheduled by an earlier transition cannot settle a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    phase: ModalPhase,
    generation: u64,
}

impl ModalState {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Start the enter transition. Returns the ticket for the settle timer.
    pub fn open(&mut self) -> Option<u64> {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => None,
            ModalPhase::Closed | ModalPhase::Closing => {
                self.phase = ModalPhase::Opening;
                Some(self.bump())
            }
        }
    }

    /// Start the exit transition. Returns the ticket for the hide timer.
    pub fn close(&mut self) -> Option<u64> {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing => None,
            ModalPhase::Opening | ModalPhase::Open => {
                self.phase = ModalPhase::Closing;
                Some(self.bump())
            }
        }
    }

    /// Finish the transition identified by `ticket`; stale tickets are ignored
    pub fn settle(&mut self, ticket: u64) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.phase = match self.phase {
            ModalPhase::Opening => ModalPhase::Open,
            ModalPhase::Closing => ModalPhase::Closed,
            _ => return false,
        };
        true
    }

    /// Not `hidden`: rendered and blocking page scroll
    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Enter classes applied (`opacity-100 scale-100`) rather than exit classes
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

/// Reactive handle for one dialog
#[derive(Clone, Copy)]
pub struct ModalController {
    state: RwSignal<ModalState>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    transition_ms: u32,
}

impl ModalController {
    pub fn new(transition_ms: u32) -> Self {
        Self {
            state: RwSignal::new(ModalState::default()),
            timer: StoredValue::new_local(None),
            transition_ms,
        }
    }

    pub fn open(&self) {
        let mut ticket = None;
        self.state.update(|state| ticket = state.open());
        if let Some(ticket) = ticket {
            self.schedule(ticket);
        }
    }

    pub fn close(&self) {
        let mut ticket = None;
        self.state.update(|state| ticket = state.close());
        if let Some(ticket) = ticket {
            self.schedule(ticket);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.get().is_visible()
    }

    pub fn is_shown(&self) -> bool {
        self.state.get().is_shown()
    }

    // Replacing the stored Timeout drops (and cancels) the previous one.
    fn schedule(&self, ticket: u64) {
        let state = self.state;
        let handle = Timeout::new(self.transition_ms, move || {
            state.try_update(|state| state.settle(ticket));
        });
        self.timer.set_value(Some(handle));
    }
}

/// Toggle `overflow-hidden` on `<body>`
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(err) = body.class_list().toggle_with_force("overflow-hidden", locked) {
        log::warn!("could not toggle body scroll lock: {:?}", err);
    }
}
