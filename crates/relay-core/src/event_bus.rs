//! Simple event bus for delivering request completions to the UI.
//!
//! The bus is single-threaded (WASM constraint) and uses interior
//! mutability via RefCell. Spawned futures emit completions; the UI
//! drains them on each frame and routes them to the owning state.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use relay_types::event::ClientEvent;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<ClientEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish a completion. Called from spawned request futures.
    pub fn emit(&self, event: ClientEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<ClientEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Check if there are pending events (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
