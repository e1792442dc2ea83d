//! Open/closed state shared by toggle components
//!
//! Dialog, sheet, drawer, popover and collapsible only track whether they are
//! open. Menus and pickers carry more state but move between open and closed
//! the same way, so they implement [`Disclosure`] and reuse
//! [`register_transitions`].

use std::sync::Arc;

use hxui_dom::Node;
use hxui_htmx::{stateful, HandlerError, InteractiveBinding, Request, Router, StateStore};
use serde::{Deserialize, Serialize};

/// State with an open flag
pub trait Disclosure {
    fn is_open(&self) -> bool;
    fn set_open(&mut self, open: bool);
}

/// Per-session state of a plain toggle component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenState {
    pub open: bool,
}

impl OpenState {
    pub fn open() -> Self {
        Self { open: true }
    }

    /// Apply a toggle request: the `open` field carries the next state
    pub fn apply(&mut self, req: &Request) -> Result<(), HandlerError> {
        apply_toggle(self, req)
    }
}

impl Disclosure for OpenState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

/// Read the required `open` field and move the state there
pub fn apply_toggle<T: Disclosure>(state: &mut T, req: &Request) -> Result<(), HandlerError> {
    let open = req.bool_field("open")?;
    state.set_open(open);
    Ok(())
}

/// Register the binding's open, close and toggle endpoints (whichever exist).
///
/// Each handler loads the session state, moves it, saves it and renders it
/// through `view`.
pub fn register_transitions<T, S, V>(router: &mut Router, binding: &InteractiveBinding, store: S, view: V)
where
    T: Disclosure + Clone + 'static,
    S: StateStore<T>,
    V: Fn(&T) -> Node + Send + Sync + 'static,
{
    let view = Arc::new(view);
    if let Some(endpoint) = &binding.open {
        let view = view.clone();
        router.endpoint(
            endpoint,
            stateful(
                store.clone(),
                |state: &mut T, _| {
                    state.set_open(true);
                    Ok(())
                },
                move |state| view(state),
            ),
        );
    }
    if let Some(endpoint) = &binding.close {
        let view = view.clone();
        router.endpoint(
            endpoint,
            stateful(
                store.clone(),
                |state: &mut T, _| {
                    state.set_open(false);
                    Ok(())
                },
                move |state| view(state),
            ),
        );
    }
    if let Some(endpoint) = &binding.toggle {
        router.endpoint(endpoint, stateful(store, apply_toggle::<T>, move |state| view(state)));
    }
}
