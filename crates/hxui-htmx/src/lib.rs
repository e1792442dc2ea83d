//! hxui htmx - Interactive fragment protocol
//!
//! Wiring that lets a stateful component be swapped in place after a server
//! round-trip.
//!
//! Features:
//! - `InteractiveBinding`: stable target id, endpoints, swap mode, trigger, payload
//! - `hx-*` attribute vocabulary
//! - Request model with form-decoded payloads
//! - Router rendering exactly one fragment per request
//! - Injected per-session state stores (no process-global state)

pub mod binding;
pub mod form;
pub mod hx;
pub mod request;
pub mod router;
pub mod store;

pub use binding::{Endpoint, InteractiveBinding, Payload, SwapMode, Trigger, TriggerEvent, SEARCH_DELAY_MS};
pub use form::{parse_bool, FormData};
pub use request::{Method, Request, DEFAULT_SESSION};
pub use router::{stateful, Handler, Router};
pub use store::{MemoryStore, StateStore};

/// Handler error
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("No handler for {method} {path}")]
    NotFound { method: Method, path: String },

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid field {name}={value:?}: {reason}")]
    InvalidField {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Render failed: {0}")]
    Render(#[from] hxui_dom::RenderError),
}
