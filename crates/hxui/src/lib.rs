//! hxui
//!
//! Server-rendered HTML components whose interactive parts round-trip
//! through htmx: each request re-renders exactly one fragment that replaces
//! the component in place.
//!
//! # Example
//! ```rust
//! use hxui::prelude::*;
//!
//! let node = button::new(ButtonProps::default(), [text("Save")]);
//! let html = render_to_string(&node).unwrap();
//! assert!(html.starts_with(r#"<button data-slot="button""#));
//! ```

pub mod prelude;

// Re-export sub-crates for advanced usage
pub use hxui_components as components;
pub use hxui_dom as dom;
pub use hxui_htmx as htmx;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
