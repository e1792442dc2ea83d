//! hxui DOM - HTML node tree and serializer
//!
//! Immutable node tree with composable builders and a streaming HTML writer.
//!
//! Features:
//! - Node variants: element, text, raw text, fragment, attribute, nil
//! - Attribute hoisting from mixed child lists (last wins)
//! - Escaping serializer writing into any `std::io::Write`
//! - Class merging and table-driven variant resolution
//!
//! # Example
//! ```rust
//! use hxui_dom::{attributes::class, elements::p, render_to_string, text};
//!
//! let node = p([class("lead"), text("Hello & welcome")]);
//! assert_eq!(render_to_string(&node).unwrap(), r#"<p class="lead">Hello &amp; welcome</p>"#);
//! ```

mod node;
mod serializer;
mod config;
pub mod attributes;
pub mod classes;
pub mod elements;
pub mod variants;

pub use node::{
    attr, attr_bool, element, group, if_, if_with, is_void, map, raw, text, void_element, when,
    AttrValue, Attribute, Element, Node, VOID_ELEMENTS,
};
pub use serializer::{escape_attribute, escape_text, render, render_to_string, render_with};
pub use config::RenderConfig;
pub use classes::{cn, cn_if};
pub use variants::{Variant, VariantConfig};

/// Render error
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Attribute {name} contains a NUL byte")]
    NulInAttribute { name: String },
}
