//! Attribute helpers
//!
//! Functions returning attribute nodes, meant to be passed as children.

use crate::node::{attr, attr_bool, Node};

macro_rules! valued {
    ($($name:ident => $attr:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", $attr, "` attribute")]
            pub fn $name(value: impl Into<String>) -> Node {
                attr($attr, value)
            }
        )*
    };
}

macro_rules! boolean {
    ($($name:ident => $attr:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", $attr, "` boolean attribute")]
            pub fn $name() -> Node {
                attr_bool($attr)
            }
        )*
    };
}

valued! {
    autocomplete => "autocomplete",
    class => "class",
    for_ => "for",
    href => "href",
    id => "id",
    name => "name",
    placeholder => "placeholder",
    role => "role",
    style => "style",
    title => "title",
    type_ => "type",
    value => "value",
    data_slot => "data-slot",
    data_state => "data-state",
    data_side => "data-side",
    data_align => "data-align",
    data_value => "data-value",
}

boolean! {
    autofocus => "autofocus",
    checked => "checked",
    disabled => "disabled",
    hidden => "hidden",
    open => "open",
    readonly => "readonly",
    required => "required",
}

/// `tabindex` attribute
pub fn tabindex(index: i32) -> Node {
    attr("tabindex", index.to_string())
}

/// `aria-<name>` attribute
pub fn aria(name: &str, value: impl Into<String>) -> Node {
    attr(format!("aria-{name}"), value)
}

/// `data-<name>` attribute
pub fn data(name: &str, value: impl Into<String>) -> Node {
    attr(format!("data-{name}"), value)
}

/// `true`/`false` as attribute text
pub fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
