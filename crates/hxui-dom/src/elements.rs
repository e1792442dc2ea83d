//! Tag helpers
//!
//! One function per HTML (and inline SVG) tag. Each takes attribute and
//! child nodes in any order.

use crate::node::{element, void_element, Node};

macro_rules! elements {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">` element")]
            pub fn $name(children: impl IntoIterator<Item = Node>) -> Node {
                element($tag, children)
            }
        )*
    };
}

macro_rules! void_elements {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">` void element (attributes only)")]
            pub fn $name(attrs: impl IntoIterator<Item = Node>) -> Node {
                void_element($tag, attrs)
            }
        )*
    };
}

elements! {
    a => "a",
    button => "button",
    details => "details",
    div => "div",
    footer => "footer",
    form => "form",
    h2 => "h2",
    h3 => "h3",
    header => "header",
    kbd => "kbd",
    label => "label",
    li => "li",
    nav => "nav",
    ol => "ol",
    option => "option",
    p => "p",
    script => "script",
    section => "section",
    select => "select",
    span => "span",
    style => "style",
    summary => "summary",
    table => "table",
    tbody => "tbody",
    td => "td",
    textarea => "textarea",
    th => "th",
    thead => "thead",
    time => "time",
    tr => "tr",
    ul => "ul",
}

void_elements! {
    br => "br",
    hr => "hr",
    img => "img",
    input => "input",
}

/// Inline SVG
pub mod svg {
    use crate::node::{element, Node};

    elements! {
        svg => "svg",
        path => "path",
        circle => "circle",
        polyline => "polyline",
        line => "line",
        rect => "rect",
    }
}
