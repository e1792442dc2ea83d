//! Component contract helpers
//!
//! Shared props plumbing: id resolution, positioning enums and the generic
//! part builder used by sub-constructors.

use std::borrow::Cow;

use hxui_dom::attributes::{class, data_slot, id};
use hxui_dom::{cn, element, group, if_, Node};
use serde::{Deserialize, Serialize};

/// Minimal props for parts that only take an id and extra classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    pub id: Option<String>,
    pub class: String,
}

impl Props {
    /// Props carrying only extra classes
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            id: None,
            class: class.into(),
        }
    }
}

/// Resolve a component id: the caller's id when given, otherwise a stable
/// `<kind>-<slug of key>` (or just `<kind>` when the key is blank)
pub fn resolve_id(explicit: Option<&str>, kind: &str, key: &str) -> String {
    if let Some(id) = explicit.filter(|id| !id.is_empty()) {
        return id.to_string();
    }
    let slug = slugify(key);
    if slug.is_empty() {
        kind.to_string()
    } else {
        format!("{kind}-{slug}")
    }
}

/// Lower-case ASCII token made of `[a-z0-9-]`
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Build a component part: `<tag data-slot=.. class=..>` with optional id
pub fn part(
    tag: impl Into<Cow<'static, str>>,
    slot: &'static str,
    base: &str,
    props: &Props,
    children: impl IntoIterator<Item = Node>,
) -> Node {
    element(tag, [
        data_slot(slot),
        props.id.as_ref().map(|v| id(v.clone())).into(),
        if_(!(base.is_empty() && props.class.is_empty()), class(cn([base, props.class.as_str()]))),
        group(children),
    ])
}

/// Side a floating panel is anchored to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "top" => Self::Top,
            "right" => Self::Right,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            _ => return None,
        })
    }
}

/// Alignment of a floating panel along its side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// `open`/`closed` for `data-state`
pub fn open_state(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}

/// `active`/`inactive` for `data-state`
pub fn active_state(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

/// `checked`/`unchecked` for `data-state`
pub fn checked_state(checked: bool) -> &'static str {
    if checked { "checked" } else { "unchecked" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::render_to_string;

    #[test]
    fn test_resolve_id_prefers_explicit() {
        assert_eq!(resolve_id(Some("mine"), "dialog", "Edit profile"), "mine");
        assert_eq!(resolve_id(Some(""), "dialog", "Edit profile"), "dialog-edit-profile");
        assert_eq!(resolve_id(None, "tabs", ""), "tabs");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Hello, World! "), "hello-world");
        assert_eq!(slugify("item-2"), "item-2");
        assert_eq!(slugify("Ünïcode"), "n-code");
    }

    #[test]
    fn test_part_appends_caller_class() {
        let node = part("div", "card-header", "grid gap-2", &Props::class("pb-0"), []);
        assert_eq!(
            render_to_string(&node).unwrap(),
            r#"<div data-slot="card-header" class="grid gap-2 pb-0"></div>"#
        );
    }

    #[test]
    fn test_part_without_classes() {
        let node = part("span", "x", "", &Props::default(), []);
        assert_eq!(render_to_string(&node).unwrap(), r#"<span data-slot="x"></span>"#);
    }
}
