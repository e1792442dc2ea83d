//! Separator

use hxui_dom::attributes::{aria, class, data, data_slot, id, role};
use hxui_dom::elements::div;
use hxui_dom::{cn, if_, Node};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorProps {
    pub id: Option<String>,
    pub class: String,
    pub orientation: Orientation,
    /// Purely visual separators are hidden from assistive technology
    pub decorative: bool,
}

impl Default for SeparatorProps {
    fn default() -> Self {
        Self {
            id: None,
            class: String::new(),
            orientation: Orientation::Horizontal,
            decorative: true,
        }
    }
}

pub fn new(props: SeparatorProps) -> Node {
    let orientation = props.orientation.as_str();
    div([
        data_slot("separator"),
        props.id.map(|v| id(v)).into(),
        role(if props.decorative { "none" } else { "separator" }),
        if_(!props.decorative, aria("orientation", orientation)),
        data("orientation", orientation),
        class(cn([
            "bg-border shrink-0 data-[orientation=horizontal]:h-px data-[orientation=horizontal]:w-full data-[orientation=vertical]:h-full data-[orientation=vertical]:w-px",
            props.class.as_str(),
        ])),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::render_to_string;

    #[test]
    fn test_decorative_by_default() {
        let html = render_to_string(&new(SeparatorProps::default())).unwrap();
        assert!(html.contains(r#"role="none""#));
        assert!(!html.contains("aria-orientation"));
    }

    #[test]
    fn test_semantic_vertical() {
        let props = SeparatorProps {
            orientation: Orientation::Vertical,
            decorative: false,
            ..Default::default()
        };
        let html = render_to_string(&new(props)).unwrap();
        assert!(html.contains(r#"role="separator" aria-orientation="vertical" data-orientation="vertical""#));
    }
}
