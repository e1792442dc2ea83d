//! Toast
//!
//! Transient notification. Usually returned next to a closed swap root so the
//! client shows it once; dismissal timing belongs to the client.

use hxui_dom::attributes::{aria, class, data_slot, id, role};
use hxui_dom::elements::div;
use hxui_dom::{group, if_with, text, Node, Variant, VariantConfig};

pub const TOAST: VariantConfig = VariantConfig {
    base: "pointer-events-auto fixed bottom-4 right-4 z-[100] flex w-full max-w-sm flex-col gap-1 rounded-md border p-4 shadow-lg",
    variants: &[Variant {
        name: "variant",
        default: "default",
        choices: &[
            ("default", "bg-background text-foreground"),
            ("success", "bg-background text-foreground border-green-600/40"),
            ("destructive", "bg-destructive text-white border-destructive"),
        ],
    }],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Success,
    Destructive,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastProps {
    pub id: Option<String>,
    pub class: String,
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
}

/// Toast with title, description and any extra children (e.g. an action)
pub fn new(props: ToastProps, children: impl IntoIterator<Item = Node>) -> Node {
    div([
        data_slot("toast"),
        props.id.map(|v| id(v)).into(),
        role("status"),
        aria("live", "polite"),
        aria("atomic", "true"),
        class(TOAST.resolve(&[("variant", props.variant.as_str())], &props.class)),
        if_with(!props.title.is_empty(), || {
            div([data_slot("toast-title"), class("text-sm font-semibold"), text(props.title.as_str())])
        }),
        if_with(!props.description.is_empty(), || {
            div([
                data_slot("toast-description"),
                class("text-sm opacity-90"),
                text(props.description.as_str()),
            ])
        }),
        group(children),
    ])
}

/// Plain success toast with a single message
pub fn message(message: &str) -> Node {
    new(
        ToastProps {
            variant: ToastVariant::Success,
            title: message.to_string(),
            ..Default::default()
        },
        [],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::render_to_string;

    #[test]
    fn test_toast_is_polite_status() {
        let html = render_to_string(&message("Profile saved")).unwrap();
        assert!(html.starts_with(r#"<div data-slot="toast" role="status" aria-live="polite" aria-atomic="true""#));
        assert!(html.contains(">Profile saved</div>"));
        assert!(!html.contains("toast-description"));
    }
}
