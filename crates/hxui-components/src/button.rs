//! Button
//!
//! Renders `<button>` (or `<a>` when an `href` is given) with shadcn variant
//! and size classes.

use hxui_dom::attributes::{aria, class, data_slot, disabled, href, id, type_};
use hxui_dom::elements::{a, button};
use hxui_dom::{group, if_, Node, Variant, VariantConfig};

pub const BUTTON: VariantConfig = VariantConfig {
    base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px]",
    variants: &[
        Variant {
            name: "variant",
            default: "default",
            choices: &[
                ("default", "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90"),
                ("destructive", "bg-destructive text-white shadow-xs hover:bg-destructive/90 focus-visible:ring-destructive/20"),
                ("outline", "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground"),
                ("secondary", "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80"),
                ("ghost", "hover:bg-accent hover:text-accent-foreground"),
                ("link", "text-primary underline-offset-4 hover:underline"),
            ],
        },
        Variant {
            name: "size",
            default: "default",
            choices: &[
                ("default", "h-9 px-4 py-2 has-[>svg]:px-3"),
                ("sm", "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5"),
                ("lg", "h-10 rounded-md px-6 has-[>svg]:px-4"),
                ("icon", "size-9"),
            ],
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub id: Option<String>,
    pub class: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub type_: ButtonType,
    pub disabled: bool,
    /// Render an anchor instead of a button
    pub href: Option<String>,
    pub aria_label: Option<String>,
}

/// Resolved class list for a variant/size pair
pub fn classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    BUTTON.resolve(&[("variant", variant.as_str()), ("size", size.as_str())], extra)
}

pub fn new(props: ButtonProps, children: impl IntoIterator<Item = Node>) -> Node {
    let common = group([
        data_slot("button"),
        props.id.map(|v| id(v)).into(),
        class(classes(props.variant, props.size, &props.class)),
        props.aria_label.map(|label| aria("label", label)).into(),
    ]);
    match props.href {
        Some(url) => a([
            common,
            href(url),
            if_(props.disabled, aria("disabled", "true")),
            group(children),
        ]),
        None => button([
            common,
            type_(props.type_.as_str()),
            if_(props.disabled, disabled()),
            group(children),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::{render_to_string, text};

    #[test]
    fn test_default_button() {
        let html = render_to_string(&new(ButtonProps::default(), [text("Save")])).unwrap();
        assert!(html.starts_with(r#"<button data-slot="button" class="inline-flex"#));
        assert!(html.contains("bg-primary text-primary-foreground"));
        assert!(html.contains("h-9 px-4 py-2"));
        assert!(html.ends_with(r#" type="button">Save</button>"#));
    }

    #[test]
    fn test_variant_size_and_extra_class() {
        let props = ButtonProps {
            variant: ButtonVariant::Outline,
            size: ButtonSize::Icon,
            class: "ml-auto".into(),
            ..Default::default()
        };
        let html = render_to_string(&new(props, [])).unwrap();
        assert!(html.contains("border bg-background"));
        assert!(html.contains("size-9 ml-auto\""));
        assert!(!html.contains("bg-primary"));
    }

    #[test]
    fn test_href_renders_anchor() {
        let props = ButtonProps {
            href: Some("/docs".into()),
            variant: ButtonVariant::Link,
            ..Default::default()
        };
        let html = render_to_string(&new(props, [text("Docs")])).unwrap();
        assert!(html.starts_with("<a "));
        assert!(html.contains(r#"href="/docs""#));
        assert!(!html.contains("type="));
    }

    #[test]
    fn test_disabled_submit() {
        let props = ButtonProps {
            type_: ButtonType::Submit,
            disabled: true,
            ..Default::default()
        };
        let html = render_to_string(&new(props, [text("Go")])).unwrap();
        assert!(html.contains(r#"type="submit" disabled>"#));
    }
}
