//! Alert
//!
//! Callout box with an optional leading icon, a title and a description.

use hxui_dom::attributes::{class, data_slot, id, role};
use hxui_dom::elements::div;
use hxui_dom::{group, Node, Variant, VariantConfig};

use crate::props::{part, Props};

pub const ALERT: VariantConfig = VariantConfig {
    base: "relative w-full rounded-lg border px-4 py-3 text-sm grid has-[>svg]:grid-cols-[calc(var(--spacing)*4)_1fr] grid-cols-[0_1fr] has-[>svg]:gap-x-3 gap-y-0.5 items-start [&>svg]:size-4 [&>svg]:translate-y-0.5 [&>svg]:text-current",
    variants: &[Variant {
        name: "variant",
        default: "default",
        choices: &[
            ("default", "bg-card text-card-foreground"),
            ("destructive", "text-destructive bg-card [&>svg]:text-current *:data-[slot=alert-description]:text-destructive/90"),
        ],
    }],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

impl AlertVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertProps {
    pub id: Option<String>,
    pub class: String,
    pub variant: AlertVariant,
}

pub fn new(props: AlertProps, children: impl IntoIterator<Item = Node>) -> Node {
    div([
        data_slot("alert"),
        props.id.map(|v| id(v)).into(),
        role("alert"),
        class(ALERT.resolve(&[("variant", props.variant.as_str())], &props.class)),
        group(children),
    ])
}

pub fn title(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("div", "alert-title", "col-start-2 line-clamp-1 min-h-4 font-medium tracking-tight", &props, children)
}

pub fn description(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part(
        "div",
        "alert-description",
        "text-muted-foreground col-start-2 grid justify-items-start gap-1 text-sm [&_p]:leading-relaxed",
        &props,
        children,
    )
}
