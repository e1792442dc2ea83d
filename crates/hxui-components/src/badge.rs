//! Badge

use hxui_dom::attributes::{class, data_slot, id};
use hxui_dom::elements::span;
use hxui_dom::{group, Node, Variant, VariantConfig};

pub const BADGE: VariantConfig = VariantConfig {
    base: "inline-flex items-center justify-center rounded-md border px-2 py-0.5 text-xs font-medium w-fit whitespace-nowrap shrink-0 [&>svg]:size-3 gap-1 [&>svg]:pointer-events-none overflow-hidden",
    variants: &[Variant {
        name: "variant",
        default: "default",
        choices: &[
            ("default", "border-transparent bg-primary text-primary-foreground"),
            ("secondary", "border-transparent bg-secondary text-secondary-foreground"),
            ("destructive", "border-transparent bg-destructive text-white"),
            ("outline", "text-foreground"),
        ],
    }],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeProps {
    pub id: Option<String>,
    pub class: String,
    pub variant: BadgeVariant,
}

pub fn new(props: BadgeProps, children: impl IntoIterator<Item = Node>) -> Node {
    span([
        data_slot("badge"),
        props.id.map(|v| id(v)).into(),
        class(BADGE.resolve(&[("variant", props.variant.as_str())], &props.class)),
        group(children),
    ])
}
