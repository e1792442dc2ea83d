//! Popover
//!
//! Trigger and floating panel share one swap root, so the trigger is
//! re-rendered with every transition and keeps `aria-expanded` accurate.
//! Slots are two explicit child lists: `trigger` and `content`.

use hxui_dom::attributes::{aria, bool_str, class, data_align, data_side, data_slot, data_state, id, role, type_};
use hxui_dom::elements::{button as button_tag, div};
use hxui_dom::{cn, group, if_with, Node, Variant, VariantConfig};
use hxui_htmx::{InteractiveBinding, Router, StateStore};

use crate::button::{self, ButtonSize, ButtonVariant};
use crate::disclosure::{register_transitions, OpenState};
use crate::props::{open_state, resolve_id, Align, Side};

pub type PopoverState = OpenState;

const SIDE: Variant = Variant {
    name: "side",
    default: "bottom",
    choices: &[
        ("top", "bottom-full mb-2"),
        ("right", "left-full ml-2 top-0"),
        ("bottom", "top-full mt-2"),
        ("left", "right-full mr-2 top-0"),
    ],
};

const ALIGN: Variant = Variant {
    name: "align",
    default: "center",
    choices: &[
        ("start", "left-0"),
        ("center", "left-1/2 -translate-x-1/2"),
        ("end", "right-0"),
    ],
};

/// Panel position for the top and bottom sides
pub const PLACEMENT: VariantConfig = VariantConfig {
    base: "absolute z-50",
    variants: &[SIDE, ALIGN],
};

/// Panel position for the left and right sides (no horizontal alignment)
pub const EDGE_PLACEMENT: VariantConfig = VariantConfig {
    base: "absolute z-50",
    variants: &[SIDE],
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopoverProps {
    pub id: Option<String>,
    /// Extra classes for the panel
    pub class: String,
    pub open: bool,
    pub side: Side,
    pub align: Align,
}

/// Placement classes for a side/align pair
pub fn placement(side: Side, align: Align, extra: &str) -> String {
    match side {
        Side::Top | Side::Bottom => PLACEMENT.resolve(&[("side", side.as_str()), ("align", align.as_str())], extra),
        Side::Left | Side::Right => EDGE_PLACEMENT.resolve(&[("side", side.as_str())], extra),
    }
}

/// Static popover
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(
    props: PopoverProps,
    trigger: impl IntoIterator<Item = Node>,
    content: impl IntoIterator<Item = Node>,
) -> Node {
    let id = resolve_id(props.id.as_deref(), "popover", "");
    interactive(props, &InteractiveBinding::new(id), trigger, content)
}

pub fn interactive(
    props: PopoverProps,
    binding: &InteractiveBinding,
    trigger: impl IntoIterator<Item = Node>,
    content: impl IntoIterator<Item = Node>,
) -> Node {
    let open = props.open;
    let content_id = binding.part_id("content");
    binding.root(open_state(open), [
        data_slot("popover"),
        class("relative inline-block"),
        button_tag([
            type_("button"),
            data_slot("popover-trigger"),
            data_state(open_state(open)),
            aria("haspopup", "dialog"),
            aria("expanded", bool_str(open)),
            aria("controls", content_id.as_str()),
            class(button::classes(ButtonVariant::Outline, ButtonSize::Default, "")),
            binding.transition_request(!open),
            group(trigger),
        ]),
        if_with(open, || {
            div([
                id(content_id.clone()),
                role("dialog"),
                data_slot("popover-content"),
                data_state("open"),
                data_side(props.side.as_str()),
                data_align(props.align.as_str()),
                class(placement(
                    props.side,
                    props.align,
                    &cn([
                        "bg-popover text-popover-foreground w-72 rounded-md border p-4 shadow-md outline-hidden",
                        props.class.as_str(),
                    ]),
                )),
                group(content),
            ])
        }),
    ])
}

pub fn register<S, V>(router: &mut Router, binding: &InteractiveBinding, store: S, view: V)
where
    S: StateStore<PopoverState>,
    V: Fn(&PopoverState) -> Node + Send + Sync + 'static,
{
    register_transitions(router, binding, store, view);
}
