//! Sheet and drawer
//!
//! Side-anchored panels over an overlay. A drawer is a sheet that defaults to
//! the bottom edge and shows a drag handle.

use hxui_dom::attributes::{aria, class, data_side, data_slot, data_state, role, tabindex, type_};
use hxui_dom::elements::{button as button_tag, div, span};
use hxui_dom::{group, if_, if_with, text, Node, Variant, VariantConfig};
use hxui_htmx::{InteractiveBinding, Router, StateStore};

use crate::button::{self, ButtonProps};
use crate::disclosure::{register_transitions, OpenState};
use crate::icons;
use crate::props::{part, resolve_id, Props, Side};

pub type SheetState = OpenState;

pub const SHEET: VariantConfig = VariantConfig {
    base: "bg-background fixed z-50 flex flex-col gap-4 shadow-lg transition ease-in-out",
    variants: &[Variant {
        name: "side",
        default: "right",
        choices: &[
            ("top", "inset-x-0 top-0 h-auto border-b"),
            ("right", "inset-y-0 right-0 h-full w-3/4 border-l sm:max-w-sm"),
            ("bottom", "inset-x-0 bottom-0 h-auto border-t"),
            ("left", "inset-y-0 left-0 h-full w-3/4 border-r sm:max-w-sm"),
        ],
    }],
};

pub const DRAWER: VariantConfig = VariantConfig {
    base: "bg-background fixed z-50 flex h-auto flex-col",
    variants: &[Variant {
        name: "side",
        default: "bottom",
        choices: &[
            ("top", "inset-x-0 top-0 mb-24 max-h-[80vh] rounded-b-lg border-b"),
            ("right", "inset-y-0 right-0 w-3/4 border-l sm:max-w-sm"),
            ("bottom", "inset-x-0 bottom-0 mt-24 max-h-[80vh] rounded-t-lg border-t"),
            ("left", "inset-y-0 left-0 w-3/4 border-r sm:max-w-sm"),
        ],
    }],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetProps {
    pub id: Option<String>,
    /// Extra classes for the panel
    pub class: String,
    pub open: bool,
    pub side: Side,
    pub title: String,
    pub description: String,
    pub hide_close: bool,
}

impl Default for SheetProps {
    fn default() -> Self {
        Self {
            id: None,
            class: String::new(),
            open: false,
            side: Side::Right,
            title: String::new(),
            description: String::new(),
            hide_close: false,
        }
    }
}

impl SheetProps {
    /// Props with drawer defaults (bottom edge)
    pub fn drawer() -> Self {
        Self {
            side: Side::Bottom,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Sheet,
    Drawer,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Self::Sheet => "sheet",
            Self::Drawer => "drawer",
        }
    }

    fn table(self) -> &'static VariantConfig {
        match self {
            Self::Sheet => &SHEET,
            Self::Drawer => &DRAWER,
        }
    }
}

/// Static sheet
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(props: SheetProps, children: impl IntoIterator<Item = Node>) -> Node {
    let id = resolve_id(props.id.as_deref(), "sheet", &props.title);
    render(props, &InteractiveBinding::new(id), Kind::Sheet, children)
}

pub fn interactive(props: SheetProps, binding: &InteractiveBinding, children: impl IntoIterator<Item = Node>) -> Node {
    render(props, binding, Kind::Sheet, children)
}

/// Static drawer; build props with [`SheetProps::drawer`]
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn drawer(props: SheetProps, children: impl IntoIterator<Item = Node>) -> Node {
    let id = resolve_id(props.id.as_deref(), "drawer", &props.title);
    render(props, &InteractiveBinding::new(id), Kind::Drawer, children)
}

pub fn drawer_interactive(props: SheetProps, binding: &InteractiveBinding, children: impl IntoIterator<Item = Node>) -> Node {
    render(props, binding, Kind::Drawer, children)
}

fn render(props: SheetProps, binding: &InteractiveBinding, kind: Kind, children: impl IntoIterator<Item = Node>) -> Node {
    if !props.open {
        return binding.closed_root();
    }
    let name = kind.name();
    let side = props.side.as_str();
    let title_id = binding.part_id("title");
    let description_id = binding.part_id("description");

    binding.root("open", [
        data_slot(name),
        data_side(side),
        div([
            data_slot("sheet-overlay"),
            data_state("open"),
            class("fixed inset-0 z-50 bg-black/50"),
            binding.transition_request(false),
        ]),
        div([
            role("dialog"),
            aria("modal", "true"),
            if_(!props.title.is_empty(), aria("labelledby", title_id.as_str())),
            if_(!props.description.is_empty(), aria("describedby", description_id.as_str())),
            data_slot("sheet-content"),
            data_state("open"),
            data_side(side),
            tabindex(-1),
            class(kind.table().resolve(&[("side", side)], &props.class)),
            if_(
                kind == Kind::Drawer,
                div([class("bg-muted mx-auto mt-4 h-2 w-[100px] shrink-0 rounded-full"), aria("hidden", "true")]),
            ),
            if_with(!(props.title.is_empty() && props.description.is_empty()), || {
                header(Props::default(), [
                    if_with(!props.title.is_empty(), || {
                        title(Props { id: Some(title_id.clone()), class: String::new() }, [text(props.title.as_str())])
                    }),
                    if_with(!props.description.is_empty(), || {
                        description(
                            Props { id: Some(description_id.clone()), class: String::new() },
                            [text(props.description.as_str())],
                        )
                    }),
                ])
            }),
            group(children),
            if_with(!props.hide_close, || {
                button_tag([
                    type_("button"),
                    data_slot("sheet-close"),
                    aria("label", "Close"),
                    class("ring-offset-background focus:ring-ring absolute top-4 right-4 rounded-xs opacity-70 transition-opacity hover:opacity-100 focus:ring-2 focus:ring-offset-2 focus:outline-hidden"),
                    binding.transition_request(false),
                    icons::x(""),
                    span([class("sr-only"), text("Close")]),
                ])
            }),
        ]),
    ])
}

/// Button outside the root that opens the sheet
pub fn trigger(props: ButtonProps, binding: &InteractiveBinding, children: impl IntoIterator<Item = Node>) -> Node {
    button::new(props, [
        data_slot("sheet-trigger"),
        aria("haspopup", "dialog"),
        aria("controls", binding.id()),
        binding.transition_request(true),
        group(children),
    ])
}

pub fn close(props: ButtonProps, binding: &InteractiveBinding, children: impl IntoIterator<Item = Node>) -> Node {
    button::new(props, [data_slot("sheet-close"), binding.transition_request(false), group(children)])
}

pub fn header(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("div", "sheet-header", "flex flex-col gap-1.5 p-4", &props, children)
}

pub fn footer(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("div", "sheet-footer", "mt-auto flex flex-col gap-2 p-4", &props, children)
}

pub fn title(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("h2", "sheet-title", "text-foreground font-semibold", &props, children)
}

pub fn description(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("p", "sheet-description", "text-muted-foreground text-sm", &props, children)
}

/// Wire open, close and toggle endpoints for a sheet or drawer
pub fn register<S, V>(router: &mut Router, binding: &InteractiveBinding, store: S, view: V)
where
    S: StateStore<SheetState>,
    V: Fn(&SheetState) -> Node + Send + Sync + 'static,
{
    register_transitions(router, binding, store, view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::render_to_string;

    #[test]
    fn test_sheet_side_classes() {
        let props = SheetProps {
            open: true,
            side: Side::Left,
            title: "Menu".into(),
            ..Default::default()
        };
        let html = render_to_string(&new(props, [])).unwrap();
        assert!(html.starts_with(r#"<div id="sheet-menu" data-state="open" data-slot="sheet" data-side="left">"#));
        assert!(html.contains("inset-y-0 left-0 h-full w-3/4 border-r"));
        assert!(!html.contains("right-0 h-full"));
    }

    #[test]
    fn test_drawer_defaults_to_bottom_with_handle() {
        let props = SheetProps {
            open: true,
            ..SheetProps::drawer()
        };
        let binding = InteractiveBinding::with_paths("cart", "/cart");
        let html = render_to_string(&drawer_interactive(props, &binding, [])).unwrap();
        assert!(html.contains(r#"data-slot="drawer" data-side="bottom""#));
        assert!(html.contains("rounded-t-lg border-t"));
        assert!(html.contains("w-[100px]"));
        assert!(html.contains(r#"hx-get="/cart/close""#));
    }

    #[test]
    fn test_closed_sheet() {
        let binding = InteractiveBinding::with_paths("s", "/s");
        let html = render_to_string(&interactive(SheetProps::default(), &binding, [])).unwrap();
        assert_eq!(html, r#"<div id="s" data-state="closed"></div>"#);
    }
}
