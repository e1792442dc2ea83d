//! Dropdown menu
//!
//! Menu of items, checkbox items, radio groups, labels, separators and nested
//! submenus. Checkbox, radio and submenu changes are server round-trips:
//! each control sends its delta and the whole menu is re-rendered.
//!
//! Actions used on the binding (all optional):
//! - `check`: `{name, checked}`
//! - `radio`: `{group, value}`
//! - `sub`: `{sub, open}`
//! - `select`: `{value}`, closes the menu

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use hxui_dom::attributes::{
    aria, bool_str, class, data, data_align, data_side, data_slot, data_state, data_value, href, id, role, tabindex,
    type_,
};
use hxui_dom::elements::{a, button as button_tag, div, span};
use hxui_dom::{cn, group, if_, if_with, map, text, Node};
use hxui_htmx::{stateful, HandlerError, InteractiveBinding, Payload, Request, Router, StateStore};
use serde::{Deserialize, Serialize};

use crate::button::{self, ButtonSize, ButtonVariant};
use crate::disclosure::{register_transitions, Disclosure};
use crate::icons;
use crate::popover::placement;
use crate::props::{checked_state, open_state, resolve_id, slugify, Align, Side};

const ITEM_CLASSES: &str = "focus:bg-accent focus:text-accent-foreground hover:bg-accent relative flex cursor-default items-center gap-2 rounded-sm px-2 py-1.5 text-sm outline-hidden select-none aria-disabled:pointer-events-none aria-disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:shrink-0";
const INDICATOR_CLASSES: &str = "pointer-events-none absolute left-2 flex size-3.5 items-center justify-center";
const PANEL_CLASSES: &str = "bg-popover text-popover-foreground min-w-[8rem] overflow-hidden rounded-md border p-1 shadow-md";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// Sent with the `select` action
    pub value: String,
    pub shortcut: Option<String>,
    /// Render as a link instead of a `select` request
    pub href: Option<String>,
    pub disabled: bool,
    pub destructive: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_shortcut(mut self, keys: impl Into<String>) -> Self {
        self.shortcut = Some(keys.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCheckbox {
    pub name: String,
    pub label: String,
    pub shortcut: Option<String>,
    pub disabled: bool,
}

impl MenuCheckbox {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuRadioGroup {
    pub group: String,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
}

impl MenuRadioGroup {
    pub fn new<V: Into<String>, L: Into<String>>(group: impl Into<String>, options: impl IntoIterator<Item = (V, L)>) -> Self {
        Self {
            group: group.into(),
            options: options.into_iter().map(|(v, l)| (v.into(), l.into())).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSub {
    pub name: String,
    pub label: String,
    pub entries: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuItem),
    Checkbox(MenuCheckbox),
    RadioGroup(MenuRadioGroup),
    Label(String),
    Separator,
    Sub(MenuSub),
}

/// Per-session menu state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownState {
    pub open: bool,
    pub checkboxes: BTreeMap<String, bool>,
    pub radios: BTreeMap<String, String>,
    pub open_subs: BTreeSet<String>,
}

impl DropdownState {
    pub fn checked(&self, name: &str) -> bool {
        self.checkboxes.get(name).copied().unwrap_or(false)
    }

    pub fn radio(&self, group: &str) -> Option<&str> {
        self.radios.get(group).map(String::as_str)
    }

    /// `{name, checked}`
    pub fn apply_check(&mut self, req: &Request) -> Result<(), HandlerError> {
        let name = req.require("name")?.to_string();
        let checked = req.bool_field("checked")?;
        self.checkboxes.insert(name, checked);
        Ok(())
    }

    /// `{group, value}`
    pub fn apply_radio(&mut self, req: &Request) -> Result<(), HandlerError> {
        let group = req.require("group")?.to_string();
        let value = req.require("value")?.to_string();
        self.radios.insert(group, value);
        Ok(())
    }

    /// `{sub, open}`
    pub fn apply_sub(&mut self, req: &Request) -> Result<(), HandlerError> {
        let sub = req.require("sub")?.to_string();
        if req.bool_field("open")? {
            self.open_subs.insert(sub);
        } else {
            self.open_subs.remove(&sub);
        }
        Ok(())
    }

    /// `{value}`; closes the menu
    pub fn apply_select(&mut self, req: &Request) -> Result<(), HandlerError> {
        req.require("value")?;
        self.set_open(false);
        Ok(())
    }
}

impl Disclosure for DropdownState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.open_subs.clear();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownProps {
    pub id: Option<String>,
    /// Extra classes for the menu panel
    pub class: String,
    pub side: Side,
    pub align: Align,
    pub state: DropdownState,
}

/// Static menu
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(props: DropdownProps, trigger: impl IntoIterator<Item = Node>, entries: &[MenuEntry]) -> Node {
    let id = resolve_id(props.id.as_deref(), "dropdown", "");
    interactive(props, &InteractiveBinding::new(id), trigger, entries)
}

pub fn interactive(
    props: DropdownProps,
    binding: &InteractiveBinding,
    trigger: impl IntoIterator<Item = Node>,
    entries: &[MenuEntry],
) -> Node {
    let open = props.state.open;
    let trigger_id = binding.part_id("trigger");
    let content_id = binding.part_id("content");
    binding.root(open_state(open), [
        data_slot("dropdown-menu"),
        class("relative inline-block text-left"),
        button_tag([
            type_("button"),
            id(trigger_id.clone()),
            data_slot("dropdown-menu-trigger"),
            data_state(open_state(open)),
            aria("haspopup", "menu"),
            aria("expanded", bool_str(open)),
            if_(open, aria("controls", content_id.as_str())),
            class(button::classes(ButtonVariant::Outline, ButtonSize::Default, "")),
            binding.transition_request(!open),
            group(trigger),
        ]),
        if_with(open, || {
            div([
                id(content_id.clone()),
                role("menu"),
                aria("orientation", "vertical"),
                aria("labelledby", trigger_id.as_str()),
                data_slot("dropdown-menu-content"),
                data_state("open"),
                data_side(props.side.as_str()),
                data_align(props.align.as_str()),
                tabindex(-1),
                class(placement(props.side, props.align, &cn([PANEL_CLASSES, props.class.as_str()]))),
                render_entries(binding, &props.state, entries),
            ])
        }),
    ])
}

fn render_entries(binding: &InteractiveBinding, state: &DropdownState, entries: &[MenuEntry]) -> Node {
    map(entries, |entry| match entry {
        MenuEntry::Item(item) => render_item(binding, item),
        MenuEntry::Checkbox(checkbox) => render_checkbox(binding, state, checkbox),
        MenuEntry::RadioGroup(radio) => render_radio_group(binding, state, radio),
        MenuEntry::Label(label) => div([
            data_slot("dropdown-menu-label"),
            class("px-2 py-1.5 text-sm font-medium"),
            text(label.as_str()),
        ]),
        MenuEntry::Separator => div([
            role("separator"),
            data_slot("dropdown-menu-separator"),
            class("bg-border -mx-1 my-1 h-px"),
        ]),
        MenuEntry::Sub(sub) => render_sub(binding, state, sub),
    })
}

fn action_request(binding: &InteractiveBinding, action: &str, payload: Payload, enabled: bool) -> Node {
    match binding.action(action) {
        Some(endpoint) if enabled => binding.request(endpoint, &payload),
        _ => Node::Nil,
    }
}

/// Keyboard hint shown at the end of an item
pub fn shortcut(keys: &str) -> Node {
    span([
        data_slot("dropdown-menu-shortcut"),
        class("text-muted-foreground ml-auto text-xs tracking-widest"),
        text(keys),
    ])
}

fn render_item(binding: &InteractiveBinding, item: &MenuItem) -> Node {
    let common = group([
        role("menuitem"),
        tabindex(-1),
        data_slot("dropdown-menu-item"),
        if_(!item.value.is_empty(), data_value(item.value.as_str())),
        if_(item.destructive, data("variant", "destructive")),
        if_(item.disabled, aria("disabled", "true")),
        class(cn([
            ITEM_CLASSES,
            if item.destructive { "text-destructive" } else { "" },
        ])),
        text(item.label.as_str()),
        item.shortcut.as_deref().map(shortcut).into(),
    ]);
    match &item.href {
        Some(url) if !item.disabled => a([href(url.as_str()), common]),
        _ => div([
            common,
            action_request(
                binding,
                "select",
                Payload::new().with("value", item.value.as_str()),
                !item.disabled,
            ),
        ]),
    }
}

fn render_checkbox(binding: &InteractiveBinding, state: &DropdownState, checkbox: &MenuCheckbox) -> Node {
    let checked = state.checked(&checkbox.name);
    div([
        role("menuitemcheckbox"),
        aria("checked", bool_str(checked)),
        data_state(checked_state(checked)),
        data_value(checkbox.name.as_str()),
        tabindex(-1),
        data_slot("dropdown-menu-checkbox-item"),
        if_(checkbox.disabled, aria("disabled", "true")),
        class(cn([ITEM_CLASSES, "py-1.5 pr-2 pl-8"])),
        action_request(
            binding,
            "check",
            Payload::new()
                .with("name", checkbox.name.as_str())
                .with("checked", bool_str(!checked)),
            !checkbox.disabled,
        ),
        span([class(INDICATOR_CLASSES), if_(checked, icons::check(""))]),
        text(checkbox.label.as_str()),
        checkbox.shortcut.as_deref().map(shortcut).into(),
    ])
}

fn render_radio_group(binding: &InteractiveBinding, state: &DropdownState, radio: &MenuRadioGroup) -> Node {
    let chosen = state.radio(&radio.group);
    div([
        role("group"),
        data_slot("dropdown-menu-radio-group"),
        data("group", radio.group.as_str()),
        map(&radio.options, |(value, label)| {
            let checked = chosen == Some(value.as_str());
            div([
                role("menuitemradio"),
                aria("checked", bool_str(checked)),
                data_state(checked_state(checked)),
                data_value(value.as_str()),
                tabindex(-1),
                data_slot("dropdown-menu-radio-item"),
                class(cn([ITEM_CLASSES, "py-1.5 pr-2 pl-8"])),
                action_request(
                    binding,
                    "radio",
                    Payload::new().with("group", radio.group.as_str()).with("value", value.as_str()),
                    !checked,
                ),
                span([class(INDICATOR_CLASSES), if_(checked, icons::circle_dot("size-2 fill-current"))]),
                text(label.as_str()),
            ])
        }),
    ])
}

fn render_sub(binding: &InteractiveBinding, state: &DropdownState, sub: &MenuSub) -> Node {
    let open = state.open_subs.contains(&sub.name);
    let content_id = binding.part_id(&format!("sub-{}", slugify(&sub.name)));
    div([
        data_slot("dropdown-menu-sub"),
        data_state(open_state(open)),
        class("relative"),
        div([
            role("menuitem"),
            tabindex(-1),
            aria("haspopup", "menu"),
            aria("expanded", bool_str(open)),
            if_(open, aria("controls", content_id.as_str())),
            data_slot("dropdown-menu-sub-trigger"),
            data_state(open_state(open)),
            class(ITEM_CLASSES),
            action_request(
                binding,
                "sub",
                Payload::new().with("sub", sub.name.as_str()).with("open", bool_str(!open)),
                true,
            ),
            text(sub.label.as_str()),
            icons::chevron_right("ml-auto"),
        ]),
        if_with(open, || {
            div([
                id(content_id.clone()),
                role("menu"),
                data_slot("dropdown-menu-sub-content"),
                data_state("open"),
                class(cn([PANEL_CLASSES, "absolute left-full top-0 ml-1 z-50"])),
                render_entries(binding, state, &sub.entries),
            ])
        }),
    ])
}

/// Wire open/close/toggle plus the `check`, `radio`, `sub` and `select`
/// actions present on the binding
pub fn register<S, V>(router: &mut Router, binding: &InteractiveBinding, store: S, view: V)
where
    S: StateStore<DropdownState>,
    V: Fn(&DropdownState) -> Node + Send + Sync + 'static,
{
    let view = Arc::new(view);
    {
        let view = view.clone();
        register_transitions(router, binding, store.clone(), move |state: &DropdownState| view(state));
    }
    let actions: [(&str, fn(&mut DropdownState, &Request) -> Result<(), HandlerError>); 4] = [
        ("check", DropdownState::apply_check),
        ("radio", DropdownState::apply_radio),
        ("sub", DropdownState::apply_sub),
        ("select", DropdownState::apply_select),
    ];
    for (name, apply) in actions {
        if let Some(endpoint) = binding.action(name) {
            let view = view.clone();
            router.endpoint(endpoint, stateful(store.clone(), apply, move |state: &DropdownState| view(state)));
        }
    }
}
