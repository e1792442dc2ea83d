//! Combobox
//!
//! Button trigger opening a searchable option list. Single mode replaces the
//! value and closes; multiple mode toggles membership and stays open.
//!
//! Binding actions: `search` (`{query}`) and `select` (`{value}`). Open,
//! close and toggle come from the binding's transition endpoints.

use std::sync::Arc;

use hxui_dom::attributes::{aria, autocomplete, bool_str, class, data_slot, data_state, data_value, id, name, placeholder, role, type_, value};
use hxui_dom::elements::{button as button_tag, div, input, span};
use hxui_dom::{cn, if_, if_with, map, text, Node};
use hxui_htmx::{stateful, HandlerError, InteractiveBinding, Payload, Request, Router, StateStore, Trigger};
use serde::{Deserialize, Serialize};

use crate::button::{self, ButtonSize, ButtonVariant};
use crate::disclosure::{register_transitions, Disclosure};
use crate::icons;
use crate::popover::placement;
use crate::props::{checked_state, open_state, resolve_id, Align, Side};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboboxOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl ComboboxOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.label.to_lowercase().contains(needle) || self.value.to_lowercase().contains(needle)
    }
}

/// Options matching `query`, case-insensitively over label and value
pub fn filter<'a>(options: &'a [ComboboxOption], query: &str) -> Vec<&'a ComboboxOption> {
    let needle = query.trim().to_lowercase();
    options.iter().filter(|option| option.matches(&needle)).collect()
}

/// Per-session combobox state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboboxState {
    pub open: bool,
    pub values: Vec<String>,
    pub query: String,
    pub multiple: bool,
}

impl ComboboxState {
    pub fn is_selected(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// `{query}`
    pub fn apply_search(&mut self, req: &Request) -> Result<(), HandlerError> {
        self.query = req.field("query").unwrap_or_default().to_string();
        Ok(())
    }

    /// `{value}`; must name an enabled option
    pub fn apply_select(&mut self, req: &Request, options: &[ComboboxOption]) -> Result<(), HandlerError> {
        let value = req.require("value")?;
        if !options.iter().any(|o| o.value == value && !o.disabled) {
            return Err(HandlerError::InvalidField {
                name: "value".to_string(),
                value: value.to_string(),
                reason: "no such option".to_string(),
            });
        }
        self.select(value);
        Ok(())
    }

    /// Single mode: replace (or clear when re-selected) and close.
    /// Multiple mode: toggle membership and stay open.
    pub fn select(&mut self, value: &str) {
        let was_selected = self.is_selected(value);
        if self.multiple {
            if was_selected {
                self.values.retain(|v| v != value);
            } else {
                self.values.push(value.to_string());
            }
        } else {
            self.values = if was_selected { Vec::new() } else { vec![value.to_string()] };
            self.set_open(false);
        }
    }
}

impl Disclosure for ComboboxState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.query.clear();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxProps {
    pub id: Option<String>,
    /// Extra classes for the trigger
    pub class: String,
    pub state: ComboboxState,
    pub placeholder: String,
    pub search_placeholder: String,
    pub empty_text: String,
    /// Form field name; one hidden input per selected value
    pub name: Option<String>,
}

impl Default for ComboboxProps {
    fn default() -> Self {
        Self {
            id: None,
            class: String::new(),
            state: ComboboxState::default(),
            placeholder: "Select an option...".to_string(),
            search_placeholder: "Search...".to_string(),
            empty_text: "No option found.".to_string(),
            name: None,
        }
    }
}

/// Static combobox
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(props: ComboboxProps, options: &[ComboboxOption]) -> Node {
    let id = resolve_id(props.id.as_deref(), "combobox", props.name.as_deref().unwrap_or(""));
    interactive(props, &InteractiveBinding::new(id), options)
}

pub fn interactive(props: ComboboxProps, binding: &InteractiveBinding, options: &[ComboboxOption]) -> Node {
    let state = &props.state;
    let open = state.open;
    let list_id = binding.part_id("list");
    let labels: Vec<&str> = options
        .iter()
        .filter(|o| state.is_selected(&o.value))
        .map(|o| o.label.as_str())
        .collect();
    let display = if labels.is_empty() {
        span([class("text-muted-foreground"), text(props.placeholder.as_str())])
    } else {
        span([class("truncate"), text(labels.join(", "))])
    };

    binding.root(open_state(open), [
        data_slot("combobox"),
        class("relative inline-block"),
        props.name.as_ref().map(|field| {
            map(&state.values, |v| input([type_("hidden"), name(field.clone()), value(v.as_str())]))
        }).into(),
        button_tag([
            type_("button"),
            role("combobox"),
            aria("expanded", bool_str(open)),
            aria("controls", list_id.as_str()),
            aria("haspopup", "listbox"),
            data_slot("combobox-trigger"),
            data_state(open_state(open)),
            class(button::classes(ButtonVariant::Outline, ButtonSize::Default, &cn(["w-[200px] justify-between", props.class.as_str()]))),
            binding.transition_request(!open),
            display,
            icons::chevrons_up_down("opacity-50"),
        ]),
        if_with(open, || {
            let matching = filter(options, &state.query);
            let search = match binding.action("search") {
                Some(endpoint) => binding.request_on(endpoint, Some(&Trigger::search()), &Payload::new()),
                None => Node::Nil,
            };
            div([
                data_slot("combobox-content"),
                class(placement(Side::Bottom, Align::Start, "bg-popover text-popover-foreground w-[200px] rounded-md border p-0 shadow-md")),
                div([
                    class("flex h-9 items-center gap-2 border-b px-3"),
                    icons::search("shrink-0 opacity-50"),
                    input([
                        type_("text"),
                        name("query"),
                        value(state.query.as_str()),
                        placeholder(props.search_placeholder.as_str()),
                        autocomplete("off"),
                        aria("controls", list_id.as_str()),
                        data_slot("combobox-input"),
                        class("placeholder:text-muted-foreground flex h-10 w-full bg-transparent py-3 text-sm outline-hidden"),
                        search,
                    ]),
                ]),
                div([
                    id(list_id.clone()),
                    role("listbox"),
                    if_(state.multiple, aria("multiselectable", "true")),
                    data_slot("combobox-list"),
                    class("max-h-[300px] overflow-y-auto p-1"),
                    if_(
                        matching.is_empty(),
                        div([data_slot("combobox-empty"), class("py-6 text-center text-sm"), text(props.empty_text.as_str())]),
                    ),
                    map(matching, |option| render_option(binding, state, option)),
                ]),
            ])
        }),
    ])
}

fn render_option(binding: &InteractiveBinding, state: &ComboboxState, option: &ComboboxOption) -> Node {
    let selected = state.is_selected(&option.value);
    let request = match binding.action("select") {
        Some(endpoint) if !option.disabled => binding.request(endpoint, &Payload::new().with("value", option.value.as_str())),
        _ => Node::Nil,
    };
    div([
        role("option"),
        aria("selected", bool_str(selected)),
        if_(option.disabled, aria("disabled", "true")),
        data_state(checked_state(selected)),
        data_value(option.value.as_str()),
        data_slot("combobox-option"),
        class("hover:bg-accent relative flex cursor-default items-center gap-2 rounded-sm px-2 py-1.5 text-sm outline-hidden select-none aria-disabled:opacity-50"),
        request,
        icons::check(if selected { "opacity-100" } else { "opacity-0" }),
        text(option.label.as_str()),
    ])
}

/// Wire open/close/toggle plus the `search` and `select` actions
pub fn register<S, V>(router: &mut Router, binding: &InteractiveBinding, options: Vec<ComboboxOption>, store: S, view: V)
where
    S: StateStore<ComboboxState>,
    V: Fn(&ComboboxState) -> Node + Send + Sync + 'static,
{
    let view = Arc::new(view);
    {
        let view = view.clone();
        register_transitions(router, binding, store.clone(), move |state: &ComboboxState| view(state));
    }
    if let Some(endpoint) = binding.action("search") {
        let view = view.clone();
        router.endpoint(
            endpoint,
            stateful(store.clone(), ComboboxState::apply_search, move |state: &ComboboxState| view(state)),
        );
    }
    if let Some(endpoint) = binding.action("select") {
        let options = Arc::new(options);
        router.endpoint(
            endpoint,
            stateful(
                store,
                move |state: &mut ComboboxState, req| state.apply_select(req, &options),
                move |state: &ComboboxState| view(state),
            ),
        );
    }
}
