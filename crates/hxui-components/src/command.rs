//! Command palette
//!
//! Search input over grouped items. Filtering happens on the server: the
//! input sends `{query}` through the binding's `search` action with a
//! debounced `keyup changed delay:300ms` trigger.
//!
//! Binding actions: `search` (`{query}`, resets the selection), `move`
//! (`{direction: up|down}`, wraps) and `select` (`{value}`).

use std::sync::Arc;

use hxui_dom::attributes::{aria, autocomplete, class, data, data_slot, data_value, id, name, placeholder, role, type_, value};
use hxui_dom::elements::{div, input, span};
use hxui_dom::{cn, group, if_, text, Node};
use hxui_htmx::{stateful, HandlerError, InteractiveBinding, Payload, Request, Router, StateStore, Trigger};
use serde::{Deserialize, Serialize};

use crate::icons;
use crate::props::{resolve_id, slugify};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandItem {
    pub label: String,
    pub value: String,
    pub description: String,
    pub category: String,
    pub shortcut: Option<String>,
    pub disabled: bool,
}

impl CommandItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_shortcut(mut self, keys: impl Into<String>) -> Self {
        self.shortcut = Some(keys.into());
        self
    }

    /// Case-insensitive match over label, value, description and category.
    /// `needle` must already be lower-case; an empty needle matches everything.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || [&self.label, &self.value, &self.description, &self.category]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandGroup {
    pub heading: String,
    pub items: Vec<CommandItem>,
}

impl CommandGroup {
    pub fn new(heading: impl Into<String>, items: Vec<CommandItem>) -> Self {
        Self {
            heading: heading.into(),
            items,
        }
    }
}

/// Groups left after filtering; groups without matches are dropped
pub fn filter<'a>(groups: &'a [CommandGroup], query: &str) -> Vec<(&'a str, Vec<&'a CommandItem>)> {
    let needle = query.trim().to_lowercase();
    groups
        .iter()
        .filter_map(|group| {
            let items: Vec<_> = group.items.iter().filter(|item| item.matches(&needle)).collect();
            (!items.is_empty()).then_some((group.heading.as_str(), items))
        })
        .collect()
}

/// Number of items matching `query`
pub fn match_count(groups: &[CommandGroup], query: &str) -> usize {
    filter(groups, query).iter().map(|(_, items)| items.len()).sum()
}

/// Per-session palette state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandState {
    pub query: String,
    pub selected: usize,
    /// Value of the last chosen item
    pub chosen: Option<String>,
}

impl CommandState {
    /// `{query}`; resets the selection to the first match
    pub fn apply_search(&mut self, req: &Request) -> Result<(), HandlerError> {
        self.query = req.field("query").unwrap_or_default().to_string();
        self.selected = 0;
        Ok(())
    }

    /// `{direction}`; wraps around the current matches
    pub fn apply_move(&mut self, req: &Request, groups: &[CommandGroup]) -> Result<(), HandlerError> {
        let direction = req.require("direction")?;
        let count = match_count(groups, &self.query);
        if count == 0 {
            self.selected = 0;
            return Ok(());
        }
        let current = self.selected.min(count - 1);
        self.selected = match direction {
            "down" => (current + 1) % count,
            "up" => (current + count - 1) % count,
            other => {
                return Err(HandlerError::InvalidField {
                    name: "direction".to_string(),
                    value: other.to_string(),
                    reason: "expected up or down".to_string(),
                });
            }
        };
        Ok(())
    }

    /// `{value}`; must name a currently listed, enabled item
    pub fn apply_select(&mut self, req: &Request, groups: &[CommandGroup]) -> Result<(), HandlerError> {
        let value = req.require("value")?;
        let position = filter(groups, &self.query)
            .into_iter()
            .flat_map(|(_, items)| items)
            .position(|item| item.value == value && !item.disabled);
        match position {
            Some(index) => {
                self.selected = index;
                self.chosen = Some(value.to_string());
                Ok(())
            }
            None => Err(HandlerError::InvalidField {
                name: "value".to_string(),
                value: value.to_string(),
                reason: "no such command".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandProps {
    pub id: Option<String>,
    pub class: String,
    pub query: String,
    /// Index into the filtered items; clamped to the last match
    pub selected: usize,
    pub placeholder: String,
    pub empty_text: String,
}

impl Default for CommandProps {
    fn default() -> Self {
        Self {
            id: None,
            class: String::new(),
            query: String::new(),
            selected: 0,
            placeholder: "Type a command or search...".to_string(),
            empty_text: "No results found.".to_string(),
        }
    }
}

impl CommandProps {
    /// Apply session state on top of these props
    pub fn with_state(&self, state: &CommandState) -> Self {
        Self {
            query: state.query.clone(),
            selected: state.selected,
            ..self.clone()
        }
    }
}

/// Static palette
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(props: CommandProps, groups: &[CommandGroup]) -> Node {
    let id = resolve_id(props.id.as_deref(), "command", "");
    interactive(props, &InteractiveBinding::new(id), groups)
}

pub fn interactive(props: CommandProps, binding: &InteractiveBinding, groups: &[CommandGroup]) -> Node {
    let list_id = binding.part_id("list");
    let filtered = filter(groups, &props.query);
    let count: usize = filtered.iter().map(|(_, items)| items.len()).sum();
    let selected = props.selected.min(count.saturating_sub(1));

    let search = match binding.action("search") {
        Some(endpoint) => binding.request_on(endpoint, Some(&Trigger::search()), &Payload::new()),
        None => Node::Nil,
    };

    let mut index = 0;
    let mut rendered_groups = Vec::with_capacity(filtered.len());
    for (heading, items) in &filtered {
        let heading_id = binding.part_id(&format!("group-{}", slugify(heading)));
        let mut options = Vec::with_capacity(items.len());
        for item in items {
            let is_selected = index == selected;
            options.push(render_item(binding, item, index, is_selected));
            index += 1;
        }
        rendered_groups.push(div([
            role("group"),
            data_slot("command-group"),
            aria("labelledby", heading_id.as_str()),
            class("text-foreground overflow-hidden p-1"),
            div([
                id(heading_id.clone()),
                data_slot("command-group-heading"),
                class("text-muted-foreground px-2 py-1.5 text-xs font-medium"),
                text(*heading),
            ]),
            group(options),
        ]));
    }

    binding.root(if count == 0 { "empty" } else { "results" }, [
        data_slot("command"),
        class(cn([
            "bg-popover text-popover-foreground flex h-full w-full flex-col overflow-hidden rounded-md",
            props.class.as_str(),
        ])),
        div([
            data_slot("command-input-wrapper"),
            class("flex h-9 items-center gap-2 border-b px-3"),
            icons::search("shrink-0 opacity-50"),
            input([
                type_("text"),
                id(binding.part_id("input")),
                name("query"),
                value(props.query.as_str()),
                placeholder(props.placeholder.as_str()),
                role("combobox"),
                aria("expanded", "true"),
                aria("controls", list_id.as_str()),
                aria("autocomplete", "list"),
                if_(count > 0, aria("activedescendant", binding.part_id(&format!("option-{selected}")))),
                autocomplete("off"),
                data_slot("command-input"),
                class("placeholder:text-muted-foreground flex h-10 w-full rounded-md bg-transparent py-3 text-sm outline-hidden"),
                search,
            ]),
        ]),
        div([
            id(list_id.clone()),
            role("listbox"),
            data_slot("command-list"),
            class("max-h-[300px] scroll-py-1 overflow-x-hidden overflow-y-auto"),
            if_(
                count == 0,
                div([
                    data_slot("command-empty"),
                    role("presentation"),
                    class("py-6 text-center text-sm"),
                    text(props.empty_text.as_str()),
                ]),
            ),
            group(rendered_groups),
        ]),
    ])
}

fn render_item(binding: &InteractiveBinding, item: &CommandItem, index: usize, selected: bool) -> Node {
    let request = match binding.action("select") {
        Some(endpoint) if !item.disabled => binding.request(endpoint, &Payload::new().with("value", item.value.as_str())),
        _ => Node::Nil,
    };
    div([
        id(binding.part_id(&format!("option-{index}"))),
        role("option"),
        aria("selected", if selected { "true" } else { "false" }),
        if_(item.disabled, aria("disabled", "true")),
        if_(selected, data("selected", "true")),
        data_value(item.value.as_str()),
        data_slot("command-item"),
        class("data-[selected=true]:bg-accent data-[selected=true]:text-accent-foreground relative flex cursor-default items-center gap-2 rounded-sm px-2 py-1.5 text-sm outline-hidden select-none aria-disabled:pointer-events-none aria-disabled:opacity-50"),
        request,
        span([text(item.label.as_str())]),
        if_(
            !item.description.is_empty(),
            span([class("text-muted-foreground text-xs"), text(item.description.as_str())]),
        ),
        item.shortcut.as_deref().map(|keys| {
            span([
                data_slot("command-shortcut"),
                class("text-muted-foreground ml-auto text-xs tracking-widest"),
                text(keys),
            ])
        })
        .into(),
    ])
}

/// Wire the `search`, `move` and `select` actions present on the binding
pub fn register<S, V>(router: &mut Router, binding: &InteractiveBinding, groups: Vec<CommandGroup>, store: S, view: V)
where
    S: StateStore<CommandState>,
    V: Fn(&CommandState) -> Node + Send + Sync + 'static,
{
    let view = Arc::new(view);
    let groups = Arc::new(groups);
    if let Some(endpoint) = binding.action("search") {
        let view = view.clone();
        router.endpoint(
            endpoint,
            stateful(store.clone(), CommandState::apply_search, move |state: &CommandState| view(state)),
        );
    }
    if let Some(endpoint) = binding.action("move") {
        let (view, groups) = (view.clone(), groups.clone());
        router.endpoint(
            endpoint,
            stateful(
                store.clone(),
                move |state: &mut CommandState, req| state.apply_move(req, &groups),
                move |state: &CommandState| view(state),
            ),
        );
    }
    if let Some(endpoint) = binding.action("select") {
        router.endpoint(
            endpoint,
            stateful(
                store,
                move |state: &mut CommandState, req| state.apply_select(req, &groups),
                move |state: &CommandState| view(state),
            ),
        );
    }
}
