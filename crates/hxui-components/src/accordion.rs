//! Accordion
//!
//! Stacked disclosure items. `single` keeps at most one item open;
//! `multiple` toggles items independently. A single accordion that is not
//! `collapsible` never closes its open item.

use std::sync::Arc;

use hxui_dom::attributes::{aria, bool_str, class, data, data_slot, data_state, disabled, hidden, id, role, type_};
use hxui_dom::elements::{button as button_tag, div, h3};
use hxui_dom::{group, if_, map, Node};
use hxui_htmx::{stateful, HandlerError, InteractiveBinding, Payload, Request, Router, StateStore};
use serde::{Deserialize, Serialize};

use crate::icons;
use crate::props::{open_state, resolve_id, slugify};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccordionType {
    #[default]
    Single,
    Multiple,
}

impl AccordionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

/// One item; `trigger` and `content` are separate child lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionItem {
    pub value: String,
    pub trigger: Vec<Node>,
    pub content: Vec<Node>,
    pub disabled: bool,
}

impl AccordionItem {
    pub fn new(value: impl Into<String>, trigger: Vec<Node>, content: Vec<Node>) -> Self {
        Self {
            value: value.into(),
            trigger,
            content,
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionProps {
    pub id: Option<String>,
    pub class: String,
    pub type_: AccordionType,
    pub collapsible: bool,
    /// Items open on first render
    pub default_value: Vec<String>,
    /// Items open now; `None` falls back to `default_value`
    pub value: Option<Vec<String>>,
}

/// Per-session accordion state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionState {
    pub open: Vec<String>,
}

impl AccordionState {
    pub fn new(open: Vec<String>) -> Self {
        Self { open }
    }

    pub fn is_open(&self, item: &str) -> bool {
        self.open.iter().any(|v| v == item)
    }

    /// Toggle `item` under the accordion's rules
    pub fn toggle(&mut self, item: &str, type_: AccordionType, collapsible: bool) {
        let was_open = self.is_open(item);
        match type_ {
            AccordionType::Single => {
                if !was_open {
                    self.open = vec![item.to_string()];
                } else if collapsible {
                    self.open.clear();
                }
            }
            AccordionType::Multiple => {
                if was_open {
                    self.open.retain(|v| v != item);
                } else {
                    self.open.push(item.to_string());
                }
            }
        }
    }

    /// Apply a `{item}` delta; `items` lists the values the accordion renders
    pub fn apply(
        &mut self,
        req: &Request,
        items: &[String],
        type_: AccordionType,
        collapsible: bool,
    ) -> Result<(), HandlerError> {
        let item = req.require("item")?;
        if !items.iter().any(|v| v == item) {
            return Err(HandlerError::InvalidField {
                name: "item".to_string(),
                value: item.to_string(),
                reason: "unknown accordion item".to_string(),
            });
        }
        self.toggle(item, type_, collapsible);
        Ok(())
    }
}

/// Static accordion with `default_value` (or `value`) open
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(props: AccordionProps, items: Vec<AccordionItem>) -> Node {
    let id = resolve_id(props.id.as_deref(), "accordion", "");
    interactive(props, &InteractiveBinding::new(id), items)
}

/// Accordion whose triggers post `{item}` to the binding's toggle endpoint
pub fn interactive(props: AccordionProps, binding: &InteractiveBinding, items: Vec<AccordionItem>) -> Node {
    let open = props.value.clone().unwrap_or_else(|| props.default_value.clone());
    let state = AccordionState::new(open);
    binding.root(open_state(!state.open.is_empty()), [
        data_slot("accordion"),
        data("accordion-type", props.type_.as_str()),
        data("accordion-collapsible", bool_str(props.collapsible)),
        if_(!props.default_value.is_empty(), data("accordion-default", props.default_value.join(","))),
        if_(!props.class.is_empty(), class(props.class.as_str())),
        map(items, |item| render_item(binding, &state, &props, item)),
    ])
}

fn render_item(binding: &InteractiveBinding, state: &AccordionState, props: &AccordionProps, item: AccordionItem) -> Node {
    let open = state.is_open(&item.value);
    let slug = slugify(&item.value);
    let trigger_id = binding.part_id(&format!("trigger-{slug}"));
    let content_id = binding.part_id(&format!("content-{slug}"));
    // A lone open item of a non-collapsible single accordion cannot be closed
    let locked = open && props.type_ == AccordionType::Single && !props.collapsible;
    let request = match &binding.toggle {
        Some(endpoint) if !item.disabled && !locked => {
            binding.request(endpoint, &Payload::new().with("item", item.value.as_str()))
        }
        _ => Node::Nil,
    };

    div([
        data_slot("accordion-item"),
        data("accordion-value", item.value.as_str()),
        data_state(open_state(open)),
        class("border-b last:border-b-0"),
        h3([
            class("flex"),
            button_tag([
                type_("button"),
                id(trigger_id.clone()),
                data_slot("accordion-trigger"),
                data_state(open_state(open)),
                aria("expanded", bool_str(open)),
                aria("controls", content_id.as_str()),
                if_(item.disabled, disabled()),
                if_(locked, aria("disabled", "true")),
                class("focus-visible:border-ring focus-visible:ring-ring/50 flex flex-1 items-start justify-between gap-4 rounded-md py-4 text-left text-sm font-medium transition-all outline-none hover:underline focus-visible:ring-[3px] disabled:pointer-events-none disabled:opacity-50 [&[data-state=open]>svg]:rotate-180"),
                request,
                group(item.trigger),
                icons::chevron_down("text-muted-foreground pointer-events-none shrink-0 translate-y-0.5 transition-transform duration-200"),
            ]),
        ]),
        div([
            id(content_id),
            role("region"),
            aria("labelledby", trigger_id),
            data_slot("accordion-content"),
            data_state(open_state(open)),
            if_(!open, hidden()),
            class("overflow-hidden text-sm pt-0 pb-4"),
            group(item.content),
        ]),
    ])
}

/// Wire the toggle endpoint. `items` are the rendered item values; `view`
/// renders the accordion for the session's state.
pub fn register<S, V>(
    router: &mut Router,
    binding: &InteractiveBinding,
    props: &AccordionProps,
    items: Vec<String>,
    store: S,
    view: V,
) where
    S: StateStore<AccordionState>,
    V: Fn(&AccordionState) -> Node + Send + Sync + 'static,
{
    let Some(endpoint) = &binding.toggle else {
        tracing::warn!("Accordion {} has no toggle endpoint", binding.id());
        return;
    };
    let items = Arc::new(items);
    let (type_, collapsible) = (props.type_, props.collapsible);
    router.endpoint(
        endpoint,
        stateful(
            store,
            move |state: &mut AccordionState, req| state.apply(req, &items, type_, collapsible),
            view,
        ),
    );
}
