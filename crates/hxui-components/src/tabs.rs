//! Tabs
//!
//! A tab list and one panel per tab. Inactive panels stay in the markup but
//! are `hidden`. The root's `data-state` carries the selected value.

use std::sync::Arc;

use hxui_dom::attributes::{aria, bool_str, class, data, data_slot, data_state, data_value, disabled, hidden, id, role, tabindex, type_};
use hxui_dom::elements::{button as button_tag, div};
use hxui_dom::{cn, group, if_, Node};
use hxui_htmx::{stateful, HandlerError, InteractiveBinding, Payload, Request, Router, StateStore};
use serde::{Deserialize, Serialize};

use crate::props::{active_state, resolve_id, slugify};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabItem {
    pub value: String,
    pub label: Vec<Node>,
    pub content: Vec<Node>,
    pub disabled: bool,
}

impl TabItem {
    pub fn new(value: impl Into<String>, label: Vec<Node>, content: Vec<Node>) -> Self {
        Self {
            value: value.into(),
            label,
            content,
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabsProps {
    pub id: Option<String>,
    pub class: String,
    pub default_value: Option<String>,
    /// Selected tab; falls back to `default_value`, then the first tab
    pub value: Option<String>,
}

/// Per-session tabs state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsState {
    pub value: String,
}

impl TabsState {
    /// Apply a `{value}` delta; values not in `values` are rejected
    pub fn apply(&mut self, req: &Request, values: &[String]) -> Result<(), HandlerError> {
        let value = req.require("value")?;
        if !values.iter().any(|v| v == value) {
            return Err(HandlerError::InvalidField {
                name: "value".to_string(),
                value: value.to_string(),
                reason: "unknown tab".to_string(),
            });
        }
        self.value = value.to_string();
        Ok(())
    }
}

/// Static tabs
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(props: TabsProps, items: Vec<TabItem>) -> Node {
    let id = resolve_id(props.id.as_deref(), "tabs", "");
    interactive(props, &InteractiveBinding::new(id), items)
}

/// Tabs whose triggers post `{value}` to the binding's `select` action
pub fn interactive(props: TabsProps, binding: &InteractiveBinding, items: Vec<TabItem>) -> Node {
    let selected = props
        .value
        .clone()
        .or_else(|| props.default_value.clone())
        .or_else(|| items.first().map(|item| item.value.clone()))
        .unwrap_or_default();

    let mut triggers = Vec::with_capacity(items.len());
    let mut panels = Vec::with_capacity(items.len());
    for item in items {
        let active = item.value == selected;
        let slug = slugify(&item.value);
        let trigger_id = binding.part_id(&format!("trigger-{slug}"));
        let content_id = binding.part_id(&format!("content-{slug}"));
        let request = match binding.action("select") {
            Some(endpoint) if !item.disabled && !active => {
                binding.request(endpoint, &Payload::new().with("value", item.value.as_str()))
            }
            _ => Node::Nil,
        };
        triggers.push(button_tag([
            type_("button"),
            role("tab"),
            id(trigger_id.clone()),
            aria("selected", bool_str(active)),
            aria("controls", content_id.as_str()),
            data_state(active_state(active)),
            data_value(item.value.as_str()),
            data_slot("tabs-trigger"),
            tabindex(if active { 0 } else { -1 }),
            if_(item.disabled, disabled()),
            class("data-[state=active]:bg-background text-foreground inline-flex h-[calc(100%-1px)] flex-1 items-center justify-center gap-1.5 rounded-md border border-transparent px-2 py-1 text-sm font-medium whitespace-nowrap transition-[color,box-shadow] disabled:pointer-events-none disabled:opacity-50 data-[state=active]:shadow-sm"),
            request,
            group(item.label),
        ]));
        panels.push(div([
            role("tabpanel"),
            id(content_id),
            aria("labelledby", trigger_id),
            data_state(active_state(active)),
            data_slot("tabs-content"),
            tabindex(0),
            if_(!active, hidden()),
            class("flex-1 outline-none"),
            group(item.content),
        ]));
    }

    binding.root(selected.as_str(), [
        data_slot("tabs"),
        data("orientation", "horizontal"),
        class(cn(["flex flex-col gap-2", props.class.as_str()])),
        div([
            role("tablist"),
            aria("orientation", "horizontal"),
            data_slot("tabs-list"),
            class("bg-muted text-muted-foreground inline-flex h-9 w-fit items-center justify-center rounded-lg p-[3px]"),
            group(triggers),
        ]),
        group(panels),
    ])
}

/// Wire the `select` action. `values` are the rendered tab values.
pub fn register<S, V>(router: &mut Router, binding: &InteractiveBinding, values: Vec<String>, store: S, view: V)
where
    S: StateStore<TabsState>,
    V: Fn(&TabsState) -> Node + Send + Sync + 'static,
{
    let Some(endpoint) = binding.action("select") else {
        tracing::warn!("Tabs {} has no select action", binding.id());
        return;
    };
    let values = Arc::new(values);
    router.endpoint(
        endpoint,
        stateful(store, move |state: &mut TabsState, req| state.apply(req, &values), view),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::{render_to_string, text};
    use hxui_htmx::Endpoint;

    fn items() -> Vec<TabItem> {
        vec![
            TabItem::new("account", vec![text("Account")], vec![text("Account panel")]),
            TabItem::new("password", vec![text("Password")], vec![text("Password panel")]),
        ]
    }

    #[test]
    fn test_first_tab_selected_by_default() {
        let html = render_to_string(&new(TabsProps::default(), items())).unwrap();
        assert!(html.starts_with(r#"<div id="tabs" data-state="account" data-slot="tabs""#));
        assert!(html.contains(r#"role="tab" id="tabs-trigger-account" aria-selected="true" aria-controls="tabs-content-account""#));
        assert!(html.contains(r#"aria-labelledby="tabs-trigger-password" data-state="inactive" data-slot="tabs-content" tabindex="0" hidden"#));
    }

    #[test]
    fn test_inactive_triggers_request_selection() {
        let binding = InteractiveBinding::new("settings").with_action("select", Endpoint::post("/settings/tab"));
        let props = TabsProps {
            value: Some("password".into()),
            ..Default::default()
        };
        let html = render_to_string(&interactive(props, &binding, items())).unwrap();
        assert_eq!(html.matches(r#"hx-post="/settings/tab""#).count(), 1);
        assert!(html.contains("{&quot;value&quot;:&quot;account&quot;}"));
    }

    #[test]
    fn test_unknown_value_rejected() {
        let mut state = TabsState { value: "account".into() };
        let values = vec!["account".to_string()];
        assert!(state.apply(&Request::post("/t", "value=billing"), &values).is_err());
        assert_eq!(state.value, "account");
        assert!(state.apply(&Request::post("/t", "value=account"), &values).is_ok());
    }
}
