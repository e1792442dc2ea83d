//! Collapsible
//!
//! A trigger that shows and hides one content region. `trigger` and `content`
//! are separate child lists.

use hxui_dom::attributes::{aria, bool_str, class, data_slot, data_state, disabled, id, type_};
use hxui_dom::elements::{button as button_tag, div};
use hxui_dom::{cn, group, if_, if_with, Node};
use hxui_htmx::{InteractiveBinding, Router, StateStore};

use crate::disclosure::{register_transitions, OpenState};
use crate::props::{open_state, resolve_id};

pub type CollapsibleState = OpenState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapsibleProps {
    pub id: Option<String>,
    pub class: String,
    pub open: bool,
    pub disabled: bool,
    /// Extra classes for the trigger button
    pub trigger_class: String,
}

/// Static collapsible
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(
    props: CollapsibleProps,
    trigger: impl IntoIterator<Item = Node>,
    content: impl IntoIterator<Item = Node>,
) -> Node {
    let id = resolve_id(props.id.as_deref(), "collapsible", "");
    interactive(props, &InteractiveBinding::new(id), trigger, content)
}

pub fn interactive(
    props: CollapsibleProps,
    binding: &InteractiveBinding,
    trigger: impl IntoIterator<Item = Node>,
    content: impl IntoIterator<Item = Node>,
) -> Node {
    let open = props.open;
    let state = open_state(open);
    let content_id = binding.part_id("content");
    binding.root(state, [
        data_slot("collapsible"),
        if_(!props.class.is_empty(), class(props.class.as_str())),
        button_tag([
            type_("button"),
            data_slot("collapsible-trigger"),
            data_state(state),
            aria("expanded", bool_str(open)),
            aria("controls", content_id.as_str()),
            if_(props.disabled, disabled()),
            class(cn(["flex w-full items-center justify-between gap-4", props.trigger_class.as_str()])),
            if_(!props.disabled, binding.transition_request(!open)),
            group(trigger),
        ]),
        if_with(open, || {
            div([
                id(content_id.clone()),
                data_slot("collapsible-content"),
                data_state("open"),
                group(content),
            ])
        }),
    ])
}

pub fn register<S, V>(router: &mut Router, binding: &InteractiveBinding, store: S, view: V)
where
    S: StateStore<CollapsibleState>,
    V: Fn(&CollapsibleState) -> Node + Send + Sync + 'static,
{
    register_transitions(router, binding, store, view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::{render_to_string, text};
    use hxui_htmx::Endpoint;

    #[test]
    fn test_toggle_wiring() {
        let binding = InteractiveBinding::new("repos").with_toggle(Endpoint::post("/repos/toggle"));
        let closed = render_to_string(&interactive(CollapsibleProps::default(), &binding, [text("Show")], [text("list")])).unwrap();
        assert!(closed.contains(r#"aria-expanded="false" aria-controls="repos-content""#));
        assert!(closed.contains("&quot;open&quot;:&quot;true&quot;"));
        assert!(!closed.contains("list"));

        let props = CollapsibleProps {
            open: true,
            ..Default::default()
        };
        let open = render_to_string(&interactive(props, &binding, [text("Hide")], [text("list")])).unwrap();
        assert!(open.contains("&quot;open&quot;:&quot;false&quot;"));
        assert!(open.contains(r#"<div id="repos-content" data-slot="collapsible-content" data-state="open">list</div>"#));
    }

    #[test]
    fn test_disabled_trigger_has_no_request() {
        let binding = InteractiveBinding::with_paths("c", "/c");
        let props = CollapsibleProps {
            disabled: true,
            ..Default::default()
        };
        let html = render_to_string(&interactive(props, &binding, [], [])).unwrap();
        assert!(html.contains(" disabled "));
        assert!(!html.contains("hx-get"));
    }
}
