//! Form controls: label, input, textarea, checkbox

use hxui_dom::attributes::{
    aria, bool_str, class, data_slot, data_state, disabled, for_, id, name, placeholder, readonly, required, role,
    type_, value,
};
use hxui_dom::elements::{button, input as input_tag, label as label_tag, span, textarea as textarea_tag};
use hxui_dom::{cn, group, if_, text, Node};

use crate::icons;
use crate::props::checked_state;

const INPUT_CLASSES: &str = "file:text-foreground placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground border-input flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:border-destructive";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelProps {
    pub id: Option<String>,
    pub class: String,
    /// Id of the labelled control
    pub for_: Option<String>,
}

pub fn label(props: LabelProps, children: impl IntoIterator<Item = Node>) -> Node {
    label_tag([
        data_slot("label"),
        props.id.map(|v| id(v)).into(),
        props.for_.map(|v| for_(v)).into(),
        class(cn([
            "flex items-center gap-2 text-sm leading-none font-medium select-none peer-disabled:cursor-not-allowed peer-disabled:opacity-50",
            props.class.as_str(),
        ])),
        group(children),
    ])
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputProps {
    pub id: Option<String>,
    pub class: String,
    /// `type`, `text` when empty
    pub kind: String,
    pub name: Option<String>,
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
    pub invalid: bool,
}

/// `<input>`; extra attribute nodes may be passed through `attrs`
pub fn input(props: InputProps, attrs: impl IntoIterator<Item = Node>) -> Node {
    let kind = if props.kind.is_empty() { "text".to_string() } else { props.kind };
    input_tag([
        type_(kind),
        data_slot("input"),
        props.id.map(|v| id(v)).into(),
        props.name.map(|v| name(v)).into(),
        props.value.map(|v| value(v)).into(),
        props.placeholder.map(|v| placeholder(v)).into(),
        if_(props.disabled, disabled()),
        if_(props.readonly, readonly()),
        if_(props.required, required()),
        if_(props.invalid, aria("invalid", "true")),
        class(cn([INPUT_CLASSES, props.class.as_str()])),
        group(attrs),
    ])
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextareaProps {
    pub id: Option<String>,
    pub class: String,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub required: bool,
}

/// `<textarea>` holding `content` as its initial text
pub fn textarea(props: TextareaProps, content: &str) -> Node {
    textarea_tag([
        data_slot("textarea"),
        props.id.map(|v| id(v)).into(),
        props.name.map(|v| name(v)).into(),
        props.placeholder.map(|v| placeholder(v)).into(),
        if_(props.disabled, disabled()),
        if_(props.required, required()),
        class(cn([
            "border-input placeholder:text-muted-foreground focus-visible:border-ring focus-visible:ring-ring/50 flex field-sizing-content min-h-16 w-full rounded-md border bg-transparent px-3 py-2 text-base shadow-xs transition-[color,box-shadow] outline-none focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50 md:text-sm",
            props.class.as_str(),
        ])),
        text(content),
    ])
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxProps {
    pub id: Option<String>,
    pub class: String,
    pub checked: bool,
    pub disabled: bool,
    /// Form field name; a hidden input carries the value when checked
    pub name: Option<String>,
    /// Submitted value, `on` when unset
    pub value: Option<String>,
}

/// ARIA checkbox button; extra attribute nodes (request wiring) go in `attrs`
pub fn checkbox(props: CheckboxProps, attrs: impl IntoIterator<Item = Node>) -> Node {
    let state = checked_state(props.checked);
    let hidden_field = match (&props.name, props.checked) {
        (Some(field), true) => input_tag([
            type_("hidden"),
            name(field.clone()),
            value(props.value.clone().unwrap_or_else(|| "on".to_string())),
        ]),
        _ => Node::Nil,
    };
    group([
        button([
            type_("button"),
            role("checkbox"),
            aria("checked", bool_str(props.checked)),
            data_state(state),
            data_slot("checkbox"),
            props.id.map(|v| id(v)).into(),
            if_(props.disabled, disabled()),
            class(cn([
                "peer border-input data-[state=checked]:bg-primary data-[state=checked]:text-primary-foreground data-[state=checked]:border-primary focus-visible:border-ring focus-visible:ring-ring/50 size-4 shrink-0 rounded-[4px] border shadow-xs transition-shadow outline-none focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50",
                props.class.as_str(),
            ])),
            group(attrs),
            if_(
                props.checked,
                span([
                    data_slot("checkbox-indicator"),
                    data_state(state),
                    class("flex items-center justify-center text-current transition-none"),
                    icons::check("size-3.5"),
                ]),
            ),
        ]),
        hidden_field,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::render_to_string;

    #[test]
    fn test_input_defaults_to_text() {
        let props = InputProps {
            name: Some("email".into()),
            placeholder: Some("you@example.com".into()),
            ..Default::default()
        };
        let html = render_to_string(&input(props, [])).unwrap();
        assert!(html.starts_with(r#"<input type="text" data-slot="input" name="email" placeholder="you@example.com""#));
        assert!(!html.contains("</input>"));
    }

    #[test]
    fn test_label_for() {
        let props = LabelProps {
            for_: Some("email".into()),
            ..Default::default()
        };
        let html = render_to_string(&label(props, [text("Email")])).unwrap();
        assert!(html.contains(r#"for="email""#));
        assert!(html.ends_with(">Email</label>"));
    }

    #[test]
    fn test_textarea_escapes_content() {
        let html = render_to_string(&textarea(TextareaProps::default(), "<b>")).unwrap();
        assert!(html.ends_with(">&lt;b&gt;</textarea>"));
    }

    #[test]
    fn test_checkbox_states() {
        let unchecked = render_to_string(&checkbox(CheckboxProps::default(), [])).unwrap();
        assert!(unchecked.contains(r#"role="checkbox" aria-checked="false" data-state="unchecked""#));
        assert!(!unchecked.contains("<svg"));

        let props = CheckboxProps {
            checked: true,
            name: Some("terms".into()),
            ..Default::default()
        };
        let checked = render_to_string(&checkbox(props, [])).unwrap();
        assert!(checked.contains(r#"aria-checked="true" data-state="checked""#));
        assert!(checked.contains("<svg"));
        assert!(checked.ends_with(r#"<input type="hidden" name="terms" value="on">"#));
    }
}
