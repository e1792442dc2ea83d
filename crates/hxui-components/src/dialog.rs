//! Dialog
//!
//! Modal panel over an overlay. The trigger lives outside the swap root; a
//! closed dialog renders only the bare root so the next swap has a target.
//!
//! The overlay is a sibling of the panel, so clicks inside the panel never
//! reach the overlay's close request.

use hxui_dom::attributes::{aria, class, data_slot, data_state, role, tabindex, type_};
use hxui_dom::elements::{button as button_tag, div, span};
use hxui_dom::{cn, group, if_, if_with, text, Node};
use hxui_htmx::{InteractiveBinding, Router, StateStore};

use crate::button::{self, ButtonProps};
use crate::disclosure::{register_transitions, OpenState};
use crate::icons;
use crate::props::{part, resolve_id, Props};

pub type DialogState = OpenState;

const OVERLAY_CLASSES: &str = "fixed inset-0 z-50 bg-black/50 data-[state=open]:animate-in data-[state=open]:fade-in-0";
const CONTENT_CLASSES: &str = "bg-background fixed top-[50%] left-[50%] z-50 grid w-full max-w-[calc(100%-2rem)] translate-x-[-50%] translate-y-[-50%] gap-4 rounded-lg border p-6 shadow-lg duration-200 sm:max-w-lg";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogProps {
    pub id: Option<String>,
    /// Extra classes for the panel
    pub class: String,
    pub open: bool,
    pub title: String,
    pub description: String,
    /// Drop the corner close button
    pub hide_close: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Dialog,
    Alert,
}

/// Static dialog for `props.open`
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(props: DialogProps, children: impl IntoIterator<Item = Node>) -> Node {
    let id = resolve_id(props.id.as_deref(), "dialog", &props.title);
    render(props, &InteractiveBinding::new(id), Kind::Dialog, children)
}

/// Dialog wired to `binding`; overlay and close button request the close transition
pub fn interactive(props: DialogProps, binding: &InteractiveBinding, children: impl IntoIterator<Item = Node>) -> Node {
    render(props, binding, Kind::Dialog, children)
}

/// Alert dialog: `role="alertdialog"`, the overlay does not close it and there
/// is no corner close button. Footer buttons decide the outcome.
pub fn alert_dialog(props: DialogProps, binding: &InteractiveBinding, children: impl IntoIterator<Item = Node>) -> Node {
    render(props, binding, Kind::Alert, children)
}

fn render(props: DialogProps, binding: &InteractiveBinding, kind: Kind, children: impl IntoIterator<Item = Node>) -> Node {
    if !props.open {
        return binding.closed_root();
    }
    let title_id = binding.part_id("title");
    let description_id = binding.part_id("description");
    let has_header = !(props.title.is_empty() && props.description.is_empty());
    let slot = match kind {
        Kind::Dialog => "dialog",
        Kind::Alert => "alert-dialog",
    };

    binding.root("open", [
        data_slot(slot),
        div([
            data_slot("dialog-overlay"),
            data_state("open"),
            class(OVERLAY_CLASSES),
            if_(kind == Kind::Dialog, binding.transition_request(false)),
        ]),
        div([
            role(match kind {
                Kind::Dialog => "dialog",
                Kind::Alert => "alertdialog",
            }),
            aria("modal", "true"),
            if_(!props.title.is_empty(), aria("labelledby", title_id.as_str())),
            if_(!props.description.is_empty(), aria("describedby", description_id.as_str())),
            data_slot("dialog-content"),
            data_state("open"),
            tabindex(-1),
            class(cn([CONTENT_CLASSES, props.class.as_str()])),
            if_with(has_header, || {
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
            if_with(kind == Kind::Dialog && !props.hide_close, || corner_close(binding)),
        ]),
    ])
}

fn corner_close(binding: &InteractiveBinding) -> Node {
    button_tag([
        type_("button"),
        data_slot("dialog-close"),
        aria("label", "Close"),
        class("ring-offset-background focus:ring-ring absolute top-4 right-4 rounded-xs opacity-70 transition-opacity hover:opacity-100 focus:ring-2 focus:ring-offset-2 focus:outline-hidden [&_svg]:pointer-events-none [&_svg]:shrink-0"),
        binding.transition_request(false),
        icons::x(""),
        span([class("sr-only"), text("Close")]),
    ])
}

/// Button outside the root that opens the dialog
pub fn trigger(props: ButtonProps, binding: &InteractiveBinding, children: impl IntoIterator<Item = Node>) -> Node {
    button::new(props, [
        data_slot("dialog-trigger"),
        aria("haspopup", "dialog"),
        aria("controls", binding.id()),
        binding.transition_request(true),
        group(children),
    ])
}

/// Footer button that closes the dialog
pub fn close(props: ButtonProps, binding: &InteractiveBinding, children: impl IntoIterator<Item = Node>) -> Node {
    button::new(props, [data_slot("dialog-close"), binding.transition_request(false), group(children)])
}

/// Closed root plus a toast sibling, the usual answer to a form submitted
/// from inside the dialog
pub fn close_with_toast(binding: &InteractiveBinding, toast: Node) -> Node {
    group([binding.closed_root(), toast])
}

pub fn header(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("div", "dialog-header", "flex flex-col gap-2 text-center sm:text-left", &props, children)
}

pub fn footer(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("div", "dialog-footer", "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end", &props, children)
}

pub fn title(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("h2", "dialog-title", "text-lg leading-none font-semibold", &props, children)
}

pub fn description(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("p", "dialog-description", "text-muted-foreground text-sm", &props, children)
}

/// Wire open, close and toggle endpoints; `view` renders the dialog for the
/// session's state
pub fn register<S, V>(router: &mut Router, binding: &InteractiveBinding, store: S, view: V)
where
    S: StateStore<DialogState>,
    V: Fn(&DialogState) -> Node + Send + Sync + 'static,
{
    register_transitions(router, binding, store, view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::render_to_string;

    fn props(open: bool) -> DialogProps {
        DialogProps {
            open,
            title: "Edit profile".into(),
            description: "Make changes to your profile here.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_static_open_dialog() {
        let html = render_to_string(&new(props(true), [text("Body")])).unwrap();
        assert!(html.starts_with(r#"<div id="dialog-edit-profile" data-state="open" data-slot="dialog">"#));
        assert!(html.contains(r#"role="dialog" aria-modal="true" aria-labelledby="dialog-edit-profile-title""#));
        assert!(html.contains(r#"<h2 data-slot="dialog-title" id="dialog-edit-profile-title""#));
        assert!(html.contains(r#"aria-label="Close""#));
        assert!(!html.contains("hx-"));
    }

    #[test]
    fn test_interactive_overlay_closes() {
        let binding = InteractiveBinding::with_paths("dlg", "/dlg");
        let html = render_to_string(&interactive(props(true), &binding, [])).unwrap();
        let overlay = html.split("data-slot=\"dialog-overlay\"").nth(1).unwrap();
        assert!(overlay.split('>').next().unwrap().contains(r#"hx-get="/dlg/close""#));
    }

    #[test]
    fn test_closed_is_bare_root() {
        let binding = InteractiveBinding::with_paths("dlg", "/dlg");
        let html = render_to_string(&interactive(props(false), &binding, [text("Body")])).unwrap();
        assert_eq!(html, r#"<div id="dlg" data-state="closed"></div>"#);
    }

    #[test]
    fn test_alert_dialog_overlay_is_inert() {
        let binding = InteractiveBinding::with_paths("confirm", "/confirm");
        let html = render_to_string(&alert_dialog(props(true), &binding, [footer(Props::default(), [
            close(ButtonProps::default(), &binding, [text("Cancel")]),
        ])]))
        .unwrap();
        assert!(html.contains(r#"role="alertdialog""#));
        assert!(!html.contains(r#"aria-label="Close""#));
        assert_eq!(html.matches(r#"hx-get="/confirm/close""#).count(), 1);
    }

    #[test]
    fn test_trigger_opens() {
        let binding = InteractiveBinding::with_paths("dlg", "/dlg");
        let html = render_to_string(&trigger(ButtonProps::default(), &binding, [text("Open")])).unwrap();
        assert!(html.contains(r#"data-slot="dialog-trigger""#));
        assert!(html.contains(r#"hx-get="/dlg/open""#));
        assert!(html.contains(r#"aria-controls="dlg""#));
    }

    #[test]
    fn test_close_with_toast() {
        let binding = InteractiveBinding::with_paths("dlg", "/dlg");
        let html = render_to_string(&close_with_toast(&binding, crate::toast::message("Saved"))).unwrap();
        assert!(html.starts_with(r#"<div id="dlg" data-state="closed"></div><div data-slot="toast""#));
    }
}
