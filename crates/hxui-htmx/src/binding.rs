//! Interactive bindings
//!
//! Identity and endpoints of one stateful component instance, and the
//! attribute sets that let a hypermedia client swap it in place.

use std::collections::BTreeMap;
use std::fmt;

use hxui_dom::attributes::{data_state, id};
use hxui_dom::{element, group, if_, Node};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::hx;
use crate::request::Method;

/// Debounce used by search inputs (milliseconds)
pub const SEARCH_DELAY_MS: u32 = 300;

/// Request verb and URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub url: String,
}

impl Endpoint {
    /// Create an endpoint
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    /// GET endpoint
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// POST endpoint
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Path without query string, as registered with the router
    pub fn path(&self) -> &str {
        self.url.split_once('?').map_or(self.url.as_str(), |(path, _)| path)
    }

    /// Copy of this endpoint with extra query pairs appended
    pub fn with_query<K: AsRef<str>, V: AsRef<str>>(&self, pairs: &[(K, V)]) -> Self {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in pairs {
            serializer.append_pair(k.as_ref(), v.as_ref());
        }
        let query = serializer.finish();
        let url = if query.is_empty() {
            self.url.clone()
        } else if self.url.contains('?') {
            format!("{}&{}", self.url, query)
        } else {
            format!("{}?{}", self.url, query)
        };
        Self::new(self.method, url)
    }
}

/// How the response replaces the target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwapMode {
    /// Replace the whole target element
    #[default]
    ReplaceOuter,
    /// Replace the target's children
    ReplaceInner,
    /// Append inside the target
    Append,
    /// Prepend inside the target
    Prepend,
    /// Remove the target
    Delete,
}

impl SwapMode {
    /// `hx-swap` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReplaceOuter => "outerHTML",
            Self::ReplaceInner => "innerHTML",
            Self::Append => "beforeend",
            Self::Prepend => "afterbegin",
            Self::Delete => "delete",
        }
    }

    /// Parse an `hx-swap` value
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "outerHTML" => Self::ReplaceOuter,
            "innerHTML" => Self::ReplaceInner,
            "beforeend" => Self::Append,
            "afterbegin" => Self::Prepend,
            "delete" => Self::Delete,
            _ => return None,
        })
    }
}

impl fmt::Display for SwapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client event that issues the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Click,
    Change,
    Input,
    KeyUp,
    Load,
    Submit,
}

impl TriggerEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Change => "change",
            Self::Input => "input",
            Self::KeyUp => "keyup",
            Self::Load => "load",
            Self::Submit => "submit",
        }
    }
}

/// `hx-trigger` specification: event plus modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub event: TriggerEvent,
    /// Only fire when the value changed
    pub changed: bool,
    /// Debounce delay
    pub delay_ms: Option<u32>,
    /// Fire at most once
    pub once: bool,
}

impl Trigger {
    /// Plain trigger on an event
    pub fn on(event: TriggerEvent) -> Self {
        Self {
            event,
            changed: false,
            delay_ms: None,
            once: false,
        }
    }

    pub fn click() -> Self {
        Self::on(TriggerEvent::Click)
    }

    pub fn change() -> Self {
        Self::on(TriggerEvent::Change)
    }

    pub fn keyup() -> Self {
        Self::on(TriggerEvent::KeyUp)
    }

    pub fn load() -> Self {
        Self::on(TriggerEvent::Load)
    }

    pub fn submit() -> Self {
        Self::on(TriggerEvent::Submit)
    }

    /// `keyup changed delay:300ms`, used by search inputs
    pub fn search() -> Self {
        Self::keyup().changed().delay(SEARCH_DELAY_MS)
    }

    /// Add the `changed` modifier
    pub fn changed(mut self) -> Self {
        self.changed = true;
        self
    }

    /// Add a `delay:<ms>` modifier
    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = Some(ms);
        self
    }

    /// Add the `once` modifier
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event.as_str())?;
        if self.changed {
            f.write_str(" changed")?;
        }
        if let Some(ms) = self.delay_ms {
            write!(f, " delay:{ms}ms")?;
        }
        if self.once {
            f.write_str(" once")?;
        }
        Ok(())
    }
}

/// Extra request fields, sent as the `hx-vals` JSON object.
///
/// Keys are kept sorted so the emitted JSON is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, String>);

impl Payload {
    /// Empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pairs
    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Insert a field (replaces an existing one)
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder form of [`Payload::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Field value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Union of two payloads; `other` wins on collisions
    pub fn merged(&self, other: &Payload) -> Payload {
        let mut out = self.clone();
        for (k, v) in &other.0 {
            out.0.insert(k.clone(), v.clone());
        }
        out
    }

    /// JSON object text
    pub fn to_json(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        serde_json::Value::Object(map).to_string()
    }

    /// Parse a JSON object of string values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Binding of one stateful component instance
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveBinding {
    id: String,
    /// Flips the open state; the request carries `open=<next>`
    pub toggle: Option<Endpoint>,
    /// Forces the open state
    pub open: Option<Endpoint>,
    /// Forces the closed state
    pub close: Option<Endpoint>,
    /// Component-specific endpoints by name (`check`, `nav`, `search`, ...)
    pub actions: BTreeMap<String, Endpoint>,
    pub swap: SwapMode,
    /// Trigger used when an element does not pick its own
    pub trigger: Option<Trigger>,
    /// Fields sent with every request of this binding
    pub payload: Payload,
    pub include: Option<String>,
    pub indicator: Option<String>,
}

impl InteractiveBinding {
    /// Create a binding addressed by `id`
    ///
    /// # Panics
    ///
    /// Panics when `id` is empty or contains whitespace.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(
            !id.is_empty() && !id.chars().any(char::is_whitespace),
            "binding id must be a non-empty token, got {id:?}"
        );
        Self {
            id,
            toggle: None,
            open: None,
            close: None,
            actions: BTreeMap::new(),
            swap: SwapMode::ReplaceOuter,
            trigger: None,
            payload: Payload::new(),
            include: None,
            indicator: None,
        }
    }

    /// Binding with `open`/`close` GET endpoints under `base`
    /// (`/dialog` → `/dialog/open`, `/dialog/close`, `/dialog/toggle`)
    pub fn with_paths(id: impl Into<String>, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self::new(id)
            .with_open(Endpoint::get(format!("{base}/open")))
            .with_close(Endpoint::get(format!("{base}/close")))
            .with_toggle(Endpoint::post(format!("{base}/toggle")))
    }

    /// Target id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `#<id>` selector
    pub fn target(&self) -> String {
        format!("#{}", self.id)
    }

    /// Id of a part of this component (`<id>-<part>`)
    pub fn part_id(&self, part: &str) -> String {
        format!("{}-{}", self.id, part)
    }

    pub fn with_toggle(mut self, endpoint: Endpoint) -> Self {
        self.toggle = Some(endpoint);
        self
    }

    pub fn with_open(mut self, endpoint: Endpoint) -> Self {
        self.open = Some(endpoint);
        self
    }

    pub fn with_close(mut self, endpoint: Endpoint) -> Self {
        self.close = Some(endpoint);
        self
    }

    /// Add a named endpoint
    pub fn with_action(mut self, name: impl Into<String>, endpoint: Endpoint) -> Self {
        self.actions.insert(name.into(), endpoint);
        self
    }

    pub fn with_swap(mut self, swap: SwapMode) -> Self {
        self.swap = swap;
        self
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn with_payload(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.payload.insert(name, value);
        self
    }

    pub fn with_include(mut self, selector: impl Into<String>) -> Self {
        self.include = Some(selector.into());
        self
    }

    pub fn with_indicator(mut self, selector: impl Into<String>) -> Self {
        self.indicator = Some(selector.into());
        self
    }

    /// Named endpoint
    pub fn action(&self, name: &str) -> Option<&Endpoint> {
        self.actions.get(name)
    }

    /// Endpoint that moves the component to `open`: the explicit open/close
    /// endpoint when set, the toggle endpoint otherwise
    pub fn transition(&self, open: bool) -> Option<&Endpoint> {
        let explicit = if open { self.open.as_ref() } else { self.close.as_ref() };
        explicit.or(self.toggle.as_ref())
    }

    /// Request attributes for `endpoint` with the binding's default trigger
    pub fn request(&self, endpoint: &Endpoint, extra: &Payload) -> Node {
        self.request_on(endpoint, self.trigger.as_ref(), extra)
    }

    /// Request attributes for `endpoint`: method and URL, `#id` target, swap
    /// mode, optional trigger, merged payload, include and indicator
    pub fn request_on(&self, endpoint: &Endpoint, trigger: Option<&Trigger>, extra: &Payload) -> Node {
        let payload = self.payload.merged(extra);
        group([
            hx::request(endpoint.method, endpoint.url.clone()),
            hx::target(self.target()),
            hx::swap(self.swap),
            trigger.map(hx::trigger).into(),
            if_(!payload.is_empty(), hx::vals(&payload)),
            self.include.as_ref().map(|s| hx::include(s.clone())).into(),
            self.indicator.as_ref().map(|s| hx::indicator(s.clone())).into(),
        ])
    }

    /// Request attributes moving the component to `open`, or nil when the
    /// binding has no endpoint for it. Toggle requests carry `open=<next>`.
    pub fn transition_request(&self, open: bool) -> Node {
        let Some(endpoint) = self.transition(open) else {
            return Node::Nil;
        };
        let mut extra = Payload::new();
        if self.toggle.as_ref() == Some(endpoint) {
            extra.insert("open", if open { "true" } else { "false" });
        }
        self.request(endpoint, &extra)
    }

    /// Swap root: `<div id="<id>" data-state="<state>">` around `children`
    pub fn root(&self, state: &str, children: impl IntoIterator<Item = Node>) -> Node {
        self.root_tag("div", state, children)
    }

    /// Swap root with an explicit tag
    pub fn root_tag(&self, tag: &'static str, state: &str, children: impl IntoIterator<Item = Node>) -> Node {
        element(tag, [id(self.id.clone()), data_state(state), group(children)])
    }

    /// Empty root kept in place of a closed component so the target still exists
    pub fn closed_root(&self) -> Node {
        element("div", [id(self.id.clone()), data_state("closed")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::render_to_string;

    #[test]
    fn test_trigger_display() {
        assert_eq!(Trigger::click().to_string(), "click");
        assert_eq!(Trigger::search().to_string(), "keyup changed delay:300ms");
        assert_eq!(Trigger::load().once().to_string(), "load once");
    }

    #[test]
    fn test_swap_mode_names() {
        assert_eq!(SwapMode::default().as_str(), "outerHTML");
        assert_eq!(SwapMode::parse("beforeend"), Some(SwapMode::Append));
        assert_eq!(SwapMode::parse("sideways"), None);
    }

    #[test]
    fn test_payload_json_sorted() {
        let payload = Payload::new().with("name", "activityBar").with("checked", "true");
        assert_eq!(payload.to_json(), r#"{"checked":"true","name":"activityBar"}"#);
        assert_eq!(Payload::from_json(&payload.to_json()).unwrap(), payload);
    }

    #[test]
    fn test_endpoint_with_query() {
        let nav = Endpoint::get("/calendar/nav").with_query(&[("month", "2"), ("year", "2024")]);
        assert_eq!(nav.url, "/calendar/nav?month=2&year=2024");
        assert_eq!(nav.path(), "/calendar/nav");
        let more = nav.with_query(&[("x", "a b")]);
        assert_eq!(more.url, "/calendar/nav?month=2&year=2024&x=a+b");
    }

    #[test]
    fn test_closed_root_markup() {
        let binding = InteractiveBinding::new("dialog-example");
        assert_eq!(
            render_to_string(&binding.closed_root()).unwrap(),
            r#"<div id="dialog-example" data-state="closed"></div>"#
        );
    }

    #[test]
    fn test_request_attributes() {
        let binding = InteractiveBinding::new("menu").with_payload("menu", "view");
        let endpoint = Endpoint::post("/menu/check");
        let node = hxui_dom::element("button", [binding.request(&endpoint, &Payload::new().with("name", "statusBar"))]);
        assert_eq!(
            render_to_string(&node).unwrap(),
            r##"<button hx-post="/menu/check" hx-target="#menu" hx-swap="outerHTML" hx-vals="{&quot;menu&quot;:&quot;view&quot;,&quot;name&quot;:&quot;statusBar&quot;}"></button>"##
        );
    }

    #[test]
    fn test_transition_prefers_explicit_endpoints() {
        let binding = InteractiveBinding::with_paths("d", "/dialog/");
        assert_eq!(binding.transition(true).unwrap().url, "/dialog/open");
        assert_eq!(binding.transition(false).unwrap().url, "/dialog/close");

        let toggle_only = InteractiveBinding::new("d").with_toggle(Endpoint::post("/d/toggle"));
        let html = render_to_string(&hxui_dom::element("button", [toggle_only.transition_request(true)])).unwrap();
        assert!(html.contains(r#"hx-post="/d/toggle""#));
        assert!(html.contains("open"));
    }

    #[test]
    #[should_panic(expected = "binding id")]
    fn test_empty_binding_id_panics() {
        InteractiveBinding::new("");
    }
}
