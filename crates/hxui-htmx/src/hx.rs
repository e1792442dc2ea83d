//! `hx-*` attribute helpers
//!
//! The fixed vocabulary understood by the client swap engine.

use hxui_dom::{attr, Node};

use crate::binding::{Payload, SwapMode, Trigger};
use crate::request::Method;

/// Request attribute for a method (`hx-get`, `hx-post`, ...)
pub fn request(method: Method, url: impl Into<String>) -> Node {
    attr(method.hx_attribute(), url)
}

/// `hx-get`
pub fn get(url: impl Into<String>) -> Node {
    request(Method::Get, url)
}

/// `hx-post`
pub fn post(url: impl Into<String>) -> Node {
    request(Method::Post, url)
}

/// `hx-put`
pub fn put(url: impl Into<String>) -> Node {
    request(Method::Put, url)
}

/// `hx-delete`
pub fn delete(url: impl Into<String>) -> Node {
    request(Method::Delete, url)
}

/// `hx-target`
pub fn target(selector: impl Into<String>) -> Node {
    attr("hx-target", selector)
}

/// `hx-swap`
pub fn swap(mode: SwapMode) -> Node {
    attr("hx-swap", mode.as_str())
}

/// `hx-trigger`
pub fn trigger(trigger: &Trigger) -> Node {
    attr("hx-trigger", trigger.to_string())
}

/// `hx-vals` (JSON object)
pub fn vals(payload: &Payload) -> Node {
    attr("hx-vals", payload.to_json())
}

/// `hx-include`
pub fn include(selector: impl Into<String>) -> Node {
    attr("hx-include", selector)
}

/// `hx-indicator`
pub fn indicator(selector: impl Into<String>) -> Node {
    attr("hx-indicator", selector)
}
