//! Request model
//!
//! The slice of an HTTP request that interactive handlers consume:
//! method, path, query string and form-decoded body.

use std::fmt;
use std::str::FromStr;

use crate::form::FormData;
use crate::HandlerError;

/// Session key used when the host supplies none
pub const DEFAULT_SESSION: &str = "default";

/// HTTP method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    /// Beyond the four core verbs; htmx issues it as `hx-patch`
    Patch,
    Delete,
}

impl Method {
    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            _ => return None,
        })
    }

    /// Upper-case method name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Name of the `hx-*` attribute issuing this method
    pub fn hx_attribute(&self) -> &'static str {
        match self {
            Self::Get => "hx-get",
            Self::Post => "hx-post",
            Self::Put => "hx-put",
            Self::Patch => "hx-patch",
            Self::Delete => "hx-delete",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Path without the query string
    pub path: String,
    /// Decoded query string
    pub query: FormData,
    /// Decoded `application/x-www-form-urlencoded` body
    pub form: FormData,
    /// Session key chosen by the host (cookie, header, ...)
    pub session: Option<String>,
}

impl Request {
    /// Create a request from a method and a target (`/path?query`)
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, FormData::parse(query)),
            None => (target, FormData::new()),
        };
        Self {
            method,
            path: path.to_string(),
            query,
            form: FormData::new(),
            session: None,
        }
    }

    /// GET request
    pub fn get(target: &str) -> Self {
        Self::new(Method::Get, target)
    }

    /// POST request with an URL-encoded body
    pub fn post(target: &str, body: &str) -> Self {
        Self::new(Method::Post, target).with_body(body)
    }

    /// Set the URL-encoded body
    pub fn with_body(mut self, body: &str) -> Self {
        self.form = FormData::parse(body);
        self
    }

    /// Set the session key
    pub fn with_session(mut self, key: impl Into<String>) -> Self {
        self.session = Some(key.into());
        self
    }

    /// Session key, or [`DEFAULT_SESSION`]
    pub fn session_key(&self) -> &str {
        self.session.as_deref().unwrap_or(DEFAULT_SESSION)
    }

    /// Field from the body, falling back to the query string
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form.get(name).or_else(|| self.query.get(name))
    }

    /// Field that must be present
    pub fn require(&self, name: &str) -> Result<&str, HandlerError> {
        self.field(name)
            .ok_or_else(|| HandlerError::MissingField(name.to_string()))
    }

    /// Parse a required field
    pub fn parse_field<T>(&self, name: &str) -> Result<T, HandlerError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        if self.form.has(name) {
            self.form.parse_field(name)
        } else {
            self.query.parse_field(name)
        }
    }

    /// Parse a required boolean field
    pub fn bool_field(&self, name: &str) -> Result<bool, HandlerError> {
        if self.form.has(name) {
            self.form.bool_field(name)
        } else {
            self.query.bool_field(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("post"), Some(Method::Post));
        assert_eq!(Method::parse("TRACE"), None);
        assert_eq!(Method::Delete.hx_attribute(), "hx-delete");
    }

    #[test]
    fn test_patch_maps_to_hx_patch() {
        assert_eq!(Method::parse("patch"), Some(Method::Patch));
        assert_eq!(Method::Patch.hx_attribute(), "hx-patch");
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_request_target_split() {
        let req = Request::get("/calendar/nav?month=2&year=2024");
        assert_eq!(req.path, "/calendar/nav");
        assert_eq!(req.parse_field::<u32>("month").unwrap(), 2);
        assert_eq!(req.parse_field::<i32>("year").unwrap(), 2024);
    }

    #[test]
    fn test_body_wins_over_query() {
        let req = Request::post("/x?q=query", "q=body");
        assert_eq!(req.field("q"), Some("body"));
    }

    #[test]
    fn test_session_key_default() {
        assert_eq!(Request::get("/").session_key(), DEFAULT_SESSION);
        assert_eq!(Request::get("/").with_session("abc").session_key(), "abc");
    }
}
