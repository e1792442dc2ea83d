//! Handler router
//!
//! Binds `(method, path)` pairs to fragment handlers. Each handler returns
//! the node of the same constructor with updated props; the router renders it
//! as the single response fragment, never wrapped in a document.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use hxui_dom::{render, render_to_string, Node};

use crate::binding::Endpoint;
use crate::request::{Method, Request};
use crate::store::StateStore;
use crate::HandlerError;

/// Fragment handler
pub type Handler = Arc<dyn Fn(&Request) -> Result<Node, HandlerError> + Send + Sync>;

/// Path router for interactive fragments
#[derive(Clone, Default)]
pub struct Router {
    routes: HashMap<(Method, String), Handler>,
}

// Manual impl for Debug since closures don't implement it
impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut routes: Vec<_> = self.routes.keys().collect();
        routes.sort();
        f.debug_struct("Router").field("routes", &routes).finish()
    }
}

impl Router {
    /// Create an empty router
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. A later registration for the same route replaces
    /// the earlier one.
    pub fn route<F>(&mut self, method: Method, path: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&Request) -> Result<Node, HandlerError> + Send + Sync + 'static,
    {
        let path = path.into();
        tracing::debug!("Registering {} {}", method, path);
        self.routes.insert((method, path), Arc::new(handler));
        self
    }

    /// Register a GET handler
    pub fn get<F>(&mut self, path: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&Request) -> Result<Node, HandlerError> + Send + Sync + 'static,
    {
        self.route(Method::Get, path, handler)
    }

    /// Register a POST handler
    pub fn post<F>(&mut self, path: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&Request) -> Result<Node, HandlerError> + Send + Sync + 'static,
    {
        self.route(Method::Post, path, handler)
    }

    /// Register a handler for an endpoint (its query string is ignored)
    pub fn endpoint<F>(&mut self, endpoint: &Endpoint, handler: F) -> &mut Self
    where
        F: Fn(&Request) -> Result<Node, HandlerError> + Send + Sync + 'static,
    {
        self.route(endpoint.method, endpoint.path().to_string(), handler)
    }

    /// Check if a route is registered
    pub fn contains(&self, method: Method, path: &str) -> bool {
        self.routes.contains_key(&(method, path.to_string()))
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if no route is registered
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Run the handler for a request and return its node
    pub fn dispatch(&self, req: &Request) -> Result<Node, HandlerError> {
        let Some(handler) = self.routes.get(&(req.method, req.path.clone())) else {
            tracing::warn!("No handler for {} {}", req.method, req.path);
            return Err(HandlerError::NotFound {
                method: req.method,
                path: req.path.clone(),
            });
        };
        tracing::debug!("Dispatching {} {}", req.method, req.path);
        handler(req)
    }

    /// Dispatch and render the fragment into `sink`
    pub fn handle<W: Write>(&self, req: &Request, sink: W) -> Result<(), HandlerError> {
        let node = self.dispatch(req)?;
        render(&node, sink)?;
        Ok(())
    }

    /// Dispatch and render the fragment into a string
    pub fn render(&self, req: &Request) -> Result<String, HandlerError> {
        let node = self.dispatch(req)?;
        let html = render_to_string(&node)?;
        tracing::debug!("Rendered {} bytes for {} {}", html.len(), req.method, req.path);
        Ok(html)
    }
}

/// Build a handler that loads state, applies the request as a delta, saves
/// the new state and renders it.
///
/// The whole cycle runs inside one [`StateStore::update`], so concurrent
/// requests on a session see each other's deltas. The delta is applied to a
/// copy; rejected deltas leave the stored state untouched.
pub fn stateful<T, S, A, V>(store: S, apply: A, view: V) -> impl Fn(&Request) -> Result<Node, HandlerError> + Send + Sync + 'static
where
    T: Clone + 'static,
    S: StateStore<T>,
    A: Fn(&mut T, &Request) -> Result<(), HandlerError> + Send + Sync + 'static,
    V: Fn(&T) -> Node + Send + Sync + 'static,
{
    move |req: &Request| {
        store
            .update(req, |stored: &mut T| -> Result<Node, HandlerError> {
                let mut next = stored.clone();
                apply(&mut next, req)?;
                let node = view(&next);
                *stored = next;
                Ok(node)
            })
            .inspect(|_| tracing::debug!("Applied delta for {} {}", req.method, req.path))
            .inspect_err(|e| tracing::warn!("Rejected delta for {} {}: {}", req.method, req.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use hxui_dom::text;

    #[test]
    fn test_dispatch_registered_route() {
        let mut router = Router::new();
        router.get("/hello", |_| Ok(text("hi")));
        assert_eq!(router.render(&Request::get("/hello")).unwrap(), "hi");
        assert!(router.contains(Method::Get, "/hello"));
    }

    #[test]
    fn test_unknown_route() {
        let router = Router::new();
        let err = router.render(&Request::get("/missing")).unwrap_err();
        assert!(matches!(err, HandlerError::NotFound { method: Method::Get, ref path } if path == "/missing"));
    }

    #[test]
    fn test_method_is_part_of_route() {
        let mut router = Router::new();
        router.post("/submit", |_| Ok(text("ok")));
        assert!(router.render(&Request::get("/submit")).is_err());
        assert!(router.render(&Request::post("/submit", "")).is_ok());
    }

    #[test]
    fn test_stateful_counter() {
        let store: MemoryStore<u32> = MemoryStore::new();
        let mut router = Router::new();
        router.post(
            "/inc",
            stateful(
                store.clone(),
                |n: &mut u32, req: &Request| {
                    *n += req.parse_field::<u32>("by")?;
                    Ok(())
                },
                |n: &u32| text(n.to_string()),
            ),
        );
        assert_eq!(router.render(&Request::post("/inc", "by=2")).unwrap(), "2");
        assert_eq!(router.render(&Request::post("/inc", "by=3")).unwrap(), "5");
        // Rejected delta does not touch the stored value
        assert!(router.render(&Request::post("/inc", "by=x")).is_err());
        assert_eq!(store.get("default"), 5);
    }
}
