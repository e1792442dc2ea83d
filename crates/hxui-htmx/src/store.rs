//! Interaction state storage
//!
//! Per-session state records live in the embedding application. Handlers
//! reach them through [`StateStore`]; [`MemoryStore`] is an in-process
//! implementation the application owns and passes in.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::request::Request;

/// Load/save access to a state record for a request
pub trait StateStore<T>: Clone + Send + Sync + 'static {
    /// Current state for the request's session
    fn load(&self, req: &Request) -> T;

    /// Persist the new state for the request's session
    fn save(&self, req: &Request, state: T);

    /// Read-modify-write the request's session state as one step; no other
    /// `save` or `update` on the same session interleaves with `f`
    fn update<R>(&self, req: &Request, f: impl FnOnce(&mut T) -> R) -> R;
}

/// In-memory session store keyed by [`Request::session_key`]
#[derive(Debug)]
pub struct MemoryStore<T> {
    inner: Arc<Mutex<HashMap<String, T>>>,
    initial: Arc<T>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            initial: Arc::clone(&self.initial),
        }
    }
}

impl<T: Clone + Default> MemoryStore<T> {
    /// Store whose sessions start from `T::default()`
    pub fn new() -> Self {
        Self::with_initial(T::default())
    }
}

impl<T: Clone + Default> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> MemoryStore<T> {
    /// Store whose sessions start from `initial`
    pub fn with_initial(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            initial: Arc::new(initial),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, T>> {
        // A panicking handler cannot leave a half-written record behind
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// State of a session (initial state when unknown)
    pub fn get(&self, key: &str) -> T {
        self.lock()
            .get(key)
            .cloned()
            .unwrap_or_else(|| (*self.initial).clone())
    }

    /// Replace the state of a session
    pub fn set(&self, key: &str, state: T) {
        self.lock().insert(key.to_string(), state);
    }

    /// Mutate the state of a session in place
    pub fn update<R>(&self, key: &str, f: impl FnOnce(&mut T) -> R) -> R {
        let mut map = self.lock();
        let state = map
            .entry(key.to_string())
            .or_insert_with(|| (*self.initial).clone());
        f(state)
    }

    /// Forget a session
    pub fn remove(&self, key: &str) -> Option<T> {
        self.lock().remove(key)
    }

    /// Number of known sessions
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no session is known
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T: Clone + Send + Sync + 'static> StateStore<T> for MemoryStore<T> {
    fn load(&self, req: &Request) -> T {
        self.get(req.session_key())
    }

    fn save(&self, req: &Request, state: T) {
        self.set(req.session_key(), state);
    }

    fn update<R>(&self, req: &Request, f: impl FnOnce(&mut T) -> R) -> R {
        MemoryStore::update(self, req.session_key(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_isolated() {
        let store = MemoryStore::with_initial(1u32);
        store.set("a", 10);
        assert_eq!(store.get("a"), 10);
        assert_eq!(store.get("b"), 1);
    }

    #[test]
    fn test_update_in_place() {
        let store: MemoryStore<Vec<String>> = MemoryStore::new();
        store.update("s", |v| v.push("x".into()));
        store.update("s", |v| v.push("y".into()));
        assert_eq!(store.get("s"), ["x", "y"]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store: MemoryStore<u8> = MemoryStore::new();
        let other = store.clone();
        other.set("k", 7);
        assert_eq!(store.get("k"), 7);
    }

    #[test]
    fn test_store_via_request() {
        let store: MemoryStore<u8> = MemoryStore::new();
        let req = Request::get("/").with_session("alice");
        store.save(&req, 3);
        assert_eq!(store.load(&req), 3);
        assert_eq!(store.get("default"), 0);
    }
}
