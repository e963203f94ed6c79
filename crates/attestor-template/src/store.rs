//! Template storage backends.
//!
//! `InMemoryTemplateStore` is the reference implementation of the
//! `TemplateStore` trait. It keeps template bodies in a `HashMap` protected
//! by a `Mutex`, making it safe to share behind the manager while several
//! threads register and look up templates.

use std::collections::HashMap;
use std::sync::Mutex;

use attestor_contracts::error::{AttestorError, AttestorResult};

/// A mutable store of registered template bodies, keyed by name.
///
/// The store holds serialized JSON, not parsed credentials — the manager
/// parses on the way out so a store backend never needs the domain model.
pub trait TemplateStore: Send + Sync {
    /// Store `body` under `name`, replacing any previous entry.
    fn put(&self, name: &str, body: &str) -> AttestorResult<()>;

    /// Fetch the body stored under `name`, if any.
    fn get(&self, name: &str) -> AttestorResult<Option<String>>;

    /// All names currently stored.
    fn list(&self) -> AttestorResult<Vec<String>>;

    /// Remove the entry under `name`. Removing a missing name is not an
    /// error.
    fn delete(&self, name: &str) -> AttestorResult<()>;
}

/// An in-memory, mutex-protected template store.
#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryTemplateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AttestorResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|e| AttestorError::Template {
            reason: format!("template store lock poisoned: {}", e),
        })
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn put(&self, name: &str, body: &str) -> AttestorResult<()> {
        self.lock()?.insert(name.to_string(), body.to_string());
        Ok(())
    }

    fn get(&self, name: &str) -> AttestorResult<Option<String>> {
        Ok(self.lock()?.get(name).cloned())
    }

    fn list(&self) -> AttestorResult<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }

    fn delete(&self, name: &str) -> AttestorResult<()> {
        self.lock()?.remove(name);
        Ok(())
    }
}
