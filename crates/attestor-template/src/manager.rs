//! The template manager: cached, multi-source template lookup.
//!
//! Lookup order for `get_template`:
//!
//! 1. the in-process cache (TTL- and size-bounded)
//! 2. the mutable [`TemplateStore`] (caller-registered templates)
//! 3. templates bundled into the binary
//! 4. the runtime template folder on disk
//!
//! The first source that knows the name wins, so a registered template
//! shadows a bundled one of the same name. A cached name-only entry is
//! invalidated and reloaded when the full body is requested.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use attestor_contracts::{
    credential::VerifiableCredential,
    error::{AttestorError, AttestorResult},
};

use crate::{builtin, store::TemplateStore, template::VcTemplate};

/// Maximum number of cached templates.
const CACHE_CAPACITY: usize = 1000;

/// How long a cached template stays valid.
const CACHE_TTL: Duration = Duration::from_secs(10 * 60);

struct CacheEntry {
    template: VcTemplate,
    stored_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self) -> bool {
        self.stored_at.elapsed() < CACHE_TTL
    }
}

/// Cached front-end over the template sources.
///
/// Not on the verification path: the manager exists so issuance tooling can
/// start from a known-good envelope.
pub struct TemplateManager {
    store: Box<dyn TemplateStore>,
    runtime_folder: PathBuf,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl TemplateManager {
    /// Create a manager over the given store and runtime template folder.
    pub fn new(store: Box<dyn TemplateStore>, runtime_folder: impl Into<PathBuf>) -> Self {
        Self {
            store,
            runtime_folder: runtime_folder.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Register `template` under `name` in the mutable store.
    ///
    /// The body is sanitized first: any proof, credential id, and subject
    /// id are stripped, since a template describes an envelope rather than
    /// one issued credential.
    pub fn register(
        &self,
        name: &str,
        mut template: VerifiableCredential,
    ) -> AttestorResult<VcTemplate> {
        template.proof = None;
        template.id = None;
        if let Some(subject) = template.credential_subject.as_object_mut() {
            subject.remove("id");
        }

        self.store.put(name, &template.to_json()?)?;
        debug!(template = %name, "template registered");

        let entry = VcTemplate {
            name: name.to_string(),
            template: Some(template),
            mutable: true,
        };
        self.cache_put(entry.clone());
        Ok(entry)
    }

    /// Fetch the template under `name`, loading its body when `load_body`.
    ///
    /// # Errors
    ///
    /// `AttestorError::TemplateNotFound` when no source knows the name;
    /// `AttestorError::Parse` when a source holds a malformed body.
    pub fn get_template(&self, name: &str, load_body: bool) -> AttestorResult<VcTemplate> {
        if let Some(cached) = self.cache_get(name) {
            // A name-only entry cannot satisfy a body request: drop it and
            // reload from the sources.
            if load_body && cached.template.is_none() {
                self.cache_invalidate(name);
            } else {
                return Ok(cached);
            }
        }

        let loaded = self.load(name, load_body)?;
        self.cache_put(loaded.clone());
        Ok(loaded)
    }

    /// All templates known to any source, bodies not loaded.
    ///
    /// Names are deduplicated across sources; use
    /// [`TemplateManager::get_template`] with `load_body = true` to fetch a
    /// body.
    pub fn list_templates(&self) -> AttestorResult<Vec<VcTemplate>> {
        let mut names: BTreeSet<String> = self.store.list()?.into_iter().collect();
        names.extend(builtin::names().map(String::from));
        names.extend(self.list_runtime_folder());

        names
            .into_iter()
            .map(|name| self.get_template(&name, false))
            .collect()
    }

    /// Remove the registered template under `name` and forget it in the
    /// cache. Bundled and runtime-folder templates are unaffected.
    pub fn unregister(&self, name: &str) -> AttestorResult<()> {
        self.store.delete(name)?;
        self.cache_invalidate(name);
        Ok(())
    }

    // ── Source chain ──────────────────────────────────────────────────────────

    fn load(&self, name: &str, load_body: bool) -> AttestorResult<VcTemplate> {
        if let Some(body) = self.store.get(name)? {
            return Self::to_template(name, &body, load_body, true);
        }

        if let Some(body) = builtin::lookup(name) {
            return Self::to_template(name, body, load_body, false);
        }

        let path = self.runtime_folder.join(format!("{name}.json"));
        if path.is_file() {
            let body = std::fs::read_to_string(&path).map_err(|e| AttestorError::Template {
                reason: format!("failed to read template file '{}': {}", path.display(), e),
            })?;
            return Self::to_template(name, &body, load_body, false);
        }

        Err(AttestorError::TemplateNotFound {
            name: name.to_string(),
        })
    }

    fn to_template(
        name: &str,
        body: &str,
        load_body: bool,
        mutable: bool,
    ) -> AttestorResult<VcTemplate> {
        let template = if load_body {
            Some(VerifiableCredential::from_json(body)?)
        } else {
            None
        };
        Ok(VcTemplate {
            name: name.to_string(),
            template,
            mutable,
        })
    }

    fn list_runtime_folder(&self) -> Vec<String> {
        if !self.runtime_folder.is_dir() {
            warn!(
                folder = %self.runtime_folder.display(),
                "runtime template folder is not a directory"
            );
            return Vec::new();
        }

        match std::fs::read_dir(&self.runtime_folder) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
                .filter_map(|e| {
                    e.path()
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                })
                .collect(),
            Err(e) => {
                warn!(
                    folder = %self.runtime_folder.display(),
                    error = %e,
                    "failed to list runtime template folder"
                );
                Vec::new()
            }
        }
    }

    // ── Cache ─────────────────────────────────────────────────────────────────

    fn cache_get(&self, name: &str) -> Option<VcTemplate> {
        let cache = self.cache.lock().expect("template cache lock poisoned");
        cache
            .get(name)
            .filter(|entry| entry.is_fresh())
            .map(|entry| entry.template.clone())
    }

    fn cache_put(&self, template: VcTemplate) {
        let mut cache = self.cache.lock().expect("template cache lock poisoned");

        if cache.len() >= CACHE_CAPACITY {
            cache.retain(|_, entry| entry.is_fresh());
        }
        // Still full after dropping stale entries: serve this one uncached.
        if cache.len() >= CACHE_CAPACITY && !cache.contains_key(&template.name) {
            return;
        }

        cache.insert(
            template.name.clone(),
            CacheEntry {
                template,
                stored_at: Instant::now(),
            },
        );
    }

    fn cache_invalidate(&self, name: &str) {
        let mut cache = self.cache.lock().expect("template cache lock poisoned");
        cache.remove(name);
    }
}
