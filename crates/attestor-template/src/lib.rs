//! # attestor-template
//!
//! Credential template registry with cached fallback lookup.
//!
//! ## Overview
//!
//! Issuance tooling starts new credentials from a named template. Templates
//! come from three sources, consulted in order: the mutable
//! [`TemplateStore`] (caller-registered), templates bundled into the
//! binary, and a runtime folder of JSON files. [`TemplateManager`] fronts
//! all three with a TTL-bounded cache.
//!
//! This crate is a collaborator of the issuance path and plays no role in
//! verification.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use attestor_template::{InMemoryTemplateStore, TemplateManager};
//!
//! let manager = TemplateManager::new(
//!     Box::new(InMemoryTemplateStore::new()),
//!     "/etc/attestor/templates",
//! );
//! let template = manager.get_template("VerifiableId", true)?;
//! let credential = template.instantiate()?;
//! ```

pub mod manager;
pub mod store;
pub mod template;

mod builtin;

pub use manager::TemplateManager;
pub use store::{InMemoryTemplateStore, TemplateStore};
pub use template::VcTemplate;

// ── Tests ─────────────────────────────────────────────────────────────────────
