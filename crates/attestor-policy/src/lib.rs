//! # attestor-policy
//!
//! Built-in verification policies for the attestor engine.
//!
//! ## Overview
//!
//! The engine itself ships with no compiled-in policy set — anything
//! implementing [`attestor_core::traits::VerificationPolicy`] can be
//! supplied per call. This crate provides the common checks most relying
//! parties want:
//!
//! - [`IssuanceDatePolicy`] / [`ExpirationDatePolicy`] — date-window checks
//! - [`TrustedIssuerPolicy`] — TOML-configured issuer allow-list
//! - [`SchemaPolicy`] — JSON Schema conformance via the `jsonschema` crate
//! - [`CustomPolicy`] — closure adapter for one-off rules
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use attestor_core::{Auditor, traits::VerificationPolicy};
//! use attestor_policy::{ExpirationDatePolicy, TrustedIssuerPolicy};
//!
//! let policies: Vec<Box<dyn VerificationPolicy>> = vec![
//!     Box::new(ExpirationDatePolicy::new()),
//!     Box::new(TrustedIssuerPolicy::from_file("issuers.toml".as_ref())?),
//! ];
//! let result = Auditor::new().verify(&credential, &policies)?;
//! ```

pub mod custom;
pub mod expiry;
pub mod issuer;
pub mod schema;

pub use custom::{CustomPolicy, PolicyFn};
pub use expiry::{ExpirationDatePolicy, IssuanceDatePolicy};
pub use issuer::{TrustedIssuerConfig, TrustedIssuerPolicy};
pub use schema::SchemaPolicy;

// ── Tests ─────────────────────────────────────────────────────────────────────
