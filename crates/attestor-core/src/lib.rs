//! # attestor-core
//!
//! The policy-based verification engine for Verifiable Credentials and
//! Presentations.
//!
//! This crate provides:
//! - The [`traits::VerificationPolicy`] contract every pluggable policy
//!   implements
//! - The [`Auditor`] that applies a caller-supplied policy set to a
//!   document and aggregates the per-policy outcomes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use attestor_core::{Auditor, traits::VerificationPolicy};
//!
//! let auditor = Auditor::new();
//! let result = auditor.verify(&credential, &policies)?;
//! ```

pub mod auditor;
pub mod traits;

pub use auditor::Auditor;
