//! Error types for the attestor verification pipeline.
//!
//! All fallible operations across the workspace return `AttestorResult<T>`.
//! Only `Parse` and `Config` ever escape a verification call — a policy
//! failing its check is an ordinary outcome inside the returned result, and
//! a policy faulting internally is caught and recorded per policy id.

use thiserror::Error;

/// The unified error type for the attestor crates.
#[derive(Debug, Error)]
pub enum AttestorError {
    /// Input text does not conform to the credential/presentation data model.
    ///
    /// Raised before any policy runs; a call that parses always produces a
    /// full `VerificationResult`, never a partial one.
    #[error("credential parse error: {reason}")]
    Parse { reason: String },

    /// The caller supplied structurally invalid policy or engine configuration.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// A policy implementation failed while evaluating a credential.
    ///
    /// Policies return this for internal faults (I/O failure, malformed
    /// schema, unreachable status endpoint). The engine converts it into a
    /// faulted outcome for that policy id and continues with the rest.
    #[error("policy '{policy}' failed during evaluation: {reason}")]
    PolicyExecution { policy: String, reason: String },

    /// A template could not be loaded or stored.
    #[error("template error: {reason}")]
    Template { reason: String },

    /// No template exists under the requested name in any source.
    #[error("no template found with name: {name}")]
    TemplateNotFound { name: String },
}

/// Convenience alias used throughout the attestor crates.
pub type AttestorResult<T> = Result<T, AttestorError>;
