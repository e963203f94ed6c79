//! JSON-Schema conformance policy.
//!
//! Validates the full document against a caller-supplied JSON Schema using
//! the `jsonschema` crate. Validation violations are a legitimate failure
//! listing every violation; a schema document that does not compile is a
//! policy fault — the check never ran, and the engine records it as such.

use tracing::{debug, warn};

use attestor_contracts::{
    credential::VerifiableCredential,
    error::{AttestorError, AttestorResult},
    outcome::PolicyOutcome,
};
use attestor_core::traits::VerificationPolicy;

/// Validates credentials against a JSON Schema document.
#[derive(Debug)]
pub struct SchemaPolicy {
    schema: serde_json::Value,
}

impl SchemaPolicy {
    /// Build the policy from an already-parsed schema document.
    pub fn new(schema: serde_json::Value) -> Self {
        Self { schema }
    }

    /// Parse `s` as JSON and build the policy from it.
    ///
    /// Returns `AttestorError::Config` when `s` is not valid JSON. Whether
    /// the document is a *valid schema* is only known at evaluation time.
    pub fn from_json_str(s: &str) -> AttestorResult<Self> {
        let schema = serde_json::from_str(s).map_err(|e| AttestorError::Config {
            reason: format!("failed to parse schema JSON: {}", e),
        })?;
        Ok(Self::new(schema))
    }
}

impl VerificationPolicy for SchemaPolicy {
    fn id(&self) -> &str {
        "json-schema"
    }

    /// Validate the document against the configured schema.
    ///
    /// All violations are collected before returning so callers see the
    /// full failure set in one pass.
    fn verify(&self, vc: &VerifiableCredential) -> AttestorResult<PolicyOutcome> {
        let document = serde_json::to_value(vc).map_err(|e| AttestorError::PolicyExecution {
            policy: self.id().to_string(),
            reason: format!("credential cannot be rendered for validation: {}", e),
        })?;

        let validator = jsonschema::validator_for(&self.schema).map_err(|e| {
            warn!(error = %e, "schema document failed to compile");
            AttestorError::PolicyExecution {
                policy: self.id().to_string(),
                reason: format!("invalid JSON Schema document: {}", e),
            }
        })?;

        let violations: Vec<String> = validator
            .iter_errors(&document)
            .map(|error| format!("violation at {}: {}", error.instance_path, error))
            .collect();

        debug!(violation_count = violations.len(), "schema validation complete");

        if violations.is_empty() {
            Ok(PolicyOutcome::pass())
        } else {
            Ok(PolicyOutcome::fail(violations.join("; ")))
        }
    }
}
