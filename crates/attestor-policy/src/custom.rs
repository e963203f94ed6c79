//! Closure-backed policy adapter.
//!
//! Lets callers supply a check as a plain function without writing a full
//! trait implementation — useful for one-off rules and tests.

use attestor_contracts::{
    credential::VerifiableCredential, error::AttestorResult, outcome::PolicyOutcome,
};
use attestor_core::traits::VerificationPolicy;

/// A caller-supplied check function.
pub type PolicyFn =
    Box<dyn Fn(&VerifiableCredential) -> AttestorResult<PolicyOutcome> + Send + Sync>;

/// Wraps a closure as a [`VerificationPolicy`] under a caller-chosen id.
///
/// ```rust,ignore
/// use attestor_policy::CustomPolicy;
/// use attestor_contracts::outcome::PolicyOutcome;
///
/// let has_proof = CustomPolicy::new("proof-present", Box::new(|vc| {
///     Ok(PolicyOutcome::from_bool(vc.proof.is_some()))
/// }));
/// ```
pub struct CustomPolicy {
    policy_id: String,
    check: PolicyFn,
}

impl CustomPolicy {
    /// Wrap `check` under the given id.
    pub fn new(policy_id: impl Into<String>, check: PolicyFn) -> Self {
        Self {
            policy_id: policy_id.into(),
            check,
        }
    }
}

impl VerificationPolicy for CustomPolicy {
    fn id(&self) -> &str {
        &self.policy_id
    }

    fn verify(&self, vc: &VerifiableCredential) -> AttestorResult<PolicyOutcome> {
        (self.check)(vc)
    }
}
