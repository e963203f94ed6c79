//! The auditor: the policy-application and aggregation engine.
//!
//! `Auditor::verify` applies an ordered set of caller-supplied policies to a
//! credential or presentation:
//!
//!   for each policy p (keyed by p.id(), later duplicates overwrite):
//!     top      = p.verify(document)
//!     nested   = AND over p.verify(c) for each embedded credential c
//!                (vacuously pass when the document is a plain credential
//!                 or a presentation embedding nothing)
//!     record p.id() → top AND nested
//!   overall = AND over all recorded outcomes (vacuously true when empty)
//!
//! A presentation is only as trustworthy as its weakest embedded credential
//! under any given rule, so wrapper-level and credential-level checks share
//! one outcome per policy id. Callers needing separate visibility run two
//! differently-scoped policy sets.
//!
//! Fault isolation is absolute: a policy returning `Err` is recorded as a
//! faulted outcome for that id and never aborts the remaining policies.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use attestor_contracts::{
    credential::VerifiableCredential,
    error::{AttestorError, AttestorResult},
    outcome::PolicyOutcome,
    result::VerificationResult,
};

use crate::traits::VerificationPolicy;

/// The verification engine.
///
/// Explicitly constructed and stateless: the policy list is caller-owned
/// and supplied per call, there is no process-wide registry, and nothing is
/// shared between calls. One `Auditor` may serve any number of concurrent
/// `verify` calls.
#[derive(Debug, Default)]
pub struct Auditor;

impl Auditor {
    /// Create a new auditor.
    pub fn new() -> Self {
        Self
    }

    /// Apply `policies` to an already-parsed credential or presentation.
    ///
    /// # Errors
    ///
    /// Returns `AttestorError::Config` when the policy list is structurally
    /// invalid (a policy with an empty id). Policy faults and legitimate
    /// failures are NOT errors — they are recorded inside the returned
    /// `VerificationResult`.
    pub fn verify(
        &self,
        vc: &VerifiableCredential,
        policies: &[Box<dyn VerificationPolicy>],
    ) -> AttestorResult<VerificationResult> {
        self.check_configuration(policies)?;

        let mut outcomes: HashMap<String, PolicyOutcome> = HashMap::with_capacity(policies.len());

        for policy in policies {
            let outcome = self.apply_policy(policy.as_ref(), vc);
            // Keyed aggregation: a later policy with the same id overwrites
            // the earlier entry (defined last-write-wins behavior, flagged
            // at call entry).
            outcomes.insert(policy.id().to_string(), outcome);
        }

        let result = VerificationResult::from_outcomes(outcomes);
        debug!(
            overall = result.overall(),
            policy_count = policies.len(),
            "verification complete"
        );
        Ok(result)
    }

    /// Parse `json` as a credential or presentation, then verify it.
    ///
    /// # Errors
    ///
    /// Returns `AttestorError::Parse` on malformed input — surfaced before
    /// any policy runs, and distinct from every kind of policy failure.
    /// Configuration errors surface as in [`Auditor::verify`].
    pub fn verify_json(
        &self,
        json: &str,
        policies: &[Box<dyn VerificationPolicy>],
    ) -> AttestorResult<VerificationResult> {
        let vc = VerifiableCredential::from_json(json)?;
        self.verify(&vc, policies)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Reject structurally invalid policy lists at call entry.
    ///
    /// An empty id cannot participate in keyed aggregation and is rejected.
    /// Duplicate ids are a hazard, not an error: they are flagged here and
    /// resolved last-write-wins during aggregation, preserving the original
    /// observable semantics.
    fn check_configuration(&self, policies: &[Box<dyn VerificationPolicy>]) -> AttestorResult<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(policies.len());

        for policy in policies {
            let id = policy.id();
            if id.is_empty() {
                return Err(AttestorError::Config {
                    reason: "policy id must not be empty".to_string(),
                });
            }
            if !seen.insert(id) {
                warn!(
                    policy_id = %id,
                    "duplicate policy id supplied; later entry overwrites the earlier outcome"
                );
            }
        }
        Ok(())
    }

    /// Evaluate one policy against the document, recursing into embedded
    /// credentials when the document is a presentation.
    fn apply_policy(&self, policy: &dyn VerificationPolicy, vc: &VerifiableCredential) -> PolicyOutcome {
        debug!(policy_id = %policy.id(), "verifying document");
        let top_level = self.evaluate(policy, vc);

        if !vc.is_presentation() {
            return top_level;
        }

        // Presentation: every embedded credential must also satisfy the
        // policy. All embedded credentials are evaluated even after a
        // failure — aggregation is order-independent and the first failing
        // detail is kept by `and`.
        let mut combined = top_level;
        for embedded in vc.embedded_credentials() {
            debug!(
                policy_id = %policy.id(),
                credential_type = embedded.primary_type().unwrap_or("VerifiableCredential"),
                "verifying embedded credential"
            );
            combined = combined.and(self.evaluate(policy, embedded));
        }
        combined
    }

    /// Invoke one policy on one document, converting a fault into a
    /// recorded outcome instead of letting it escape.
    fn evaluate(&self, policy: &dyn VerificationPolicy, vc: &VerifiableCredential) -> PolicyOutcome {
        match policy.verify(vc) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(
                    policy_id = %policy.id(),
                    error = %e,
                    "policy faulted during evaluation; recording fault and continuing"
                );
                PolicyOutcome::fault(e.to_string())
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
