//! The aggregate verification result.
//!
//! Produced exactly once per `Auditor::verify` call and immutable after
//! construction. The invariant `overall == AND over all outcomes` is
//! enforced by the only constructor — there is no way to build a result
//! whose overall verdict disagrees with its per-policy breakdown.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::outcome::PolicyOutcome;

/// The aggregate verdict plus per-policy breakdown for one verification run.
///
/// No iteration order is promised on the per-policy map; only the aggregate
/// value and per-id lookup are contractual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    overall: bool,
    policy_results: HashMap<String, PolicyOutcome>,
}

impl VerificationResult {
    /// Build a result from per-policy outcomes, computing the aggregate.
    ///
    /// `overall` is the logical AND over every outcome's `passed` —
    /// vacuously `true` when no policies were supplied.
    pub fn from_outcomes(policy_results: HashMap<String, PolicyOutcome>) -> Self {
        let overall = policy_results.values().all(|o| o.passed);
        Self { overall, policy_results }
    }

    /// True only when every policy passed.
    pub fn overall(&self) -> bool {
        self.overall
    }

    /// The per-policy breakdown, keyed by policy id.
    pub fn policy_results(&self) -> &HashMap<String, PolicyOutcome> {
        &self.policy_results
    }

    /// Look up the outcome recorded for one policy id.
    pub fn outcome(&self, policy_id: &str) -> Option<&PolicyOutcome> {
        self.policy_results.get(policy_id)
    }

    /// The ids of policies that faulted rather than legitimately failing.
    ///
    /// Callers that want fail-fast semantics on internal faults can treat a
    /// non-empty return as fatal.
    pub fn faulted_policies(&self) -> Vec<&str> {
        self.policy_results
            .iter()
            .filter(|(_, o)| o.is_fault())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Render the transport-agnostic report consumed by API/CLI layers:
    /// `{overall, policyResults: {<id>: <boolean-or-detail>}}`.
    pub fn to_report(&self) -> serde_json::Value {
        let results: serde_json::Map<String, serde_json::Value> = self
            .policy_results
            .iter()
            .map(|(id, outcome)| (id.clone(), outcome.render()))
            .collect();

        serde_json::json!({
            "overall": self.overall,
            "policyResults": results,
        })
    }
}
