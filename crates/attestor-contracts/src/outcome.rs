//! Per-policy outcome type.
//!
//! A `PolicyOutcome` is richer than the bare boolean a policy ultimately
//! reduces to: a legitimate failure may carry a human-readable `reason`, and
//! a policy that could not complete its check at all carries a `fault`
//! cause. The two must never be conflated — a faulted policy is recorded as
//! not passed, but remains distinguishable from a check that ran and said no.

use serde::{Deserialize, Serialize};

/// The verdict one policy produced for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    /// True only when the check ran to completion and held.
    pub passed: bool,

    /// Human-readable explanation of a legitimate failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Cause description when the policy itself faulted mid-evaluation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

impl PolicyOutcome {
    /// The check ran and held.
    pub fn pass() -> Self {
        Self { passed: true, reason: None, fault: None }
    }

    /// The check ran and did not hold, with an explanation.
    pub fn fail(reason: impl Into<String>) -> Self {
        Self { passed: false, reason: Some(reason.into()), fault: None }
    }

    /// The policy could not complete its check.
    ///
    /// A faulted outcome is never `passed`, but carries the cause so it is
    /// not mistaken for a legitimate `false`.
    pub fn fault(cause: impl Into<String>) -> Self {
        Self { passed: false, reason: None, fault: Some(cause.into()) }
    }

    /// Lift a bare boolean verdict, for policies with nothing to explain.
    pub fn from_bool(passed: bool) -> Self {
        Self { passed, reason: None, fault: None }
    }

    /// True when the policy faulted rather than legitimately failing.
    pub fn is_fault(&self) -> bool {
        self.fault.is_some()
    }

    /// Combine this outcome with another under logical AND.
    ///
    /// Used when folding a presentation's wrapper outcome with the outcomes
    /// of its embedded credentials: the first non-passing outcome wins and
    /// keeps its detail. Commutative in `passed`; detail selection is
    /// left-biased.
    pub fn and(self, other: PolicyOutcome) -> PolicyOutcome {
        if !self.passed {
            self
        } else {
            other
        }
    }

    /// Render to the transport form: a bare JSON boolean when there is no
    /// detail to report, otherwise the full `{passed, reason?, fault?}`
    /// object.
    pub fn render(&self) -> serde_json::Value {
        if self.reason.is_none() && self.fault.is_none() {
            serde_json::Value::Bool(self.passed)
        } else {
            // Serialization of this struct cannot fail: all fields are
            // strings and booleans.
            serde_json::to_value(self).unwrap_or(serde_json::Value::Bool(self.passed))
        }
    }
}
