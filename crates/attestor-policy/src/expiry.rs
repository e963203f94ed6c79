//! Date-window policies: issuance must lie in the past, expiry in the
//! future.
//!
//! Both policies exempt presentation wrappers — a presentation carries no
//! issuance or expiration date of its own, so the wrapper check is
//! vacuously true and only the embedded credentials are held to the window.

use chrono::Utc;

use attestor_contracts::{
    credential::VerifiableCredential, error::AttestorResult, outcome::PolicyOutcome,
};
use attestor_core::traits::VerificationPolicy;

/// Fails when `issuanceDate` is missing or lies in the future.
#[derive(Debug, Default)]
pub struct IssuanceDatePolicy;

impl IssuanceDatePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl VerificationPolicy for IssuanceDatePolicy {
    fn id(&self) -> &str {
        "issuance-date"
    }

    fn verify(&self, vc: &VerifiableCredential) -> AttestorResult<PolicyOutcome> {
        if vc.is_presentation() {
            return Ok(PolicyOutcome::pass());
        }

        match vc.issuance_date {
            None => Ok(PolicyOutcome::fail("credential has no issuance date")),
            Some(issued) if issued > Utc::now() => Ok(PolicyOutcome::fail(format!(
                "issuance date {} lies in the future",
                issued.to_rfc3339()
            ))),
            Some(_) => Ok(PolicyOutcome::pass()),
        }
    }
}

/// Fails when `expirationDate` has passed. A credential without an
/// expiration date never expires and passes.
#[derive(Debug, Default)]
pub struct ExpirationDatePolicy;

impl ExpirationDatePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl VerificationPolicy for ExpirationDatePolicy {
    fn id(&self) -> &str {
        "expiration-date"
    }

    fn verify(&self, vc: &VerifiableCredential) -> AttestorResult<PolicyOutcome> {
        if vc.is_presentation() {
            return Ok(PolicyOutcome::pass());
        }

        match vc.expiration_date {
            Some(expires) if expires <= Utc::now() => Ok(PolicyOutcome::fail(format!(
                "credential expired at {}",
                expires.to_rfc3339()
            ))),
            _ => Ok(PolicyOutcome::pass()),
        }
    }
}
