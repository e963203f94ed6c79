//! The verification policy contract.
//!
//! A policy is a named, stateless-per-call check against a single
//! credential. Concrete policies — issuer allow-lists, signature checks,
//! expiry checks, revocation lookups — live outside this crate; the engine
//! only depends on this trait and holds no registry of implementations.

use attestor_contracts::{
    credential::VerifiableCredential, error::AttestorResult, outcome::PolicyOutcome,
};

/// A single named verification rule applied to one credential at a time.
///
/// Implementations are constructed and configured by the caller before
/// invocation and may be reused across many `verify` calls, so they must be
/// free of per-call mutable state (or protect internal caches with their own
/// synchronization) — hence the `Send + Sync` bound. The engine takes no
/// locks on the caller's behalf.
pub trait VerificationPolicy: Send + Sync {
    /// Stable identifier for this policy, used as the aggregation key.
    ///
    /// Two policies with the same id supplied in one call are a
    /// configuration hazard: the later one overwrites the earlier entry in
    /// the result map.
    fn id(&self) -> &str;

    /// Check this policy against one fully parsed credential.
    ///
    /// The argument is never raw serialized text. When the engine verifies
    /// a presentation, this method is called once with the presentation
    /// wrapper itself and once per embedded credential.
    ///
    /// The method must be side-effect-free with respect to the document.
    /// Read-only external I/O (a revocation lookup, a signature check
    /// against a key service) is fine.
    ///
    /// # Errors
    ///
    /// `Err` is the fault channel: return it when the check itself could
    /// not complete (I/O failure, malformed configuration discovered late).
    /// The engine records the fault under this policy's id and continues
    /// with the remaining policies. A credential that legitimately fails
    /// the check is `Ok(PolicyOutcome::fail(..))`, never `Err`.
    fn verify(&self, vc: &VerifiableCredential) -> AttestorResult<PolicyOutcome>;
}
