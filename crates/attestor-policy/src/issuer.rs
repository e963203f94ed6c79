//! Issuer allow-list policy driven by a TOML configuration file.
//!
//! Construct via [`TrustedIssuerPolicy::new`] with an in-memory list, or
//! load the list from TOML with `from_toml_str` / `from_file`:
//!
//! ```toml
//! trusted_issuers = [
//!     "did:example:university-registrar",
//!     "did:example:national-id-authority",
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use attestor_contracts::{
    credential::VerifiableCredential,
    error::{AttestorError, AttestorResult},
    outcome::PolicyOutcome,
};
use attestor_core::traits::VerificationPolicy;

/// The TOML document shape for the issuer allow-list.
#[derive(Debug, Clone, Deserialize)]
pub struct TrustedIssuerConfig {
    /// Issuer DIDs that are accepted. Exact, case-sensitive matching.
    pub trusted_issuers: Vec<String>,
}

/// Fails unless the document's issuer appears in a configured allow-list.
///
/// A blank issuer always fails. Presentation wrappers are exempt — the
/// wrapper is asserted by the holder, not an issuer, so only the embedded
/// credentials are held to the list.
#[derive(Debug)]
pub struct TrustedIssuerPolicy {
    trusted: HashSet<String>,
}

impl TrustedIssuerPolicy {
    /// Build the policy from an in-memory list of issuer DIDs.
    pub fn new(issuers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            trusted: issuers.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse `s` as TOML and build the policy from it.
    ///
    /// Returns `AttestorError::Config` if the TOML is malformed or does not
    /// match the expected [`TrustedIssuerConfig`] shape.
    pub fn from_toml_str(s: &str) -> AttestorResult<Self> {
        let config: TrustedIssuerConfig = toml::from_str(s).map_err(|e| AttestorError::Config {
            reason: format!("failed to parse trusted-issuer TOML: {}", e),
        })?;
        Ok(Self::new(config.trusted_issuers))
    }

    /// Read the file at `path` and parse it as a trusted-issuer TOML list.
    ///
    /// Returns `AttestorError::Config` if the file cannot be read or its
    /// contents are not valid TOML matching [`TrustedIssuerConfig`].
    pub fn from_file(path: &Path) -> AttestorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AttestorError::Config {
            reason: format!(
                "failed to read trusted-issuer file '{}': {}",
                path.display(),
                e
            ),
        })?;
        Self::from_toml_str(&contents)
    }
}

impl VerificationPolicy for TrustedIssuerPolicy {
    fn id(&self) -> &str {
        "trusted-issuer"
    }

    fn verify(&self, vc: &VerifiableCredential) -> AttestorResult<PolicyOutcome> {
        if vc.is_presentation() {
            return Ok(PolicyOutcome::pass());
        }

        if vc.issuer.is_empty() {
            return Ok(PolicyOutcome::fail("credential has no issuer"));
        }

        debug!(issuer = %vc.issuer, "checking issuer against allow-list");

        if self.trusted.contains(&vc.issuer) {
            Ok(PolicyOutcome::pass())
        } else {
            Ok(PolicyOutcome::fail(format!(
                "issuer '{}' is not in the trusted-issuer list",
                vc.issuer
            )))
        }
    }
}
