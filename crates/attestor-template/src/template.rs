//! The template value type.

use uuid::Uuid;

use attestor_contracts::{
    credential::VerifiableCredential,
    error::{AttestorError, AttestorResult},
};

/// A named credential template.
///
/// `template` is `None` when only the name was requested (listing) or the
/// body could not be loaded. `mutable` is true for registry-stored
/// templates, false for bundled and runtime-folder ones.
#[derive(Debug, Clone, PartialEq)]
pub struct VcTemplate {
    /// The template name, unique across all sources.
    pub name: String,
    /// The template body, when loaded.
    pub template: Option<VerifiableCredential>,
    /// Whether the template can be re-registered or unregistered.
    pub mutable: bool,
}

impl VcTemplate {
    /// Mint a fresh credential from this template's body.
    ///
    /// The new credential gets a unique `urn:uuid:` id; everything else is
    /// copied from the template. Filling in the subject, dates, and proof
    /// is the issuance pipeline's job.
    ///
    /// # Errors
    ///
    /// Returns `AttestorError::Template` when the body was not loaded.
    pub fn instantiate(&self) -> AttestorResult<VerifiableCredential> {
        let mut vc = self
            .template
            .clone()
            .ok_or_else(|| AttestorError::Template {
                reason: format!("template '{}' was loaded without its body", self.name),
            })?;
        vc.id = Some(format!("urn:uuid:{}", Uuid::new_v4()));
        Ok(vc)
    }
}
