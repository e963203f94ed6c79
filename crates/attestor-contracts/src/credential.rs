//! W3C Verifiable Credential and Presentation envelope types.
//!
//! The envelope follows the W3C VC Data Model wire form (`@context`, `type`,
//! `issuer`, `credentialSubject`, optional `proof`). A presentation is not a
//! separate Rust type: it is a credential whose `type` list contains
//! [`PRESENTATION_TYPE`] and which may embed further credentials in its
//! `verifiableCredential` array. Everywhere a credential is accepted, a
//! presentation is accepted too — the verification engine decides whether to
//! recurse by calling [`VerifiableCredential::is_presentation`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AttestorError, AttestorResult};

/// The `type` tag that marks a document as a Verifiable Presentation.
pub const PRESENTATION_TYPE: &str = "VerifiablePresentation";

/// A W3C Verifiable Credential (or Presentation — see module docs).
///
/// The envelope structure is rigid, while `credential_subject` is
/// intentionally extensible per the W3C specification. Instances are treated
/// as immutable by the verification engine: policies receive `&self` and
/// must not need anything more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiableCredential {
    /// The JSON-LD context URIs.
    #[serde(rename = "@context", default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,

    /// The credential identifier (DID or URI). Absent on templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The credential type(s), most specific last.
    #[serde(rename = "type")]
    pub credential_type: Vec<String>,

    /// The DID of the credential issuer. Empty when not asserted —
    /// issuer-oriented policies treat an empty issuer as a failure.
    #[serde(default)]
    pub issuer: String,

    /// The DID of the presenting holder. Only meaningful on presentations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,

    /// When the credential was issued (UTC).
    #[serde(rename = "issuanceDate", skip_serializing_if = "Option::is_none")]
    pub issuance_date: Option<DateTime<Utc>>,

    /// Optional expiration date (UTC).
    #[serde(rename = "expirationDate", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,

    /// The credential subject — intentionally extensible.
    #[serde(rename = "credentialSubject", default)]
    pub credential_subject: serde_json::Value,

    /// Reference to the schema the subject claims conformance with.
    #[serde(rename = "credentialSchema", skip_serializing_if = "Option::is_none")]
    pub credential_schema: Option<CredentialSchema>,

    /// Reference to the status/revocation entry for this credential.
    #[serde(rename = "credentialStatus", skip_serializing_if = "Option::is_none")]
    pub credential_status: Option<CredentialStatus>,

    /// Cryptographic proof attached to this credential. Opaque to the
    /// verification engine — signature checking is a policy concern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Proof>,

    /// Credentials embedded in a presentation. Empty for plain credentials.
    #[serde(
        rename = "verifiableCredential",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub verifiable_credential: Vec<VerifiableCredential>,
}

impl VerifiableCredential {
    /// Parse a credential or presentation from its JSON wire form.
    ///
    /// This is the ingestion adapter: malformed input is
    /// `AttestorError::Parse`, which is distinct from any policy failing —
    /// a parse error means no policy ever ran.
    pub fn from_json(json: &str) -> AttestorResult<Self> {
        serde_json::from_str(json).map_err(|e| AttestorError::Parse {
            reason: format!("document does not conform to the VC data model: {}", e),
        })
    }

    /// Serialize back to the JSON wire form.
    pub fn to_json(&self) -> AttestorResult<String> {
        serde_json::to_string(self).map_err(|e| AttestorError::Parse {
            reason: format!("credential cannot be serialized: {}", e),
        })
    }

    /// True when this document is a Verifiable Presentation.
    pub fn is_presentation(&self) -> bool {
        self.credential_type.iter().any(|t| t == PRESENTATION_TYPE)
    }

    /// The credentials embedded in this presentation, possibly empty.
    pub fn embedded_credentials(&self) -> &[VerifiableCredential] {
        &self.verifiable_credential
    }

    /// The most specific type tag (the last entry of the `type` list).
    pub fn primary_type(&self) -> Option<&str> {
        self.credential_type.last().map(String::as_str)
    }

    /// The `id` field of the credential subject, when present.
    pub fn subject_id(&self) -> Option<&str> {
        self.credential_subject.get("id").and_then(|v| v.as_str())
    }
}

/// A cryptographic proof attached to a Verifiable Credential.
///
/// The engine never interprets this beyond presence — verifying the
/// signature against a key service is the job of a concrete policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proof {
    /// The proof suite (e.g. "Ed25519Signature2020").
    #[serde(rename = "type")]
    pub proof_type: String,

    /// The DID URL of the verification method used.
    #[serde(rename = "verificationMethod", skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<String>,

    /// When the proof was created (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Why the proof was attached (e.g. "assertionMethod", "authentication").
    #[serde(rename = "proofPurpose", skip_serializing_if = "Option::is_none")]
    pub proof_purpose: Option<String>,

    /// The encoded proof value.
    #[serde(rename = "proofValue", skip_serializing_if = "Option::is_none")]
    pub proof_value: Option<String>,
}

/// Reference to the schema a credential subject claims conformance with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSchema {
    /// URI of the schema document.
    pub id: String,
    /// Schema kind (e.g. "JsonSchema").
    #[serde(rename = "type")]
    pub schema_type: String,
}

/// Reference to the status/revocation entry for a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialStatus {
    /// URI of the status entry.
    pub id: String,
    /// Status method kind (e.g. "StatusList2021Entry").
    #[serde(rename = "type")]
    pub status_type: String,
}
