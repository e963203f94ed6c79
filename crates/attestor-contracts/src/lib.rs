//! # attestor-contracts
//!
//! Shared types, schemas, and contracts for the attestor verification
//! engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod credential;
pub mod error;
pub mod outcome;
pub mod result;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::credential::{VerifiableCredential, PRESENTATION_TYPE};
    use crate::error::AttestorError;
    use crate::outcome::PolicyOutcome;
    use crate::result::VerificationResult;

    // ── VerifiableCredential parsing ─────────────────────────────────────────

    #[test]
    fn credential_parses_from_wire_form() {
        let json = r#"{
            "@context": ["https://www.w3.org/2018/credentials/v1"],
            "id": "urn:uuid:0c07e02b-5ec8-4a85-9273-0f2fdbedc2ca",
            "type": ["VerifiableCredential", "UniversityDegreeCredential"],
            "issuer": "did:example:issuer-1",
            "issuanceDate": "2024-03-01T12:00:00Z",
            "credentialSubject": { "id": "did:example:subject-1", "degree": "MSc" },
            "proof": { "type": "Ed25519Signature2020", "proofValue": "z3aX..." }
        }"#;

        let vc = VerifiableCredential::from_json(json).unwrap();

        assert_eq!(vc.issuer, "did:example:issuer-1");
        assert_eq!(vc.primary_type(), Some("UniversityDegreeCredential"));
        assert_eq!(vc.subject_id(), Some("did:example:subject-1"));
        assert!(!vc.is_presentation());
        assert!(vc.embedded_credentials().is_empty());
        assert!(vc.proof.is_some());
    }

    #[test]
    fn presentation_is_detected_by_type_tag() {
        let json = r#"{
            "type": ["VerifiablePresentation"],
            "holder": "did:example:holder-1",
            "verifiableCredential": [
                { "type": ["VerifiableCredential"], "issuer": "did:example:issuer-1" }
            ]
        }"#;

        let vp = VerifiableCredential::from_json(json).unwrap();

        assert!(vp.is_presentation());
        assert_eq!(vp.embedded_credentials().len(), 1);
        assert_eq!(vp.embedded_credentials()[0].issuer, "did:example:issuer-1");
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let result = VerifiableCredential::from_json("{ not json ][");

        match result {
            Err(AttestorError::Parse { reason }) => {
                assert!(
                    reason.contains("VC data model"),
                    "parse error should name the data model: {reason}"
                );
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn credential_round_trips_through_json() {
        let json = r#"{
            "type": ["VerifiableCredential"],
            "issuer": "did:example:issuer-1",
            "credentialSubject": { "name": "holder" }
        }"#;

        let original = VerifiableCredential::from_json(json).unwrap();
        let reparsed = VerifiableCredential::from_json(&original.to_json().unwrap()).unwrap();

        assert_eq!(original, reparsed);
    }

    // ── PolicyOutcome algebra ────────────────────────────────────────────────

    #[test]
    fn outcome_and_is_conjunction() {
        let pass = PolicyOutcome::pass();
        let fail = PolicyOutcome::fail("issuer not trusted");

        assert!(pass.clone().and(PolicyOutcome::pass()).passed);
        assert!(!pass.clone().and(fail.clone()).passed);
        assert!(!fail.clone().and(pass.clone()).passed);
        assert!(!fail.clone().and(fail).passed);
    }

    #[test]
    fn outcome_and_keeps_first_failure_detail() {
        let first = PolicyOutcome::fail("expired");
        let second = PolicyOutcome::fail("untrusted");

        let combined = first.and(second);
        assert_eq!(combined.reason.as_deref(), Some("expired"));
    }

    #[test]
    fn faulted_outcome_is_not_passed_but_distinguishable() {
        let faulted = PolicyOutcome::fault("status endpoint unreachable");

        assert!(!faulted.passed);
        assert!(faulted.is_fault());
        assert!(!PolicyOutcome::fail("no").is_fault());
    }

    #[test]
    fn outcome_renders_bare_boolean_without_detail() {
        assert_eq!(PolicyOutcome::pass().render(), serde_json::json!(true));
        assert_eq!(
            PolicyOutcome::from_bool(false).render(),
            serde_json::json!(false)
        );
    }

    #[test]
    fn outcome_renders_object_with_detail() {
        let rendered = PolicyOutcome::fail("issuer is blank").render();

        assert_eq!(rendered["passed"], serde_json::json!(false));
        assert_eq!(rendered["reason"], serde_json::json!("issuer is blank"));
    }

    // ── VerificationResult invariant ─────────────────────────────────────────

    #[test]
    fn result_overall_is_and_over_outcomes() {
        let mut outcomes = HashMap::new();
        outcomes.insert("a".to_string(), PolicyOutcome::pass());
        outcomes.insert("b".to_string(), PolicyOutcome::fail("nope"));

        let result = VerificationResult::from_outcomes(outcomes);

        assert!(!result.overall());
        assert!(result.outcome("a").unwrap().passed);
        assert!(!result.outcome("b").unwrap().passed);
    }

    #[test]
    fn empty_result_is_vacuously_true() {
        let result = VerificationResult::from_outcomes(HashMap::new());

        assert!(result.overall());
        assert!(result.policy_results().is_empty());
    }

    #[test]
    fn result_report_shape() {
        let mut outcomes = HashMap::new();
        outcomes.insert("issuer-not-blank".to_string(), PolicyOutcome::pass());
        outcomes.insert(
            "schema".to_string(),
            PolicyOutcome::fault("schema would not compile"),
        );

        let report = VerificationResult::from_outcomes(outcomes).to_report();

        assert_eq!(report["overall"], serde_json::json!(false));
        assert_eq!(
            report["policyResults"]["issuer-not-blank"],
            serde_json::json!(true)
        );
        assert_eq!(
            report["policyResults"]["schema"]["fault"],
            serde_json::json!("schema would not compile")
        );
    }

    #[test]
    fn faulted_policies_lists_only_faults() {
        let mut outcomes = HashMap::new();
        outcomes.insert("ok".to_string(), PolicyOutcome::pass());
        outcomes.insert("failed".to_string(), PolicyOutcome::fail("no"));
        outcomes.insert("broken".to_string(), PolicyOutcome::fault("io error"));

        let result = VerificationResult::from_outcomes(outcomes);

        assert_eq!(result.faulted_policies(), vec!["broken"]);
    }

    // ── AttestorError display messages ───────────────────────────────────────

    #[test]
    fn error_parse_display() {
        let err = AttestorError::Parse {
            reason: "unexpected end of input".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("credential parse error"));
        assert!(msg.contains("unexpected end of input"));
    }

    #[test]
    fn error_config_display() {
        let err = AttestorError::Config {
            reason: "policy id must not be empty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("policy id must not be empty"));
    }

    #[test]
    fn error_policy_execution_display() {
        let err = AttestorError::PolicyExecution {
            policy: "revocation".to_string(),
            reason: "status list unreachable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("revocation"));
        assert!(msg.contains("status list unreachable"));
    }

    #[test]
    fn error_template_not_found_display() {
        let err = AttestorError::TemplateNotFound {
            name: "VerifiableId".to_string(),
        };
        assert!(err.to_string().contains("VerifiableId"));
    }

    // ── Presentation type constant ───────────────────────────────────────────

    #[test]
    fn presentation_type_constant_matches_data_model() {
        assert_eq!(PRESENTATION_TYPE, "VerifiablePresentation");
    }
}
