//! attestor — Credential Verification Demo CLI
//!
//! Verifies credential and presentation files against the built-in policy
//! set, and exercises the template registry.
//!
//! Usage:
//!   cargo run -p demo -- verify credential.json
//!   cargo run -p demo -- verify vp.json --trusted-issuers issuers.toml
//!   cargo run -p demo -- templates
//!   cargo run -p demo -- instantiate VerifiableId

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use attestor_contracts::error::{AttestorError, AttestorResult};
use attestor_core::{traits::VerificationPolicy, Auditor};
use attestor_policy::{
    ExpirationDatePolicy, IssuanceDatePolicy, SchemaPolicy, TrustedIssuerPolicy,
};
use attestor_template::{InMemoryTemplateStore, TemplateManager};

// ── CLI definition ────────────────────────────────────────────────────────────

/// attestor — policy-based verification of Verifiable Credentials.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "attestor credential verification demo",
    long_about = "Verifies Verifiable Credentials and Presentations against a\n\
                  configurable policy set and prints the per-policy report."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify a credential or presentation file against the policy set.
    Verify {
        /// Path to the credential/presentation JSON document.
        file: PathBuf,

        /// TOML file with a `trusted_issuers` allow-list.
        #[arg(long)]
        trusted_issuers: Option<PathBuf>,

        /// JSON Schema file the document must conform to.
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Skip the issuance/expiration date checks.
        #[arg(long)]
        skip_dates: bool,
    },

    /// List all known credential templates.
    Templates {
        /// Folder of runtime template JSON files.
        #[arg(long, default_value = "vc-templates-runtime")]
        template_folder: PathBuf,
    },

    /// Mint a fresh credential envelope from a named template.
    Instantiate {
        /// The template name (e.g. "VerifiableId").
        name: String,

        /// Folder of runtime template JSON files.
        #[arg(long, default_value = "vc-templates-runtime")]
        template_folder: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Verify { file, trusted_issuers, schema, skip_dates } => {
            run_verify(&file, trusted_issuers.as_deref(), schema.as_deref(), skip_dates)
        }
        Command::Templates { template_folder } => run_templates(template_folder),
        Command::Instantiate { name, template_folder } => {
            run_instantiate(&name, template_folder)
        }
    };

    match outcome {
        Ok(passed) => {
            if !passed {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// Verify the document at `file`; returns the overall verdict.
fn run_verify(
    file: &std::path::Path,
    trusted_issuers: Option<&std::path::Path>,
    schema: Option<&std::path::Path>,
    skip_dates: bool,
) -> AttestorResult<bool> {
    let document = std::fs::read_to_string(file).map_err(|e| AttestorError::Parse {
        reason: format!("failed to read '{}': {}", file.display(), e),
    })?;

    let mut policies: Vec<Box<dyn VerificationPolicy>> = Vec::new();
    if !skip_dates {
        policies.push(Box::new(IssuanceDatePolicy::new()));
        policies.push(Box::new(ExpirationDatePolicy::new()));
    }
    if let Some(path) = trusted_issuers {
        policies.push(Box::new(TrustedIssuerPolicy::from_file(path)?));
    }
    if let Some(path) = schema {
        let schema_json = std::fs::read_to_string(path).map_err(|e| AttestorError::Config {
            reason: format!("failed to read schema '{}': {}", path.display(), e),
        })?;
        policies.push(Box::new(SchemaPolicy::from_json_str(&schema_json)?));
    }

    let result = Auditor::new().verify_json(&document, &policies)?;

    // Pretty-printing a just-built report cannot fail.
    println!(
        "{}",
        serde_json::to_string_pretty(&result.to_report()).unwrap_or_default()
    );
    Ok(result.overall())
}

/// List every template known to the manager.
fn run_templates(template_folder: PathBuf) -> AttestorResult<bool> {
    let manager = TemplateManager::new(Box::new(InMemoryTemplateStore::new()), template_folder);

    for template in manager.list_templates()? {
        let source = if template.mutable { "registered" } else { "read-only" };
        println!("{}  ({})", template.name, source);
    }
    Ok(true)
}

/// Mint a credential envelope from the named template and print it.
fn run_instantiate(name: &str, template_folder: PathBuf) -> AttestorResult<bool> {
    let manager = TemplateManager::new(Box::new(InMemoryTemplateStore::new()), template_folder);

    let credential = manager.get_template(name, true)?.instantiate()?;
    println!("{}", credential.to_json()?);
    Ok(true)
}
