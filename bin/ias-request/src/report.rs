// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Verify attestation evidence (quote) workflow

use crate::{
    error::{Error, Result},
    persist::ArtifactPaths,
};
use clap::Args;
use intel_ias_api::{Artifact, EpidQuote, GroupId, IasClient, MAX_NONCE_LEN};
use std::{fs, path::PathBuf};
use tracing::{debug, info};

/// Options of the `report` request
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Path to quote to submit
    #[arg(short = 'q', long)]
    pub quote_path: Option<PathBuf>,
    /// Nonce to use (at most 32 characters)
    #[arg(short = 'n', long)]
    pub nonce: Option<String>,
    /// Path to save IAS report to
    #[arg(short = 'r', long)]
    pub report_path: Option<PathBuf>,
    /// Path to save IAS report's signature to
    #[arg(short = 's', long)]
    pub sig_path: Option<PathBuf>,
    /// Path to save IAS certificate to
    #[arg(short = 'c', long)]
    pub cert_path: Option<PathBuf>,
    /// Path to save IAS advisories to
    #[arg(short = 'a', long)]
    pub advisory_path: Option<PathBuf>,
}

/// Reads and validates the quote, submits it to IAS and saves the requested artifacts.
pub async fn run_report(client: &IasClient, args: ReportArgs) -> Result<()> {
    let ReportArgs {
        quote_path,
        nonce,
        report_path,
        sig_path,
        cert_path,
        advisory_path,
    } = args;

    let report_path = report_path.ok_or_else(|| Error::invalid_input("Report path not specified"))?;
    let quote_path = quote_path.ok_or_else(|| Error::invalid_input("Quote path not specified"))?;
    if nonce.as_ref().is_some_and(|n| n.len() > MAX_NONCE_LEN) {
        return Err(Error::invalid_input(format!(
            "Nonce longer than {MAX_NONCE_LEN} characters"
        )));
    }

    let raw = fs::read(&quote_path).map_err(|e| Error::io(&quote_path, e))?;
    let quote = EpidQuote::parse(&raw)?;

    let header = quote.header();
    debug!(
        version = header.version(),
        sign_type = header.sign_type(),
        epid_group_id = %GroupId::from(header.epid_group_id()),
        signature_len = header.signature_len(),
        discarded = quote.discarded(),
        "read quote from '{}'",
        quote_path.display()
    );

    let paths = ArtifactPaths::default()
        .with(Artifact::Report, Some(report_path))
        .with(Artifact::Signature, sig_path)
        .with(Artifact::Certificate, cert_path)
        .with(Artifact::Advisories, advisory_path);

    let report = client.verify_quote(quote.as_bytes(), nonce.as_deref()).await?;
    info!(size = report.report.len(), "received IAS report");

    paths.persist(&report)?;

    println!("IAS submission successful");
    Ok(())
}
