// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Intel Attestation Service Client
//!
//! This crate provides an API client for the EPID based Intel Attestation Service (IAS),
//! together with the local checks that have to pass before anything is sent to it:
//! structural validation of an SGX EPID quote and parsing of hex-encoded EPID group ids.
//!
//! Create an [`IasClient`] to interface with the service.
//!
//! Example
//! ```rust,no_run
//! use intel_ias_api::{EpidQuote, GroupId, IasClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!    let client = IasClient::with_default_urls("0123456789abcdef0123456789abcdef")?;
//!
//!    let gid: GroupId = "00000b5d".parse()?;
//!    let sigrl = client.get_sigrl(&gid).await?;
//!    println!("SigRL for {gid}: {} bytes", sigrl.len());
//!
//!    let raw = std::fs::read("quote.bin")?;
//!    let quote = EpidQuote::parse(&raw)?;
//!    let report = client.verify_quote(quote.as_bytes(), None).await?;
//!    println!("{}", String::from_utf8_lossy(&report.report));
//!
//!    Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]

mod client;
mod error;
pub mod quote;
mod requests;
mod responses;
mod types;

// Re-export public items
pub use client::{IasClient, DEFAULT_REPORT_URL, DEFAULT_SIGRL_URL, MAX_NONCE_LEN};
pub use error::IntelIasError;
pub use quote::{canonical_quote_len, EpidQuote, EpidQuoteHeader, QuoteError};
pub use responses::VerificationReport;
pub use types::{Artifact, GroupId, GroupIdError};
