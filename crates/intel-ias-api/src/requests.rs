// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use serde::Serialize;

/// Attestation Evidence Payload of the report endpoint.
#[derive(Serialize)]
pub(crate) struct AttestationEvidenceRequest<'a> {
    /// base64 encoded quote
    #[serde(rename = "isvEnclaveQuote")]
    pub(crate) isv_enclave_quote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) nonce: Option<&'a str>,
}
