// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use crate::types::Artifact;

/// Response of the attestation evidence verification.
///
/// The report body is always present, everything else is only set if IAS
/// returned the corresponding header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// Raw Attestation Verification Report (JSON) as returned in the response body.
    pub report: Vec<u8>,
    /// Content of the `X-IASReport-Signature` header (base64 encoded signature).
    pub signature: Option<Vec<u8>>,
    /// Percent-decoded content of the `X-IASReport-Signing-Certificate` header (PEM chain).
    pub certificate: Option<Vec<u8>>,
    /// Content of the `Advisory-IDs` header (comma separated advisory ids).
    pub advisories: Option<Vec<u8>>,
}

impl VerificationReport {
    /// Returns the bytes of the given artifact, if the response contained it.
    pub fn artifact(&self, artifact: Artifact) -> Option<&[u8]> {
        match artifact {
            Artifact::Report => Some(&self.report),
            Artifact::Signature => self.signature.as_deref(),
            Artifact::Certificate => self.certificate.as_deref(),
            Artifact::Advisories => self.advisories.as_deref(),
        }
    }
}
