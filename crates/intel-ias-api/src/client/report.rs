// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Verify Attestation Evidence

use super::{IasClient, MAX_NONCE_LEN};
use crate::{
    error::{check_status, extract_request_id, IntelIasError},
    requests::AttestationEvidenceRequest,
    responses::VerificationReport,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{header, StatusCode};
use tracing::debug;

impl IasClient {
    /// POST /attestation/v3/report
    /// Submits an EPID quote to IAS and returns the Attestation Verification Report.
    ///
    /// # Arguments
    ///
    /// * `quote` - The quote, already truncated to its canonical length
    ///   (see [`crate::EpidQuote`]).
    /// * `nonce` - An optional nonce of at most [`MAX_NONCE_LEN`] characters, echoed in the report.
    ///
    /// # Returns
    ///
    /// A [`VerificationReport`] with the report body and, if present in the response,
    /// the report signature, the signing certificate chain and the advisory ids.
    ///
    /// # Errors
    ///
    /// Returns an `IntelIasError` if the nonce is too long, if the request fails,
    /// or if the response status is not `200 OK`.
    pub async fn verify_quote(
        &self,
        quote: &[u8],
        nonce: Option<&str>,
    ) -> Result<VerificationReport, IntelIasError> {
        if nonce.is_some_and(|n| n.len() > MAX_NONCE_LEN) {
            return Err(IntelIasError::InvalidParameter("nonce longer than 32 characters"));
        }

        let body = serde_json::to_vec(&AttestationEvidenceRequest {
            isv_enclave_quote: STANDARD.encode(quote),
            nonce,
        })?;

        debug!(url = %self.report_url, quote_len = quote.len(), "submitting quote to IAS");

        let request_builder = self
            .client
            .post(self.report_url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.authenticated(request_builder).send().await?;
        let response = check_status(response, &[StatusCode::OK])?;

        debug!(request_id = %extract_request_id(&response), "IAS report received");

        let signature = Self::get_optional_header(&response, "X-IASReport-Signature", false)?;
        // The certificate chain is URL encoded PEM
        let certificate =
            Self::get_optional_header(&response, "X-IASReport-Signing-Certificate", true)?;
        let advisories = Self::get_optional_header(&response, "Advisory-IDs", false)?;

        let report = response.bytes().await?.to_vec();

        Ok(VerificationReport {
            report,
            signature,
            certificate,
            advisories,
        })
    }
}
