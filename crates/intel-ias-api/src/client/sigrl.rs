// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Retrieve Signature Revocation List

use super::IasClient;
use crate::{
    error::{check_status, extract_request_id, IntelIasError},
    types::GroupId,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::StatusCode;
use tracing::debug;

impl IasClient {
    /// GET /attestation/v3/sigrl/{gid}
    /// Retrieves the Signature Revocation List of an EPID group.
    ///
    /// # Arguments
    ///
    /// * `gid` - The EPID group id.
    ///
    /// # Returns
    ///
    /// The decoded SigRL. An empty vector means IAS has no revocations for this group,
    /// which is not an error.
    ///
    /// # Errors
    ///
    /// Returns an `IntelIasError` if the request fails, if the response status
    /// is not `200 OK`, or if the body is not valid base64.
    pub async fn get_sigrl(&self, gid: &GroupId) -> Result<Vec<u8>, IntelIasError> {
        let url = self.build_sigrl_url(gid)?;

        debug!(%url, "requesting SigRL from IAS");

        let request_builder = self.client.get(url);
        let response = self.authenticated(request_builder).send().await?;
        let response = check_status(response, &[StatusCode::OK])?;

        debug!(request_id = %extract_request_id(&response), "IAS SigRL received");

        // Response body is the base64 encoded SigRL, empty if there is none
        let body = response.bytes().await?;
        let body = body.trim_ascii();
        if body.is_empty() {
            return Ok(Vec::new());
        }

        Ok(STANDARD.decode(body)?)
    }
}
