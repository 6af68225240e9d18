// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use reqwest::{Response, StatusCode};
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with the Intel Attestation Service.
#[derive(Error, Debug)]
pub enum IntelIasError {
    /// Wraps an underlying reqwest error.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Wraps a URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Wraps a Serde JSON error.
    #[error("Serde JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The response body was not valid base64.
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Represents a general API error, capturing the HTTP status and the request id.
    #[error("API Error: Status={status}, Request-ID={request_id}")]
    ApiError {
        /// HTTP status code returned by the API.
        status: StatusCode,
        /// The unique request identifier for tracing errors.
        request_id: String,
    },

    /// Represents an error while parsing a header's value.
    #[error("Header value parse error for '{0}': {1}")]
    HeaderValueParse(&'static str, String),

    /// Represents an invalid subscription key.
    #[error("Invalid Subscription Key format")]
    InvalidSubscriptionKey,

    /// Indicates an invalid parameter was provided.
    #[error("Invalid parameter value: {0}")]
    InvalidParameter(&'static str),
}

/// Extracts the request id IAS attaches to every response.
pub(crate) fn extract_request_id(response: &Response) -> String {
    response
        .headers()
        .get("Request-ID")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("Unknown")
        .to_string()
}

/// Checks the response status and returns an ApiError if it's not one of the expected statuses.
pub(crate) fn check_status(
    response: Response,
    expected_statuses: &[StatusCode],
) -> Result<Response, IntelIasError> {
    let status = response.status();
    if expected_statuses.contains(&status) {
        Ok(response)
    } else {
        Err(IntelIasError::ApiError {
            status,
            request_id: extract_request_id(&response),
        })
    }
}
