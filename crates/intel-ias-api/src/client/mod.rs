// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

mod helpers;
mod report;
mod sigrl;

use crate::error::IntelIasError;
use reqwest::Client;
use url::Url;

/// Default URL of the IAS "Verify Attestation Evidence" endpoint (development environment).
pub const DEFAULT_REPORT_URL: &str =
    "https://api.trustedservices.intel.com/sgx/dev/attestation/v3/report";

/// Default URL of the IAS "Retrieve SigRL" endpoint (development environment).
///
/// The hex-encoded EPID group id is appended as the last path segment.
pub const DEFAULT_SIGRL_URL: &str =
    "https://api.trustedservices.intel.com/sgx/dev/attestation/v3/sigrl";

/// Maximum nonce length accepted by IAS.
pub const MAX_NONCE_LEN: usize = 32;

/// Header carrying the IAS API key.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Client for the EPID based Intel Attestation Service.
///
/// The client holds the API key and the two endpoint URLs for the lifetime of the
/// process. Every operation is a single request/response round trip, nothing is
/// retried or cached.
///
/// # Examples
///
/// ```rust,no_run
/// use intel_ias_api::IasClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = IasClient::with_default_urls("0123456789abcdef0123456789abcdef")?;
///
///     let sigrl = client.get_sigrl(&"00000b5d".parse()?).await?;
///     println!("SigRL: {} bytes", sigrl.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct IasClient {
    client: Client,
    api_key: String,
    report_url: Url,
    sigrl_url: Url,
}

impl IasClient {
    /// Creates a new client talking to the default (development) IAS endpoints.
    ///
    /// # Errors
    ///
    /// Returns an `IntelIasError` if the API key is empty or the `reqwest`
    /// client cannot be built.
    pub fn with_default_urls(api_key: impl Into<String>) -> Result<Self, IntelIasError> {
        Self::new(api_key, DEFAULT_REPORT_URL, DEFAULT_SIGRL_URL)
    }

    /// Creates a new client with custom endpoint URLs.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The IAS subscription key.
    /// * `report_url` - URL of the "Verify Attestation Evidence" endpoint.
    /// * `sigrl_url` - URL of the "Retrieve SigRL" endpoint, without the group id.
    ///
    /// # Errors
    ///
    /// Returns an `IntelIasError` if the API key is empty, if one of the URLs is
    /// invalid, or if the `reqwest` client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        report_url: impl reqwest::IntoUrl,
        sigrl_url: impl reqwest::IntoUrl,
    ) -> Result<Self, IntelIasError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(IntelIasError::InvalidSubscriptionKey);
        }

        Ok(IasClient {
            client: Client::builder()
                .min_tls_version(reqwest::tls::Version::TLS_1_2)
                .build()?,
            api_key,
            report_url: report_url.into_url()?,
            sigrl_url: sigrl_url.into_url()?,
        })
    }

    /// URL of the "Verify Attestation Evidence" endpoint
    pub fn report_url(&self) -> &Url {
        &self.report_url
    }

    /// URL of the "Retrieve SigRL" endpoint
    pub fn sigrl_url(&self) -> &Url {
        &self.sigrl_url
    }
}
