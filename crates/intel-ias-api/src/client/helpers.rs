// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Internal helper methods

use super::{IasClient, SUBSCRIPTION_KEY_HEADER};
use crate::{error::IntelIasError, types::GroupId};
use percent_encoding::percent_decode;
use reqwest::{RequestBuilder, Response};
use url::Url;

impl IasClient {
    /// Helper to attach the subscription key to a request.
    pub(super) fn authenticated(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
    }

    /// Helper to construct the SigRL URL for a group id.
    pub(super) fn build_sigrl_url(&self, gid: &GroupId) -> Result<Url, IntelIasError> {
        let base = self.sigrl_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{gid}"))?)
    }

    /// Helper to extract an optional header value, percent-decoding it if requested.
    pub(super) fn get_optional_header(
        response: &Response,
        header_name: &'static str,
        decode: bool,
    ) -> Result<Option<Vec<u8>>, IntelIasError> {
        let Some(value) = response.headers().get(header_name) else {
            return Ok(None);
        };

        if !decode {
            return Ok(Some(value.as_bytes().to_vec()));
        }

        percent_decode(value.as_bytes())
            .decode_utf8()
            .map_err(|e| IntelIasError::HeaderValueParse(header_name, e.to_string()))
            .map(|s| Some(s.as_bytes().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigrl_url_appends_group_id() {
        let gid: GroupId = "00000B5D".parse().unwrap();

        let client = IasClient::new("key", "http://localhost/report", "http://localhost/sigrl")
            .unwrap();
        assert_eq!(
            client.build_sigrl_url(&gid).unwrap().as_str(),
            "http://localhost/sigrl/00000b5d"
        );

        let client = IasClient::new("key", "http://localhost/report", "http://localhost/sigrl/")
            .unwrap();
        assert_eq!(
            client.build_sigrl_url(&gid).unwrap().as_str(),
            "http://localhost/sigrl/00000b5d"
        );
    }
}
