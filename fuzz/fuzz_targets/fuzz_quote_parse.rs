// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

#![no_main]

use intel_ias_api::{canonical_quote_len, EpidQuote, EpidQuoteHeader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match EpidQuote::parse(data) {
        Ok(quote) => {
            let len = quote.as_bytes().len();
            assert_eq!(
                len,
                EpidQuoteHeader::SIZE + quote.header().signature_len() as usize
            );
            assert_eq!(len + quote.discarded(), data.len());
            assert_eq!(canonical_quote_len(quote.as_bytes(), EpidQuoteHeader::SIZE), Ok(len));
        }
        Err(_) => assert!(canonical_quote_len(data, EpidQuoteHeader::SIZE).is_err()),
    }

    // any header size, the first byte picks it
    if let Some((&h, rest)) = data.split_first() {
        if let Ok(len) = canonical_quote_len(rest, h as usize) {
            assert!(len >= h as usize && len <= rest.len());
        }
    }
});
