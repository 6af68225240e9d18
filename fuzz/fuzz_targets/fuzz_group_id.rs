// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

#![no_main]

use intel_ias_api::GroupId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(gid) = data.parse::<GroupId>() {
        assert_eq!(data.len(), GroupId::HEX_LEN);
        assert!(data.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(gid.to_string(), data.to_ascii_lowercase());
    }
});
