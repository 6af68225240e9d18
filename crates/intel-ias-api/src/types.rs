// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when a textual EPID group id can't be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupIdError {
    /// The input is not exactly 8 hexadecimal characters.
    #[error("Invalid EPID group ID: {0:?}")]
    InvalidGroupId(String),
}

/// An EPID group id.
///
/// Externally represented as 8 case-insensitive hexadecimal characters,
/// where byte `i` is encoded by the characters `2i` and `2i + 1`.
///
/// ```
/// use intel_ias_api::GroupId;
///
/// let gid: GroupId = "DeadBeef".parse().unwrap();
/// assert_eq!(gid.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(gid.to_string(), "deadbeef");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId([u8; 4]);

impl GroupId {
    /// Length of the textual representation.
    pub const HEX_LEN: usize = 8;

    /// Creates a group id from its raw bytes.
    pub fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// The raw group id bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl FromStr for GroupId {
    type Err = GroupIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GroupIdError::InvalidGroupId(s.to_string());

        if s.len() != Self::HEX_LEN {
            return Err(invalid());
        }

        let mut gid = [0u8; 4];
        for (byte, pair) in gid.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let mut decoded = [0u8; 1];
            hex::decode_to_slice(pair, &mut decoded).map_err(|_| invalid())?;
            *byte = decoded[0];
        }
        Ok(Self(gid))
    }
}

impl From<[u8; 4]> for GroupId {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// The artifacts returned by a successful attestation evidence verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Artifact {
    /// The attestation verification report body.
    Report,
    /// The report signature (`X-IASReport-Signature`).
    Signature,
    /// The report signing certificate chain (`X-IASReport-Signing-Certificate`).
    Certificate,
    /// The security advisory ids (`Advisory-IDs`).
    Advisories,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Report => write!(f, "report"),
            Artifact::Signature => write!(f, "report signature"),
            Artifact::Certificate => write!(f, "report signing certificate"),
            Artifact::Advisories => write!(f, "advisories"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_lower_and_upper_case() {
        let gid: GroupId = "deadbeef".parse().unwrap();
        assert_eq!(gid.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);

        let gid: GroupId = "00000B5D".parse().unwrap();
        assert_eq!(gid.as_bytes(), &[0x00, 0x00, 0x0b, 0x5d]);
        assert_eq!(gid.to_string(), "00000b5d");
    }

    #[test]
    fn rejects_wrong_length() {
        for input in ["", "deadbee", "deadbeef0", "0x0000b5d"] {
            assert_eq!(
                input.parse::<GroupId>(),
                Err(GroupIdError::InvalidGroupId(input.to_string())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn rejects_non_hex_pairs() {
        for input in ["deadbeeg", "g0000000", "dead beef", "+1234567", "dea-beef"] {
            assert!(input.parse::<GroupId>().is_err(), "{input:?}");
        }
    }

    #[test]
    fn rejects_multibyte_characters() {
        // 8 bytes, but not 8 hex characters
        assert!("ddddddé".parse::<GroupId>().is_err());
        assert!("ééééé".parse::<GroupId>().is_err());
    }

    proptest! {
        #[test]
        fn display_parses_back(bytes in any::<[u8; 4]>()) {
            let gid = GroupId::new(bytes);
            prop_assert_eq!(gid.to_string().parse::<GroupId>(), Ok(gid));
        }

        #[test]
        fn any_wrong_length_is_rejected(s in "[0-9a-fA-F]{0,16}") {
            prop_assume!(s.len() != GroupId::HEX_LEN);
            prop_assert!(s.parse::<GroupId>().is_err());
        }

        #[test]
        fn any_non_hex_character_is_rejected(
            prefix in "[0-9a-f]{0,7}",
            bad in "[g-zG-Z _.:-]",
        ) {
            let mut s = prefix.clone();
            s.push_str(&bad);
            while s.len() < GroupId::HEX_LEN {
                s.push('0');
            }
            prop_assert!(s.parse::<GroupId>().is_err());
        }
    }
}
