// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Structural validation of SGX EPID quotes.
//!
//! A quote is a fixed-size header, which ends with the little-endian length of the
//! signature, followed by the signature itself. Only the size consistency is checked
//! here, the attestation semantics are left to the Intel Attestation Service.

use bytemuck::{try_from_bytes, AnyBitPattern, PodCastError};
use std::mem;
use thiserror::Error;

/// Size of the `signature_len` field that terminates the quote header.
pub const SIGNATURE_LEN_SIZE: usize = mem::size_of::<u32>();

/// Quote validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// The buffer can't hold the header or the signature the header announces.
    #[error("Quote is too small: {actual} bytes, at least {required} bytes required")]
    QuoteTooSmall {
        /// size of the buffer
        actual: usize,
        /// size needed for the header, or for header and signature
        required: usize,
    },
    /// The header size can't contain the signature length field.
    #[error("Invalid quote header size: {0}")]
    InvalidHeaderSize(usize),
    /// The header bytes could not be viewed as [`EpidQuoteHeader`].
    #[error("parsing bytes")]
    ConvertError(#[from] PodCastError),
}

/// Computes the canonical length of a quote stored in `buffer`.
///
/// The header occupies the first `header_size` bytes of `buffer`, its last
/// [`SIGNATURE_LEN_SIZE`] bytes are the little-endian signature length.
/// The canonical length is `header_size + signature_len`. Any bytes after that
/// are not part of the quote and must not be transmitted.
///
/// # Errors
///
/// [`QuoteError::QuoteTooSmall`] if `buffer` is shorter than the header, or shorter than
/// the header plus the announced signature.
pub fn canonical_quote_len(buffer: &[u8], header_size: usize) -> Result<usize, QuoteError> {
    if header_size < SIGNATURE_LEN_SIZE {
        return Err(QuoteError::InvalidHeaderSize(header_size));
    }

    if buffer.len() < header_size {
        return Err(QuoteError::QuoteTooSmall {
            actual: buffer.len(),
            required: header_size,
        });
    }

    let mut signature_len = [0u8; SIGNATURE_LEN_SIZE];
    signature_len.copy_from_slice(&buffer[header_size - SIGNATURE_LEN_SIZE..header_size]);
    let signature_len = u32::from_le_bytes(signature_len) as usize;

    let required = header_size.saturating_add(signature_len);
    if buffer.len() < required {
        return Err(QuoteError::QuoteTooSmall {
            actual: buffer.len(),
            required,
        });
    }

    Ok(required)
}

/// Header of an SGX EPID quote (`sgx_quote_t` without the trailing signature)
#[derive(Copy, Clone, Debug, AnyBitPattern)]
#[repr(C)]
pub struct EpidQuoteHeader {
    version: [u8; 2],
    sign_type: [u8; 2],
    epid_group_id: [u8; 4],
    qe_svn: [u8; 2],
    pce_svn: [u8; 2],
    xeid: [u8; 4],
    /// The basename used for linkable quotes
    pub basename: [u8; 32],
    /// The enclave report body
    pub report_body: [u8; 384],
    signature_len: [u8; 4],
}

impl EpidQuoteHeader {
    /// Size of the header in bytes
    pub const SIZE: usize = mem::size_of::<Self>();

    /// Version of the quote structure
    pub fn version(&self) -> u16 {
        u16::from_le_bytes(self.version)
    }

    /// Signature type, 0 for unlinkable and 1 for linkable quotes
    pub fn sign_type(&self) -> u16 {
        u16::from_le_bytes(self.sign_type)
    }

    /// The EPID group id of the platform, as stored in the quote
    pub fn epid_group_id(&self) -> [u8; 4] {
        self.epid_group_id
    }

    /// Length of the signature following the header
    pub fn signature_len(&self) -> u32 {
        u32::from_le_bytes(self.signature_len)
    }
}

/// A structurally valid EPID quote, borrowed from a possibly larger buffer.
#[derive(Debug, Clone, Copy)]
pub struct EpidQuote<'a> {
    header: &'a EpidQuoteHeader,
    bytes: &'a [u8],
    discarded: usize,
}

impl<'a> EpidQuote<'a> {
    /// Validates `buffer` and truncates it to the canonical quote length.
    pub fn parse(buffer: &'a [u8]) -> Result<Self, QuoteError> {
        let len = canonical_quote_len(buffer, EpidQuoteHeader::SIZE)?;
        let bytes = &buffer[..len];
        let header: &EpidQuoteHeader = try_from_bytes(&bytes[..EpidQuoteHeader::SIZE])?;

        Ok(Self {
            header,
            bytes,
            discarded: buffer.len() - len,
        })
    }

    /// The quote header
    pub fn header(&self) -> &'a EpidQuoteHeader {
        self.header
    }

    /// The canonical quote bytes, header and signature
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of trailing bytes of the source buffer that are not part of the quote
    pub fn discarded(&self) -> usize {
        self.discarded
    }
}
