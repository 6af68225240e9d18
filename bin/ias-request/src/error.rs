// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Error types of the request workflows

use intel_ias_api::{GroupIdError, IntelIasError, QuoteError};
use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can terminate a workflow
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed input, detected before any network call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The request to IAS failed
    #[error("Request failed: {0}")]
    RequestFailed(#[from] IntelIasError),

    /// Reading the quote or writing a result failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// The file that was accessed
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
}

impl Error {
    /// Create a new invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Create a new I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<QuoteError> for Error {
    fn from(value: QuoteError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}

impl From<GroupIdError> for Error {
    fn from(value: GroupIdError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}
