// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec errors.

use crate::schema::FormatError;
use thiserror::Error;

/// Errors raised while converting between the type graph and the wire schema.
///
/// None of these are retried; they abort the current build step.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Empty, missing or non-list batch, or a malformed field value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The binary list was not sized to the batch.
    #[error("Length mismatch: batch has {expected} types, binary list has {actual} slots")]
    LengthMismatch { expected: usize, actual: usize },

    /// Kind or discriminant unknown to this codec version (schema drift).
    #[error("Unsupported kind {kind}:\n{dump}")]
    UnsupportedKind { kind: String, dump: String },

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

impl CodecError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn unsupported(kind: impl ToString, dump: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            kind: kind.to_string(),
            dump: dump.into(),
        }
    }
}

pub type Result<T, E = CodecError> = std::result::Result<T, E>;
