// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Batch <-> reflection file bytes.
//!
//! ```text
//! Batch -> encode_message() -> SerializedTypes -> write_message() -> bytes
//!   ^ decode_dense()                                 v read_message()
//! ```

use crate::decoder::{decode_batch, decode_dense};
use crate::encoder::encode_message;
use crate::error::{CodecError, Result};
use crate::model::{Batch, TypeNode};
use crate::schema::{read_message, write_message, FormatError, SerializedTypes};

/// Encode `batch` into reflection file bytes.
pub fn serialize_batch(batch: &Batch, compress: bool) -> Result<Vec<u8>> {
    let message = encode_message(batch)?;
    Ok(write_message(&message, compress)?)
}

/// Parse reflection file bytes into the raw schema message.
///
/// Unknown slot discriminants (files written by a newer codec) surface as
/// `UnsupportedKind`.
pub fn read_types(bytes: &[u8]) -> Result<SerializedTypes> {
    read_message(bytes).map_err(|err| match err {
        FormatError::UnknownDiscriminant { value } => CodecError::unsupported(
            value,
            format!("slot discriminant {value} is not known to this codec"),
        ),
        other => CodecError::Format(other),
    })
}

/// Decode reflection file bytes into a batch with no unset slots.
pub fn deserialize_batch(bytes: &[u8]) -> Result<Batch> {
    decode_dense(&read_types(bytes)?)
}

/// Decode reflection file bytes, keeping unset slots as `None`.
pub fn deserialize_sparse(bytes: &[u8]) -> Result<Vec<Option<TypeNode>>> {
    decode_batch(&read_types(bytes)?)
}
