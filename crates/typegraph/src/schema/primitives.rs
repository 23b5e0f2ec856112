// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire primitive encoding/decoding helpers
//!
//!
//! Little-endian scalars, length-prefixed strings, presence-prefixed options
//! and count-prefixed sequences.
//!
//! # Note
//! These helpers are NOT exported from `schema`.

use super::wire::FormatError;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// Maximum accepted sequence/string length.
///
/// Reflection batches stay far below this; anything larger is a corrupt or
/// hostile file and must not drive an allocation.
pub(super) const MAX_SEQUENCE_LENGTH: usize = 1_000_000;

// ============================================================================
// Scalars
// ============================================================================

pub(super) fn write_bool<W: Write>(w: &mut W, value: bool) -> Result<(), FormatError> {
    w.write_u8(u8::from(value))?;
    Ok(())
}

pub(super) fn read_bool<R: Read>(r: &mut R) -> Result<bool, FormatError> {
    match r.read_u8()? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(FormatError::InvalidValue {
            field: "bool",
            value: u64::from(other),
        }),
    }
}

pub(super) fn write_len<W: Write>(w: &mut W, len: usize) -> Result<(), FormatError> {
    let len = checked_len(len)?;
    w.write_u32::<LittleEndian>(len as u32)?;
    Ok(())
}

pub(super) fn read_len<R: Read>(r: &mut R) -> Result<usize, FormatError> {
    let len = r.read_u32::<LittleEndian>()?;
    checked_len(len as usize)
}

#[inline]
fn checked_len(len: usize) -> Result<usize, FormatError> {
    if len > MAX_SEQUENCE_LENGTH {
        return Err(FormatError::SequenceTooLong {
            len,
            max: MAX_SEQUENCE_LENGTH,
        });
    }
    Ok(len)
}

// ============================================================================
// Strings
// ============================================================================

/// Encode string (4-byte length + UTF-8 bytes, no terminator)
pub(super) fn write_string<W: Write>(w: &mut W, value: &str) -> Result<(), FormatError> {
    write_len(w, value.len())?;
    w.write_all(value.as_bytes())?;
    Ok(())
}

pub(super) fn read_string<R: Read>(r: &mut R) -> Result<String, FormatError> {
    let len = read_len(r)?;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|_| FormatError::InvalidUtf8)
}

// ============================================================================
// Options and sequences
// ============================================================================

/// Encode Option<T> (1-byte presence + value if Some)
pub(super) fn write_option<W, T, F>(
    w: &mut W,
    value: Option<&T>,
    encode_fn: F,
) -> Result<(), FormatError>
where
    W: Write,
    T: ?Sized,
    F: FnOnce(&mut W, &T) -> Result<(), FormatError>,
{
    match value {
        None => write_bool(w, false),
        Some(v) => {
            write_bool(w, true)?;
            encode_fn(w, v)
        }
    }
}

pub(super) fn read_option<R, T, F>(r: &mut R, decode_fn: F) -> Result<Option<T>, FormatError>
where
    R: Read,
    F: FnOnce(&mut R) -> Result<T, FormatError>,
{
    if read_bool(r)? {
        decode_fn(r).map(Some)
    } else {
        Ok(None)
    }
}

/// Encode a sequence (4-byte count + elements)
pub(super) fn write_vec<W, T, F>(
    w: &mut W,
    items: &[T],
    mut encode_fn: F,
) -> Result<(), FormatError>
where
    W: Write,
    F: FnMut(&mut W, &T) -> Result<(), FormatError>,
{
    write_len(w, items.len())?;
    for item in items {
        encode_fn(w, item)?;
    }
    Ok(())
}

pub(super) fn read_vec<R, T, F>(r: &mut R, mut decode_fn: F) -> Result<Vec<T>, FormatError>
where
    R: Read,
    F: FnMut(&mut R) -> Result<T, FormatError>,
{
    let len = read_len(r)?;
    // Cap the pre-allocation: the count is untrusted until elements decode.
    let mut items = Vec::with_capacity(len.min(1024));
    for _ in 0..len {
        items.push(decode_fn(r)?);
    }
    Ok(items)
}

/// Optional sequence: presence byte, then count + elements.
pub(super) fn write_list<W, T, F>(
    w: &mut W,
    list: Option<&Vec<T>>,
    encode_fn: F,
) -> Result<(), FormatError>
where
    W: Write,
    F: FnMut(&mut W, &T) -> Result<(), FormatError>,
{
    write_option(w, list, |w, items| write_vec(w, items, encode_fn))
}

pub(super) fn read_list<R, T, F>(r: &mut R, decode_fn: F) -> Result<Option<Vec<T>>, FormatError>
where
    R: Read,
    F: FnMut(&mut R) -> Result<T, FormatError>,
{
    read_option(r, |r| read_vec(r, decode_fn))
}

pub(super) fn write_string_list<W: Write>(
    w: &mut W,
    list: Option<&Vec<String>>,
) -> Result<(), FormatError> {
    write_list(w, list, |w, s| write_string(w, s))
}

pub(super) fn read_string_list<R: Read>(r: &mut R) -> Result<Option<Vec<String>>, FormatError> {
    read_list(r, read_string)
}
