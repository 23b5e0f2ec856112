// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reflection file byte format (.bin)
//!
//! # Format Overview
//!
//! ```text
//! +---------------------------------------------------------+
//! |                  Message Header (32 bytes)               |
//! |  Magic (8) | Version (4) | Flags (4) | PayloadLen (4)   |
//! |  CRC32 (4) | TypeCount (4) | Reserved (4)               |
//! +---------------------------------------------------------+
//! |                  Payload (PayloadLen bytes)              |
//! |  has_types (1) | count (4) | Slot[]                     |
//! +---------------------------------------------------------+
//! ```
//!
//! # Slot Format
//!
//! ```text
//! +---------------------------------------------------------+
//! | discriminant (2) | record (var, absent when 0 = unset)  |
//! +---------------------------------------------------------+
//! ```
//!
//! The CRC covers the payload as stored. When [`FLAG_DEFLATE`] is set the
//! stored payload is deflate-compressed.

use super::records::{SerializedType, SerializedTypes};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::{self, Read, Write};
use thiserror::Error;

/// Magic bytes: "TGREFL\0\0"
pub const MAGIC: [u8; 8] = *b"TGREFL\0\0";

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Payload is deflate-compressed.
pub const FLAG_DEFLATE: u32 = 1 << 0;

const KNOWN_FLAGS: u32 = FLAG_DEFLATE;

/// Upper bound on a decompressed payload.
pub const MAX_PAYLOAD_SIZE: usize = 256 * 1024 * 1024;

/// Byte-level format errors.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid reflection file magic")]
    InvalidMagic,

    #[error("Version mismatch: expected {expected}, got {got}")]
    VersionMismatch { expected: u32, got: u32 },

    #[error("CRC mismatch: header {expected:#010x}, payload {actual:#010x}")]
    CrcMismatch { expected: u32, actual: u32 },

    #[error("Sequence length {len} exceeds maximum {max}")]
    SequenceTooLong { len: usize, max: usize },

    #[error("Invalid UTF-8 in string field")]
    InvalidUtf8,

    #[error("Invalid value {value} for {field}")]
    InvalidValue { field: &'static str, value: u64 },

    #[error("Unknown type discriminant {value}")]
    UnknownDiscriminant { value: u16 },

    #[error("{count} trailing bytes after payload")]
    TrailingBytes { count: usize },
}

/// Binary encoding of a schema record.
pub trait WireEncode {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError>;
}

/// Binary decoding of a schema record.
pub trait WireDecode: Sized {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError>;
}

/// Message header (32 bytes, fixed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    pub magic: [u8; 8],
    pub version: u32,
    pub flags: u32,
    /// Stored payload size in bytes.
    pub payload_len: u32,
    /// CRC32 of the stored payload.
    pub crc32: u32,
    /// Number of slots in the type list.
    pub type_count: u32,
    pub reserved: u32,
}

impl MessageHeader {
    pub const SIZE: usize = 32;

    pub fn new() -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            flags: 0,
            payload_len: 0,
            crc32: 0,
            type_count: 0,
            reserved: 0,
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.flags & FLAG_DEFLATE != 0
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.magic)?;
        w.write_u32::<LittleEndian>(self.version)?;
        w.write_u32::<LittleEndian>(self.flags)?;
        w.write_u32::<LittleEndian>(self.payload_len)?;
        w.write_u32::<LittleEndian>(self.crc32)?;
        w.write_u32::<LittleEndian>(self.type_count)?;
        w.write_u32::<LittleEndian>(self.reserved)?;
        Ok(())
    }

    pub fn read<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        let mut magic = [0u8; 8];
        r.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(FormatError::InvalidMagic);
        }

        Ok(Self {
            magic,
            version: r.read_u32::<LittleEndian>()?,
            flags: r.read_u32::<LittleEndian>()?,
            payload_len: r.read_u32::<LittleEndian>()?,
            crc32: r.read_u32::<LittleEndian>()?,
            type_count: r.read_u32::<LittleEndian>()?,
            reserved: r.read_u32::<LittleEndian>()?,
        })
    }
}

impl Default for MessageHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a message to bytes (header + payload).
pub fn write_message(message: &SerializedTypes, compress: bool) -> Result<Vec<u8>, FormatError> {
    let mut raw = Vec::new();
    message.encode(&mut raw)?;
    let raw_len = raw.len();

    let payload = if compress {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw)?;
        encoder.finish()?
    } else {
        raw
    };

    let payload_len = u32::try_from(payload.len()).map_err(|_| FormatError::InvalidValue {
        field: "payload_len",
        value: payload.len() as u64,
    })?;
    let type_count = message.types().map_or(0, <[SerializedType]>::len);
    let type_count = u32::try_from(type_count).map_err(|_| FormatError::InvalidValue {
        field: "type_count",
        value: type_count as u64,
    })?;

    let mut header = MessageHeader::new();
    header.flags = if compress { FLAG_DEFLATE } else { 0 };
    header.payload_len = payload_len;
    header.crc32 = crc32fast::hash(&payload);
    header.type_count = type_count;

    let mut out = Vec::with_capacity(MessageHeader::SIZE + payload.len());
    header.write(&mut out)?;
    out.extend_from_slice(&payload);

    tracing::debug!(
        "wrote reflection message: {} types, {} payload bytes (stored {}, deflate={})",
        type_count,
        raw_len,
        payload.len(),
        compress
    );
    Ok(out)
}

/// Parse a message produced by [`write_message`].
pub fn read_message(bytes: &[u8]) -> Result<SerializedTypes, FormatError> {
    let mut cursor = bytes;
    let header = MessageHeader::read(&mut cursor)?;

    if header.version != FORMAT_VERSION {
        return Err(FormatError::VersionMismatch {
            expected: FORMAT_VERSION,
            got: header.version,
        });
    }
    if header.flags & !KNOWN_FLAGS != 0 {
        return Err(FormatError::InvalidValue {
            field: "flags",
            value: u64::from(header.flags),
        });
    }

    let payload_len = header.payload_len as usize;
    if cursor.len() < payload_len {
        return Err(FormatError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "payload truncated: header announces {} bytes, {} available",
                payload_len,
                cursor.len()
            ),
        )));
    }
    if cursor.len() > payload_len {
        return Err(FormatError::TrailingBytes {
            count: cursor.len() - payload_len,
        });
    }

    let actual = crc32fast::hash(cursor);
    if actual != header.crc32 {
        return Err(FormatError::CrcMismatch {
            expected: header.crc32,
            actual,
        });
    }

    let payload = if header.is_compressed() {
        let mut decompressed = Vec::new();
        DeflateDecoder::new(cursor)
            .take(MAX_PAYLOAD_SIZE as u64 + 1)
            .read_to_end(&mut decompressed)?;
        if decompressed.len() > MAX_PAYLOAD_SIZE {
            return Err(FormatError::SequenceTooLong {
                len: decompressed.len(),
                max: MAX_PAYLOAD_SIZE,
            });
        }
        decompressed
    } else {
        cursor.to_vec()
    };

    let mut src = payload.as_slice();
    let message = SerializedTypes::decode(&mut src)?;
    if !src.is_empty() {
        return Err(FormatError::TrailingBytes { count: src.len() });
    }

    let decoded_count = message.types().map_or(0, <[SerializedType]>::len);
    if decoded_count != header.type_count as usize {
        return Err(FormatError::InvalidValue {
            field: "type_count",
            value: u64::from(header.type_count),
        });
    }

    tracing::debug!(
        "read reflection message: {} types, {} payload bytes (deflate={})",
        decoded_count,
        payload.len(),
        header.is_compressed()
    );
    Ok(message)
}
