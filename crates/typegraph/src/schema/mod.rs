// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire schema
//!
//!
//! Struct-of-unions records written by the encoder and read by the decoder,
//! plus their binary encoding.
//!
//! # Modules
//!
//! - `records` - one record per node variant, slots and root list
//! - `wire` - message header, framing, CRC and compression
//! - `record_codec` - field-by-field binary encoding of each record
//! - `primitives` - scalars, strings, options, sequences

mod primitives;
mod record_codec;
pub mod records;
pub mod wire;

pub use records::{
    CallSignatureRecord, ClassRecord, CommonRecord, DefaultValueRecord, EnumEntryRecord,
    EnumRecord, FunctionRecord, IndexAccessOriginRecord, IndexSignatureRecord, InferRecord,
    LiteralRecord, LiteralRecordValue, MethodRecord, MethodSignatureRecord, ObjectLiteralRecord,
    ParameterRecord, PropertyRecord, PropertySignatureRecord, SerializedType, SerializedTypeUnion,
    SerializedTypes, SimpleRecord, TagsRecord, TupleMemberRecord, TupleRecord,
    TypeListRecord, TypeParameterRecord, TypeRef, WrappedRecord,
};
pub use wire::{
    read_message, write_message, FormatError, MessageHeader, WireDecode, WireEncode,
    FLAG_DEFLATE, FORMAT_VERSION, MAGIC,
};
