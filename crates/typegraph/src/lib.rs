// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reflection type-graph codec
//!
//! Converts reflected TypeScript type graphs to and from a compact binary
//! struct-of-unions format, and keeps per-domain reflection files up to
//! date:
//! - Flat, id-addressed type graph ([`Batch`], [`TypeNode`])
//! - Versioned `.bin` format with CRC and optional deflate
//! - Registry merging newly observed properties into persisted reflections
//!
//! # Quick Start
//!
//! ```bash
//! # Encode producer JSON into a reflection file
//! typegraph-dump encode types.json -o .reflections/env/app-types.bin
//!
//! # Inspect it
//! typegraph-dump properties .reflections/env/app-types.bin
//! ```
//!
//! # Layers
//!
//! | Layer | Module | Errors |
//! |-------|--------|--------|
//! | Type graph | [`model`] | [`CodecError`] |
//! | Wire records + bytes | [`schema`] | [`FormatError`] |
//! | Model <-> records | [`encoder`], [`decoder`] | [`CodecError`] |
//! | Files | [`registry`] | [`RegistryError`] |

pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod model;
pub mod registry;
pub mod schema;

pub use codec::{deserialize_batch, deserialize_sparse, read_types, serialize_batch};
pub use config::{ConfigError, RegistryConfig, RegistryConfigBuilder};
pub use decoder::{decode_batch, decode_dense, decode_type};
pub use encoder::{encode_batch, encode_json_batch, encode_message, encode_type};
pub use error::{CodecError, Result};
pub use model::{Batch, DefaultValue, ReflectionKind, SimpleKind, Tags, TypeId, TypeNode};
pub use registry::{
    ByteStore, FsStore, MemoryStore, ReflectionFlavor, ReflectionKey, ReflectionState, Registry,
    RegistryError, StoreError,
};
pub use schema::{FormatError, SerializedType, SerializedTypes};
