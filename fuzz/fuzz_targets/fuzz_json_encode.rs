// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use typegraph::{encode_json_batch, SerializedTypes};

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let count = value.as_array().map_or(0, Vec::len);
    let mut message = SerializedTypes::with_len(count);
    if let Some(slots) = message.types_mut() {
        let _ = encode_json_batch(&value, slots);
    }
});
