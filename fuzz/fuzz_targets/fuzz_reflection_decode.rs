// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use typegraph::{deserialize_batch, deserialize_sparse, serialize_batch};

fuzz_target!(|data: &[u8]| {
    let _ = deserialize_sparse(data);

    // Anything that decodes must encode back to an equal batch
    if let Ok(batch) = deserialize_batch(data) {
        if let Ok(bytes) = serialize_batch(&batch, false) {
            let again = deserialize_batch(&bytes).expect("re-decode");
            assert_eq!(format!("{again:?}"), format!("{batch:?}"));
        }
    }
});
