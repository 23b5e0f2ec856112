// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type graph -> wire schema
//!
//!
//! Each node is written into the slot at its own index. Ids are copied
//! verbatim; nothing is range-checked here.
//!
//! # Entry points
//!
//! - [`encode_type`] - one node into one slot
//! - [`encode_batch`] - typed nodes into a pre-sized slot list
//! - [`encode_json_batch`] - producer JSON into a pre-sized slot list
//! - [`encode_message`] - sized message for a whole [`Batch`]

mod helpers;
mod members;
mod scalars;

use crate::error::{CodecError, Result};
use crate::model::json::has_kind;
use crate::model::{Batch, TypeNode};
use crate::schema::{SerializedType, SerializedTypes};
use members::*;
use scalars::*;
use serde_json::Value;

/// Populate `slot` from `node` and return it.
///
/// Any previous content of the slot is replaced.
pub fn encode_type<'a>(node: &TypeNode, slot: &'a mut SerializedType) -> &'a mut SerializedType {
    match node {
        TypeNode::Simple(n) => encode_simple(n, slot.init_simple()),
        TypeNode::Literal(n) => encode_literal(n, slot.init_literal()),
        TypeNode::Array(n) => encode_array(n, slot.init_array()),
        TypeNode::Tuple(n) => encode_tuple(n, slot.init_tuple()),
        TypeNode::Union(n) => encode_type_list(n, slot.init_union()),
        TypeNode::Intersection(n) => encode_type_list(n, slot.init_intersection()),
        TypeNode::Function(n) => encode_function(n, slot.init_function()),
        TypeNode::Infer(n) => encode_infer(n, slot.init_infer()),
        TypeNode::Enum(n) => encode_enum(n, slot.init_enum()),
        TypeNode::Class(n) => encode_class(n, slot.init_class()),
        TypeNode::ObjectLiteral(n) => encode_object_literal(n, slot.init_object_literal()),
        TypeNode::Property(n) => encode_property(n, slot.init_property()),
        TypeNode::PropertySignature(n) => {
            encode_property_signature(n, slot.init_property_signature());
        }
        TypeNode::MethodSignature(n) => encode_method_signature(n, slot.init_method_signature()),
        TypeNode::Parameter(n) => encode_parameter(n, slot.init_parameter()),
        TypeNode::Method(n) => encode_method(n, slot.init_method()),
        TypeNode::Promise(n) => encode_wrapped(n, slot.init_promise()),
        TypeNode::Rest(n) => encode_wrapped(n, slot.init_rest()),
        TypeNode::TypeParameter(n) => encode_type_parameter(n, slot.init_type_parameter()),
        TypeNode::IndexSignature(n) => encode_index_signature(n, slot.init_index_signature()),
        TypeNode::TemplateLiteral(n) => encode_type_list(n, slot.init_template_literal()),
        TypeNode::CallSignature(n) => encode_call_signature(n, slot.init_call_signature()),
    }
    slot
}

fn check_lengths(nodes: usize, slots: usize) -> Result<()> {
    if nodes != slots {
        return Err(CodecError::LengthMismatch {
            expected: nodes,
            actual: slots,
        });
    }
    if nodes == 0 {
        return Err(CodecError::invalid("batch contains no types"));
    }
    Ok(())
}

/// Encode `nodes` into `slots`, index for index.
///
/// The slot list must already have exactly one slot per node; sizes are
/// checked before anything is written.
pub fn encode_batch(nodes: &[TypeNode], slots: &mut [SerializedType]) -> Result<()> {
    check_lengths(nodes.len(), slots.len())?;
    for (node, slot) in nodes.iter().zip(slots.iter_mut()) {
        encode_type(node, slot);
    }
    tracing::debug!("encoded {} types", nodes.len());
    Ok(())
}

/// Build a message sized to `batch` and encode every node into it.
pub fn encode_message(batch: &Batch) -> Result<SerializedTypes> {
    let mut message = SerializedTypes::default();
    encode_batch(batch.nodes(), message.init_types(batch.len()))?;
    Ok(message)
}

/// Encode a producer JSON array into `slots`.
///
/// Entries that are not objects or carry no `kind` are skipped and their
/// slot stays unset, so every encoded node keeps its index. Returns the
/// number of encoded nodes.
pub fn encode_json_batch(value: &Value, slots: &mut [SerializedType]) -> Result<usize> {
    let entries = match value {
        Value::Null => return Err(CodecError::invalid("types are missing")),
        Value::Array(entries) => entries,
        other => {
            return Err(CodecError::invalid(format!(
                "types must be a JSON array, got {}",
                json_type_name(other)
            )))
        }
    };
    check_lengths(entries.len(), slots.len())?;

    let mut encoded = 0;
    for (index, (entry, slot)) in entries.iter().zip(slots.iter_mut()).enumerate() {
        if !has_kind(entry) {
            tracing::debug!("skipping type entry {} without kind", index);
            continue;
        }
        let node = TypeNode::from_json(entry)?;
        encode_type(&node, slot);
        encoded += 1;
    }

    tracing::debug!(
        "encoded {} of {} JSON type entries",
        encoded,
        entries.len()
    );
    Ok(encoded)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SimpleKind, TypeId, TypeList};
    use crate::schema::{SerializedTypeUnion, TypeRef};
    use serde_json::json;

    #[test]
    fn test_encode_type_returns_slot() {
        let mut slot = SerializedType::default();
        let union = TypeNode::Union(TypeList {
            types: vec![TypeId(5), TypeId(8)],
            ..TypeList::default()
        });
        let written = encode_type(&union, &mut slot);
        match written.which() {
            SerializedTypeUnion::Union(record) => {
                assert_eq!(record.types, Some(vec![TypeRef::new(5), TypeRef::new(8)]));
            }
            other => panic!("unexpected slot {other:?}"),
        }
    }

    #[test]
    fn test_length_checked_before_write() {
        let nodes = vec![TypeNode::simple(SimpleKind::String); 2];
        let mut message = SerializedTypes::with_len(3);
        let slots = message.types_mut().expect("types");

        let err = encode_batch(&nodes, slots).unwrap_err();
        assert!(matches!(err, CodecError::LengthMismatch { expected: 2, actual: 3 }));
        assert!(slots.iter().all(SerializedType::is_unset));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let mut message = SerializedTypes::with_len(0);
        let err = encode_batch(&[], message.types_mut().expect("types")).unwrap_err();
        assert!(matches!(err, CodecError::InvalidInput(_)));
    }

    #[test]
    fn test_json_input_shape() {
        let mut message = SerializedTypes::with_len(1);
        let slots = message.types_mut().expect("types");

        assert!(matches!(
            encode_json_batch(&Value::Null, slots),
            Err(CodecError::InvalidInput(_))
        ));
        assert!(matches!(
            encode_json_batch(&json!({ "kind": 5 }), slots),
            Err(CodecError::InvalidInput(_))
        ));
        assert!(matches!(
            encode_json_batch(&json!([]), slots),
            Err(CodecError::LengthMismatch { expected: 0, actual: 1 })
        ));
    }

    #[test]
    fn test_json_skips_kindless_entries_in_place() {
        let mut message = SerializedTypes::with_len(3);
        let slots = message.types_mut().expect("types");
        let input = json!([{ "kind": 5 }, "garbage", { "kind": 6 }]);

        let encoded = encode_json_batch(&input, slots).expect("encode");
        assert_eq!(encoded, 2);
        assert_eq!(slots[0].which().variant_name(), "simple");
        assert!(slots[1].is_unset());
        assert_eq!(slots[2].which().variant_name(), "simple");
    }
}
