// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire schema -> type graph
//!
//!
//! Inverse of the encoder, with these normalizations:
//!
//! - empty strings decode as `None` for optional strings
//! - absent or empty `decorators`, `type_arguments`, class `arguments` and
//!   `extends_arguments` decode as `None`; other lists as empty
//! - `false` flags decode as [`SparseFlag::Absent`](crate::model::SparseFlag)
//! - tags with no field set decode as `None`

mod helpers;
mod variants;

use crate::error::{CodecError, Result};
use crate::model::{Batch, TypeNode};
use crate::schema::{SerializedType, SerializedTypeUnion, SerializedTypes};
use variants::*;

/// Rebuild one node from its slot.
///
/// An unset slot fails with `UnsupportedKind`.
pub fn decode_type(slot: &SerializedType) -> Result<TypeNode> {
    let node = match slot.which() {
        SerializedTypeUnion::Unset => {
            return Err(CodecError::unsupported("unset", format!("{slot:#?}")));
        }
        SerializedTypeUnion::Simple(r) => TypeNode::Simple(decode_simple(r)),
        SerializedTypeUnion::Literal(r) => TypeNode::Literal(decode_literal(r)),
        SerializedTypeUnion::Array(r) => TypeNode::Array(decode_array(r)),
        SerializedTypeUnion::Tuple(r) => TypeNode::Tuple(decode_tuple(r)),
        SerializedTypeUnion::Union(r) => TypeNode::Union(decode_type_list(r)),
        SerializedTypeUnion::Intersection(r) => TypeNode::Intersection(decode_type_list(r)),
        SerializedTypeUnion::Function(r) => TypeNode::Function(decode_function(r)),
        SerializedTypeUnion::Infer(r) => TypeNode::Infer(decode_infer(r)),
        SerializedTypeUnion::Enum(r) => TypeNode::Enum(decode_enum(r)),
        SerializedTypeUnion::Class(r) => TypeNode::Class(decode_class(r)),
        SerializedTypeUnion::ObjectLiteral(r) => TypeNode::ObjectLiteral(decode_object_literal(r)),
        SerializedTypeUnion::Property(r) => TypeNode::Property(decode_property(r)),
        SerializedTypeUnion::PropertySignature(r) => {
            TypeNode::PropertySignature(decode_property_signature(r))
        }
        SerializedTypeUnion::MethodSignature(r) => {
            TypeNode::MethodSignature(decode_method_signature(r))
        }
        SerializedTypeUnion::Parameter(r) => TypeNode::Parameter(decode_parameter(r)),
        SerializedTypeUnion::Method(r) => TypeNode::Method(decode_method(r)),
        SerializedTypeUnion::Promise(r) => TypeNode::Promise(decode_wrapped(r)),
        SerializedTypeUnion::Rest(r) => TypeNode::Rest(decode_wrapped(r)),
        SerializedTypeUnion::TypeParameter(r) => TypeNode::TypeParameter(decode_type_parameter(r)),
        SerializedTypeUnion::IndexSignature(r) => {
            TypeNode::IndexSignature(decode_index_signature(r))
        }
        SerializedTypeUnion::TemplateLiteral(r) => TypeNode::TemplateLiteral(decode_type_list(r)),
        SerializedTypeUnion::CallSignature(r) => TypeNode::CallSignature(decode_call_signature(r)),
    };
    Ok(node)
}

fn slots(message: &SerializedTypes) -> Result<&[SerializedType]> {
    message
        .types()
        .ok_or_else(|| CodecError::invalid("message carries no type list"))
}

/// Decode every slot, keeping indices. Unset slots yield `None`.
pub fn decode_batch(message: &SerializedTypes) -> Result<Vec<Option<TypeNode>>> {
    let nodes = slots(message)?
        .iter()
        .map(|slot| {
            if slot.is_unset() {
                Ok(None)
            } else {
                decode_type(slot).map(Some)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!("decoded {} types", nodes.len());
    Ok(nodes)
}

/// Decode a message with no unset slots into a [`Batch`].
pub fn decode_dense(message: &SerializedTypes) -> Result<Batch> {
    let nodes = slots(message)?
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            if slot.is_unset() {
                return Err(CodecError::invalid(format!("type slot {index} is unset")));
            }
            decode_type(slot)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Batch::from_nodes(nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SimpleKind;

    #[test]
    fn test_unset_slot_is_unsupported() {
        let err = decode_type(&SerializedType::default()).unwrap_err();
        match err {
            CodecError::UnsupportedKind { kind, dump } => {
                assert_eq!(kind, "unset");
                assert!(dump.contains("Unset"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_list_is_invalid() {
        let message = SerializedTypes::default();
        assert!(matches!(decode_batch(&message), Err(CodecError::InvalidInput(_))));
        assert!(matches!(decode_dense(&message), Err(CodecError::InvalidInput(_))));
    }

    #[test]
    fn test_holes_keep_indices() {
        let mut message = SerializedTypes::with_len(3);
        {
            let slots = message.types_mut().expect("types");
            slots[0].init_simple().kind = SimpleKind::String;
            slots[2].init_simple().kind = SimpleKind::Number;
        }

        let nodes = decode_batch(&message).expect("decode");
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], Some(TypeNode::simple(SimpleKind::String)));
        assert_eq!(nodes[1], None);
        assert_eq!(nodes[2], Some(TypeNode::simple(SimpleKind::Number)));

        assert!(matches!(decode_dense(&message), Err(CodecError::InvalidInput(_))));
    }
}
