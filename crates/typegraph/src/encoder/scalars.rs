// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Encoders for leaf and wrapper variants.

use super::helpers::{opt_type_ref, type_ref, write_common, write_ids};
use crate::model::{
    ArrayType, IndexSignature, InferType, LiteralType, LiteralValue, SimpleType, TypeList,
    TypeParameter, WrappedType,
};
use crate::schema::{
    IndexSignatureRecord, InferRecord, LiteralRecord, LiteralRecordValue, SimpleRecord,
    TypeListRecord, TypeParameterRecord, WrappedRecord,
};

pub(super) fn encode_simple(node: &SimpleType, record: &mut SimpleRecord) {
    write_common(&node.meta, &mut record.common);
    record.kind = node.kind;
    record.origin = opt_type_ref(node.origin);
}

pub(super) fn encode_literal(node: &LiteralType, record: &mut LiteralRecord) {
    write_common(&node.meta, &mut record.common);
    record.value = match &node.literal {
        LiteralValue::Boolean(b) => LiteralRecordValue::Boolean(*b),
        LiteralValue::Number(n) => LiteralRecordValue::Number(*n),
        LiteralValue::String(s) => LiteralRecordValue::String(s.clone()),
        LiteralValue::BigInt(digits) => LiteralRecordValue::BigInt(digits.clone()),
        LiteralValue::Symbol(name) => LiteralRecordValue::Symbol(name.clone()),
        LiteralValue::Regex(pattern) => LiteralRecordValue::Regex(pattern.clone()),
    };
}

pub(super) fn encode_array(node: &ArrayType, record: &mut WrappedRecord) {
    write_common(&node.meta, &mut record.common);
    record.ty = type_ref(node.element);
}

/// Promise and rest.
pub(super) fn encode_wrapped(node: &WrappedType, record: &mut WrappedRecord) {
    write_common(&node.meta, &mut record.common);
    record.ty = type_ref(node.ty);
}

/// Union, intersection and template literal.
pub(super) fn encode_type_list(node: &TypeList, record: &mut TypeListRecord) {
    write_common(&node.meta, &mut record.common);
    write_ids(&node.types, &mut record.types);
}

pub(super) fn encode_infer(node: &InferType, record: &mut InferRecord) {
    write_common(&node.meta, &mut record.common);
}

pub(super) fn encode_type_parameter(node: &TypeParameter, record: &mut TypeParameterRecord) {
    write_common(&node.meta, &mut record.common);
    record.name = node.name.clone();
    record.default_type = opt_type_ref(node.default_type);
}

pub(super) fn encode_index_signature(node: &IndexSignature, record: &mut IndexSignatureRecord) {
    write_common(&node.meta, &mut record.common);
    record.index = type_ref(node.index);
    record.ty = type_ref(node.ty);
}
