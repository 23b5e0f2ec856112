// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! One decoder per record kind.

use super::helpers::{
    default_value, flag, id, ids, meta, opt_id, opt_ids, opt_text, parameter, parameters,
    strings, tags,
};
use crate::model::{
    ArrayType, CallSignature, ClassType, EnumMember, EnumType, FunctionType, IndexSignature,
    InferType, LiteralType, LiteralValue, Method, MethodSignature, ObjectLiteralType, Parameter,
    Property, PropertySignature, SimpleType, TupleMember, TupleType, TypeList, TypeParameter,
    WrappedType,
};
use crate::schema::{
    CallSignatureRecord, ClassRecord, EnumRecord, FunctionRecord, IndexSignatureRecord,
    InferRecord, LiteralRecord, LiteralRecordValue, MethodRecord, MethodSignatureRecord,
    ObjectLiteralRecord, ParameterRecord, PropertyRecord, PropertySignatureRecord, SimpleRecord,
    TupleRecord, TypeListRecord, TypeParameterRecord, WrappedRecord,
};

pub(super) fn decode_simple(record: &SimpleRecord) -> SimpleType {
    SimpleType {
        meta: meta(&record.common),
        kind: record.kind,
        origin: opt_id(record.origin),
    }
}

pub(super) fn decode_literal(record: &LiteralRecord) -> LiteralType {
    let literal = match &record.value {
        LiteralRecordValue::Boolean(b) => LiteralValue::Boolean(*b),
        LiteralRecordValue::Number(n) => LiteralValue::Number(*n),
        LiteralRecordValue::String(s) => LiteralValue::String(s.clone()),
        LiteralRecordValue::BigInt(digits) => LiteralValue::BigInt(digits.clone()),
        LiteralRecordValue::Symbol(name) => LiteralValue::Symbol(name.clone()),
        LiteralRecordValue::Regex(pattern) => LiteralValue::Regex(pattern.clone()),
    };
    LiteralType {
        meta: meta(&record.common),
        literal,
    }
}

pub(super) fn decode_array(record: &WrappedRecord) -> ArrayType {
    ArrayType {
        meta: meta(&record.common),
        element: id(record.ty),
    }
}

pub(super) fn decode_wrapped(record: &WrappedRecord) -> WrappedType {
    WrappedType {
        meta: meta(&record.common),
        ty: id(record.ty),
    }
}

pub(super) fn decode_tuple(record: &TupleRecord) -> TupleType {
    let members = record
        .types
        .iter()
        .flatten()
        .map(|member| TupleMember {
            meta: meta(&member.common),
            ty: id(member.ty),
            name: opt_text(&member.name),
            optional: flag(member.optional),
        })
        .collect();
    TupleType {
        meta: meta(&record.common),
        members,
    }
}

pub(super) fn decode_type_list(record: &TypeListRecord) -> TypeList {
    TypeList {
        meta: meta(&record.common),
        types: ids(record.types.as_ref()),
    }
}

pub(super) fn decode_function(record: &FunctionRecord) -> FunctionType {
    FunctionType {
        meta: meta(&record.common),
        name: opt_text(&record.name),
        parameters: parameters(record.parameters.as_ref()),
        return_type: id(record.return_type),
        tags: tags(record.tags.as_ref()),
    }
}

pub(super) fn decode_infer(record: &InferRecord) -> InferType {
    InferType {
        meta: meta(&record.common),
    }
}

pub(super) fn decode_enum(record: &EnumRecord) -> EnumType {
    let members = record
        .enum_entries
        .iter()
        .flatten()
        .map(|entry| EnumMember {
            name: entry.name.clone(),
            value: entry.value.clone(),
        })
        .collect();
    EnumType {
        meta: meta(&record.common),
        index_type: id(record.index_type),
        values: strings(record.values.as_ref()),
        members,
        tags: tags(record.tags.as_ref()),
    }
}

pub(super) fn decode_class(record: &ClassRecord) -> ClassType {
    ClassType {
        meta: meta(&record.common),
        class_type: record.class_type.clone(),
        global_object: flag(record.global_object),
        arguments: opt_ids(record.arguments.as_ref()),
        extends_arguments: opt_ids(record.extends_arguments.as_ref()),
        super_class: opt_id(record.super_class),
        types: ids(record.types.as_ref()),
        tags: tags(record.tags.as_ref()),
    }
}

pub(super) fn decode_object_literal(record: &ObjectLiteralRecord) -> ObjectLiteralType {
    ObjectLiteralType {
        meta: meta(&record.common),
        types: ids(record.types.as_ref()),
        tags: tags(record.tags.as_ref()),
    }
}

pub(super) fn decode_property(record: &PropertyRecord) -> Property {
    Property {
        meta: meta(&record.common),
        name: record.name.clone(),
        ty: id(record.ty),
        optional: flag(record.optional),
        readonly: flag(record.readonly),
        is_abstract: flag(record.is_abstract),
        visibility: record.visibility,
        description: opt_text(&record.description),
        default: default_value(record.default.as_ref()),
        tags: tags(record.tags.as_ref()),
    }
}

pub(super) fn decode_property_signature(record: &PropertySignatureRecord) -> PropertySignature {
    PropertySignature {
        meta: meta(&record.common),
        name: record.name.clone(),
        ty: id(record.ty),
        optional: flag(record.optional),
        readonly: flag(record.readonly),
        description: opt_text(&record.description),
        default: default_value(record.default.as_ref()),
        tags: tags(record.tags.as_ref()),
    }
}

pub(super) fn decode_method_signature(record: &MethodSignatureRecord) -> MethodSignature {
    MethodSignature {
        meta: meta(&record.common),
        name: record.name.clone(),
        parameters: parameters(record.parameters.as_ref()),
        return_type: id(record.return_type),
        tags: tags(record.tags.as_ref()),
    }
}

pub(super) fn decode_parameter(record: &ParameterRecord) -> Parameter {
    parameter(record)
}

pub(super) fn decode_method(record: &MethodRecord) -> Method {
    Method {
        meta: meta(&record.common),
        name: record.name.clone(),
        parameters: parameters(record.parameters.as_ref()),
        return_type: id(record.return_type),
        visibility: record.visibility,
        is_abstract: flag(record.is_abstract),
        optional: flag(record.optional),
        tags: tags(record.tags.as_ref()),
    }
}

pub(super) fn decode_type_parameter(record: &TypeParameterRecord) -> TypeParameter {
    TypeParameter {
        meta: meta(&record.common),
        name: record.name.clone(),
        default_type: opt_id(record.default_type),
    }
}

pub(super) fn decode_index_signature(record: &IndexSignatureRecord) -> IndexSignature {
    IndexSignature {
        meta: meta(&record.common),
        index: id(record.index),
        ty: id(record.ty),
    }
}

pub(super) fn decode_call_signature(record: &CallSignatureRecord) -> CallSignature {
    CallSignature {
        meta: meta(&record.common),
        parameters: parameters(record.parameters.as_ref()),
        return_type: id(record.return_type),
    }
}
