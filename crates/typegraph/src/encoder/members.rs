// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Encoders for container and member variants.

use super::helpers::{
    opt_type_ref, text, type_ref, write_common, write_default, write_ids, write_opt_ids,
    write_parameter, write_parameters, write_strings, write_tags,
};
use crate::model::{
    CallSignature, ClassType, EnumType, FunctionType, Method, MethodSignature, ObjectLiteralType,
    Parameter, Property, PropertySignature, TupleType,
};
use crate::schema::{
    CallSignatureRecord, ClassRecord, EnumEntryRecord, EnumRecord, FunctionRecord, MethodRecord,
    MethodSignatureRecord, ObjectLiteralRecord, ParameterRecord, PropertyRecord,
    PropertySignatureRecord, TupleMemberRecord, TupleRecord,
};

pub(super) fn encode_tuple(node: &TupleType, record: &mut TupleRecord) {
    write_common(&node.meta, &mut record.common);
    if node.members.is_empty() {
        return;
    }
    let members = record.init_types(node.members.len());
    for (member, slot) in node.members.iter().zip(members.iter_mut()) {
        *slot = TupleMemberRecord {
            ty: type_ref(member.ty),
            name: text(member.name.as_deref()),
            optional: member.optional.is_set(),
            ..TupleMemberRecord::default()
        };
        write_common(&member.meta, &mut slot.common);
    }
}

pub(super) fn encode_function(node: &FunctionType, record: &mut FunctionRecord) {
    write_common(&node.meta, &mut record.common);
    record.name = text(node.name.as_deref());
    write_parameters(&node.parameters, &mut record.parameters);
    record.return_type = type_ref(node.return_type);
    write_tags(node.tags.as_ref(), &mut record.tags);
}

pub(super) fn encode_enum(node: &EnumType, record: &mut EnumRecord) {
    write_common(&node.meta, &mut record.common);
    record.index_type = type_ref(node.index_type);
    write_strings(&node.values, &mut record.values);
    if !node.members.is_empty() {
        record.enum_entries = Some(
            node.members
                .iter()
                .map(|member| EnumEntryRecord {
                    name: member.name.clone(),
                    value: member.value.clone(),
                })
                .collect(),
        );
    }
    write_tags(node.tags.as_ref(), &mut record.tags);
}

pub(super) fn encode_class(node: &ClassType, record: &mut ClassRecord) {
    write_common(&node.meta, &mut record.common);
    record.class_type = node.class_type.clone();
    record.global_object = node.global_object.is_set();
    write_opt_ids(node.arguments.as_ref(), &mut record.arguments);
    write_opt_ids(node.extends_arguments.as_ref(), &mut record.extends_arguments);
    record.super_class = opt_type_ref(node.super_class);
    write_ids(&node.types, &mut record.types);
    write_tags(node.tags.as_ref(), &mut record.tags);
}

pub(super) fn encode_object_literal(node: &ObjectLiteralType, record: &mut ObjectLiteralRecord) {
    write_common(&node.meta, &mut record.common);
    write_ids(&node.types, &mut record.types);
    write_tags(node.tags.as_ref(), &mut record.tags);
}

pub(super) fn encode_property(node: &Property, record: &mut PropertyRecord) {
    write_common(&node.meta, &mut record.common);
    record.name = node.name.clone();
    record.ty = type_ref(node.ty);
    record.optional = node.optional.is_set();
    record.readonly = node.readonly.is_set();
    record.is_abstract = node.is_abstract.is_set();
    record.visibility = node.visibility;
    record.description = text(node.description.as_deref());
    write_default(node.default.as_ref(), &mut record.default);
    write_tags(node.tags.as_ref(), &mut record.tags);
}

pub(super) fn encode_property_signature(
    node: &PropertySignature,
    record: &mut PropertySignatureRecord,
) {
    write_common(&node.meta, &mut record.common);
    record.name = node.name.clone();
    record.ty = type_ref(node.ty);
    record.optional = node.optional.is_set();
    record.readonly = node.readonly.is_set();
    record.description = text(node.description.as_deref());
    write_default(node.default.as_ref(), &mut record.default);
    write_tags(node.tags.as_ref(), &mut record.tags);
}

pub(super) fn encode_method_signature(node: &MethodSignature, record: &mut MethodSignatureRecord) {
    write_common(&node.meta, &mut record.common);
    record.name = node.name.clone();
    write_parameters(&node.parameters, &mut record.parameters);
    record.return_type = type_ref(node.return_type);
    write_tags(node.tags.as_ref(), &mut record.tags);
}

pub(super) fn encode_parameter(node: &Parameter, record: &mut ParameterRecord) {
    write_parameter(node, record);
}

pub(super) fn encode_method(node: &Method, record: &mut MethodRecord) {
    write_common(&node.meta, &mut record.common);
    record.name = node.name.clone();
    write_parameters(&node.parameters, &mut record.parameters);
    record.return_type = type_ref(node.return_type);
    record.visibility = node.visibility;
    record.is_abstract = node.is_abstract.is_set();
    record.optional = node.optional.is_set();
    write_tags(node.tags.as_ref(), &mut record.tags);
}

pub(super) fn encode_call_signature(node: &CallSignature, record: &mut CallSignatureRecord) {
    write_common(&node.meta, &mut record.common);
    write_parameters(&node.parameters, &mut record.parameters);
    record.return_type = type_ref(node.return_type);
}
