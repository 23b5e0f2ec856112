// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field helpers shared by every variant encoder.

use crate::model::{DefaultValue, IndexAccessOrigin, Parameter, Tags, TypeId, TypeMeta};
use crate::schema::{
    CommonRecord, DefaultValueRecord, IndexAccessOriginRecord, ParameterRecord, TagsRecord,
    TypeRef,
};

pub(super) fn type_ref(id: TypeId) -> TypeRef {
    TypeRef::new(id.0)
}

pub(super) fn opt_type_ref(id: Option<TypeId>) -> Option<TypeRef> {
    id.map(type_ref)
}

/// Absent strings become `""`.
pub(super) fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_owned()
}

/// Write `ids` into an optional list, leaving it uninitialized when empty.
pub(super) fn write_ids(ids: &[TypeId], target: &mut Option<Vec<TypeRef>>) {
    if ids.is_empty() {
        return;
    }
    *target = Some(ids.iter().copied().map(type_ref).collect());
}

pub(super) fn write_opt_ids(ids: Option<&Vec<TypeId>>, target: &mut Option<Vec<TypeRef>>) {
    if let Some(ids) = ids {
        write_ids(ids, target);
    }
}

pub(super) fn write_strings(values: &[String], target: &mut Option<Vec<String>>) {
    if !values.is_empty() {
        *target = Some(values.to_vec());
    }
}

pub(super) fn write_origin(
    origin: Option<&IndexAccessOrigin>,
    target: &mut Option<IndexAccessOriginRecord>,
) {
    *target = origin.map(|origin| IndexAccessOriginRecord {
        container: type_ref(origin.container),
        index: type_ref(origin.index),
    });
}

pub(super) fn write_common(meta: &TypeMeta, common: &mut CommonRecord) {
    common.type_name = text(meta.type_name.as_deref());
    write_opt_ids(meta.type_arguments.as_ref(), &mut common.type_arguments);
    write_opt_ids(meta.decorators.as_ref(), &mut common.decorators);
    write_origin(meta.index_access_origin.as_ref(), &mut common.index_access_origin);
}

/// Tags are only written when at least one field is set.
pub(super) fn write_tags(tags: Option<&Tags>, target: &mut Option<TagsRecord>) {
    let Some(tags) = tags.filter(|tags| !tags.is_empty()) else {
        return;
    };
    let record = target.insert(TagsRecord {
        hidden: tags.hidden,
        ignore: tags.ignore,
        internal: tags.internal,
        readonly: tags.readonly,
        domain: text(tags.domain.as_deref()),
        title: text(tags.title.as_deref()),
        ..TagsRecord::default()
    });
    write_strings(&tags.alias, &mut record.alias);
    write_strings(&tags.permission, &mut record.permission);
}

/// Absent and empty-string defaults are skipped.
pub(super) fn write_default(value: Option<&DefaultValue>, target: &mut Option<DefaultValueRecord>) {
    let Some(value) = value.filter(|value| !value.is_blank()) else {
        return;
    };
    *target = Some(match value {
        DefaultValue::Boolean(b) => DefaultValueRecord::Boolean(*b),
        DefaultValue::Integer(i) => DefaultValueRecord::Integer(*i),
        DefaultValue::Float(f) => DefaultValueRecord::Float(*f),
        DefaultValue::String(s) => DefaultValueRecord::String(s.clone()),
    });
}

pub(super) fn write_parameter(parameter: &Parameter, record: &mut ParameterRecord) {
    write_common(&parameter.meta, &mut record.common);
    record.name = parameter.name.clone();
    record.ty = type_ref(parameter.ty);
    record.optional = parameter.optional.is_set();
    record.readonly = parameter.readonly.is_set();
    record.visibility = parameter.visibility;
    write_default(parameter.default.as_ref(), &mut record.default);
    write_tags(parameter.tags.as_ref(), &mut record.tags);
}

pub(super) fn write_parameters(
    parameters: &[Parameter],
    target: &mut Option<Vec<ParameterRecord>>,
) {
    if parameters.is_empty() {
        return;
    }
    let records = target.insert(vec![ParameterRecord::default(); parameters.len()]);
    for (parameter, record) in parameters.iter().zip(records.iter_mut()) {
        write_parameter(parameter, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lists_stay_uninitialized() {
        let mut common = CommonRecord::default();
        write_common(
            &TypeMeta {
                decorators: Some(vec![]),
                type_arguments: None,
                ..TypeMeta::default()
            },
            &mut common,
        );
        assert!(!common.has_decorators());
        assert!(!common.has_type_arguments());
        assert_eq!(common.type_name, "");
    }

    #[test]
    fn test_origin_presence() {
        let mut target = None;
        write_origin(None, &mut target);
        assert!(target.is_none());

        write_origin(
            Some(&IndexAccessOrigin {
                container: TypeId(0),
                index: TypeId(0),
            }),
            &mut target,
        );
        assert_eq!(target, Some(IndexAccessOriginRecord::default()));
    }

    #[test]
    fn test_blank_default_skipped() {
        let mut target = None;
        write_default(Some(&DefaultValue::String(String::new())), &mut target);
        assert!(target.is_none());

        write_default(Some(&DefaultValue::Float(1.5)), &mut target);
        assert_eq!(target, Some(DefaultValueRecord::Float(1.5)));
    }

    #[test]
    fn test_empty_tags_skipped() {
        let mut target = None;
        write_tags(Some(&Tags::default()), &mut target);
        assert!(target.is_none());

        let tags = Tags {
            permission: vec!["admin".into()],
            ..Tags::default()
        };
        write_tags(Some(&tags), &mut target);
        let record = target.expect("tags written");
        assert_eq!(record.permission, Some(vec!["admin".to_string()]));
        assert!(!record.has_alias());
    }
}
