// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field helpers shared by every variant decoder.

use crate::model::{
    DefaultValue, IndexAccessOrigin, Parameter, SparseFlag, Tags, TypeId, TypeMeta,
};
use crate::schema::{
    CommonRecord, DefaultValueRecord, IndexAccessOriginRecord, ParameterRecord, TagsRecord,
    TypeRef,
};

pub(super) fn id(reference: TypeRef) -> TypeId {
    TypeId(reference.id)
}

pub(super) fn opt_id(reference: Option<TypeRef>) -> Option<TypeId> {
    reference.map(id)
}

/// `""` decodes as absent.
pub(super) fn opt_text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

pub(super) fn flag(value: bool) -> SparseFlag {
    SparseFlag::from_bool(value)
}

/// Structural list: absent decodes as empty.
pub(super) fn ids(list: Option<&Vec<TypeRef>>) -> Vec<TypeId> {
    list.map(|refs| refs.iter().copied().map(id).collect())
        .unwrap_or_default()
}

/// Optional list: absent or empty decodes as `None`.
pub(super) fn opt_ids(list: Option<&Vec<TypeRef>>) -> Option<Vec<TypeId>> {
    list.filter(|refs| !refs.is_empty())
        .map(|refs| refs.iter().copied().map(id).collect())
}

pub(super) fn strings(list: Option<&Vec<String>>) -> Vec<String> {
    list.cloned().unwrap_or_default()
}

pub(super) fn origin(record: Option<&IndexAccessOriginRecord>) -> Option<IndexAccessOrigin> {
    record.map(|record| IndexAccessOrigin {
        container: id(record.container),
        index: id(record.index),
    })
}

pub(super) fn meta(common: &CommonRecord) -> TypeMeta {
    TypeMeta {
        type_name: opt_text(&common.type_name),
        type_arguments: opt_ids(common.type_arguments.as_ref()),
        decorators: opt_ids(common.decorators.as_ref()),
        index_access_origin: origin(common.index_access_origin.as_ref()),
    }
}

/// Tags with no field set decode as `None`.
pub(super) fn tags(record: Option<&TagsRecord>) -> Option<Tags> {
    let record = record?;
    let tags = Tags {
        alias: strings(record.alias.as_ref()),
        hidden: record.hidden,
        ignore: record.ignore,
        internal: record.internal,
        readonly: record.readonly,
        domain: opt_text(&record.domain),
        title: opt_text(&record.title),
        permission: strings(record.permission.as_ref()),
    };
    (!tags.is_empty()).then_some(tags)
}

/// Blank string defaults are never written, so one read back is absent too.
pub(super) fn default_value(record: Option<&DefaultValueRecord>) -> Option<DefaultValue> {
    let value = match record? {
        DefaultValueRecord::Boolean(b) => DefaultValue::Boolean(*b),
        DefaultValueRecord::Integer(i) => DefaultValue::Integer(*i),
        DefaultValueRecord::Float(f) => DefaultValue::Float(*f),
        DefaultValueRecord::String(s) => DefaultValue::String(s.clone()),
    };
    (!value.is_blank()).then_some(value)
}

pub(super) fn parameter(record: &ParameterRecord) -> Parameter {
    Parameter {
        meta: meta(&record.common),
        name: record.name.clone(),
        ty: id(record.ty),
        optional: flag(record.optional),
        readonly: flag(record.readonly),
        visibility: record.visibility,
        default: default_value(record.default.as_ref()),
        tags: tags(record.tags.as_ref()),
    }
}

pub(super) fn parameters(list: Option<&Vec<ParameterRecord>>) -> Vec<Parameter> {
    list.map(|records| records.iter().map(parameter).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optional_lists_decode_as_none() {
        assert_eq!(opt_ids(None), None);
        assert_eq!(opt_ids(Some(&vec![])), None);
        assert_eq!(opt_ids(Some(&vec![TypeRef::new(3)])), Some(vec![TypeId(3)]));
        assert!(ids(None).is_empty());
    }

    #[test]
    fn test_default_tags_record_decodes_as_none() {
        assert_eq!(tags(Some(&TagsRecord::default())), None);
        let record = TagsRecord {
            title: "Debug mode".into(),
            ..TagsRecord::default()
        };
        assert_eq!(
            tags(Some(&record)).and_then(|tags| tags.title),
            Some("Debug mode".to_string())
        );
    }

    #[test]
    fn test_blank_string_default_is_absent() {
        let blank = DefaultValueRecord::String(String::new());
        assert_eq!(default_value(Some(&blank)), None);

        let text = DefaultValueRecord::String("info".into());
        assert_eq!(
            default_value(Some(&text)),
            Some(DefaultValue::String("info".into()))
        );
        assert_eq!(
            default_value(Some(&DefaultValueRecord::Boolean(false))),
            Some(DefaultValue::Boolean(false))
        );
    }

    #[test]
    fn test_empty_type_name_is_absent() {
        assert_eq!(meta(&CommonRecord::default()).type_name, None);
    }
}
