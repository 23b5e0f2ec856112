// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Producer JSON ingestion
//!
//!
//! The reflection producer emits nodes as JSON objects with a numeric `kind`
//! (see [`ReflectionKind`]) and camelCase fields; references are plain
//! integers. Missing fields fall back to their defaults (empty string,
//! `false`, id 0). A field present with the wrong JSON type is rejected.
//!
//! ```text
//! { "kind": 32, "name": "DEBUG", "type": 2, "optional": true,
//!   "tags": { "alias": ["DEBUG_MODE"] } }
//! ```

use super::{
    ArrayType, CallSignature, ClassType, DefaultValue, EnumMember, EnumType, FunctionType,
    IndexAccessOrigin, IndexSignature, InferType, LiteralType, LiteralValue, Method,
    MethodSignature, ObjectLiteralType, Parameter, Property, PropertySignature, ReflectionKind,
    SimpleType, SparseFlag, Tags, TupleMember, TupleType, TypeId, TypeList, TypeMeta, TypeNode,
    TypeParameter, Visibility, WrappedType,
};
use crate::error::{CodecError, Result};
use serde_json::{Map, Value};

/// True when `value` is an object carrying a non-null `kind`.
///
/// Batch ingestion skips entries failing this check instead of erroring.
pub fn has_kind(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("kind"))
        .is_some_and(|kind| !kind.is_null())
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl TypeNode {
    /// Build a node from one producer JSON object.
    ///
    /// Fails with `UnsupportedKind` (carrying the pretty-printed node) when
    /// the kind is unknown or is a sub-record kind (`tupleMember`,
    /// `enumMember`) that never appears as a standalone node.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            CodecError::invalid(format!("type node must be a JSON object, got {value}"))
        })?;
        let raw_kind = match object.get("kind") {
            None | Some(Value::Null) => {
                return Err(CodecError::invalid("type node has no kind"));
            }
            Some(kind) => kind,
        };
        let kind = raw_kind
            .as_u64()
            .and_then(|kind| u8::try_from(kind).ok())
            .and_then(ReflectionKind::from_u8)
            .ok_or_else(|| CodecError::unsupported(raw_kind, pretty(value)))?;

        let fields = Fields { object };
        let meta = fields.meta()?;

        if let Some(simple) = kind.as_simple() {
            return Ok(Self::Simple(SimpleType {
                meta,
                kind: simple,
                origin: fields.opt_id("origin")?,
            }));
        }

        let node = match kind {
            ReflectionKind::Literal => Self::Literal(LiteralType {
                meta,
                literal: fields.literal()?,
            }),
            ReflectionKind::Array => Self::Array(ArrayType {
                meta,
                element: fields.id("type")?,
            }),
            ReflectionKind::Tuple => Self::Tuple(TupleType {
                meta,
                members: fields.objects("types", |member| {
                    Ok(TupleMember {
                        meta: member.meta()?,
                        ty: member.id("type")?,
                        name: member.opt_string("name")?,
                        optional: member.flag("optional")?,
                    })
                })?,
            }),
            ReflectionKind::Union => Self::Union(fields.type_list(meta)?),
            ReflectionKind::Intersection => Self::Intersection(fields.type_list(meta)?),
            ReflectionKind::TemplateLiteral => Self::TemplateLiteral(fields.type_list(meta)?),
            ReflectionKind::Function => Self::Function(FunctionType {
                meta,
                name: fields.opt_string("name")?,
                parameters: fields.parameters()?,
                return_type: fields.id("return")?,
                tags: fields.tags()?,
            }),
            ReflectionKind::Infer => Self::Infer(InferType { meta }),
            ReflectionKind::Enum => Self::Enum(EnumType {
                meta,
                index_type: fields.id("indexType")?,
                values: fields.scalars("values")?,
                members: fields.enum_members()?,
                tags: fields.tags()?,
            }),
            ReflectionKind::Class => Self::Class(ClassType {
                meta,
                class_type: fields.string("classType")?,
                global_object: fields.flag("globalObject")?,
                arguments: fields.opt_ids("arguments")?,
                extends_arguments: fields.opt_ids("extendsArguments")?,
                super_class: fields.opt_id("superClass")?,
                types: fields.ids("types")?,
                tags: fields.tags()?,
            }),
            ReflectionKind::ObjectLiteral => Self::ObjectLiteral(ObjectLiteralType {
                meta,
                types: fields.ids("types")?,
                tags: fields.tags()?,
            }),
            ReflectionKind::Property => Self::Property(Property {
                meta,
                name: fields.string("name")?,
                ty: fields.id("type")?,
                optional: fields.flag("optional")?,
                readonly: fields.flag("readonly")?,
                is_abstract: fields.flag("abstract")?,
                visibility: fields.visibility()?,
                description: fields.opt_string("description")?,
                default: fields.default_value()?,
                tags: fields.tags()?,
            }),
            ReflectionKind::PropertySignature => Self::PropertySignature(PropertySignature {
                meta,
                name: fields.string("name")?,
                ty: fields.id("type")?,
                optional: fields.flag("optional")?,
                readonly: fields.flag("readonly")?,
                description: fields.opt_string("description")?,
                default: fields.default_value()?,
                tags: fields.tags()?,
            }),
            ReflectionKind::MethodSignature => Self::MethodSignature(MethodSignature {
                meta,
                name: fields.string("name")?,
                parameters: fields.parameters()?,
                return_type: fields.id("return")?,
                tags: fields.tags()?,
            }),
            ReflectionKind::Parameter => Self::Parameter(fields.parameter(meta)?),
            ReflectionKind::Method => Self::Method(Method {
                meta,
                name: fields.string("name")?,
                parameters: fields.parameters()?,
                return_type: fields.id("return")?,
                visibility: fields.visibility()?,
                is_abstract: fields.flag("abstract")?,
                optional: fields.flag("optional")?,
                tags: fields.tags()?,
            }),
            ReflectionKind::Promise => Self::Promise(WrappedType {
                meta,
                ty: fields.id("type")?,
            }),
            ReflectionKind::Rest => Self::Rest(WrappedType {
                meta,
                ty: fields.id("type")?,
            }),
            ReflectionKind::TypeParameter => Self::TypeParameter(TypeParameter {
                meta,
                name: fields.string("name")?,
                default_type: fields.opt_id("default")?,
            }),
            ReflectionKind::IndexSignature => Self::IndexSignature(IndexSignature {
                meta,
                index: fields.id("index")?,
                ty: fields.id("type")?,
            }),
            ReflectionKind::CallSignature => Self::CallSignature(CallSignature {
                meta,
                parameters: fields.parameters()?,
                return_type: fields.id("return")?,
            }),
            ReflectionKind::TupleMember | ReflectionKind::EnumMember => {
                return Err(CodecError::unsupported(raw_kind, pretty(value)));
            }
            // Simple kinds returned above.
            _ => return Err(CodecError::unsupported(raw_kind, pretty(value))),
        };
        Ok(node)
    }
}

/// Lenient typed access to the fields of one JSON object.
struct Fields<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Field value, treating JSON `null` as missing.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|value| !value.is_null())
    }

    fn wrong_type(key: &str, expected: &str, value: &Value) -> CodecError {
        CodecError::invalid(format!("field `{key}` must be {expected}, got {value}"))
    }

    fn string(&self, key: &str) -> Result<String> {
        Ok(self.opt_string(key)?.unwrap_or_default())
    }

    fn opt_string(&self, key: &str) -> Result<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(Self::wrong_type(key, "a string", other)),
        }
    }

    fn bool(&self, key: &str) -> Result<bool> {
        match self.get(key) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(Self::wrong_type(key, "a boolean", other)),
        }
    }

    fn flag(&self, key: &str) -> Result<SparseFlag> {
        self.bool(key).map(SparseFlag::from_bool)
    }

    fn id(&self, key: &str) -> Result<TypeId> {
        Ok(self.opt_id(key)?.unwrap_or_default())
    }

    fn opt_id(&self, key: &str) -> Result<Option<TypeId>> {
        self.get(key).map(|value| to_id(key, value)).transpose()
    }

    fn ids(&self, key: &str) -> Result<Vec<TypeId>> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items.iter().map(|item| to_id(key, item)).collect(),
            Some(other) => Err(Self::wrong_type(key, "an array of ids", other)),
        }
    }

    /// Id list where empty and missing both mean "none".
    fn opt_ids(&self, key: &str) -> Result<Option<Vec<TypeId>>> {
        let ids = self.ids(key)?;
        Ok((!ids.is_empty()).then_some(ids))
    }

    fn strings(&self, key: &str) -> Result<Vec<String>> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(Self::wrong_type(key, "an array of strings", other)),
                })
                .collect(),
            Some(other) => Err(Self::wrong_type(key, "an array of strings", other)),
        }
    }

    /// Raw scalar values rendered as strings (enum values may be numbers).
    fn scalars(&self, key: &str) -> Result<Vec<String>> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| scalar_string(key, item))
                .collect(),
            Some(other) => Err(Self::wrong_type(key, "an array", other)),
        }
    }

    fn objects<T>(
        &self,
        key: &str,
        mut parse: impl FnMut(&Fields<'a>) -> Result<T>,
    ) -> Result<Vec<T>> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Object(object) => parse(&Fields { object }),
                    other => Err(Self::wrong_type(key, "an array of objects", other)),
                })
                .collect(),
            Some(other) => Err(Self::wrong_type(key, "an array of objects", other)),
        }
    }

    fn meta(&self) -> Result<TypeMeta> {
        let index_access_origin = match self.get("indexAccessOrigin") {
            None => None,
            Some(Value::Object(object)) => {
                let origin = Fields { object };
                Some(IndexAccessOrigin {
                    container: origin.id("container")?,
                    index: origin.id("index")?,
                })
            }
            Some(other) => return Err(Self::wrong_type("indexAccessOrigin", "an object", other)),
        };
        Ok(TypeMeta {
            type_name: self.opt_string("typeName")?,
            type_arguments: self.opt_ids("typeArguments")?,
            decorators: self.opt_ids("decorators")?,
            index_access_origin,
        })
    }

    fn tags(&self) -> Result<Option<Tags>> {
        match self.get("tags") {
            None => Ok(None),
            Some(Value::Object(object)) => {
                let tags = Fields { object };
                Ok(Some(Tags {
                    alias: tags.strings("alias")?,
                    hidden: tags.bool("hidden")?,
                    ignore: tags.bool("ignore")?,
                    internal: tags.bool("internal")?,
                    readonly: tags.bool("readonly")?,
                    domain: tags.opt_string("domain")?,
                    title: tags.opt_string("title")?,
                    permission: tags.strings("permission")?,
                }))
            }
            Some(other) => Err(Self::wrong_type("tags", "an object", other)),
        }
    }

    /// Visibility as the producer's number (0/1/2) or its name.
    fn visibility(&self) -> Result<Visibility> {
        let visibility = match self.get("visibility") {
            None => Some(Visibility::Public),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .and_then(Visibility::from_u8),
            Some(Value::String(s)) => match s.as_str() {
                "public" => Some(Visibility::Public),
                "protected" => Some(Visibility::Protected),
                "private" => Some(Visibility::Private),
                _ => None,
            },
            Some(_) => None,
        };
        visibility.ok_or_else(|| {
            CodecError::invalid(format!(
                "field `visibility` must be 0, 1, 2 or a visibility name, got {}",
                self.object.get("visibility").unwrap_or(&Value::Null)
            ))
        })
    }

    fn default_value(&self) -> Result<Option<DefaultValue>> {
        match self.get("default") {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(DefaultValue::Boolean(*b))),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(DefaultValue::String(s.clone()))),
            Some(Value::Number(n)) => {
                if let Some(int) = n.as_i64() {
                    Ok(Some(DefaultValue::Integer(int)))
                } else {
                    let float = n.as_f64().ok_or_else(|| {
                        Self::wrong_type("default", "a finite number", &Value::Number(n.clone()))
                    })?;
                    Ok(Some(DefaultValue::from_number(float)))
                }
            }
            Some(other) => Err(Self::wrong_type("default", "a boolean, number or string", other)),
        }
    }

    fn literal(&self) -> Result<LiteralValue> {
        match self.get("literal") {
            None => Ok(LiteralValue::Boolean(false)),
            Some(Value::Bool(b)) => Ok(LiteralValue::Boolean(*b)),
            Some(Value::String(s)) => Ok(LiteralValue::String(s.clone())),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(LiteralValue::Number)
                .ok_or_else(|| {
                    Self::wrong_type("literal", "a finite number", &Value::Number(n.clone()))
                }),
            Some(Value::Object(object)) => {
                let tagged = Fields { object };
                match tagged.string("type")?.as_str() {
                    "bigint" => {
                        let value = tagged.get("value").unwrap_or(&Value::Null);
                        Ok(LiteralValue::BigInt(scalar_string("literal.value", value)?))
                    }
                    "symbol" => Ok(LiteralValue::Symbol(tagged.string("name")?)),
                    "regex" => Ok(LiteralValue::Regex(tagged.string("regex")?)),
                    other => Err(CodecError::invalid(format!(
                        "literal object has unknown type `{other}`"
                    ))),
                }
            }
            Some(other) => Err(Self::wrong_type("literal", "a literal value", other)),
        }
    }

    fn type_list(&self, meta: TypeMeta) -> Result<TypeList> {
        Ok(TypeList {
            meta,
            types: self.ids("types")?,
        })
    }

    fn parameter(&self, meta: TypeMeta) -> Result<Parameter> {
        Ok(Parameter {
            meta,
            name: self.string("name")?,
            ty: self.id("type")?,
            optional: self.flag("optional")?,
            readonly: self.flag("readonly")?,
            visibility: self.visibility()?,
            default: self.default_value()?,
            tags: self.tags()?,
        })
    }

    fn parameters(&self) -> Result<Vec<Parameter>> {
        self.objects("parameters", |parameter| parameter.parameter(parameter.meta()?))
    }

    /// `enum` is an object mapping member names to their values.
    fn enum_members(&self) -> Result<Vec<EnumMember>> {
        match self.get("enum") {
            None => Ok(Vec::new()),
            Some(Value::Object(members)) => members
                .iter()
                .map(|(name, value)| {
                    Ok(EnumMember {
                        name: name.clone(),
                        value: scalar_string("enum", value)?,
                    })
                })
                .collect(),
            Some(other) => Err(Self::wrong_type("enum", "an object", other)),
        }
    }
}

fn to_id(key: &str, value: &Value) -> Result<TypeId> {
    value
        .as_u64()
        .and_then(|id| u32::try_from(id).ok())
        .map(TypeId)
        .ok_or_else(|| CodecError::invalid(format!("field `{key}` must hold u32 ids, got {value}")))
}

fn scalar_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(CodecError::invalid(format!(
            "field `{key}` must hold scalar values, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SimpleKind;
    use serde_json::json;

    #[test]
    fn test_property_signature_with_tags() {
        let node = TypeNode::from_json(&json!({
            "kind": 32,
            "name": "DEBUG",
            "type": 2,
            "optional": true,
            "default": false,
            "tags": { "alias": ["DEBUG_MODE"], "hidden": true }
        }))
        .expect("node");

        match node {
            TypeNode::PropertySignature(p) => {
                assert_eq!(p.name, "DEBUG");
                assert_eq!(p.ty, TypeId(2));
                assert_eq!(p.optional, SparseFlag::Set);
                assert_eq!(p.readonly, SparseFlag::Absent);
                assert_eq!(p.default, Some(DefaultValue::Boolean(false)));
                let tags = p.tags.expect("tags");
                assert!(tags.hidden);
                assert!(tags.has_alias("DEBUG_MODE"));
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_simple_kinds() {
        let node = TypeNode::from_json(&json!({ "kind": 7, "typeName": "" })).expect("node");
        assert_eq!(node, TypeNode::simple(SimpleKind::Boolean));
    }

    #[test]
    fn test_numeric_default_classification() {
        let int = TypeNode::from_json(&json!({ "kind": 15, "name": "PORT", "default": 8080 }))
            .expect("node");
        let float = TypeNode::from_json(&json!({ "kind": 15, "name": "RATIO", "default": 0.5 }))
            .expect("node");
        match (int, float) {
            (TypeNode::Property(int), TypeNode::Property(float)) => {
                assert_eq!(int.default, Some(DefaultValue::Integer(8080)));
                assert_eq!(float.default, Some(DefaultValue::Float(0.5)));
            }
            other => panic!("unexpected nodes {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_carries_dump() {
        let err = TypeNode::from_json(&json!({ "kind": 9999, "name": "weird" })).unwrap_err();
        match err {
            CodecError::UnsupportedKind { kind, dump } => {
                assert_eq!(kind, "9999");
                assert!(dump.contains("\"weird\""));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_wrong_field_type_rejected() {
        let err = TypeNode::from_json(&json!({ "kind": 15, "name": 12 })).unwrap_err();
        assert!(matches!(err, CodecError::InvalidInput(_)));
    }

    #[test]
    fn test_enum_members_keep_order() {
        let node = TypeNode::from_json(&json!({
            "kind": 22,
            "indexType": 1,
            "values": ["debug", "info", 3],
            "enum": { "Debug": "debug", "Info": "info", "Trace": 3 }
        }))
        .expect("node");

        match node {
            TypeNode::Enum(e) => {
                assert_eq!(e.values, vec!["debug", "info", "3"]);
                let names: Vec<_> = e.members.iter().map(|m| m.name.as_str()).collect();
                assert_eq!(names, vec!["Debug", "Info", "Trace"]);
                assert_eq!(e.members[2].value, "3");
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_literal_forms() {
        let bigint = TypeNode::from_json(&json!({
            "kind": 13,
            "literal": { "type": "bigint", "value": "9007199254740993" }
        }))
        .expect("bigint");
        assert!(matches!(
            bigint,
            TypeNode::Literal(LiteralType {
                literal: LiteralValue::BigInt(ref v),
                ..
            }) if v == "9007199254740993"
        ));

        let regex = TypeNode::from_json(&json!({
            "kind": 13,
            "literal": { "type": "regex", "regex": "/^a+$/" }
        }))
        .expect("regex");
        assert!(matches!(
            regex,
            TypeNode::Literal(LiteralType { literal: LiteralValue::Regex(_), .. })
        ));
    }

    #[test]
    fn test_has_kind() {
        assert!(has_kind(&json!({ "kind": 0 })));
        assert!(!has_kind(&json!({ "kind": null })));
        assert!(!has_kind(&json!({ "name": "x" })));
        assert!(!has_kind(&json!(42)));
    }
}
