// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reflection type graph
//!
//!
//! In-memory representation of a reflected TypeScript type system. Nodes are
//! stored flat in a [`Batch`] and reference each other by [`TypeId`], so
//! self-referencing classes and mutually recursive types need no pointer
//! graph.
//!
//! # Layout
//!
//! - [`TypeNode`] - tagged union over every reflected kind
//! - [`TypeMeta`] - fields shared by every variant (name, generics, decorators)
//! - [`Tags`] - optional documentation tags (`@alias`, `@hidden`, ...)
//! - [`DefaultValue`] - literal default of a property or parameter
//! - [`Batch`] - arena of nodes serialized together

mod batch;
mod default_value;
pub mod json;
mod tags;

pub use batch::Batch;
pub use default_value::DefaultValue;
pub use tags::Tags;

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers and enumerations
// ============================================================================

/// Index of a node inside its [`Batch`].
///
/// Ids are assigned by the producer and are not range-checked by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Position of the referenced node in its batch.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for TypeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind numbering used by the reflection producer.
///
/// Values match the producer's serialized `kind` field and are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ReflectionKind {
    Never = 0,
    Any = 1,
    Unknown = 2,
    Void = 3,
    Object = 4,
    String = 5,
    Number = 6,
    Boolean = 7,
    Symbol = 8,
    Bigint = 9,
    Null = 10,
    Undefined = 11,
    Regexp = 12,
    Literal = 13,
    TemplateLiteral = 14,
    Property = 15,
    Method = 16,
    Function = 17,
    Parameter = 18,
    Promise = 19,
    Class = 20,
    TypeParameter = 21,
    Enum = 22,
    Union = 23,
    Intersection = 24,
    Array = 25,
    Tuple = 26,
    TupleMember = 27,
    EnumMember = 28,
    Rest = 29,
    ObjectLiteral = 30,
    IndexSignature = 31,
    PropertySignature = 32,
    MethodSignature = 33,
    Infer = 34,
    CallSignature = 35,
}

impl ReflectionKind {
    /// Map a producer kind number, `None` when this codec does not know it.
    pub fn from_u8(value: u8) -> Option<Self> {
        let kind = match value {
            0 => Self::Never,
            1 => Self::Any,
            2 => Self::Unknown,
            3 => Self::Void,
            4 => Self::Object,
            5 => Self::String,
            6 => Self::Number,
            7 => Self::Boolean,
            8 => Self::Symbol,
            9 => Self::Bigint,
            10 => Self::Null,
            11 => Self::Undefined,
            12 => Self::Regexp,
            13 => Self::Literal,
            14 => Self::TemplateLiteral,
            15 => Self::Property,
            16 => Self::Method,
            17 => Self::Function,
            18 => Self::Parameter,
            19 => Self::Promise,
            20 => Self::Class,
            21 => Self::TypeParameter,
            22 => Self::Enum,
            23 => Self::Union,
            24 => Self::Intersection,
            25 => Self::Array,
            26 => Self::Tuple,
            27 => Self::TupleMember,
            28 => Self::EnumMember,
            29 => Self::Rest,
            30 => Self::ObjectLiteral,
            31 => Self::IndexSignature,
            32 => Self::PropertySignature,
            33 => Self::MethodSignature,
            34 => Self::Infer,
            35 => Self::CallSignature,
            _ => return None,
        };
        Some(kind)
    }

    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Simple (payload-free) kind for this reflection kind, if any.
    pub const fn as_simple(self) -> Option<SimpleKind> {
        let simple = match self {
            Self::Never => SimpleKind::Never,
            Self::Any => SimpleKind::Any,
            Self::Unknown => SimpleKind::Unknown,
            Self::Void => SimpleKind::Void,
            Self::Object => SimpleKind::Object,
            Self::String => SimpleKind::String,
            Self::Number => SimpleKind::Number,
            Self::Boolean => SimpleKind::Boolean,
            Self::Symbol => SimpleKind::Symbol,
            Self::Bigint => SimpleKind::Bigint,
            Self::Null => SimpleKind::Null,
            Self::Undefined => SimpleKind::Undefined,
            Self::Regexp => SimpleKind::Regexp,
            _ => return None,
        };
        Some(simple)
    }
}

/// Primitive and builtin kinds without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SimpleKind {
    #[default]
    Never,
    Any,
    Unknown,
    Void,
    Object,
    String,
    Number,
    Boolean,
    Symbol,
    Bigint,
    Null,
    Undefined,
    Regexp,
}

impl SimpleKind {
    pub const fn reflection_kind(self) -> ReflectionKind {
        match self {
            Self::Never => ReflectionKind::Never,
            Self::Any => ReflectionKind::Any,
            Self::Unknown => ReflectionKind::Unknown,
            Self::Void => ReflectionKind::Void,
            Self::Object => ReflectionKind::Object,
            Self::String => ReflectionKind::String,
            Self::Number => ReflectionKind::Number,
            Self::Boolean => ReflectionKind::Boolean,
            Self::Symbol => ReflectionKind::Symbol,
            Self::Bigint => ReflectionKind::Bigint,
            Self::Null => ReflectionKind::Null,
            Self::Undefined => ReflectionKind::Undefined,
            Self::Regexp => ReflectionKind::Regexp,
        }
    }

    /// Wire value; same number as the producer kind.
    pub const fn to_u8(self) -> u8 {
        self.reflection_kind().to_u8()
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        ReflectionKind::from_u8(value).and_then(ReflectionKind::as_simple)
    }
}

/// Member visibility (`public` / `protected` / `private`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Public => 0,
            Self::Protected => 1,
            Self::Private => 2,
        }
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Public),
            1 => Some(Self::Protected),
            2 => Some(Self::Private),
            _ => None,
        }
    }
}

/// Boolean modifier where `false` and "not present" are the same state.
///
/// The wire format stores a plain bool; decoding `false` yields
/// [`SparseFlag::Absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SparseFlag {
    #[default]
    Absent,
    Set,
}

impl SparseFlag {
    pub const fn from_bool(value: bool) -> Self {
        if value {
            Self::Set
        } else {
            Self::Absent
        }
    }

    pub const fn is_set(self) -> bool {
        matches!(self, Self::Set)
    }
}

impl From<bool> for SparseFlag {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

// ============================================================================
// Shared metadata
// ============================================================================

/// Provenance of a type obtained through indexed access (`T[K]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexAccessOrigin {
    pub container: TypeId,
    pub index: TypeId,
}

/// Fields carried by every node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    /// Display name; the wire has no null string so `Some("")` decodes as `None`.
    pub type_name: Option<String>,
    /// Generic instantiation arguments. `Some(vec![])` decodes as `None`.
    pub type_arguments: Option<Vec<TypeId>>,
    /// Decorator types. `Some(vec![])` decodes as `None`.
    pub decorators: Option<Vec<TypeId>>,
    pub index_access_origin: Option<IndexAccessOrigin>,
}

impl TypeMeta {
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }
}

// ============================================================================
// Variants
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleType {
    pub meta: TypeMeta,
    pub kind: SimpleKind,
    pub origin: Option<TypeId>,
}

/// Concrete literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiteralValue {
    Boolean(bool),
    Number(f64),
    String(String),
    /// Decimal digits of a `bigint` literal.
    BigInt(String),
    /// Description of a unique symbol.
    Symbol(String),
    /// Source pattern of a regular expression literal.
    Regex(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralType {
    pub meta: TypeMeta,
    pub literal: LiteralValue,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrayType {
    pub meta: TypeMeta,
    pub element: TypeId,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TupleMember {
    pub meta: TypeMeta,
    pub ty: TypeId,
    pub name: Option<String>,
    pub optional: SparseFlag,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TupleType {
    pub meta: TypeMeta,
    pub members: Vec<TupleMember>,
}

/// Member list shared by union, intersection and template literal nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeList {
    pub meta: TypeMeta,
    pub types: Vec<TypeId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameter {
    pub meta: TypeMeta,
    pub name: String,
    pub ty: TypeId,
    pub optional: SparseFlag,
    pub readonly: SparseFlag,
    pub visibility: Visibility,
    pub default: Option<DefaultValue>,
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionType {
    pub meta: TypeMeta,
    pub name: Option<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeId,
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InferType {
    pub meta: TypeMeta,
}

/// Enum member with its string-encoded value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnumType {
    pub meta: TypeMeta,
    pub index_type: TypeId,
    pub values: Vec<String>,
    pub members: Vec<EnumMember>,
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassType {
    pub meta: TypeMeta,
    /// Identifier of the runtime class.
    pub class_type: String,
    pub global_object: SparseFlag,
    pub arguments: Option<Vec<TypeId>>,
    pub extends_arguments: Option<Vec<TypeId>>,
    pub super_class: Option<TypeId>,
    pub types: Vec<TypeId>,
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectLiteralType {
    pub meta: TypeMeta,
    pub types: Vec<TypeId>,
    pub tags: Option<Tags>,
}

/// Class member property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Property {
    pub meta: TypeMeta,
    pub name: String,
    pub ty: TypeId,
    pub optional: SparseFlag,
    pub readonly: SparseFlag,
    pub is_abstract: SparseFlag,
    pub visibility: Visibility,
    pub description: Option<String>,
    pub default: Option<DefaultValue>,
    pub tags: Option<Tags>,
}

/// Object literal member property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertySignature {
    pub meta: TypeMeta,
    pub name: String,
    pub ty: TypeId,
    pub optional: SparseFlag,
    pub readonly: SparseFlag,
    pub description: Option<String>,
    pub default: Option<DefaultValue>,
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MethodSignature {
    pub meta: TypeMeta,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeId,
    pub tags: Option<Tags>,
}

/// Class member method.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Method {
    pub meta: TypeMeta,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeId,
    pub visibility: Visibility,
    pub is_abstract: SparseFlag,
    pub optional: SparseFlag,
    pub tags: Option<Tags>,
}

/// Single wrapped type (`Promise<T>`, `...T`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WrappedType {
    pub meta: TypeMeta,
    pub ty: TypeId,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeParameter {
    pub meta: TypeMeta,
    pub name: String,
    pub default_type: Option<TypeId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexSignature {
    pub meta: TypeMeta,
    pub index: TypeId,
    pub ty: TypeId,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CallSignature {
    pub meta: TypeMeta,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeId,
}

/// One reflected type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "variant")]
pub enum TypeNode {
    Simple(SimpleType),
    Literal(LiteralType),
    Array(ArrayType),
    Tuple(TupleType),
    Union(TypeList),
    Intersection(TypeList),
    Function(FunctionType),
    Infer(InferType),
    Enum(EnumType),
    Class(ClassType),
    ObjectLiteral(ObjectLiteralType),
    Property(Property),
    PropertySignature(PropertySignature),
    MethodSignature(MethodSignature),
    Parameter(Parameter),
    Method(Method),
    Promise(WrappedType),
    Rest(WrappedType),
    TypeParameter(TypeParameter),
    IndexSignature(IndexSignature),
    TemplateLiteral(TypeList),
    CallSignature(CallSignature),
}

impl TypeNode {
    /// Simple node without metadata.
    pub fn simple(kind: SimpleKind) -> Self {
        Self::Simple(SimpleType {
            kind,
            ..SimpleType::default()
        })
    }

    /// Producer kind of this node.
    pub fn kind(&self) -> ReflectionKind {
        match self {
            Self::Simple(simple) => simple.kind.reflection_kind(),
            Self::Literal(_) => ReflectionKind::Literal,
            Self::Array(_) => ReflectionKind::Array,
            Self::Tuple(_) => ReflectionKind::Tuple,
            Self::Union(_) => ReflectionKind::Union,
            Self::Intersection(_) => ReflectionKind::Intersection,
            Self::Function(_) => ReflectionKind::Function,
            Self::Infer(_) => ReflectionKind::Infer,
            Self::Enum(_) => ReflectionKind::Enum,
            Self::Class(_) => ReflectionKind::Class,
            Self::ObjectLiteral(_) => ReflectionKind::ObjectLiteral,
            Self::Property(_) => ReflectionKind::Property,
            Self::PropertySignature(_) => ReflectionKind::PropertySignature,
            Self::MethodSignature(_) => ReflectionKind::MethodSignature,
            Self::Parameter(_) => ReflectionKind::Parameter,
            Self::Method(_) => ReflectionKind::Method,
            Self::Promise(_) => ReflectionKind::Promise,
            Self::Rest(_) => ReflectionKind::Rest,
            Self::TypeParameter(_) => ReflectionKind::TypeParameter,
            Self::IndexSignature(_) => ReflectionKind::IndexSignature,
            Self::TemplateLiteral(_) => ReflectionKind::TemplateLiteral,
            Self::CallSignature(_) => ReflectionKind::CallSignature,
        }
    }

    pub fn meta(&self) -> &TypeMeta {
        match self {
            Self::Simple(n) => &n.meta,
            Self::Literal(n) => &n.meta,
            Self::Array(n) => &n.meta,
            Self::Tuple(n) => &n.meta,
            Self::Union(n) | Self::Intersection(n) | Self::TemplateLiteral(n) => &n.meta,
            Self::Function(n) => &n.meta,
            Self::Infer(n) => &n.meta,
            Self::Enum(n) => &n.meta,
            Self::Class(n) => &n.meta,
            Self::ObjectLiteral(n) => &n.meta,
            Self::Property(n) => &n.meta,
            Self::PropertySignature(n) => &n.meta,
            Self::MethodSignature(n) => &n.meta,
            Self::Parameter(n) => &n.meta,
            Self::Method(n) => &n.meta,
            Self::Promise(n) | Self::Rest(n) => &n.meta,
            Self::TypeParameter(n) => &n.meta,
            Self::IndexSignature(n) => &n.meta,
            Self::CallSignature(n) => &n.meta,
        }
    }

    /// Member name for named members (properties, methods, parameters).
    pub fn member_name(&self) -> Option<&str> {
        match self {
            Self::Property(n) => Some(&n.name),
            Self::PropertySignature(n) => Some(&n.name),
            Self::MethodSignature(n) => Some(&n.name),
            Self::Method(n) => Some(&n.name),
            Self::Parameter(n) => Some(&n.name),
            Self::TypeParameter(n) => Some(&n.name),
            Self::Function(n) => n.name.as_deref(),
            _ => None,
        }
    }

    pub fn tags(&self) -> Option<&Tags> {
        match self {
            Self::Function(n) => n.tags.as_ref(),
            Self::Enum(n) => n.tags.as_ref(),
            Self::Class(n) => n.tags.as_ref(),
            Self::ObjectLiteral(n) => n.tags.as_ref(),
            Self::Property(n) => n.tags.as_ref(),
            Self::PropertySignature(n) => n.tags.as_ref(),
            Self::MethodSignature(n) => n.tags.as_ref(),
            Self::Parameter(n) => n.tags.as_ref(),
            Self::Method(n) => n.tags.as_ref(),
            _ => None,
        }
    }

    /// True for `Property` and `PropertySignature` nodes.
    pub fn is_property(&self) -> bool {
        matches!(self, Self::Property(_) | Self::PropertySignature(_))
    }

    /// Every id referenced by this node, in field order.
    pub fn references(&self) -> Vec<TypeId> {
        let mut ids = Vec::new();
        let mut node = self.clone();
        node.visit_references_mut(&mut |id| ids.push(*id));
        ids
    }

    /// Visit every id field of this node, including nested parameters,
    /// tuple members and metadata.
    pub fn visit_references_mut(&mut self, f: &mut dyn FnMut(&mut TypeId)) {
        match self {
            Self::Simple(n) => {
                visit_meta(&mut n.meta, f);
                if let Some(origin) = n.origin.as_mut() {
                    f(origin);
                }
            }
            Self::Literal(n) => visit_meta(&mut n.meta, f),
            Self::Array(n) => {
                visit_meta(&mut n.meta, f);
                f(&mut n.element);
            }
            Self::Tuple(n) => {
                visit_meta(&mut n.meta, f);
                for member in &mut n.members {
                    visit_meta(&mut member.meta, f);
                    f(&mut member.ty);
                }
            }
            Self::Union(n) | Self::Intersection(n) | Self::TemplateLiteral(n) => {
                visit_meta(&mut n.meta, f);
                n.types.iter_mut().for_each(|id| f(id));
            }
            Self::Function(n) => {
                visit_meta(&mut n.meta, f);
                visit_parameters(&mut n.parameters, f);
                f(&mut n.return_type);
            }
            Self::Infer(n) => visit_meta(&mut n.meta, f),
            Self::Enum(n) => {
                visit_meta(&mut n.meta, f);
                f(&mut n.index_type);
            }
            Self::Class(n) => {
                visit_meta(&mut n.meta, f);
                for list in [n.arguments.as_mut(), n.extends_arguments.as_mut()]
                    .into_iter()
                    .flatten()
                {
                    list.iter_mut().for_each(|id| f(id));
                }
                if let Some(super_class) = n.super_class.as_mut() {
                    f(super_class);
                }
                n.types.iter_mut().for_each(|id| f(id));
            }
            Self::ObjectLiteral(n) => {
                visit_meta(&mut n.meta, f);
                n.types.iter_mut().for_each(|id| f(id));
            }
            Self::Property(n) => {
                visit_meta(&mut n.meta, f);
                f(&mut n.ty);
            }
            Self::PropertySignature(n) => {
                visit_meta(&mut n.meta, f);
                f(&mut n.ty);
            }
            Self::MethodSignature(n) => {
                visit_meta(&mut n.meta, f);
                visit_parameters(&mut n.parameters, f);
                f(&mut n.return_type);
            }
            Self::Parameter(n) => {
                visit_meta(&mut n.meta, f);
                f(&mut n.ty);
            }
            Self::Method(n) => {
                visit_meta(&mut n.meta, f);
                visit_parameters(&mut n.parameters, f);
                f(&mut n.return_type);
            }
            Self::Promise(n) | Self::Rest(n) => {
                visit_meta(&mut n.meta, f);
                f(&mut n.ty);
            }
            Self::TypeParameter(n) => {
                visit_meta(&mut n.meta, f);
                if let Some(default_type) = n.default_type.as_mut() {
                    f(default_type);
                }
            }
            Self::IndexSignature(n) => {
                visit_meta(&mut n.meta, f);
                f(&mut n.index);
                f(&mut n.ty);
            }
            Self::CallSignature(n) => {
                visit_meta(&mut n.meta, f);
                visit_parameters(&mut n.parameters, f);
                f(&mut n.return_type);
            }
        }
    }
}

fn visit_meta(meta: &mut TypeMeta, f: &mut dyn FnMut(&mut TypeId)) {
    for list in [meta.type_arguments.as_mut(), meta.decorators.as_mut()]
        .into_iter()
        .flatten()
    {
        list.iter_mut().for_each(|id| f(id));
    }
    if let Some(origin) = meta.index_access_origin.as_mut() {
        f(&mut origin.container);
        f(&mut origin.index);
    }
}

fn visit_parameters(parameters: &mut [Parameter], f: &mut dyn FnMut(&mut TypeId)) {
    for parameter in parameters {
        visit_meta(&mut parameter.meta, f);
        f(&mut parameter.ty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflection_kind_roundtrip() {
        for value in 0..=35u8 {
            let kind = ReflectionKind::from_u8(value).expect("known kind");
            assert_eq!(kind.to_u8(), value);
        }
        assert!(ReflectionKind::from_u8(36).is_none());
        assert!(ReflectionKind::from_u8(255).is_none());
    }

    #[test]
    fn test_simple_kinds_map_back() {
        for value in 0..=12u8 {
            let kind = ReflectionKind::from_u8(value).expect("known kind");
            let simple = kind.as_simple().expect("simple kind");
            assert_eq!(simple.reflection_kind(), kind);
        }
        assert!(ReflectionKind::Literal.as_simple().is_none());
    }

    #[test]
    fn test_sparse_flag() {
        assert_eq!(SparseFlag::from(true), SparseFlag::Set);
        assert_eq!(SparseFlag::from(false), SparseFlag::Absent);
        assert!(!SparseFlag::default().is_set());
    }

    #[test]
    fn test_references_cover_nested_parameters() {
        let node = TypeNode::Function(FunctionType {
            meta: TypeMeta {
                decorators: Some(vec![TypeId(9)]),
                ..TypeMeta::default()
            },
            name: Some("handler".into()),
            parameters: vec![Parameter {
                name: "event".into(),
                ty: TypeId(4),
                ..Parameter::default()
            }],
            return_type: TypeId(2),
            tags: None,
        });

        assert_eq!(node.references(), vec![TypeId(9), TypeId(4), TypeId(2)]);
    }

    #[test]
    fn test_visit_references_mut_rewrites_class() {
        let mut node = TypeNode::Class(ClassType {
            class_type: "Config".into(),
            arguments: Some(vec![TypeId(1)]),
            super_class: Some(TypeId(2)),
            types: vec![TypeId(3), TypeId(4)],
            ..ClassType::default()
        });

        node.visit_references_mut(&mut |id| id.0 += 10);

        assert_eq!(
            node.references(),
            vec![TypeId(11), TypeId(12), TypeId(13), TypeId(14)]
        );
    }
}
