// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire records
//!
//!
//! One record per type-graph variant. Records never nest another type by
//! value: every reference is a [`TypeRef`] into the enclosing
//! [`SerializedTypes`] list. Strings are never null (absent is `""`) and
//! every list is optional on the wire (`None` = never initialized).
//!
//! A [`SerializedType`] slot starts [`SerializedTypeUnion::Unset`] and must be
//! switched to exactly one variant with its `init_*` method before fields are
//! written.

use crate::model::{SimpleKind, Visibility};

/// Reference to another slot of the same list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeRef {
    pub id: u32,
}

impl TypeRef {
    pub const fn new(id: u32) -> Self {
        Self { id }
    }
}

/// Initialize an optional list to `len` default elements and return it.
pub fn init_list<T: Default + Clone>(list: &mut Option<Vec<T>>, len: usize) -> &mut Vec<T> {
    list.insert(vec![T::default(); len])
}

/// Generates `init_<field>(len)` / `has_<field>()` accessors for optional
/// list fields of a record.
macro_rules! list_accessors {
    ($record:ty { $($field:ident: $elem:ty => $init:ident, $has:ident;)+ }) => {
        impl $record {
            $(
                pub fn $init(&mut self, len: usize) -> &mut Vec<$elem> {
                    init_list(&mut self.$field, len)
                }

                pub fn $has(&self) -> bool {
                    self.$field.is_some()
                }
            )+
        }
    };
}

// ============================================================================
// Shared records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexAccessOriginRecord {
    pub container: TypeRef,
    pub index: TypeRef,
}

/// Fields present in every variant record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommonRecord {
    pub type_name: String,
    pub type_arguments: Option<Vec<TypeRef>>,
    pub decorators: Option<Vec<TypeRef>>,
    pub index_access_origin: Option<IndexAccessOriginRecord>,
}

list_accessors!(CommonRecord {
    type_arguments: TypeRef => init_type_arguments, has_type_arguments;
    decorators: TypeRef => init_decorators, has_decorators;
});

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagsRecord {
    pub alias: Option<Vec<String>>,
    pub hidden: bool,
    pub ignore: bool,
    pub internal: bool,
    pub readonly: bool,
    pub domain: String,
    pub title: String,
    pub permission: Option<Vec<String>>,
}

list_accessors!(TagsRecord {
    alias: String => init_alias, has_alias;
    permission: String => init_permission, has_permission;
});

#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValueRecord {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl DefaultValueRecord {
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterRecord {
    pub common: CommonRecord,
    pub name: String,
    pub ty: TypeRef,
    pub optional: bool,
    pub readonly: bool,
    pub visibility: Visibility,
    pub default: Option<DefaultValueRecord>,
    pub tags: Option<TagsRecord>,
}

// ============================================================================
// Variant records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleRecord {
    pub common: CommonRecord,
    pub kind: SimpleKind,
    pub origin: Option<TypeRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralRecordValue {
    Boolean(bool),
    Number(f64),
    String(String),
    BigInt(String),
    Symbol(String),
    Regex(String),
}

impl Default for LiteralRecordValue {
    fn default() -> Self {
        Self::Boolean(false)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiteralRecord {
    pub common: CommonRecord,
    pub value: LiteralRecordValue,
}

/// Single wrapped type: array element, promise result, rest element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrappedRecord {
    pub common: CommonRecord,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TupleMemberRecord {
    pub common: CommonRecord,
    pub ty: TypeRef,
    pub name: String,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TupleRecord {
    pub common: CommonRecord,
    pub types: Option<Vec<TupleMemberRecord>>,
}

list_accessors!(TupleRecord {
    types: TupleMemberRecord => init_types, has_types;
});

/// Member list: union, intersection, template literal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeListRecord {
    pub common: CommonRecord,
    pub types: Option<Vec<TypeRef>>,
}

list_accessors!(TypeListRecord {
    types: TypeRef => init_types, has_types;
});

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionRecord {
    pub common: CommonRecord,
    pub name: String,
    pub parameters: Option<Vec<ParameterRecord>>,
    pub return_type: TypeRef,
    pub tags: Option<TagsRecord>,
}

list_accessors!(FunctionRecord {
    parameters: ParameterRecord => init_parameters, has_parameters;
});

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InferRecord {
    pub common: CommonRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumEntryRecord {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumRecord {
    pub common: CommonRecord,
    pub index_type: TypeRef,
    pub values: Option<Vec<String>>,
    pub enum_entries: Option<Vec<EnumEntryRecord>>,
    pub tags: Option<TagsRecord>,
}

list_accessors!(EnumRecord {
    values: String => init_values, has_values;
    enum_entries: EnumEntryRecord => init_enum_entries, has_enum_entries;
});

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassRecord {
    pub common: CommonRecord,
    pub class_type: String,
    pub global_object: bool,
    pub arguments: Option<Vec<TypeRef>>,
    pub extends_arguments: Option<Vec<TypeRef>>,
    pub super_class: Option<TypeRef>,
    pub types: Option<Vec<TypeRef>>,
    pub tags: Option<TagsRecord>,
}

list_accessors!(ClassRecord {
    arguments: TypeRef => init_arguments, has_arguments;
    extends_arguments: TypeRef => init_extends_arguments, has_extends_arguments;
    types: TypeRef => init_types, has_types;
});

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectLiteralRecord {
    pub common: CommonRecord,
    pub types: Option<Vec<TypeRef>>,
    pub tags: Option<TagsRecord>,
}

list_accessors!(ObjectLiteralRecord {
    types: TypeRef => init_types, has_types;
});

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyRecord {
    pub common: CommonRecord,
    pub name: String,
    pub ty: TypeRef,
    pub optional: bool,
    pub readonly: bool,
    pub is_abstract: bool,
    pub visibility: Visibility,
    pub description: String,
    pub default: Option<DefaultValueRecord>,
    pub tags: Option<TagsRecord>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertySignatureRecord {
    pub common: CommonRecord,
    pub name: String,
    pub ty: TypeRef,
    pub optional: bool,
    pub readonly: bool,
    pub description: String,
    pub default: Option<DefaultValueRecord>,
    pub tags: Option<TagsRecord>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodSignatureRecord {
    pub common: CommonRecord,
    pub name: String,
    pub parameters: Option<Vec<ParameterRecord>>,
    pub return_type: TypeRef,
    pub tags: Option<TagsRecord>,
}

list_accessors!(MethodSignatureRecord {
    parameters: ParameterRecord => init_parameters, has_parameters;
});

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodRecord {
    pub common: CommonRecord,
    pub name: String,
    pub parameters: Option<Vec<ParameterRecord>>,
    pub return_type: TypeRef,
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub optional: bool,
    pub tags: Option<TagsRecord>,
}

list_accessors!(MethodRecord {
    parameters: ParameterRecord => init_parameters, has_parameters;
});

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeParameterRecord {
    pub common: CommonRecord,
    pub name: String,
    pub default_type: Option<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexSignatureRecord {
    pub common: CommonRecord,
    pub index: TypeRef,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallSignatureRecord {
    pub common: CommonRecord,
    pub parameters: Option<Vec<ParameterRecord>>,
    pub return_type: TypeRef,
}

list_accessors!(CallSignatureRecord {
    parameters: ParameterRecord => init_parameters, has_parameters;
});

// ============================================================================
// Slot union and root list
// ============================================================================

/// Union held by one slot. Discriminants are part of the wire format: never
/// renumber or remove one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SerializedTypeUnion {
    #[default]
    Unset,
    Simple(SimpleRecord),
    Literal(LiteralRecord),
    Array(WrappedRecord),
    Tuple(TupleRecord),
    Union(TypeListRecord),
    Intersection(TypeListRecord),
    Function(FunctionRecord),
    Infer(InferRecord),
    Enum(EnumRecord),
    Class(ClassRecord),
    ObjectLiteral(ObjectLiteralRecord),
    Property(PropertyRecord),
    PropertySignature(PropertySignatureRecord),
    MethodSignature(MethodSignatureRecord),
    Parameter(ParameterRecord),
    Method(MethodRecord),
    Promise(WrappedRecord),
    Rest(WrappedRecord),
    TypeParameter(TypeParameterRecord),
    IndexSignature(IndexSignatureRecord),
    TemplateLiteral(TypeListRecord),
    CallSignature(CallSignatureRecord),
}

impl SerializedTypeUnion {
    pub const fn discriminant(&self) -> u16 {
        match self {
            Self::Unset => 0,
            Self::Simple(_) => 1,
            Self::Literal(_) => 2,
            Self::Array(_) => 3,
            Self::Tuple(_) => 4,
            Self::Union(_) => 5,
            Self::Intersection(_) => 6,
            Self::Function(_) => 7,
            Self::Infer(_) => 8,
            Self::Enum(_) => 9,
            Self::Class(_) => 10,
            Self::ObjectLiteral(_) => 11,
            Self::Property(_) => 12,
            Self::PropertySignature(_) => 13,
            Self::MethodSignature(_) => 14,
            Self::Parameter(_) => 15,
            Self::Method(_) => 16,
            Self::Promise(_) => 17,
            Self::Rest(_) => 18,
            Self::TypeParameter(_) => 19,
            Self::IndexSignature(_) => 20,
            Self::TemplateLiteral(_) => 21,
            Self::CallSignature(_) => 22,
        }
    }

    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Simple(_) => "simple",
            Self::Literal(_) => "literal",
            Self::Array(_) => "array",
            Self::Tuple(_) => "tuple",
            Self::Union(_) => "union",
            Self::Intersection(_) => "intersection",
            Self::Function(_) => "function",
            Self::Infer(_) => "infer",
            Self::Enum(_) => "enum",
            Self::Class(_) => "class",
            Self::ObjectLiteral(_) => "objectLiteral",
            Self::Property(_) => "property",
            Self::PropertySignature(_) => "propertySignature",
            Self::MethodSignature(_) => "methodSignature",
            Self::Parameter(_) => "parameter",
            Self::Method(_) => "method",
            Self::Promise(_) => "promise",
            Self::Rest(_) => "rest",
            Self::TypeParameter(_) => "typeParameter",
            Self::IndexSignature(_) => "indexSignature",
            Self::TemplateLiteral(_) => "templateLiteral",
            Self::CallSignature(_) => "callSignature",
        }
    }
}

/// One slot of the root list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SerializedType {
    ty: SerializedTypeUnion,
}

impl SerializedType {
    pub fn which(&self) -> &SerializedTypeUnion {
        &self.ty
    }

    pub fn is_unset(&self) -> bool {
        matches!(self.ty, SerializedTypeUnion::Unset)
    }

    /// Replace the slot content wholesale (used by the wire reader).
    pub(crate) fn set(&mut self, ty: SerializedTypeUnion) {
        self.ty = ty;
    }
}

/// Generates `init_<variant>()`: selects the variant with a default record
/// and returns the record for writing.
macro_rules! init_variants {
    ($($init:ident => $variant:ident($record:ty);)+) => {
        impl SerializedType {
            $(
                pub fn $init(&mut self) -> &mut $record {
                    self.ty = SerializedTypeUnion::$variant(<$record>::default());
                    match &mut self.ty {
                        SerializedTypeUnion::$variant(record) => record,
                        _ => unreachable!(concat!("slot was just set to ", stringify!($variant))),
                    }
                }
            )+
        }
    };
}

init_variants! {
    init_simple => Simple(SimpleRecord);
    init_literal => Literal(LiteralRecord);
    init_array => Array(WrappedRecord);
    init_tuple => Tuple(TupleRecord);
    init_union => Union(TypeListRecord);
    init_intersection => Intersection(TypeListRecord);
    init_function => Function(FunctionRecord);
    init_infer => Infer(InferRecord);
    init_enum => Enum(EnumRecord);
    init_class => Class(ClassRecord);
    init_object_literal => ObjectLiteral(ObjectLiteralRecord);
    init_property => Property(PropertyRecord);
    init_property_signature => PropertySignature(PropertySignatureRecord);
    init_method_signature => MethodSignature(MethodSignatureRecord);
    init_parameter => Parameter(ParameterRecord);
    init_method => Method(MethodRecord);
    init_promise => Promise(WrappedRecord);
    init_rest => Rest(WrappedRecord);
    init_type_parameter => TypeParameter(TypeParameterRecord);
    init_index_signature => IndexSignature(IndexSignatureRecord);
    init_template_literal => TemplateLiteral(TypeListRecord);
    init_call_signature => CallSignature(CallSignatureRecord);
}

/// Root of a message: the flat list of slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SerializedTypes {
    pub types: Option<Vec<SerializedType>>,
}

impl SerializedTypes {
    /// Message with `len` unset slots.
    pub fn with_len(len: usize) -> Self {
        let mut message = Self::default();
        message.init_types(len);
        message
    }

    pub fn init_types(&mut self, len: usize) -> &mut Vec<SerializedType> {
        init_list(&mut self.types, len)
    }

    pub fn has_types(&self) -> bool {
        self.types.is_some()
    }

    pub fn types(&self) -> Option<&[SerializedType]> {
        self.types.as_deref()
    }

    pub fn types_mut(&mut self) -> Option<&mut [SerializedType]> {
        self.types.as_deref_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_unset() {
        let slot = SerializedType::default();
        assert!(slot.is_unset());
        assert_eq!(slot.which().discriminant(), 0);
    }

    #[test]
    fn test_init_selects_variant() {
        let mut slot = SerializedType::default();
        slot.init_property().name = "DEBUG".into();
        assert_eq!(slot.which().variant_name(), "property");

        // Re-initializing discards the previous variant.
        slot.init_union().init_types(2)[1] = TypeRef::new(8);
        match slot.which() {
            SerializedTypeUnion::Union(record) => {
                assert_eq!(record.types, Some(vec![TypeRef::new(0), TypeRef::new(8)]));
            }
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn test_list_presence_predicates() {
        let mut record = ClassRecord::default();
        assert!(!record.has_arguments());
        record.init_arguments(0);
        assert!(record.has_arguments());
        assert!(!record.has_types());
    }

    #[test]
    fn test_with_len_presizes() {
        let message = SerializedTypes::with_len(3);
        assert!(message.has_types());
        let types = message.types().expect("types");
        assert_eq!(types.len(), 3);
        assert!(types.iter().all(SerializedType::is_unset));
    }

    #[test]
    fn test_discriminants_are_unique() {
        let variants = [
            SerializedTypeUnion::Unset,
            SerializedTypeUnion::Simple(SimpleRecord::default()),
            SerializedTypeUnion::Literal(LiteralRecord::default()),
            SerializedTypeUnion::Array(WrappedRecord::default()),
            SerializedTypeUnion::Tuple(TupleRecord::default()),
            SerializedTypeUnion::Union(TypeListRecord::default()),
            SerializedTypeUnion::Intersection(TypeListRecord::default()),
            SerializedTypeUnion::Function(FunctionRecord::default()),
            SerializedTypeUnion::Infer(InferRecord::default()),
            SerializedTypeUnion::Enum(EnumRecord::default()),
            SerializedTypeUnion::Class(ClassRecord::default()),
            SerializedTypeUnion::ObjectLiteral(ObjectLiteralRecord::default()),
            SerializedTypeUnion::Property(PropertyRecord::default()),
            SerializedTypeUnion::PropertySignature(PropertySignatureRecord::default()),
            SerializedTypeUnion::MethodSignature(MethodSignatureRecord::default()),
            SerializedTypeUnion::Parameter(ParameterRecord::default()),
            SerializedTypeUnion::Method(MethodRecord::default()),
            SerializedTypeUnion::Promise(WrappedRecord::default()),
            SerializedTypeUnion::Rest(WrappedRecord::default()),
            SerializedTypeUnion::TypeParameter(TypeParameterRecord::default()),
            SerializedTypeUnion::IndexSignature(IndexSignatureRecord::default()),
            SerializedTypeUnion::TemplateLiteral(TypeListRecord::default()),
            SerializedTypeUnion::CallSignature(CallSignatureRecord::default()),
        ];
        for (expected, variant) in variants.iter().enumerate() {
            assert_eq!(usize::from(variant.discriminant()), expected);
        }
    }
}
