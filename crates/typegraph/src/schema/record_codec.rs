// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! WireEncode / WireDecode for schema records.
//!
//! Field order on the wire is the declaration order of each record.

use super::primitives::{
    read_bool, read_list, read_option, read_string, read_string_list, read_vec, write_bool,
    write_list, write_option, write_string, write_string_list, write_vec,
};
use super::records::*;
use super::wire::{FormatError, WireDecode, WireEncode};
use crate::model::{SimpleKind, Visibility};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

// ============================================================================
// Helpers
// ============================================================================

fn write_item<W: Write, T: WireEncode>(w: &mut W, item: &T) -> Result<(), FormatError> {
    item.encode(w)
}

fn read_item<R: Read, T: WireDecode>(r: &mut R) -> Result<T, FormatError> {
    T::decode(r)
}

fn write_records<W: Write, T: WireEncode>(
    w: &mut W,
    list: Option<&Vec<T>>,
) -> Result<(), FormatError> {
    write_list(w, list, write_item)
}

fn read_records<R: Read, T: WireDecode>(r: &mut R) -> Result<Option<Vec<T>>, FormatError> {
    read_list(r, read_item)
}

fn write_opt<W: Write, T: WireEncode>(w: &mut W, value: Option<&T>) -> Result<(), FormatError> {
    write_option(w, value, write_item)
}

fn read_opt<R: Read, T: WireDecode>(r: &mut R) -> Result<Option<T>, FormatError> {
    read_option(r, read_item)
}

// ============================================================================
// Scalars and shared records
// ============================================================================

impl WireEncode for TypeRef {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        w.write_u32::<LittleEndian>(self.id)?;
        Ok(())
    }
}

impl WireDecode for TypeRef {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self::new(r.read_u32::<LittleEndian>()?))
    }
}

impl WireEncode for SimpleKind {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        w.write_u8(self.to_u8())?;
        Ok(())
    }
}

impl WireDecode for SimpleKind {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        let value = r.read_u8()?;
        SimpleKind::from_u8(value).ok_or(FormatError::InvalidValue {
            field: "simple kind",
            value: u64::from(value),
        })
    }
}

impl WireEncode for Visibility {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        w.write_u8(self.to_u8())?;
        Ok(())
    }
}

impl WireDecode for Visibility {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        let value = r.read_u8()?;
        Visibility::from_u8(value).ok_or(FormatError::InvalidValue {
            field: "visibility",
            value: u64::from(value),
        })
    }
}

impl WireEncode for IndexAccessOriginRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.container.encode(w)?;
        self.index.encode(w)
    }
}

impl WireDecode for IndexAccessOriginRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            container: TypeRef::decode(r)?,
            index: TypeRef::decode(r)?,
        })
    }
}

impl WireEncode for CommonRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        write_string(w, &self.type_name)?;
        write_records(w, self.type_arguments.as_ref())?;
        write_records(w, self.decorators.as_ref())?;
        write_opt(w, self.index_access_origin.as_ref())
    }
}

impl WireDecode for CommonRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            type_name: read_string(r)?,
            type_arguments: read_records(r)?,
            decorators: read_records(r)?,
            index_access_origin: read_opt(r)?,
        })
    }
}

impl WireEncode for TagsRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        write_string_list(w, self.alias.as_ref())?;
        write_bool(w, self.hidden)?;
        write_bool(w, self.ignore)?;
        write_bool(w, self.internal)?;
        write_bool(w, self.readonly)?;
        write_string(w, &self.domain)?;
        write_string(w, &self.title)?;
        write_string_list(w, self.permission.as_ref())
    }
}

impl WireDecode for TagsRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            alias: read_string_list(r)?,
            hidden: read_bool(r)?,
            ignore: read_bool(r)?,
            internal: read_bool(r)?,
            readonly: read_bool(r)?,
            domain: read_string(r)?,
            title: read_string(r)?,
            permission: read_string_list(r)?,
        })
    }
}

impl WireEncode for DefaultValueRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        match self {
            Self::Boolean(value) => {
                w.write_u8(0)?;
                write_bool(w, *value)
            }
            Self::Integer(value) => {
                w.write_u8(1)?;
                w.write_i64::<LittleEndian>(*value)?;
                Ok(())
            }
            Self::Float(value) => {
                w.write_u8(2)?;
                w.write_f64::<LittleEndian>(*value)?;
                Ok(())
            }
            Self::String(value) => {
                w.write_u8(3)?;
                write_string(w, value)
            }
        }
    }
}

impl WireDecode for DefaultValueRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        match r.read_u8()? {
            0 => Ok(Self::Boolean(read_bool(r)?)),
            1 => Ok(Self::Integer(r.read_i64::<LittleEndian>()?)),
            2 => Ok(Self::Float(r.read_f64::<LittleEndian>()?)),
            3 => Ok(Self::String(read_string(r)?)),
            other => Err(FormatError::InvalidValue {
                field: "default value tag",
                value: u64::from(other),
            }),
        }
    }
}

impl WireEncode for ParameterRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_string(w, &self.name)?;
        self.ty.encode(w)?;
        write_bool(w, self.optional)?;
        write_bool(w, self.readonly)?;
        self.visibility.encode(w)?;
        write_opt(w, self.default.as_ref())?;
        write_opt(w, self.tags.as_ref())
    }
}

impl WireDecode for ParameterRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            name: read_string(r)?,
            ty: TypeRef::decode(r)?,
            optional: read_bool(r)?,
            readonly: read_bool(r)?,
            visibility: Visibility::decode(r)?,
            default: read_opt(r)?,
            tags: read_opt(r)?,
        })
    }
}

// ============================================================================
// Variant records
// ============================================================================

impl WireEncode for SimpleRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        self.kind.encode(w)?;
        write_opt(w, self.origin.as_ref())
    }
}

impl WireDecode for SimpleRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            kind: SimpleKind::decode(r)?,
            origin: read_opt(r)?,
        })
    }
}

impl WireEncode for LiteralRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        match &self.value {
            LiteralRecordValue::Boolean(value) => {
                w.write_u8(0)?;
                write_bool(w, *value)
            }
            LiteralRecordValue::Number(value) => {
                w.write_u8(1)?;
                w.write_f64::<LittleEndian>(*value)?;
                Ok(())
            }
            LiteralRecordValue::String(value) => {
                w.write_u8(2)?;
                write_string(w, value)
            }
            LiteralRecordValue::BigInt(value) => {
                w.write_u8(3)?;
                write_string(w, value)
            }
            LiteralRecordValue::Symbol(value) => {
                w.write_u8(4)?;
                write_string(w, value)
            }
            LiteralRecordValue::Regex(value) => {
                w.write_u8(5)?;
                write_string(w, value)
            }
        }
    }
}

impl WireDecode for LiteralRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        let common = CommonRecord::decode(r)?;
        let value = match r.read_u8()? {
            0 => LiteralRecordValue::Boolean(read_bool(r)?),
            1 => LiteralRecordValue::Number(r.read_f64::<LittleEndian>()?),
            2 => LiteralRecordValue::String(read_string(r)?),
            3 => LiteralRecordValue::BigInt(read_string(r)?),
            4 => LiteralRecordValue::Symbol(read_string(r)?),
            5 => LiteralRecordValue::Regex(read_string(r)?),
            other => {
                return Err(FormatError::InvalidValue {
                    field: "literal tag",
                    value: u64::from(other),
                })
            }
        };
        Ok(Self { common, value })
    }
}

impl WireEncode for WrappedRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        self.ty.encode(w)
    }
}

impl WireDecode for WrappedRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            ty: TypeRef::decode(r)?,
        })
    }
}

impl WireEncode for TupleMemberRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        self.ty.encode(w)?;
        write_string(w, &self.name)?;
        write_bool(w, self.optional)
    }
}

impl WireDecode for TupleMemberRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            ty: TypeRef::decode(r)?,
            name: read_string(r)?,
            optional: read_bool(r)?,
        })
    }
}

impl WireEncode for TupleRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_records(w, self.types.as_ref())
    }
}

impl WireDecode for TupleRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            types: read_records(r)?,
        })
    }
}

impl WireEncode for TypeListRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_records(w, self.types.as_ref())
    }
}

impl WireDecode for TypeListRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            types: read_records(r)?,
        })
    }
}

impl WireEncode for FunctionRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_string(w, &self.name)?;
        write_records(w, self.parameters.as_ref())?;
        self.return_type.encode(w)?;
        write_opt(w, self.tags.as_ref())
    }
}

impl WireDecode for FunctionRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            name: read_string(r)?,
            parameters: read_records(r)?,
            return_type: TypeRef::decode(r)?,
            tags: read_opt(r)?,
        })
    }
}

impl WireEncode for InferRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)
    }
}

impl WireDecode for InferRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
        })
    }
}

impl WireEncode for EnumEntryRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        write_string(w, &self.name)?;
        write_string(w, &self.value)
    }
}

impl WireDecode for EnumEntryRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            name: read_string(r)?,
            value: read_string(r)?,
        })
    }
}

impl WireEncode for EnumRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        self.index_type.encode(w)?;
        write_string_list(w, self.values.as_ref())?;
        write_records(w, self.enum_entries.as_ref())?;
        write_opt(w, self.tags.as_ref())
    }
}

impl WireDecode for EnumRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            index_type: TypeRef::decode(r)?,
            values: read_string_list(r)?,
            enum_entries: read_records(r)?,
            tags: read_opt(r)?,
        })
    }
}

impl WireEncode for ClassRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_string(w, &self.class_type)?;
        write_bool(w, self.global_object)?;
        write_records(w, self.arguments.as_ref())?;
        write_records(w, self.extends_arguments.as_ref())?;
        write_opt(w, self.super_class.as_ref())?;
        write_records(w, self.types.as_ref())?;
        write_opt(w, self.tags.as_ref())
    }
}

impl WireDecode for ClassRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            class_type: read_string(r)?,
            global_object: read_bool(r)?,
            arguments: read_records(r)?,
            extends_arguments: read_records(r)?,
            super_class: read_opt(r)?,
            types: read_records(r)?,
            tags: read_opt(r)?,
        })
    }
}

impl WireEncode for ObjectLiteralRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_records(w, self.types.as_ref())?;
        write_opt(w, self.tags.as_ref())
    }
}

impl WireDecode for ObjectLiteralRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            types: read_records(r)?,
            tags: read_opt(r)?,
        })
    }
}

impl WireEncode for PropertyRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_string(w, &self.name)?;
        self.ty.encode(w)?;
        write_bool(w, self.optional)?;
        write_bool(w, self.readonly)?;
        write_bool(w, self.is_abstract)?;
        self.visibility.encode(w)?;
        write_string(w, &self.description)?;
        write_opt(w, self.default.as_ref())?;
        write_opt(w, self.tags.as_ref())
    }
}

impl WireDecode for PropertyRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            name: read_string(r)?,
            ty: TypeRef::decode(r)?,
            optional: read_bool(r)?,
            readonly: read_bool(r)?,
            is_abstract: read_bool(r)?,
            visibility: Visibility::decode(r)?,
            description: read_string(r)?,
            default: read_opt(r)?,
            tags: read_opt(r)?,
        })
    }
}

impl WireEncode for PropertySignatureRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_string(w, &self.name)?;
        self.ty.encode(w)?;
        write_bool(w, self.optional)?;
        write_bool(w, self.readonly)?;
        write_string(w, &self.description)?;
        write_opt(w, self.default.as_ref())?;
        write_opt(w, self.tags.as_ref())
    }
}

impl WireDecode for PropertySignatureRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            name: read_string(r)?,
            ty: TypeRef::decode(r)?,
            optional: read_bool(r)?,
            readonly: read_bool(r)?,
            description: read_string(r)?,
            default: read_opt(r)?,
            tags: read_opt(r)?,
        })
    }
}

impl WireEncode for MethodSignatureRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_string(w, &self.name)?;
        write_records(w, self.parameters.as_ref())?;
        self.return_type.encode(w)?;
        write_opt(w, self.tags.as_ref())
    }
}

impl WireDecode for MethodSignatureRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            name: read_string(r)?,
            parameters: read_records(r)?,
            return_type: TypeRef::decode(r)?,
            tags: read_opt(r)?,
        })
    }
}

impl WireEncode for MethodRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_string(w, &self.name)?;
        write_records(w, self.parameters.as_ref())?;
        self.return_type.encode(w)?;
        self.visibility.encode(w)?;
        write_bool(w, self.is_abstract)?;
        write_bool(w, self.optional)?;
        write_opt(w, self.tags.as_ref())
    }
}

impl WireDecode for MethodRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            name: read_string(r)?,
            parameters: read_records(r)?,
            return_type: TypeRef::decode(r)?,
            visibility: Visibility::decode(r)?,
            is_abstract: read_bool(r)?,
            optional: read_bool(r)?,
            tags: read_opt(r)?,
        })
    }
}

impl WireEncode for TypeParameterRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_string(w, &self.name)?;
        write_opt(w, self.default_type.as_ref())
    }
}

impl WireDecode for TypeParameterRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            name: read_string(r)?,
            default_type: read_opt(r)?,
        })
    }
}

impl WireEncode for IndexSignatureRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        self.index.encode(w)?;
        self.ty.encode(w)
    }
}

impl WireDecode for IndexSignatureRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            index: TypeRef::decode(r)?,
            ty: TypeRef::decode(r)?,
        })
    }
}

impl WireEncode for CallSignatureRecord {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.common.encode(w)?;
        write_records(w, self.parameters.as_ref())?;
        self.return_type.encode(w)
    }
}

impl WireDecode for CallSignatureRecord {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            common: CommonRecord::decode(r)?,
            parameters: read_records(r)?,
            return_type: TypeRef::decode(r)?,
        })
    }
}

// ============================================================================
// Slots and root list
// ============================================================================

impl WireEncode for SerializedType {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        let ty = self.which();
        w.write_u16::<LittleEndian>(ty.discriminant())?;
        match ty {
            SerializedTypeUnion::Unset => Ok(()),
            SerializedTypeUnion::Simple(record) => record.encode(w),
            SerializedTypeUnion::Literal(record) => record.encode(w),
            SerializedTypeUnion::Array(record)
            | SerializedTypeUnion::Promise(record)
            | SerializedTypeUnion::Rest(record) => record.encode(w),
            SerializedTypeUnion::Tuple(record) => record.encode(w),
            SerializedTypeUnion::Union(record)
            | SerializedTypeUnion::Intersection(record)
            | SerializedTypeUnion::TemplateLiteral(record) => record.encode(w),
            SerializedTypeUnion::Function(record) => record.encode(w),
            SerializedTypeUnion::Infer(record) => record.encode(w),
            SerializedTypeUnion::Enum(record) => record.encode(w),
            SerializedTypeUnion::Class(record) => record.encode(w),
            SerializedTypeUnion::ObjectLiteral(record) => record.encode(w),
            SerializedTypeUnion::Property(record) => record.encode(w),
            SerializedTypeUnion::PropertySignature(record) => record.encode(w),
            SerializedTypeUnion::MethodSignature(record) => record.encode(w),
            SerializedTypeUnion::Parameter(record) => record.encode(w),
            SerializedTypeUnion::Method(record) => record.encode(w),
            SerializedTypeUnion::TypeParameter(record) => record.encode(w),
            SerializedTypeUnion::IndexSignature(record) => record.encode(w),
            SerializedTypeUnion::CallSignature(record) => record.encode(w),
        }
    }
}

impl WireDecode for SerializedType {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        let ty = match r.read_u16::<LittleEndian>()? {
            0 => SerializedTypeUnion::Unset,
            1 => SerializedTypeUnion::Simple(SimpleRecord::decode(r)?),
            2 => SerializedTypeUnion::Literal(LiteralRecord::decode(r)?),
            3 => SerializedTypeUnion::Array(WrappedRecord::decode(r)?),
            4 => SerializedTypeUnion::Tuple(TupleRecord::decode(r)?),
            5 => SerializedTypeUnion::Union(TypeListRecord::decode(r)?),
            6 => SerializedTypeUnion::Intersection(TypeListRecord::decode(r)?),
            7 => SerializedTypeUnion::Function(FunctionRecord::decode(r)?),
            8 => SerializedTypeUnion::Infer(InferRecord::decode(r)?),
            9 => SerializedTypeUnion::Enum(EnumRecord::decode(r)?),
            10 => SerializedTypeUnion::Class(ClassRecord::decode(r)?),
            11 => SerializedTypeUnion::ObjectLiteral(ObjectLiteralRecord::decode(r)?),
            12 => SerializedTypeUnion::Property(PropertyRecord::decode(r)?),
            13 => SerializedTypeUnion::PropertySignature(PropertySignatureRecord::decode(r)?),
            14 => SerializedTypeUnion::MethodSignature(MethodSignatureRecord::decode(r)?),
            15 => SerializedTypeUnion::Parameter(ParameterRecord::decode(r)?),
            16 => SerializedTypeUnion::Method(MethodRecord::decode(r)?),
            17 => SerializedTypeUnion::Promise(WrappedRecord::decode(r)?),
            18 => SerializedTypeUnion::Rest(WrappedRecord::decode(r)?),
            19 => SerializedTypeUnion::TypeParameter(TypeParameterRecord::decode(r)?),
            20 => SerializedTypeUnion::IndexSignature(IndexSignatureRecord::decode(r)?),
            21 => SerializedTypeUnion::TemplateLiteral(TypeListRecord::decode(r)?),
            22 => SerializedTypeUnion::CallSignature(CallSignatureRecord::decode(r)?),
            value => return Err(FormatError::UnknownDiscriminant { value }),
        };
        let mut slot = SerializedType::default();
        slot.set(ty);
        Ok(slot)
    }
}

impl WireEncode for SerializedTypes {
    fn encode<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        write_option(w, self.types.as_ref(), |w, types| write_vec(w, types, write_item))
    }
}

impl WireDecode for SerializedTypes {
    fn decode<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        Ok(Self {
            types: read_option(r, |r| read_vec(r, read_item))?,
        })
    }
}
