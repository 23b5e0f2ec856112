// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Model -> bytes -> model for every variant.

use serde_json::json;
use typegraph::model::{
    ArrayType, CallSignature, ClassType, EnumMember, EnumType, FunctionType, IndexAccessOrigin,
    IndexSignature, InferType, LiteralType, LiteralValue, Method, MethodSignature,
    ObjectLiteralType, Parameter, Property, PropertySignature, SimpleType, SparseFlag, TupleMember,
    TupleType, TypeList, TypeMeta, TypeParameter, Visibility, WrappedType,
};
use typegraph::schema::{read_message, write_message, DefaultValueRecord, SerializedTypeUnion};
use typegraph::{
    decode_batch, decode_dense, decode_type, deserialize_batch, encode_batch, encode_json_batch,
    encode_message, encode_type, serialize_batch, Batch, CodecError, DefaultValue,
    SerializedTypes, SimpleKind, Tags, TypeId, TypeNode,
};

fn rich_meta() -> TypeMeta {
    TypeMeta {
        type_name: Some("Named".into()),
        type_arguments: Some(vec![TypeId(1), TypeId(2)]),
        decorators: Some(vec![TypeId(3)]),
        index_access_origin: Some(IndexAccessOrigin {
            container: TypeId(4),
            index: TypeId(5),
        }),
    }
}

fn rich_tags() -> Tags {
    Tags {
        alias: vec!["ALT".into()],
        hidden: true,
        ignore: false,
        internal: true,
        readonly: false,
        domain: Some("env".into()),
        title: Some("Title".into()),
        permission: vec!["admin".into(), "ops".into()],
    }
}

fn parameter(name: &str) -> Parameter {
    Parameter {
        meta: rich_meta(),
        name: name.into(),
        ty: TypeId(6),
        optional: SparseFlag::Set,
        readonly: SparseFlag::Absent,
        visibility: Visibility::Private,
        default: Some(DefaultValue::Float(0.25)),
        tags: Some(rich_tags()),
    }
}

/// One fully populated node per variant.
fn every_variant() -> Vec<TypeNode> {
    vec![
        TypeNode::ObjectLiteral(ObjectLiteralType {
            meta: rich_meta(),
            types: vec![TypeId(11), TypeId(12)],
            tags: Some(rich_tags()),
        }),
        TypeNode::Simple(SimpleType {
            meta: rich_meta(),
            kind: SimpleKind::Regexp,
            origin: Some(TypeId(9)),
        }),
        TypeNode::Literal(LiteralType {
            meta: rich_meta(),
            literal: LiteralValue::Number(-12.5),
        }),
        TypeNode::Literal(LiteralType {
            meta: TypeMeta::default(),
            literal: LiteralValue::Symbol("iterator".into()),
        }),
        TypeNode::Array(ArrayType {
            meta: rich_meta(),
            element: TypeId(2),
        }),
        TypeNode::Tuple(TupleType {
            meta: rich_meta(),
            members: vec![
                TupleMember {
                    meta: TypeMeta::default(),
                    ty: TypeId(1),
                    name: Some("first".into()),
                    optional: SparseFlag::Absent,
                },
                TupleMember {
                    meta: rich_meta(),
                    ty: TypeId(2),
                    name: None,
                    optional: SparseFlag::Set,
                },
            ],
        }),
        TypeNode::Union(TypeList {
            meta: rich_meta(),
            types: vec![TypeId(5), TypeId(8)],
        }),
        TypeNode::Intersection(TypeList {
            meta: TypeMeta::default(),
            types: vec![TypeId(8), TypeId(5)],
        }),
        TypeNode::Function(FunctionType {
            meta: rich_meta(),
            name: Some("handler".into()),
            parameters: vec![parameter("event"), parameter("context")],
            return_type: TypeId(3),
            tags: Some(rich_tags()),
        }),
        TypeNode::Infer(InferType { meta: rich_meta() }),
        TypeNode::Enum(EnumType {
            meta: rich_meta(),
            index_type: TypeId(1),
            values: vec!["debug".into(), "1".into()],
            members: vec![
                EnumMember {
                    name: "Debug".into(),
                    value: "debug".into(),
                },
                EnumMember {
                    name: "One".into(),
                    value: "1".into(),
                },
            ],
            tags: Some(rich_tags()),
        }),
        TypeNode::Class(ClassType {
            meta: rich_meta(),
            class_type: "Config".into(),
            global_object: SparseFlag::Set,
            arguments: Some(vec![TypeId(1)]),
            extends_arguments: Some(vec![TypeId(2), TypeId(3)]),
            super_class: Some(TypeId(4)),
            types: vec![TypeId(12)],
            tags: Some(rich_tags()),
        }),
        TypeNode::Property(Property {
            meta: rich_meta(),
            name: "PORT".into(),
            ty: TypeId(2),
            optional: SparseFlag::Set,
            readonly: SparseFlag::Set,
            is_abstract: SparseFlag::Set,
            visibility: Visibility::Protected,
            description: Some("Listen port".into()),
            default: Some(DefaultValue::Integer(8080)),
            tags: Some(rich_tags()),
        }),
        TypeNode::PropertySignature(PropertySignature {
            meta: rich_meta(),
            name: "HOST".into(),
            ty: TypeId(1),
            optional: SparseFlag::Absent,
            readonly: SparseFlag::Set,
            description: Some("Bind address".into()),
            default: Some(DefaultValue::String("0.0.0.0".into())),
            tags: None,
        }),
        TypeNode::MethodSignature(MethodSignature {
            meta: rich_meta(),
            name: "load".into(),
            parameters: vec![parameter("path")],
            return_type: TypeId(7),
            tags: Some(rich_tags()),
        }),
        TypeNode::Parameter(parameter("standalone")),
        TypeNode::Method(Method {
            meta: rich_meta(),
            name: "reload".into(),
            parameters: vec![parameter("force")],
            return_type: TypeId(4),
            visibility: Visibility::Protected,
            is_abstract: SparseFlag::Set,
            optional: SparseFlag::Absent,
            tags: Some(rich_tags()),
        }),
        TypeNode::Promise(WrappedType {
            meta: rich_meta(),
            ty: TypeId(2),
        }),
        TypeNode::Rest(WrappedType {
            meta: TypeMeta::default(),
            ty: TypeId(3),
        }),
        TypeNode::TypeParameter(TypeParameter {
            meta: rich_meta(),
            name: "T".into(),
            default_type: Some(TypeId(1)),
        }),
        TypeNode::IndexSignature(IndexSignature {
            meta: rich_meta(),
            index: TypeId(1),
            ty: TypeId(2),
        }),
        TypeNode::TemplateLiteral(TypeList {
            meta: rich_meta(),
            types: vec![TypeId(1), TypeId(2), TypeId(1)],
        }),
        TypeNode::CallSignature(CallSignature {
            meta: rich_meta(),
            parameters: vec![parameter("arg")],
            return_type: TypeId(0),
        }),
    ]
}

#[test]
fn every_variant_roundtrips() {
    let batch = Batch::from_nodes(every_variant());
    for compress in [false, true] {
        let bytes = serialize_batch(&batch, compress).expect("serialize");
        let decoded = deserialize_batch(&bytes).expect("deserialize");
        assert_eq!(decoded.len(), batch.len());
        for (index, (expected, actual)) in batch.nodes().iter().zip(decoded.nodes()).enumerate() {
            assert_eq!(actual, expected, "node {index} differs (compress={compress})");
        }
    }
}

#[test]
fn documented_normalizations() {
    let written = TypeNode::Property(Property {
        meta: TypeMeta {
            type_name: Some(String::new()),
            type_arguments: Some(vec![]),
            decorators: Some(vec![]),
            index_access_origin: None,
        },
        name: "FLAG".into(),
        description: Some(String::new()),
        default: Some(DefaultValue::String(String::new())),
        tags: Some(Tags::default()),
        ..Property::default()
    });
    let class = TypeNode::Class(ClassType {
        arguments: Some(vec![]),
        extends_arguments: Some(vec![]),
        ..ClassType::default()
    });

    let batch = Batch::from_nodes(vec![class, written]);
    let bytes = serialize_batch(&batch, false).expect("serialize");
    let decoded = deserialize_batch(&bytes).expect("deserialize");

    match decoded.get(TypeId(1)) {
        Some(TypeNode::Property(p)) => {
            assert_eq!(p.meta, TypeMeta::default());
            assert_eq!(p.description, None);
            assert_eq!(p.default, None);
            assert_eq!(p.tags, None);
            assert_eq!(p.optional, SparseFlag::Absent);
        }
        other => panic!("unexpected node {other:?}"),
    }
    match decoded.get(TypeId(0)) {
        Some(TypeNode::Class(c)) => {
            assert_eq!(c.arguments, None);
            assert_eq!(c.extends_arguments, None);
            assert!(c.types.is_empty());
        }
        other => panic!("unexpected node {other:?}"),
    }
}

#[test]
fn debug_property_through_its_slot() {
    let property = TypeNode::Property(Property {
        name: "DEBUG".into(),
        ty: TypeId(3),
        optional: SparseFlag::Set,
        visibility: Visibility::Public,
        default: Some(DefaultValue::Boolean(false)),
        ..Property::default()
    });

    let mut message = SerializedTypes::with_len(1);
    encode_type(&property, &mut message.types_mut().expect("types")[0]);
    let bytes = write_message(&message, false).expect("write");
    let read = read_message(&bytes).expect("read");
    let decoded = decode_type(&read.types().expect("types")[0]).expect("decode");

    match decoded {
        TypeNode::Property(p) => {
            assert_eq!(p.name, "DEBUG");
            assert_eq!(p.ty, TypeId(3));
            assert_eq!(p.optional, SparseFlag::Set);
            assert_eq!(p.readonly, SparseFlag::Absent);
            assert_eq!(p.visibility, Visibility::Public);
            assert_eq!(p.is_abstract, SparseFlag::Absent);
            assert_eq!(p.default, Some(DefaultValue::Boolean(false)));
        }
        other => panic!("unexpected node {other:?}"),
    }
}

#[test]
fn blank_string_default_from_the_wire_is_stable() {
    let mut message = SerializedTypes::with_len(1);
    let record = message.types_mut().expect("types")[0].init_property_signature();
    record.name = "LEVEL".into();
    record.default = Some(DefaultValueRecord::String(String::new()));

    let first = decode_dense(&message).expect("decode");
    let second = decode_dense(&encode_message(&first).expect("encode")).expect("decode");
    assert_eq!(first, second);
    match first.get(TypeId(0)) {
        Some(TypeNode::PropertySignature(p)) => assert_eq!(p.default, None),
        other => panic!("unexpected node {other:?}"),
    }
}

#[test]
fn debug_property_signature_lookup() {
    let batch = Batch::from_nodes(vec![
        TypeNode::ObjectLiteral(ObjectLiteralType {
            types: vec![TypeId(1)],
            ..ObjectLiteralType::default()
        }),
        TypeNode::PropertySignature(PropertySignature {
            name: "DEBUG".into(),
            ty: TypeId(2),
            optional: SparseFlag::Set,
            default: Some(DefaultValue::Boolean(false)),
            ..PropertySignature::default()
        }),
        TypeNode::simple(SimpleKind::Boolean),
    ]);

    let bytes = serialize_batch(&batch, false).expect("serialize");
    let decoded = deserialize_batch(&bytes).expect("deserialize");

    let (id, node) = decoded.property("DEBUG").expect("DEBUG property");
    assert_eq!(id, TypeId(1));
    match node {
        TypeNode::PropertySignature(p) => {
            assert_eq!(p.default, Some(DefaultValue::Boolean(false)));
            assert_eq!(
                decoded.get(p.ty),
                Some(&TypeNode::simple(SimpleKind::Boolean))
            );
        }
        other => panic!("unexpected node {other:?}"),
    }
}

#[test]
fn union_member_ids_are_raw() {
    let batch = Batch::from_nodes(vec![TypeNode::Union(TypeList {
        types: vec![TypeId(5), TypeId(8)],
        ..TypeList::default()
    })]);
    let mut message = SerializedTypes::with_len(1);
    encode_batch(batch.nodes(), message.types_mut().expect("types")).expect("encode");

    match message.types().expect("types")[0].which() {
        SerializedTypeUnion::Union(record) => {
            let ids: Vec<u32> = record.types.iter().flatten().map(|r| r.id).collect();
            assert_eq!(ids, vec![5, 8]);
        }
        other => panic!("unexpected slot {other:?}"),
    }

    // Out-of-range ids are the caller's business.
    let bytes = serialize_batch(&batch, false).expect("serialize");
    assert_eq!(deserialize_batch(&bytes).expect("deserialize"), batch);
    assert_eq!(batch.dangling_references().len(), 2);
}

#[test]
fn length_mismatch_and_empty_input() {
    let nodes = vec![TypeNode::simple(SimpleKind::Any); 3];
    let mut short = SerializedTypes::with_len(2);
    assert!(matches!(
        encode_batch(&nodes, short.types_mut().expect("types")),
        Err(CodecError::LengthMismatch { expected: 3, actual: 2 })
    ));

    let mut empty = SerializedTypes::with_len(0);
    assert!(matches!(
        encode_batch(&[], empty.types_mut().expect("types")),
        Err(CodecError::InvalidInput(_))
    ));
    assert!(matches!(
        encode_json_batch(&json!([]), empty.types_mut().expect("types")),
        Err(CodecError::InvalidInput(_))
    ));
    assert!(matches!(
        encode_json_batch(&json!("types"), empty.types_mut().expect("types")),
        Err(CodecError::InvalidInput(_))
    ));
}

#[test]
fn unknown_kind_is_rejected_with_dump() {
    let mut message = SerializedTypes::with_len(2);
    let input = json!([{ "kind": 5 }, { "kind": 9999, "typeName": "Mystery" }]);

    match encode_json_batch(&input, message.types_mut().expect("types")).unwrap_err() {
        CodecError::UnsupportedKind { kind, dump } => {
            assert_eq!(kind, "9999");
            assert!(dump.contains("Mystery"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn partial_entries_keep_their_index() {
    let input = json!([
        { "kind": 30, "types": [2] },
        null,
        { "kind": 32, "name": "DEBUG", "type": 3 },
        { "kind": 7 },
        { "name": "no kind here" }
    ]);
    let mut message = SerializedTypes::with_len(5);
    let encoded = encode_json_batch(&input, message.types_mut().expect("types")).expect("encode");
    assert_eq!(encoded, 3);

    let nodes = decode_batch(&message).expect("decode");
    assert_eq!(nodes.len(), 5);
    assert!(nodes[1].is_none());
    assert!(nodes[4].is_none());
    assert_eq!(nodes[3], Some(TypeNode::simple(SimpleKind::Boolean)));
    assert_eq!(
        nodes[2].as_ref().and_then(TypeNode::member_name),
        Some("DEBUG")
    );
}
