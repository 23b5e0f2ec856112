// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Flat arena of type nodes serialized together.

use super::{ObjectLiteralType, TypeId, TypeNode};
use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Ordered list of nodes; a [`TypeId`] is an index into it.
///
/// Node 0 is the root of a reflection (an object literal or a class whose
/// `types` list holds the reflected properties).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    nodes: Vec<TypeNode>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<TypeNode>) -> Self {
        Self { nodes }
    }

    /// Batch holding a single object literal without members.
    pub fn empty_object() -> Self {
        Self::from_nodes(vec![TypeNode::ObjectLiteral(ObjectLiteralType::default())])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[TypeNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<TypeNode> {
        self.nodes
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeNode> {
        self.nodes.get(id.index())
    }

    pub fn root(&self) -> Option<&TypeNode> {
        self.nodes.first()
    }

    /// Append a node and return its id.
    pub fn push(&mut self, node: TypeNode) -> Result<TypeId> {
        let id = id_at(self.nodes.len())?;
        self.nodes.push(node);
        Ok(id)
    }

    /// Nodes with their ids. Stops at the last addressable id.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeNode)> {
        self.nodes.iter().enumerate().map_while(|(index, node)| {
            u32::try_from(index).ok().map(|index| (TypeId(index), node))
        })
    }

    /// Member ids of the root object literal or class.
    fn root_members(&self) -> &[TypeId] {
        match self.root() {
            Some(TypeNode::ObjectLiteral(object)) => &object.types,
            Some(TypeNode::Class(class)) => &class.types,
            _ => &[],
        }
    }

    fn root_members_mut(&mut self) -> Option<&mut Vec<TypeId>> {
        match self.nodes.first_mut() {
            Some(TypeNode::ObjectLiteral(object)) => Some(&mut object.types),
            Some(TypeNode::Class(class)) => Some(&mut class.types),
            _ => None,
        }
    }

    /// Properties of the root in declaration order.
    ///
    /// Member ids pointing outside the batch are skipped.
    pub fn properties(&self) -> Vec<(TypeId, &TypeNode)> {
        self.root_members()
            .iter()
            .filter_map(|id| self.get(*id).map(|node| (*id, node)))
            .filter(|(_, node)| node.is_property())
            .collect()
    }

    /// Property declared under `name` (or aliased as `name` by its tags).
    pub fn property(&self, name: &str) -> Option<(TypeId, &TypeNode)> {
        self.properties().into_iter().find(|(_, node)| {
            node.member_name() == Some(name) || node.tags().is_some_and(|tags| tags.has_alias(name))
        })
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Copy the subgraph reachable from `id` in `source` into this batch.
    ///
    /// Referenced nodes are appended in breadth-first order and every id is
    /// rewritten to its new position, so cycles are preserved. Returns the
    /// new id of `id`.
    pub fn import(&mut self, source: &Batch, id: TypeId) -> Result<TypeId> {
        let base = self.nodes.len();
        let mut mapping: HashMap<TypeId, TypeId> = HashMap::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([id]);
        let root = id_at(base)?;
        mapping.insert(id, root);
        order.push(id);

        while let Some(current) = queue.pop_front() {
            let node = source.get(current).ok_or_else(|| {
                CodecError::invalid(format!(
                    "dangling reference {current} while importing {id} (batch has {} types)",
                    source.len()
                ))
            })?;
            for reference in node.references() {
                if !mapping.contains_key(&reference) {
                    mapping.insert(reference, id_at(base + order.len())?);
                    order.push(reference);
                    queue.push_back(reference);
                }
            }
        }

        for original in &order {
            // Presence checked during traversal.
            let Some(node) = source.get(*original) else {
                continue;
            };
            let mut copy = node.clone();
            copy.visit_references_mut(&mut |reference| {
                if let Some(mapped) = mapping.get(reference) {
                    *reference = *mapped;
                }
            });
            self.nodes.push(copy);
        }

        tracing::debug!(
            "imported {} types for {} (batch now {} types)",
            order.len(),
            id,
            self.nodes.len()
        );
        Ok(root)
    }

    /// Import the property `id` of `source` and attach it to the root.
    ///
    /// Returns `Ok(None)` without touching the batch when a property with the
    /// same name or alias is already present. Existing nodes are never
    /// rewritten; only the root member list grows.
    pub fn add_property(&mut self, source: &Batch, id: TypeId) -> Result<Option<TypeId>> {
        let candidate = source.get(id).ok_or_else(|| {
            CodecError::invalid(format!("property {id} not found in source batch"))
        })?;
        if !candidate.is_property() {
            return Err(CodecError::invalid(format!(
                "{id} is a {:?}, not a property",
                candidate.kind()
            )));
        }
        if self.root_members_mut().is_none() {
            return Err(CodecError::invalid(
                "batch root is not an object literal or class",
            ));
        }

        let name = candidate.member_name().unwrap_or_default();
        let aliases = candidate.tags().map(|tags| tags.alias.as_slice()).unwrap_or(&[]);
        if self.has_property(name) || aliases.iter().any(|alias| self.has_property(alias)) {
            return Ok(None);
        }

        let new_id = self.import(source, id)?;
        if let Some(members) = self.root_members_mut() {
            members.push(new_id);
        }
        Ok(Some(new_id))
    }

    /// Ids referenced by some node that do not exist in the batch.
    ///
    /// The codec itself never validates ids; this is for tooling.
    pub fn dangling_references(&self) -> Vec<(TypeId, TypeId)> {
        self.iter()
            .flat_map(|(owner, node)| {
                node.references()
                    .into_iter()
                    .filter(|reference| reference.index() >= self.nodes.len())
                    .map(move |reference| (owner, reference))
            })
            .collect()
    }
}

/// Id of the node at `index`; ids are 32-bit on the wire.
fn id_at(index: usize) -> Result<TypeId> {
    u32::try_from(index)
        .map(TypeId)
        .map_err(|_| CodecError::invalid(format!("batch index {index} exceeds the id range")))
}

impl From<Vec<TypeNode>> for Batch {
    fn from(nodes: Vec<TypeNode>) -> Self {
        Self::from_nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ClassType, Property, PropertySignature, SimpleKind, Tags, TypeList, Visibility,
    };

    fn property(name: &str, ty: u32) -> TypeNode {
        TypeNode::Property(Property {
            name: name.into(),
            ty: TypeId(ty),
            visibility: Visibility::Public,
            ..Property::default()
        })
    }

    /// Root object with DEBUG: boolean and PORT: number.
    fn config_batch() -> Batch {
        Batch::from_nodes(vec![
            TypeNode::ObjectLiteral(ObjectLiteralType {
                types: vec![TypeId(1), TypeId(3)],
                ..ObjectLiteralType::default()
            }),
            property("DEBUG", 2),
            TypeNode::simple(SimpleKind::Boolean),
            property("PORT", 4),
            TypeNode::simple(SimpleKind::Number),
        ])
    }

    #[test]
    fn test_empty_object() {
        let batch = Batch::empty_object();
        assert_eq!(batch.len(), 1);
        assert!(batch.properties().is_empty());
        assert!(matches!(batch.root(), Some(TypeNode::ObjectLiteral(_))));
    }

    #[test]
    fn test_push_returns_next_id() {
        let mut batch = Batch::empty_object();
        let id = batch.push(TypeNode::simple(SimpleKind::String)).expect("push");
        assert_eq!(id, TypeId(1));
        assert_eq!(batch.iter().map(|(id, _)| id).last(), Some(TypeId(1)));
    }

    #[test]
    fn test_id_range_is_checked() {
        assert_eq!(id_at(u32::MAX as usize).expect("max id"), TypeId(u32::MAX));
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            id_at(u32::MAX as usize + 1),
            Err(CodecError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_properties_in_order() {
        let batch = config_batch();
        let names: Vec<_> = batch
            .properties()
            .into_iter()
            .filter_map(|(_, node)| node.member_name())
            .collect();
        assert_eq!(names, vec!["DEBUG", "PORT"]);
        assert!(batch.has_property("PORT"));
        assert!(!batch.has_property("HOST"));
    }

    #[test]
    fn test_import_remaps_ids() {
        let source = config_batch();
        let mut target = Batch::empty_object();

        let id = target.import(&source, TypeId(3)).expect("import");
        assert_eq!(id, TypeId(1));
        assert_eq!(target.len(), 3);
        match target.get(id) {
            Some(TypeNode::Property(p)) => {
                assert_eq!(p.name, "PORT");
                assert_eq!(p.ty, TypeId(2));
            }
            other => panic!("unexpected node {other:?}"),
        }
        assert_eq!(target.get(TypeId(2)), Some(&TypeNode::simple(SimpleKind::Number)));
    }

    #[test]
    fn test_import_preserves_cycles() {
        // class Node { next: Node }
        let source = Batch::from_nodes(vec![
            TypeNode::Class(ClassType {
                class_type: "Node".into(),
                types: vec![TypeId(1)],
                ..ClassType::default()
            }),
            property("next", 0),
        ]);
        let mut target = Batch::from_nodes(vec![TypeNode::simple(SimpleKind::Any)]);

        let id = target.import(&source, TypeId(0)).expect("import");
        assert_eq!(id, TypeId(1));
        assert_eq!(target.len(), 3);
        assert_eq!(target.get(TypeId(1)).map(TypeNode::references), Some(vec![TypeId(2)]));
        assert_eq!(target.get(TypeId(2)).map(TypeNode::references), Some(vec![TypeId(1)]));
    }

    #[test]
    fn test_import_dangling_reference_fails() {
        let source = Batch::from_nodes(vec![property("BROKEN", 7)]);
        let mut target = Batch::empty_object();
        let err = target.import(&source, TypeId(0)).unwrap_err();
        assert!(matches!(err, CodecError::InvalidInput(_)));
        assert_eq!(target.len(), 1, "failed import must not append");
    }

    #[test]
    fn test_add_property_is_idempotent() {
        let source = config_batch();
        let mut target = Batch::empty_object();

        let first = target.add_property(&source, TypeId(1)).expect("add");
        assert!(first.is_some());
        let second = target.add_property(&source, TypeId(1)).expect("add again");
        assert!(second.is_none());

        assert_eq!(target.properties().len(), 1);
        assert_eq!(target.len(), 3);
    }

    #[test]
    fn test_add_property_respects_aliases() {
        let mut target = Batch::from_nodes(vec![
            TypeNode::ObjectLiteral(ObjectLiteralType {
                types: vec![TypeId(1)],
                ..ObjectLiteralType::default()
            }),
            TypeNode::PropertySignature(PropertySignature {
                name: "LOG_LEVEL".into(),
                ty: TypeId(2),
                tags: Some(Tags {
                    alias: vec!["LOGLEVEL".into()],
                    ..Tags::default()
                }),
                ..PropertySignature::default()
            }),
            TypeNode::simple(SimpleKind::String),
        ]);
        let source = Batch::from_nodes(vec![
            property("LOGLEVEL", 1),
            TypeNode::simple(SimpleKind::String),
        ]);

        let added = target.add_property(&source, TypeId(0)).expect("add");
        assert!(added.is_none());
        assert_eq!(target.len(), 3);
    }

    #[test]
    fn test_add_property_rejects_non_property() {
        let source = Batch::from_nodes(vec![TypeNode::Union(TypeList::default())]);
        let mut target = Batch::empty_object();
        assert!(target.add_property(&source, TypeId(0)).is_err());
    }

    #[test]
    fn test_dangling_references() {
        let batch = Batch::from_nodes(vec![property("A", 0), property("B", 5)]);
        assert_eq!(batch.dangling_references(), vec![(TypeId(1), TypeId(5))]);
    }
}
