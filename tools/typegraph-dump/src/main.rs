// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reflection file CLI
//!
//! # Usage
//!
//! ```bash
//! # List every slot of a reflection file
//! typegraph-dump dump .reflections/env/app-types.bin
//!
//! # Same as JSON
//! typegraph-dump dump .reflections/env/app-types.bin --json
//!
//! # Encode producer JSON
//! typegraph-dump encode types.json -o app-types.bin --compress
//!
//! # Merge used properties into .reflections/env/app.bin
//! typegraph-dump sync env app DEBUG PORT
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use typegraph::schema::write_message;
use typegraph::{
    deserialize_sparse, encode_json_batch, Registry, RegistryConfig, SerializedTypes, TypeId,
    TypeNode,
};

#[derive(Parser, Debug)]
#[command(name = "typegraph-dump")]
#[command(about = "Inspect and produce reflection type-graph files", long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every slot of a reflection file
    Dump {
        file: PathBuf,

        /// Print nodes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report references to missing types
    Check { file: PathBuf },
    /// Encode a producer JSON array into a reflection file
    Encode {
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Deflate-compress the payload
        #[arg(long)]
        compress: bool,
    },
    /// List the properties of the root object
    Properties { file: PathBuf },
    /// Merge used property names into the used reflection of DOMAIN/NAME
    Sync {
        domain: String,
        name: String,
        properties: Vec<String>,

        /// JSON config file (defaults plus TYPEGRAPH_* variables otherwise)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .init();

    match args.command {
        Commands::Dump { file, json } => dump(&file, json),
        Commands::Check { file } => check(&file),
        Commands::Encode {
            input,
            output,
            compress,
        } => encode(&input, &output, compress),
        Commands::Properties { file } => properties(&file),
        Commands::Sync {
            domain,
            name,
            properties,
            config,
        } => sync(&domain, &name, &properties, config.as_deref()),
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn describe(node: &TypeNode) -> String {
    let mut line = format!("{:?}", node.kind());
    if let Some(name) = node.member_name() {
        line.push_str(&format!(" {name}"));
    }
    if let Some(type_name) = &node.meta().type_name {
        line.push_str(&format!(" <{type_name}>"));
    }
    let references = node.references();
    if !references.is_empty() {
        let ids: Vec<String> = references.iter().map(ToString::to_string).collect();
        line.push_str(&format!(" -> {}", ids.join(", ")));
    }
    line
}

/// Decode keeping unset slots; `encode` writes them for kind-less entries.
fn read_sparse(file: &Path) -> Result<Vec<Option<TypeNode>>> {
    deserialize_sparse(&read_file(file)?)
        .with_context(|| format!("Failed to decode {}", file.display()))
}

fn dump(file: &Path, json: bool) -> Result<()> {
    let nodes = read_sparse(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
        return Ok(());
    }

    println!("{} ({} types)", file.display(), nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        match node {
            Some(node) => println!("  #{index:<4} {}", describe(node)),
            None => println!("  #{index:<4} (unset)"),
        }
    }
    Ok(())
}

/// Node in slot `id`; `None` for unset or out-of-range slots.
fn slot(nodes: &[Option<TypeNode>], id: TypeId) -> Option<&TypeNode> {
    nodes.get(id.index()).and_then(Option::as_ref)
}

/// References to a slot that is out of range or unset.
fn unresolved(nodes: &[Option<TypeNode>]) -> Vec<(TypeId, TypeId)> {
    (0u32..)
        .zip(nodes)
        .filter_map(|(index, node)| node.as_ref().map(|node| (TypeId(index), node)))
        .flat_map(|(owner, node)| {
            node.references()
                .into_iter()
                .filter(|reference| slot(nodes, *reference).is_none())
                .map(move |reference| (owner, reference))
        })
        .collect()
}

/// Property members of the root object literal or class, in order.
fn root_properties(nodes: &[Option<TypeNode>]) -> Vec<(TypeId, &TypeNode)> {
    let members = match slot(nodes, TypeId(0)) {
        Some(TypeNode::ObjectLiteral(object)) => &object.types,
        Some(TypeNode::Class(class)) => &class.types,
        _ => return Vec::new(),
    };
    members
        .iter()
        .filter_map(|id| slot(nodes, *id).map(|node| (*id, node)))
        .filter(|(_, node)| node.is_property())
        .collect()
}

fn check(file: &Path) -> Result<()> {
    let nodes = read_sparse(file)?;
    let unset = nodes.iter().filter(|node| node.is_none()).count();
    if unset > 0 {
        println!("  {unset} unset slots (entries without a kind)");
    }

    let dangling = unresolved(&nodes);
    if dangling.is_empty() {
        println!("{}: {} types, all references resolve", file.display(), nodes.len());
        return Ok(());
    }
    for (from, to) in &dangling {
        println!("  {from} references missing {to}");
    }
    bail!(
        "{}: {} dangling references",
        file.display(),
        dangling.len()
    );
}

fn encode(input: &Path, output: &Path, compress: bool) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Invalid JSON in {}", input.display()))?;

    let count = value.as_array().map_or(0, Vec::len);
    let mut message = SerializedTypes::with_len(count);
    let slots = message.types_mut().context("message has no type list")?;
    let encoded = encode_json_batch(&value, slots)?;
    if encoded < count {
        tracing::warn!("{} of {} entries had no kind", count - encoded, count);
    }

    let bytes = write_message(&message, compress)?;
    std::fs::write(output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Wrote {} types ({} bytes) to {}",
        encoded,
        bytes.len(),
        output.display()
    );
    Ok(())
}

fn properties(file: &Path) -> Result<()> {
    let nodes = read_sparse(file)?;
    let properties = root_properties(&nodes);
    println!("{} properties:", properties.len());
    for (id, node) in properties {
        let name = node.member_name().unwrap_or_default();
        let (ty, optional, readonly) = match node {
            TypeNode::Property(p) => (p.ty, p.optional, p.readonly),
            TypeNode::PropertySignature(p) => (p.ty, p.optional, p.readonly),
            _ => continue,
        };
        let kind = slot(&nodes, ty)
            .map_or_else(|| format!("missing {ty}"), |target| format!("{:?}", target.kind()));

        let mut line = format!("  {id} {name}: {kind}");
        if optional.is_set() {
            line.push_str(" optional");
        }
        if readonly.is_set() {
            line.push_str(" readonly");
        }
        if let Some(tags) = node.tags().filter(|tags| !tags.alias.is_empty()) {
            line.push_str(&format!(" (alias {})", tags.alias.join(", ")));
        }
        println!("{line}");
    }
    Ok(())
}

fn sync(domain: &str, name: &str, properties: &[String], config: Option<&Path>) -> Result<()> {
    let config = match config {
        Some(path) => RegistryConfig::load(path)?,
        None => RegistryConfig::from_env()?,
    };
    tracing::info!("Reflections: {}", config.reflections_dir.display());

    let mut registry = Registry::open(config);
    let names: Vec<&str> = properties.iter().map(String::as_str).collect();
    let added = registry.sync_used(domain, name, &names)?;
    let written = registry.flush()?;
    println!("Added {added} properties to {domain}/{name} ({written} files written)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use typegraph::model::{ObjectLiteralType, PropertySignature};
    use typegraph::SimpleKind;

    fn signature(name: &str, ty: u32) -> Option<TypeNode> {
        Some(TypeNode::PropertySignature(PropertySignature {
            name: name.into(),
            ty: TypeId(ty),
            ..PropertySignature::default()
        }))
    }

    /// Object with DEBUG, an unset slot, and HOST pointing at the unset slot.
    fn sparse_nodes() -> Vec<Option<TypeNode>> {
        vec![
            Some(TypeNode::ObjectLiteral(ObjectLiteralType {
                types: vec![TypeId(1), TypeId(3), TypeId(2)],
                ..ObjectLiteralType::default()
            })),
            signature("DEBUG", 4),
            None,
            signature("HOST", 2),
            Some(TypeNode::simple(SimpleKind::Boolean)),
        ]
    }

    #[test]
    fn test_unset_slots_are_tolerated() {
        let nodes = sparse_nodes();
        assert_eq!(slot(&nodes, TypeId(2)), None);
        assert_eq!(slot(&nodes, TypeId(9)), None);

        let names: Vec<_> = root_properties(&nodes)
            .into_iter()
            .filter_map(|(_, node)| node.member_name())
            .collect();
        assert_eq!(names, vec!["DEBUG", "HOST"]);
    }

    #[test]
    fn test_references_to_unset_slots_are_unresolved() {
        let nodes = sparse_nodes();
        assert_eq!(
            unresolved(&nodes),
            vec![(TypeId(0), TypeId(2)), (TypeId(3), TypeId(2))]
        );
    }

    #[test]
    fn test_encoded_file_with_kindless_entry_is_readable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("types.json");
        let output = dir.path().join("app-types.bin");
        let types = serde_json::json!([
            { "kind": 30, "types": [2] },
            { "name": "skipped" },
            { "kind": 32, "name": "DEBUG", "type": 3 },
            { "kind": 7 }
        ]);
        std::fs::write(&input, types.to_string()).expect("write input");

        encode(&input, &output, false).expect("encode");
        let nodes = read_sparse(&output).expect("read");
        assert!(nodes[1].is_none());
        assert_eq!(root_properties(&nodes).len(), 1);
        assert!(unresolved(&nodes).is_empty());
        check(&output).expect("check");
        properties(&output).expect("properties");
    }
}
