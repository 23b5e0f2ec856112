// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reflection registry
//!
//!
//! Persists named batches ("reflections") and merges newly observed
//! properties into them. Each `(domain, name)` pair has two reflections:
//!
//! - `Types` - the full declared shape, at `<dir>/<domain>/<name>-types.bin`
//! - `Used` - the properties application code actually reads, at
//!   `<dir>/<domain>/<name>.bin`
//!
//! # State machine
//!
//! ```text
//! Missing --read(file)--> Loaded --add_properties--> Dirty --write--> Persisted
//!    \--read(no file)--> Dirty --write--> Persisted
//! ```
//!
//! A registry is owned by one build. Two registries writing the same
//! reflection concurrently is unsupported. Writes remove the old file before
//! writing the new one, so a crash in between loses the reflection; the next
//! read then starts from an empty one.

mod store;

pub use store::{ByteStore, FsStore, MemoryStore, StoreError};

use crate::codec::{deserialize_batch, serialize_batch};
use crate::config::RegistryConfig;
use crate::error::CodecError;
use crate::model::{Batch, TypeId, TypeNode};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Keys and states
// ---------------------------------------------------------------------------

/// Which reflection of a `(domain, name)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReflectionFlavor {
    /// Full declared shape.
    Types,
    /// Subset referenced by application code.
    Used,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReflectionKey {
    pub domain: String,
    pub name: String,
    pub flavor: ReflectionFlavor,
}

impl ReflectionKey {
    pub fn types(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            flavor: ReflectionFlavor::Types,
        }
    }

    pub fn used(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            flavor: ReflectionFlavor::Used,
        }
    }

    /// Key of the other flavor for the same pair.
    pub fn sibling(&self) -> Self {
        let flavor = match self.flavor {
            ReflectionFlavor::Types => ReflectionFlavor::Used,
            ReflectionFlavor::Used => ReflectionFlavor::Types,
        };
        Self {
            flavor,
            ..self.clone()
        }
    }

    pub fn file_name(&self) -> String {
        let name = sanitize_name(&self.name);
        match self.flavor {
            ReflectionFlavor::Types => format!("{name}-types.bin"),
            ReflectionFlavor::Used => format!("{name}.bin"),
        }
    }

    /// Path relative to the reflections directory.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(sanitize_name(&self.domain)).join(self.file_name())
    }
}

impl fmt::Display for ReflectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flavor = match self.flavor {
            ReflectionFlavor::Types => "types",
            ReflectionFlavor::Used => "used",
        };
        write!(f, "{}/{} ({})", self.domain, self.name, flavor)
    }
}

/// Replace characters that are problematic in file paths.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionState {
    /// Not read yet.
    Missing,
    /// Read from storage, unchanged since.
    Loaded,
    /// Changed in memory, not written yet.
    Dirty,
    /// In memory and on storage agree.
    Persisted,
}

#[derive(Debug, Clone)]
struct Reflection {
    batch: Batch,
    state: ReflectionState,
}

// ---------------------------------------------------------------------------
// RegistryError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The reflection root is not an object literal or class.
    #[error("Reflection {key} has no object root")]
    NotAnObject { key: String },

    /// Operation on a reflection that was never read.
    #[error("Unknown reflection: {0}")]
    UnknownReflection(String),
}

fn has_object_root(batch: &Batch) -> bool {
    matches!(
        batch.root(),
        Some(TypeNode::ObjectLiteral(_)) | Some(TypeNode::Class(_))
    )
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Cache of reflections over a [`ByteStore`].
pub struct Registry<S: ByteStore = FsStore> {
    config: RegistryConfig,
    store: S,
    reflections: HashMap<ReflectionKey, Reflection>,
}

impl Registry<FsStore> {
    /// Registry over the local filesystem.
    pub fn open(config: RegistryConfig) -> Self {
        Self::new(config, FsStore)
    }
}

impl<S: ByteStore> Registry<S> {
    pub fn new(config: RegistryConfig, store: S) -> Self {
        Self {
            config,
            store,
            reflections: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Storage path of `key`.
    pub fn path(&self, key: &ReflectionKey) -> PathBuf {
        self.config.reflections_dir.join(key.relative_path())
    }

    pub fn state(&self, key: &ReflectionKey) -> ReflectionState {
        self.reflections
            .get(key)
            .map_or(ReflectionState::Missing, |reflection| reflection.state)
    }

    /// Cached batch of `key`, if read.
    pub fn get(&self, key: &ReflectionKey) -> Option<&Batch> {
        self.reflections.get(key).map(|reflection| &reflection.batch)
    }

    /// Decode the stored batch without touching the cache.
    fn load(&self, key: &ReflectionKey) -> Result<Option<Batch>, RegistryError> {
        let path = self.path(key);
        match self.store.read_bytes(&path) {
            Ok(bytes) => {
                let batch = deserialize_batch(&bytes)?;
                tracing::debug!("loaded {} ({} types)", key, batch.len());
                Ok(Some(batch))
            }
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn ensure_loaded(&mut self, key: &ReflectionKey) -> Result<(), RegistryError> {
        if self.reflections.contains_key(key) {
            return Ok(());
        }

        match self.load(key)? {
            Some(batch) => {
                self.reflections.insert(
                    key.clone(),
                    Reflection {
                        batch,
                        state: ReflectionState::Loaded,
                    },
                );
            }
            None => {
                tracing::debug!("{} not found, starting empty reflection", key);
                self.reflections.insert(
                    key.clone(),
                    Reflection {
                        batch: Batch::empty_object(),
                        state: ReflectionState::Dirty,
                    },
                );
                self.write(key)?;
            }
        }
        Ok(())
    }

    /// Read a reflection, creating and persisting an empty one when no file
    /// exists.
    pub fn read(&mut self, key: &ReflectionKey) -> Result<&Batch, RegistryError> {
        self.ensure_loaded(key)?;
        self.get(key)
            .ok_or_else(|| RegistryError::UnknownReflection(key.to_string()))
    }

    fn reflection_mut(&mut self, key: &ReflectionKey) -> Result<&mut Reflection, RegistryError> {
        self.reflections
            .get_mut(key)
            .ok_or_else(|| RegistryError::UnknownReflection(key.to_string()))
    }

    /// Merge the properties `ids` of `source` into the reflection.
    ///
    /// Properties whose name or alias is already present are skipped.
    /// Returns the number of appended properties.
    pub fn add_properties(
        &mut self,
        key: &ReflectionKey,
        source: &Batch,
        ids: &[TypeId],
    ) -> Result<usize, RegistryError> {
        self.ensure_loaded(key)?;
        let reflection = self.reflection_mut(key)?;
        if !has_object_root(&reflection.batch) {
            return Err(RegistryError::NotAnObject {
                key: key.to_string(),
            });
        }

        for id in ids {
            if !source.get(*id).is_some_and(TypeNode::is_property) {
                return Err(CodecError::invalid(format!(
                    "{id} is not a property of the source batch"
                ))
                .into());
            }
        }

        let mut added = 0;
        for id in ids {
            // Dirty before the next import can fail.
            if reflection.batch.add_property(source, *id)?.is_some() {
                added += 1;
                reflection.state = ReflectionState::Dirty;
            }
        }
        if added > 0 {
            tracing::debug!("merged {} properties into {}", added, key);
        }
        Ok(added)
    }

    /// Encode and store the cached batch of `key`.
    pub fn write(&mut self, key: &ReflectionKey) -> Result<(), RegistryError> {
        let path = self.path(key);
        let compress = self.config.compress;
        let reflection = self
            .reflections
            .get(key)
            .ok_or_else(|| RegistryError::UnknownReflection(key.to_string()))?;

        let bytes = serialize_batch(&reflection.batch, compress)?;
        self.store.remove_file(&path)?;
        self.store.write_bytes(&path, &bytes)?;

        tracing::info!(
            "wrote {} ({} types, {} bytes) to {}",
            key,
            reflection.batch.len(),
            bytes.len(),
            path.display()
        );
        self.reflection_mut(key)?.state = ReflectionState::Persisted;
        Ok(())
    }

    /// Write every dirty reflection. Returns how many were written.
    pub fn flush(&mut self) -> Result<usize, RegistryError> {
        let mut dirty: Vec<ReflectionKey> = self
            .reflections
            .iter()
            .filter(|(_, reflection)| reflection.state == ReflectionState::Dirty)
            .map(|(key, _)| key.clone())
            .collect();
        dirty.sort();

        for key in &dirty {
            self.write(key)?;
        }
        Ok(dirty.len())
    }

    /// Replace the declared shape of `(domain, name)`.
    ///
    /// Returns `false` without writing when the stored shape is identical.
    pub fn write_types(
        &mut self,
        domain: &str,
        name: &str,
        batch: Batch,
    ) -> Result<bool, RegistryError> {
        let key = ReflectionKey::types(domain, name);
        if !has_object_root(&batch) {
            return Err(RegistryError::NotAnObject {
                key: key.to_string(),
            });
        }

        let current = match self.reflections.get(&key) {
            Some(reflection) => Some(reflection.batch.clone()),
            None => self.load(&key)?,
        };
        if current.as_ref() == Some(&batch) {
            tracing::debug!("{} unchanged, skipping write", key);
            self.reflections.entry(key).or_insert(Reflection {
                batch,
                state: ReflectionState::Loaded,
            });
            return Ok(false);
        }

        self.reflections.insert(
            key.clone(),
            Reflection {
                batch,
                state: ReflectionState::Dirty,
            },
        );
        self.write(&key)?;
        Ok(true)
    }

    /// Bring the used reflection of `(domain, name)` in line with the
    /// properties application code reads.
    ///
    /// The used reflection is rebuilt from scratch when it holds a property
    /// the types reflection no longer declares; otherwise missing properties
    /// are merged in. Names not declared in the types reflection are
    /// ignored. Leaves the used reflection dirty when it changed; returns
    /// the number of properties added.
    pub fn sync_used(
        &mut self,
        domain: &str,
        name: &str,
        used_names: &[&str],
    ) -> Result<usize, RegistryError> {
        let types_key = ReflectionKey::types(domain, name);
        let used_key = ReflectionKey::used(domain, name);
        let types = self.read(&types_key)?.clone();
        self.ensure_loaded(&used_key)?;

        let stale = {
            let used = &self.reflection_mut(&used_key)?.batch;
            used.properties()
                .iter()
                .filter_map(|(_, node)| node.member_name())
                .find(|property| !types.has_property(property))
                .map(str::to_owned)
        };
        if let Some(property) = stale {
            tracing::warn!(
                "{} declares `{}` which {} no longer has, rebuilding",
                used_key,
                property,
                types_key
            );
            let reflection = self.reflection_mut(&used_key)?;
            reflection.batch = Batch::empty_object();
            reflection.state = ReflectionState::Dirty;
        }

        let mut ids = Vec::with_capacity(used_names.len());
        for used_name in used_names {
            match types.property(used_name) {
                Some((id, _)) => ids.push(id),
                None => tracing::debug!("{} has no property `{}`", types_key, used_name),
            }
        }
        self.add_properties(&used_key, &types, &ids)
    }
}
