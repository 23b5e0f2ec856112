// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Documentation tags attached to reflected members.

use serde::{Deserialize, Serialize};

/// Tags read from JSDoc comments (`@alias`, `@hidden`, `@permission`, ...).
///
/// `None` on a node means the node never had tags. Tags whose fields are all
/// at their defaults are not written to the wire and decode as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tags {
    pub alias: Vec<String>,
    pub hidden: bool,
    pub ignore: bool,
    pub internal: bool,
    pub readonly: bool,
    pub domain: Option<String>,
    pub title: Option<String>,
    pub permission: Vec<String>,
}

impl Tags {
    /// True when no tag-bearing field is set.
    pub fn is_empty(&self) -> bool {
        self.alias.is_empty()
            && !self.hidden
            && !self.ignore
            && !self.internal
            && !self.readonly
            && self.domain.as_deref().map_or(true, str::is_empty)
            && self.title.as_deref().map_or(true, str::is_empty)
            && self.permission.is_empty()
    }

    pub fn has_alias(&self, name: &str) -> bool {
        self.alias.iter().any(|alias| alias == name)
    }
}
