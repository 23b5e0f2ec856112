// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding [`RegistryConfig::reflections_dir`].
pub const ENV_REFLECTIONS_DIR: &str = "TYPEGRAPH_REFLECTIONS_DIR";

/// Environment variable overriding [`RegistryConfig::compress`].
pub const ENV_COMPRESS: &str = "TYPEGRAPH_COMPRESS";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Reflection registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Root directory; reflections live under `<dir>/<domain>/`.
    pub reflections_dir: PathBuf,

    /// Deflate-compress written reflection files.
    pub compress: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            reflections_dir: PathBuf::from(".reflections"),
            compress: false,
        }
    }
}

impl RegistryConfig {
    /// Create a new config builder
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::default()
    }

    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Defaults overridden by `TYPEGRAPH_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup` (an environment accessor).
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(dir) = lookup(ENV_REFLECTIONS_DIR).filter(|dir| !dir.is_empty()) {
            self.reflections_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(ENV_COMPRESS) {
            self.compress = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        var: ENV_COMPRESS,
                        value,
                    })
                }
            };
        }
        Ok(self)
    }
}

/// Config builder for fluent API
#[derive(Debug, Default)]
pub struct RegistryConfigBuilder {
    reflections_dir: Option<PathBuf>,
    compress: Option<bool>,
}

impl RegistryConfigBuilder {
    /// Set the reflections root directory
    pub fn reflections_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reflections_dir = Some(dir.into());
        self
    }

    /// Enable or disable payload compression
    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = Some(compress);
        self
    }

    /// Build the configuration
    pub fn build(self) -> RegistryConfig {
        let defaults = RegistryConfig::default();

        RegistryConfig {
            reflections_dir: self.reflections_dir.unwrap_or(defaults.reflections_dir),
            compress: self.compress.unwrap_or(defaults.compress),
        }
    }
}
