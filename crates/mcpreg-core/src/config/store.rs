//! Config store for loading and saving the MCP registry.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::paths;
use super::schema::{McpConfig, McpRecord};

/// Errors raised by registry storage operations.
///
/// A missing file is not an error (the store starts from an empty registry);
/// a file that exists but does not hold a valid registry is `Malformed` and
/// is never silently replaced.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this name is already registered.
    #[error("'{0}' is already registered")]
    DuplicateName(String),

    /// The config file exists but is not a valid registry document.
    #[error("config file is not a valid MCP registry: {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading the config file failed.
    #[error("failed to read config file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the config file (or creating its directory) failed.
    #[error("failed to write config file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the registry failed.
    #[error("failed to serialize MCP registry")]
    Serialize(#[source] serde_json::Error),
}

/// Loads and saves the JSON registry document.
///
/// Each call starts from a fresh disk read; there is no in-memory state
/// between operations. Concurrent external writers are last-writer-wins.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a store over the default registry path.
    pub fn with_defaults() -> anyhow::Result<Self> {
        Ok(Self::from_path(paths::config_file()?))
    }

    /// Create a store over an explicit registry path.
    pub fn from_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the registry.
    ///
    /// A missing file yields an empty registry after ensuring the parent
    /// directory exists; the file itself is only created by `save`.
    pub fn load(&self) -> Result<McpConfig, StoreError> {
        if !self.config_path.exists() {
            self.ensure_parent_dir()?;
            return Ok(McpConfig::new());
        }
        let bytes = std::fs::read(&self.config_path).map_err(|source| StoreError::Read {
            path: self.config_path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.config_path.clone(),
            source,
        })
    }

    /// Save the registry as pretty-printed JSON.
    ///
    /// The document is written to a unique sibling temp file and renamed over
    /// the target, so a crash mid-write never corrupts a valid registry.
    pub fn save(&self, config: &McpConfig) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(config).map_err(StoreError::Serialize)?;
        self.ensure_parent_dir()?;

        let tmp_path = self.unique_temp_path()?;
        std::fs::write(&tmp_path, &bytes).map_err(|source| StoreError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        if let Err(source) = std::fs::rename(&tmp_path, &self.config_path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(StoreError::Write {
                path: self.config_path.clone(),
                source,
            });
        }
        debug!(path = %self.config_path.display(), records = config.mcps.len(), "saved MCP registry");
        Ok(())
    }

    /// Whether a record with this exact name is registered.
    pub fn exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.load()?.contains(name))
    }

    /// Append a record, refusing duplicates.
    ///
    /// On `DuplicateName` nothing is written and the file bytes are untouched.
    pub fn append(&self, record: McpRecord) -> Result<(), StoreError> {
        let mut config = self.load()?;
        if config.contains(&record.name) {
            return Err(StoreError::DuplicateName(record.name));
        }
        debug!(name = %record.name, kind = record.kind.as_str(), "registering MCP server");
        config.mcps.push(record);
        self.save(&config)
    }

    fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    fn unique_temp_path(&self) -> Result<PathBuf, StoreError> {
        let parent = self.config_path.parent().unwrap_or(Path::new("."));
        let base = self
            .config_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mcp_config.json".to_string());

        for attempt in 0u32..1000 {
            let name = if attempt == 0 {
                format!(".{}.tmp.{}", base, std::process::id())
            } else {
                format!(".{}.tmp.{}.{}", base, std::process::id(), attempt)
            };
            let candidate = parent.join(name);
            if !candidate.exists() {
                return Ok(candidate);
            }
        }

        Err(StoreError::Write {
            path: self.config_path.clone(),
            source: std::io::Error::other("failed to allocate a unique temp path"),
        })
    }
}
