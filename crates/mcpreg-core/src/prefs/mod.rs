//! Last-command cache.
//!
//! Remembers the most recent successfully registered command line so it can
//! be recalled and re-edited. This is a convenience cache: a missing or
//! unreadable file simply means there is nothing to recall.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Prefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_command: Option<String>,
}

/// Small JSON key-value store under the state directory.
#[derive(Debug, Clone)]
pub struct PrefStore {
    prefs_path: PathBuf,
}

impl PrefStore {
    /// Create a store over the default prefs path.
    pub fn with_defaults() -> anyhow::Result<Self> {
        Ok(Self::from_path(paths::state_dir()?.join("prefs.json")))
    }

    /// Create a store over an explicit prefs path.
    pub fn from_path(prefs_path: PathBuf) -> Self {
        Self { prefs_path }
    }

    pub fn prefs_path(&self) -> &Path {
        &self.prefs_path
    }

    /// The last remembered command, if any.
    pub fn last_command(&self) -> Option<String> {
        self.read().last_command
    }

    /// Remember a command line.
    pub fn remember_command(&self, raw: &str) -> anyhow::Result<()> {
        let mut prefs = self.read();
        prefs.last_command = Some(raw.to_string());
        self.write(&prefs)
    }

    fn read(&self) -> Prefs {
        std::fs::read(&self.prefs_path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }

    fn write(&self, prefs: &Prefs) -> anyhow::Result<()> {
        if let Some(parent) = self.prefs_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }
        let bytes = serde_json::to_vec_pretty(prefs).context("Failed to serialize preferences")?;
        std::fs::write(&self.prefs_path, bytes)
            .with_context(|| format!("Failed to write preferences: {}", self.prefs_path.display()))
    }
}
