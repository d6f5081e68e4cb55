//! Client for the external `mcp-manager` helper binary.
//!
//! After a record is durably persisted, `mcp-manager add-all` propagates the
//! registry into the host tool's live configuration. The binary path is
//! injectable so the invocation is testable in isolation; everything here is
//! decoupled from any UI layer.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use tracing::debug;

use crate::config::paths;

/// Wrapper around the `mcp-manager` executable.
#[derive(Debug, Clone)]
pub struct ManagerClient {
    binary: PathBuf,
}

impl ManagerClient {
    /// Create a client over the default binary location
    /// (`~/.local/bin/mcp-manager`).
    pub fn with_defaults() -> anyhow::Result<Self> {
        Ok(Self::from_binary(paths::manager_binary()?))
    }

    /// Create a client over an explicit binary path.
    pub fn from_binary(binary: PathBuf) -> Self {
        Self { binary }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Whether the helper binary is present on disk.
    pub fn is_installed(&self) -> bool {
        self.binary.is_file()
    }

    /// Run `mcp-manager add-all` and return its trimmed stdout.
    pub fn sync_all(&self) -> anyhow::Result<String> {
        debug!(binary = %self.binary.display(), "running mcp-manager add-all");
        let output = Command::new(&self.binary)
            .arg("add-all")
            .output()
            .with_context(|| format!("Failed to invoke {}", self.binary.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("mcp-manager add-all failed: {}", stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
