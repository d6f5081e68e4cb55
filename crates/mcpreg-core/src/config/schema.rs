//! Serde schema for the MCP registry document.
//!
//! Wire format (2-space pretty JSON):
//!
//! ```json
//! {
//!   "mcps": [
//!     { "name": "supabase", "type": "npx", "path": "supabase/mcp-server-supabase@latest", "options": "" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// How an MCP server process is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchKind {
    /// Launched through the npm package runner (`npx -y <package>`)
    Npx,
    /// Launched with an environment-variable prefix (`env KEY=VALUE ...`)
    Env,
}

impl LaunchKind {
    /// Wire name of the variant ("npx" or "env").
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchKind::Npx => "npx",
            LaunchKind::Env => "env",
        }
    }
}

/// A registered MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpRecord {
    /// Unique identifier within the registry (case-sensitive)
    pub name: String,
    /// Launch variant
    #[serde(rename = "type")]
    pub kind: LaunchKind,
    /// Package reference for npx launches, `KEY=VALUE` assignment for env launches
    #[serde(rename = "path")]
    pub target: String,
    /// Trailing arguments, preserved verbatim
    #[serde(rename = "options")]
    pub extra_args: String,
}

/// The persisted registry: an ordered list of records, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpConfig {
    pub mcps: Vec<McpRecord>,
}

impl McpConfig {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record with this exact name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.mcps.iter().any(|record| record.name == name)
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&McpRecord> {
        self.mcps.iter().find(|record| record.name == name)
    }
}
