//! Mcpreg Core Library
//!
//! Provides the domain logic for registering MCP servers from pasted
//! `claude mcp add ...` command lines: a command parser, a JSON-backed
//! registry store, a last-command cache, and a client for the external
//! `mcp-manager` helper binary.

pub mod command;
pub mod commands;
pub mod config;
pub mod manager;
pub mod prefs;

/// Re-exports of commonly used types
pub mod prelude {
    // Command parsing
    pub use crate::command::{ParseError, parse_command};

    // Configuration
    pub use crate::config::{ConfigStore, LaunchKind, McpConfig, McpRecord, StoreError};

    // High-level commands
    pub use crate::commands::{AddCommand, AddOptions, AddReport, ListCommand, SyncStatus};

    // Manager binary
    pub use crate::manager::ManagerClient;

    // Preferences
    pub use crate::prefs::PrefStore;
}
