//! MCP registry configuration
//!
//! The registry is a single JSON document at `~/.config/claude/mcp_config.json`
//! holding the list of registered MCP servers. Every operation is an
//! independent load-modify-save cycle against that file; nothing is cached
//! between calls.

pub mod paths;
pub mod schema;
pub mod store;

pub use paths::{config_file, manager_binary, state_dir};
pub use schema::{LaunchKind, McpConfig, McpRecord};
pub use store::{ConfigStore, StoreError};
