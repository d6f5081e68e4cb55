//! Path resolution helpers.

use std::path::PathBuf;

/// Location of the MCP registry file: `~/.config/claude/mcp_config.json`.
///
/// The host tool reads this exact path, so it is home-relative rather than
/// derived from the platform config directory.
pub fn config_file() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(home
        .join(".config")
        .join("claude")
        .join("mcp_config.json"))
}

/// Location of the `mcp-manager` helper binary: `~/.local/bin/mcp-manager`.
pub fn manager_binary() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(home.join(".local").join("bin").join("mcp-manager"))
}

/// State directory for mcpreg's own files (e.g. the last-command cache).
pub fn state_dir() -> anyhow::Result<PathBuf> {
    let dir = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine state directory"))?;
    Ok(dir.join("mcpreg"))
}
