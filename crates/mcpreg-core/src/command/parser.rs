//! Command line parser implementation.

use thiserror::Error;

use crate::config::{LaunchKind, McpRecord};

/// Optional leading prefix stripped from pasted commands.
const COMMAND_PREFIX: &str = "claude mcp add";

/// Errors raised while parsing a command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No whitespace-delimited `--` separator between name and launch spec.
    #[error("missing ' -- ' separator in command: {0}")]
    MissingSeparator(String),

    /// The name segment is empty after stripping quotes.
    #[error("MCP server name is empty in command: {0}")]
    EmptyName(String),

    /// The launch spec starts with a token other than `npx` or `env`.
    #[error("unknown launch type '{0}' (must be npx or env)")]
    UnknownLaunchType(String),

    /// An npx launch with no package reference after the flags.
    #[error("npx launch is missing a package reference: {0}")]
    MissingPackage(String),

    /// An env launch whose first token is not a `KEY=VALUE` assignment.
    #[error("invalid environment assignment: {0}")]
    InvalidEnvAssignment(String),
}

/// Parse a pasted command line into a registry record.
///
/// Pure function: no partial record is ever produced on failure.
pub fn parse_command(raw: &str) -> Result<McpRecord, ParseError> {
    let input = strip_prefix(raw.trim());

    let (name_part, launch_part) =
        split_on_separator(input).ok_or_else(|| ParseError::MissingSeparator(input.to_string()))?;

    let name = name_part.replace('"', "").trim().to_string();
    if name.is_empty() {
        return Err(ParseError::EmptyName(input.to_string()));
    }

    let (keyword, rest) = next_token(launch_part);
    let (kind, target, extra_args) = match keyword {
        "npx" => parse_npx_launch(rest)?,
        "env" => parse_env_launch(rest)?,
        other => return Err(ParseError::UnknownLaunchType(other.to_string())),
    };

    Ok(McpRecord {
        name,
        kind,
        target: target.trim().to_string(),
        extra_args: extra_args.trim().to_string(),
    })
}

/// Strip the optional `claude mcp add ` prefix (exact, case-sensitive).
fn strip_prefix(input: &str) -> &str {
    match input.strip_prefix(COMMAND_PREFIX) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => input,
    }
}

/// Split on the first `--` token that is surrounded by whitespace.
///
/// A `--` embedded in another token (`my--server`) does not separate.
fn split_on_separator(input: &str) -> Option<(&str, &str)> {
    for (idx, _) in input.match_indices("--") {
        let before_ok = input[..idx].ends_with(char::is_whitespace);
        let after = &input[idx + 2..];
        let after_ok = after.starts_with(char::is_whitespace);
        if before_ok && after_ok {
            return Some((&input[..idx], after.trim_start()));
        }
    }
    None
}

/// Take the next whitespace-delimited token, returning it and the remainder.
fn next_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(idx) => (&input[..idx], input[idx..].trim_start()),
        None => (input, ""),
    }
}

/// `npx [-y] <package> [args...]`: the package token loses a single
/// leading `@`, everything after it is opaque trailing arguments.
fn parse_npx_launch(rest: &str) -> Result<(LaunchKind, String, String), ParseError> {
    let rest = match next_token(rest) {
        ("-y", remainder) => remainder,
        _ => rest,
    };

    let (package, extra_args) = next_token(rest);
    if package.is_empty() {
        return Err(ParseError::MissingPackage(rest.to_string()));
    }
    let package = package.strip_prefix('@').unwrap_or(package);

    Ok((LaunchKind::Npx, package.to_string(), extra_args.to_string()))
}

/// `env KEY=VALUE [args...]`: the whole assignment token is the target.
///
/// The assignment is the first whitespace-delimited token; the key is
/// everything before its first `=`, the value the non-empty run after it.
fn parse_env_launch(rest: &str) -> Result<(LaunchKind, String, String), ParseError> {
    let (assignment, extra_args) = next_token(rest);

    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidEnvAssignment(rest.to_string()))?;
    if key.is_empty() || value.is_empty() {
        return Err(ParseError::InvalidEnvAssignment(rest.to_string()));
    }

    Ok((
        LaunchKind::Env,
        assignment.to_string(),
        extra_args.to_string(),
    ))
}
