//! Parsing of pasted `claude mcp add ...` command lines.
//!
//! A command line has the shape:
//!
//! ```text
//! [claude mcp add] <name> -- npx [-y] <package> [args...]
//! [claude mcp add] <name> -- env KEY=VALUE [args...]
//! ```
//!
//! The parser is a pure function over its input; every failure mode is a
//! named [`ParseError`] variant carrying the offending text.

mod parser;

pub use parser::{ParseError, parse_command};

#[cfg(test)]
mod tests;
