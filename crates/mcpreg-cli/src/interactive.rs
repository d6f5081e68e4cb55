//! Interactive flow for the add command.
//!
//! Prompts for a pasted MCP command, previews the parsed record, and
//! confirms before registering. Uses dialoguer for terminal UI prompts.

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use mcpreg_core::command::parse_command;
use mcpreg_core::config::McpRecord;
use mcpreg_core::prefs::PrefStore;

/// Interactive flow for collecting and confirming a command line.
pub struct AddFlow<'a> {
    /// Source of the recalled last command
    prefs: &'a PrefStore,
    /// Skip the confirmation prompt
    yes: bool,
    /// Theme for dialoguer prompts
    theme: ColorfulTheme,
}

impl<'a> AddFlow<'a> {
    pub fn new(prefs: &'a PrefStore, yes: bool) -> Self {
        Self {
            prefs,
            yes,
            theme: ColorfulTheme::default(),
        }
    }

    /// Run the flow and return the confirmed command line.
    ///
    /// Re-prompts until the input parses; the last registered command is
    /// offered as the initial text. Returns `None` if the user declines.
    pub fn collect(&self) -> Result<Option<String>> {
        self.print_header();

        let mut initial = self.prefs.last_command().unwrap_or_default();
        loop {
            let raw: String = Input::with_theme(&self.theme)
                .with_prompt("MCP command")
                .with_initial_text(initial.clone())
                .interact_text()?;

            let record = match parse_command(&raw) {
                Ok(record) => record,
                Err(err) => {
                    println!("{} {}", style("✗").red().bold(), err);
                    initial = raw;
                    continue;
                }
            };

            self.print_summary(&record);

            if self.yes {
                return Ok(Some(raw));
            }

            let confirmed = Confirm::with_theme(&self.theme)
                .with_prompt("Register this MCP server?")
                .default(true)
                .interact()?;

            return Ok(confirmed.then_some(raw));
        }
    }

    fn print_header(&self) {
        println!();
        println!("{}", style("  Register MCP Server").bold().cyan());
        println!();
    }

    fn print_summary(&self, record: &McpRecord) {
        println!();
        println!("{}", style("  Summary").bold());
        println!("  Name:    {}", style(&record.name).green());
        println!("  Type:    {}", style(record.kind.as_str()).green());
        println!("  Target:  {}", style(&record.target).green());
        if !record.extra_args.is_empty() {
            println!("  Args:    {}", style(&record.extra_args).green());
        }
        println!();
    }
}

/// Ask whether to run `mcp-manager add-all` now.
pub fn confirm_sync() -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Run mcp-manager add-all now?")
        .default(true)
        .interact()?;
    Ok(confirmed)
}
