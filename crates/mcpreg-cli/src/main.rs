//! Mcpreg - MCP registration manager
//!
//! Usage:
//!   mcpreg add 'claude mcp add supabase -- npx -y @supabase/mcp-server-supabase@latest'
//!   mcpreg add             # interactive prompt
//!   mcpreg add --last      # re-use the last registered command
//!   mcpreg list            # show registered servers
//!   mcpreg sync            # run mcp-manager add-all
//!   mcpreg path            # print the registry location

mod interactive;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcpreg_core::commands::{AddCommand, AddOptions, AddReport, ListCommand, SyncStatus};
use mcpreg_core::config::{ConfigStore, McpRecord};
use mcpreg_core::manager::ManagerClient;
use mcpreg_core::prefs::PrefStore;

use crate::interactive::AddFlow;

#[derive(Parser)]
#[command(name = "mcpreg")]
#[command(about = "MCP registration manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register an MCP server from a pasted `claude mcp add ...` command
    Add(AddArgs),

    /// List registered MCP servers
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Load the registry into Claude Code via `mcp-manager add-all`
    Sync,

    /// Print the registry file location
    Path,
}

#[derive(Args)]
struct AddArgs {
    /// The pasted command, quoted so the shell keeps the `--` separator
    /// (e.g. 'supabase -- npx -y @supabase/mcp'). Omit to be prompted.
    command: Option<String>,

    /// Re-use the last registered command
    #[arg(short, long)]
    last: bool,

    /// Skip the mcp-manager sync after registering
    #[arg(long)]
    no_sync: bool,

    /// Skip all confirmation prompts
    #[arg(short = 'y', long)]
    yes: bool,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcpreg=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    run_cli(cli.command)
}

fn run_cli(command: Commands) -> Result<()> {
    match command {
        Commands::Add(args) => run_add(args),
        Commands::List { format } => run_list(format),
        Commands::Sync => run_sync(),
        Commands::Path => {
            let store = ConfigStore::with_defaults()?;
            println!("{}", store.config_path().display());
            Ok(())
        }
    }
}

fn run_add(args: AddArgs) -> Result<()> {
    let store = ConfigStore::with_defaults()?;
    let prefs = PrefStore::with_defaults()?;
    let manager = ManagerClient::with_defaults()?;

    if !manager.is_installed() {
        eprintln!(
            "{} mcp-manager not found at {}",
            style("warning:").yellow().bold(),
            manager.binary().display()
        );
    }

    let raw = if args.last {
        prefs
            .last_command()
            .context("No cached command to re-use; run `mcpreg add <command>` first")?
    } else if let Some(raw) = args.command.clone() {
        raw
    } else {
        let flow = AddFlow::new(&prefs, args.yes);
        match flow.collect()? {
            Some(raw) => raw,
            None => {
                println!("Aborted.");
                return Ok(());
            }
        }
    };

    // With --yes the sync runs as part of the pipeline; otherwise it is
    // offered only after the record is persisted.
    let sync_now = args.yes && !args.no_sync && manager.is_installed();

    let command = AddCommand::new(store, prefs, manager);
    let report = command.execute(&AddOptions::new(raw).with_sync(sync_now))?;

    print_add_report(&report);

    match &report.sync {
        SyncStatus::Completed => {
            println!(
                "{} MCPs loaded into Claude Code",
                style("✓").green().bold()
            );
        }
        SyncStatus::Failed(reason) => {
            eprintln!("{} {}", style("warning:").yellow().bold(), reason);
        }
        SyncStatus::Skipped => {
            offer_sync(&args, command.manager())?;
        }
    }

    Ok(())
}

fn print_add_report(report: &AddReport) {
    println!(
        "{} Registered '{}' ({} {})",
        style("✓").green().bold(),
        style(&report.record.name).green(),
        report.record.kind.as_str(),
        report.record.target
    );
    println!("  Config: {}", report.config_path.display());
}

fn offer_sync(args: &AddArgs, manager: &ManagerClient) -> Result<()> {
    if args.no_sync || !manager.is_installed() {
        println!("Run 'mcp-manager add-all' to load it in Claude Code");
        return Ok(());
    }

    if !interactive::confirm_sync()? {
        println!("Run 'mcp-manager add-all' to load it in Claude Code");
        return Ok(());
    }

    match manager.sync_all() {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            println!(
                "{} MCPs loaded into Claude Code",
                style("✓").green().bold()
            );
        }
        Err(err) => {
            eprintln!("{} {err:#}", style("warning:").yellow().bold());
        }
    }
    Ok(())
}

fn run_list(format: OutputFormat) -> Result<()> {
    let records = ListCommand::with_defaults()?.execute()?;

    match format {
        OutputFormat::Table => print_mcp_table(&records),
        OutputFormat::Json => print_mcp_json(&records)?,
    }
    Ok(())
}

fn print_mcp_table(records: &[McpRecord]) {
    if records.is_empty() {
        println!("No MCP servers registered.");
        println!("Add one with: mcpreg add <command>");
        return;
    }

    println!("{:<20} {:<6} {:<45} Options", "Name", "Type", "Path");
    println!("{}", "-".repeat(80));

    for record in records {
        println!(
            "{:<20} {:<6} {:<45} {}",
            record.name,
            record.kind.as_str(),
            record.target,
            record.extra_args
        );
    }
}

fn print_mcp_json(records: &[McpRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

fn run_sync() -> Result<()> {
    let manager = ManagerClient::with_defaults()?;
    if !manager.is_installed() {
        anyhow::bail!(
            "mcp-manager not found at {}; install it first",
            manager.binary().display()
        );
    }

    let output = manager.sync_all()?;
    if !output.is_empty() {
        println!("{output}");
    }
    println!(
        "{} MCPs loaded into Claude Code",
        style("✓").green().bold()
    );
    Ok(())
}
