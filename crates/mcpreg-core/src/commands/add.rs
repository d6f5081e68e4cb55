//! Add command implementation.
//!
//! Orchestrates the full registration pipeline: parse the pasted command,
//! append to the registry (refusing duplicates), remember the command line,
//! and optionally propagate the registry via `mcp-manager add-all`.

use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::command::{ParseError, parse_command};
use crate::config::{ConfigStore, McpRecord, StoreError};
use crate::manager::ManagerClient;
use crate::prefs::PrefStore;

/// Options for the add command.
#[derive(Debug, Clone)]
pub struct AddOptions {
    /// The pasted command line
    pub raw: String,
    /// Run `mcp-manager add-all` after a successful append
    pub sync: bool,
    /// Cache the command line for later recall
    pub remember: bool,
}

impl AddOptions {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            sync: false,
            remember: true,
        }
    }

    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    pub fn with_remember(mut self, remember: bool) -> Self {
        self.remember = remember;
        self
    }
}

/// What happened to the post-append sync.
///
/// A failed sync is not an error of the add itself: the record is already
/// durably persisted by the time the sync runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// Sync was not requested
    Skipped,
    /// `mcp-manager add-all` completed
    Completed,
    /// Sync was requested but did not complete
    Failed(String),
}

/// Report from a successful add.
#[derive(Debug, Clone)]
pub struct AddReport {
    /// The record that was registered
    pub record: McpRecord,
    /// Where it was persisted
    pub config_path: PathBuf,
    /// Outcome of the post-append sync
    pub sync: SyncStatus,
}

/// Errors that abort an add before anything is persisted.
#[derive(Debug, Error)]
pub enum AddError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Add command orchestrator.
#[derive(Debug)]
pub struct AddCommand {
    store: ConfigStore,
    prefs: PrefStore,
    manager: ManagerClient,
}

impl AddCommand {
    /// Create a command over explicit services.
    pub fn new(store: ConfigStore, prefs: PrefStore, manager: ManagerClient) -> Self {
        Self {
            store,
            prefs,
            manager,
        }
    }

    /// Create a command over the default user paths.
    pub fn with_defaults() -> anyhow::Result<Self> {
        Ok(Self::new(
            ConfigStore::with_defaults()?,
            PrefStore::with_defaults()?,
            ManagerClient::with_defaults()?,
        ))
    }

    pub fn manager(&self) -> &ManagerClient {
        &self.manager
    }

    /// Run the pipeline. Parse and duplicate failures abort with nothing
    /// written; the command cache and sync run only after the append.
    pub fn execute(&self, options: &AddOptions) -> Result<AddReport, AddError> {
        let record = parse_command(&options.raw)?;
        self.store.append(record.clone())?;

        if options.remember {
            if let Err(err) = self.prefs.remember_command(options.raw.trim()) {
                warn!("could not cache last command: {err:#}");
            }
        }

        let sync = if options.sync {
            self.sync()
        } else {
            SyncStatus::Skipped
        };

        Ok(AddReport {
            record,
            config_path: self.store.config_path().to_path_buf(),
            sync,
        })
    }

    fn sync(&self) -> SyncStatus {
        if !self.manager.is_installed() {
            return SyncStatus::Failed(format!(
                "mcp-manager not found at {}",
                self.manager.binary().display()
            ));
        }
        match self.manager.sync_all() {
            Ok(_) => SyncStatus::Completed,
            Err(err) => SyncStatus::Failed(format!("{err:#}")),
        }
    }
}
