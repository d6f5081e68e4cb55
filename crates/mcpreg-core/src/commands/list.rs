//! List command implementation.

use crate::config::{ConfigStore, McpRecord, StoreError};

/// Read-side counterpart of add: the registered records in insertion order.
#[derive(Debug)]
pub struct ListCommand {
    store: ConfigStore,
}

impl ListCommand {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn with_defaults() -> anyhow::Result<Self> {
        Ok(Self::new(ConfigStore::with_defaults()?))
    }

    pub fn execute(&self) -> Result<Vec<McpRecord>, StoreError> {
        Ok(self.store.load()?.mcps)
    }
}
