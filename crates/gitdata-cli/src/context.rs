//! Invocation context
//!
//! Everything a command needs: the repository directory exactly as given,
//! the provider config, and an inspector.

use std::path::{Path, PathBuf};

use gitdata_core::Inspector;
use gitdata_provider::{DataSource, ProviderConfig};
use serde_json::Value;

use crate::error::{CliError, Result};

#[derive(Debug, Clone)]
pub struct Context {
    directory: PathBuf,
    config: ProviderConfig,
    inspector: Inspector,
}

impl Context {
    pub fn new(directory: PathBuf, config: ProviderConfig) -> Self {
        Self {
            directory,
            config,
            inspector: Inspector::new(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    /// The `directory` argument every data source requires.
    pub fn directory_argument(&self) -> Value {
        Value::String(self.directory.to_string_lossy().into_owned())
    }

    /// Run a data source read, turning diagnostics into an error.
    pub fn read(&self, data_source: DataSource, arguments: Value) -> Result<Value> {
        tracing::debug!(data_source = data_source.name(), %arguments, "Running data source");
        data_source
            .read(&self.inspector, &arguments, &self.config)
            .map_err(CliError::Diagnostics)
    }
}
