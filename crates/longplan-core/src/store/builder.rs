//! Builder for creating and configuring PlanStore instances.

use std::path::{Path, PathBuf};

use super::PlanStore;
use crate::error::{LongPlanError, Result};

/// File name used under the XDG data directory.
pub const DEFAULT_DATA_FILE: &str = "plan_data.json";

/// Builder for creating and configuring PlanStore instances.
#[derive(Debug, Clone, Default)]
pub struct PlanStoreBuilder {
    data_file: Option<PathBuf>,
}

impl PlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { data_file: None }
    }

    /// Sets a custom plan file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/longplan/plan_data.json` or
    /// `~/.local/share/longplan/plan_data.json`
    pub fn with_data_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store.
    ///
    /// # Errors
    ///
    /// Returns `LongPlanError::XdgDirectory` if no data directory can be
    /// determined, and `LongPlanError::FileSystem` if the parent directory
    /// cannot be created.
    pub fn build(self) -> Result<PlanStore> {
        let path = match self.data_file {
            Some(path) => path,
            None => Self::default_data_file()?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| LongPlanError::file_system(parent, e))?;
        }

        Ok(PlanStore::new(path))
    }

    /// Returns the default plan file path following XDG Base Directory
    /// specification.
    fn default_data_file() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("longplan")
            .place_data_file(DEFAULT_DATA_FILE)
            .map_err(|e| LongPlanError::XdgDirectory(e.to_string()))
    }
}
