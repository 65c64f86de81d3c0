//! JSON file storage for the single live plan.
//!
//! The store holds at most one plan. Every mutation is followed by a full
//! [`PlanStore::save`]; the regenerate flow calls [`PlanStore::clear`].
//! Unreadable or invalid files load as "no plan" rather than as an error.
//!
//! ```rust
//! use longplan_core::{generator, models::Duration, PlanStoreBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let store = PlanStoreBuilder::new()
//!     .with_data_file(Some(dir.path().join("plan.json")))
//!     .build()?;
//!
//! let mut plan = generator::generate("영어 공부", Duration::ThreeMonths, 5);
//! store.save(&plan)?;
//!
//! plan.complete_current();
//! store.save(&plan)?;
//!
//! assert_eq!(store.load()?, Some(plan));
//! # Ok(())
//! # }
//! ```

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};
use tempfile::NamedTempFile;

pub mod builder;

pub use builder::PlanStoreBuilder;

use crate::{
    error::{IoResultExt, LongPlanError, Result},
    models::Plan,
    record::{self, Decoded},
};

/// File-backed plan storage.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Creates a store over the given file path.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a plan file exists.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Loads the stored plan.
    ///
    /// Returns `Ok(None)` when no file exists or when its content does not
    /// decode to a valid plan.
    ///
    /// # Errors
    ///
    /// Returns `LongPlanError::FileSystem` if the file exists but cannot be
    /// read.
    pub fn load(&self) -> Result<Option<Plan>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Ignoring non UTF-8 plan file {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(LongPlanError::file_system(&self.path, e)),
        };

        match record::decode(&content) {
            Decoded::Plan(plan) => {
                debug!("loaded plan {} from {}", plan.id, self.path.display());
                Ok(Some(plan))
            }
            Decoded::Absent => Ok(None),
            Decoded::Invalid(reason) => {
                warn!(
                    "Ignoring invalid plan file {}: {reason}",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    /// Writes the whole plan, replacing any previous file atomically.
    ///
    /// # Errors
    ///
    /// Returns `LongPlanError::Serialization` if encoding fails and
    /// `LongPlanError::FileSystem` if the file cannot be written.
    pub fn save(&self, plan: &Plan) -> Result<()> {
        let json = record::encode(plan)?;
        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        fs::create_dir_all(dir).fs_context(dir)?;
        let mut file = NamedTempFile::new_in(dir).fs_context(dir)?;
        file.write_all(json.as_bytes()).fs_context(file.path())?;
        file.write_all(b"\n").fs_context(file.path())?;
        file.persist(&self.path)
            .map_err(|e| LongPlanError::file_system(&self.path, e.error))?;

        debug!("saved plan {} to {}", plan.id, self.path.display());
        Ok(())
    }

    /// Deletes the stored plan. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns `LongPlanError::FileSystem` if an existing file cannot be
    /// removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("cleared plan file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LongPlanError::file_system(&self.path, e)),
        }
    }
}
