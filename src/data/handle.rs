use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::Result;

use super::loader::load_file;
use super::model::Dataset;

/// Read-only dataset loaded on first access and shared for the rest of the
/// process. A failed load leaves the handle empty so the next `get` retries.
#[derive(Debug)]
pub struct DatasetHandle {
    path: PathBuf,
    cell: OnceLock<Arc<Dataset>>,
}

impl DatasetHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Result<Arc<Dataset>> {
        if let Some(dataset) = self.cell.get() {
            return Ok(Arc::clone(dataset));
        }
        let dataset = load_file(&self.path)?;
        Ok(Arc::clone(self.cell.get_or_init(|| Arc::new(dataset))))
    }
}
