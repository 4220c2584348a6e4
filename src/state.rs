use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::data::export;
use crate::data::filter::{FilterCriteria, FilteredView, filtered_indices};
use crate::data::handle::DatasetHandle;
use crate::data::loader::load_file;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file loads).
    pub dataset: Option<Arc<Dataset>>,

    /// File the dataset came from, for the status line.
    pub source_path: Option<PathBuf>,

    /// Current filter inputs.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and reset filters to its full ranges.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>, source: Option<PathBuf>) {
        self.criteria = dataset.default_criteria();
        self.visible_indices = filtered_indices(dataset.records(), &self.criteria);
        self.dataset = Some(dataset);
        self.source_path = source;
        self.status_message = None;
    }

    /// Load a file, replacing the current dataset on success.
    pub fn load_path(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => self.set_dataset(Arc::new(dataset), Some(path.to_path_buf())),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Take the dataset behind `handle`, loading it if needed.
    ///
    /// Returns whether a dataset came through. On failure the error is shown
    /// and nothing is cached, so calling again retries the load.
    pub fn load_from_handle(&mut self, handle: &DatasetHandle) -> bool {
        match handle.get() {
            Ok(dataset) => {
                self.set_dataset(dataset, Some(handle.path().to_path_buf()));
                true
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", handle.path().display());
                self.status_message = Some(format!("Error: {e:#}"));
                false
            }
        }
    }

    /// Replace the criteria; re-filters only when something changed.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.refilter();
        }
    }

    /// Back to category All, full ranges, no query.
    pub fn reset_filters(&mut self) {
        if let Some(ds) = &self.dataset {
            let defaults = ds.default_criteria();
            self.set_criteria(defaults);
        }
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds.records(), &self.criteria);
        }
    }

    /// One full filter pass with arbitrary criteria.
    pub fn evaluate(&self, criteria: &FilterCriteria) -> Option<FilteredView<'_>> {
        self.dataset.as_deref().map(|ds| ds.evaluate(criteria))
    }

    /// View of the rows currently on screen.
    pub fn current_view(&self) -> Option<FilteredView<'_>> {
        self.dataset
            .as_deref()
            .map(|ds| FilteredView::from_indices(ds.records(), &self.visible_indices))
    }

    /// Write the current view to `path`, returning the number of rows written.
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let view = self
            .current_view()
            .ok_or_else(|| anyhow::anyhow!("no dataset loaded"))?;
        export::write_file(path, &view)?;
        Ok(view.len())
    }
}
