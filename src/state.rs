use crate::data::dataset::bundled_registry;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::model::{CaseRecord, Registry};
use crate::data::stats::{summarize, Summary};

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

/// Outcome message shown in the top bar until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The registry. Fixed for the lifetime of the process.
    pub registry: Registry,

    /// Current filter controls.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current criteria (cached).
    pub visible: Vec<usize>,

    /// Registry index of the record opened in the detail view.
    pub selected: Option<usize>,

    /// Export outcome shown in the top bar.
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(bundled_registry())
    }
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        let visible = (0..registry.len()).collect();
        AppState {
            registry,
            criteria: FilterCriteria::default(),
            visible,
            selected: None,
            notice: None,
        }
    }

    /// Recompute `visible` after a criteria change.
    ///
    /// The selection is left alone: the detail view shows a registry record,
    /// not a row of the table, so filtering it out does not close it.
    pub fn refilter(&mut self) {
        self.visible = filtered_indices(&self.registry, &self.criteria);
    }

    /// Put all three filter controls back to neutral.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.refilter();
    }

    /// Open the detail view for a registry index.
    pub fn select(&mut self, index: usize) {
        if index < self.registry.len() {
            self.selected = Some(index);
        }
    }

    /// Close the detail view.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// The record behind the open detail view, if any.
    pub fn selected_record(&self) -> Option<&CaseRecord> {
        self.selected.and_then(|index| self.registry.get(index))
    }

    /// Records of the current view, in registry order.
    pub fn visible_records(&self) -> Vec<&CaseRecord> {
        self.visible
            .iter()
            .filter_map(|&index| self.registry.get(index))
            .collect()
    }

    /// Headline numbers for the current view.
    pub fn summary(&self) -> Summary {
        summarize(&self.registry, &self.visible)
    }
}
