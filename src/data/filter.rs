//! Record filtering. Criteria live in the UI state; the functions here are
//! pure so they can be tested without a window.

use crate::data::model::{CaseRecord, CaseStatus, PartyKind, Registry};

/// The three filter controls of the side panel.
///
/// `Default` is the neutral state: empty search, no status, no kind. A
/// neutral criteria set keeps every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Matched against name, tax id and case number.
    pub search: String,
    /// `None` keeps every status.
    pub status: Option<CaseStatus>,
    /// `None` keeps every kind.
    pub kind: Option<PartyKind>,
}

impl FilterCriteria {
    /// Whether any control deviates from the neutral state. Drives the
    /// visibility of the reset button.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status.is_some() || self.kind.is_some()
    }

    /// Whether a record passes all three controls.
    pub fn matches(&self, record: &CaseRecord) -> bool {
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if record.kind != kind {
                return false;
            }
        }
        self.matches_search(record)
    }

    fn matches_search(&self, record: &CaseRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.tax_id.contains(self.search.as_str())
            || record.case_number.to_lowercase().contains(&needle)
    }
}

/// Indices of the records passing `criteria`, in registry order.
///
/// Indices index into `registry.records()`; keeping indices instead of
/// clones lets the table, the summary cards and the export share one
/// filtered view without copying records every frame.
pub fn filtered_indices(registry: &Registry, criteria: &FilterCriteria) -> Vec<usize> {
    registry
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.matches(record))
        .map(|(index, _)| index)
        .collect()
}
