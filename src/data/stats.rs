//! Aggregates shown in the summary cards and the distribution panels.

use crate::data::model::{CaseStatus, PartyKind, Registry};

// ---------------------------------------------------------------------------
// Summary – follows the filtered view
// ---------------------------------------------------------------------------

/// Headline numbers for the records currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Visible records.
    pub count: usize,
    /// Visible records with an active case.
    pub active_count: usize,
    /// Sum of visible debt, in whole rubles.
    pub total_debt: u64,
}

/// Aggregate the records selected by `indices`.
///
/// Out-of-range indices are skipped; the state layer only ever hands over
/// indices produced by [`filtered_indices`](crate::data::filter::filtered_indices).
pub fn summarize(registry: &Registry, indices: &[usize]) -> Summary {
    let mut summary = Summary::default();
    for record in indices.iter().filter_map(|&index| registry.get(index)) {
        summary.count += 1;
        if record.status == CaseStatus::Active {
            summary.active_count += 1;
        }
        summary.total_debt += record.debt_amount;
    }
    summary
}

// ---------------------------------------------------------------------------
// Shares – always over the full registry
// ---------------------------------------------------------------------------

/// One slice of a distribution: absolute count plus percentage of the whole
/// registry, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Share {
    pub count: usize,
    pub percentage: f64,
}

impl Share {
    fn of(count: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            (count as f64 * 1000.0 / total as f64).round() / 10.0
        };
        Share { count, percentage }
    }

    /// Fraction in `0.0..=1.0` for progress bars.
    pub fn fraction(self) -> f32 {
        (self.percentage / 100.0) as f32
    }
}

/// Distribution of case statuses over the whole registry.
///
/// Deliberately independent of the active filters: the panels describe the
/// registry, the summary cards describe the current view.
pub fn status_shares(registry: &Registry) -> [(CaseStatus, Share); 3] {
    CaseStatus::ALL.map(|status| {
        let count = registry
            .records()
            .iter()
            .filter(|record| record.status == status)
            .count();
        (status, Share::of(count, registry.len()))
    })
}

/// Distribution of party kinds over the whole registry.
pub fn kind_shares(registry: &Registry) -> [(PartyKind, Share); 2] {
    PartyKind::ALL.map(|kind| {
        let count = registry
            .records()
            .iter()
            .filter(|record| record.kind == kind)
            .count();
        (kind, Share::of(count, registry.len()))
    })
}

/// Mean debt over the whole registry, in rubles. Zero for an empty registry.
pub fn average_debt(registry: &Registry) -> f64 {
    if registry.is_empty() {
        return 0.0;
    }
    let total: u64 = registry.records().iter().map(|r| r.debt_amount).sum();
    total as f64 / registry.len() as f64
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::dataset::bundled_registry;
    use crate::data::filter::{filtered_indices, FilterCriteria};
    use crate::data::model::CaseRecord;

    fn small_record(id: u32, status: CaseStatus, kind: PartyKind, debt: u64) -> CaseRecord {
        CaseRecord {
            id,
            name: format!("Запись {id}"),
            tax_id: format!("77000000{id:04}"),
            kind,
            status,
            debt_amount: debt,
            case_number: format!("А40-{id}/2024"),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            region: "Москва".to_string(),
            administrator: "Иванов И. И.".to_string(),
        }
    }

    #[test]
    fn test_summary_over_full_registry() {
        let registry = bundled_registry();
        let all: Vec<usize> = (0..registry.len()).collect();
        let summary = summarize(&registry, &all);
        assert_eq!(summary.count, 8);
        assert_eq!(summary.active_count, 5);
        assert_eq!(summary.total_debt, 342_100_000);
    }

    #[test]
    fn test_summary_follows_filtered_view() {
        let registry = bundled_registry();
        let criteria = FilterCriteria {
            status: Some(CaseStatus::Active),
            ..FilterCriteria::default()
        };
        let indices = filtered_indices(&registry, &criteria);
        let summary = summarize(&registry, &indices);
        assert_eq!(summary.count, 5);
        assert_eq!(summary.active_count, 5);
        assert_eq!(summary.total_debt, 145_900_000);
    }

    #[test]
    fn test_summary_of_empty_view_is_zero() {
        let registry = bundled_registry();
        assert_eq!(summarize(&registry, &[]), Summary::default());
    }

    #[test]
    fn test_status_shares_cover_the_whole_registry() {
        let registry = bundled_registry();
        let [active, completed, suspended] = status_shares(&registry);

        assert_eq!(active.0, CaseStatus::Active);
        assert_eq!(active.1.count, 5);
        assert_eq!(active.1.percentage, 62.5);

        assert_eq!(completed.0, CaseStatus::Completed);
        assert_eq!(completed.1.count, 2);
        assert_eq!(completed.1.percentage, 25.0);

        assert_eq!(suspended.0, CaseStatus::Suspended);
        assert_eq!(suspended.1.count, 1);
        assert_eq!(suspended.1.percentage, 12.5);

        let total: usize = status_shares(&registry).iter().map(|(_, s)| s.count).sum();
        assert_eq!(total, registry.len());

        let percent_sum: f64 = status_shares(&registry)
            .iter()
            .map(|(_, s)| s.percentage)
            .sum();
        assert!((percent_sum - 100.0).abs() < 0.2);
    }

    #[test]
    fn test_kind_shares_cover_the_whole_registry() {
        let registry = bundled_registry();
        let [legal, individual] = kind_shares(&registry);

        assert_eq!(legal.0, PartyKind::Legal);
        assert_eq!(legal.1.count, 4);
        assert_eq!(legal.1.percentage, 50.0);

        assert_eq!(individual.0, PartyKind::Individual);
        assert_eq!(individual.1.count, 4);
        assert_eq!(individual.1.percentage, 50.0);
        assert_eq!(legal.1.percentage + individual.1.percentage, 100.0);
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        let registry = Registry::new(vec![
            small_record(1, CaseStatus::Active, PartyKind::Legal, 100),
            small_record(2, CaseStatus::Completed, PartyKind::Legal, 100),
            small_record(3, CaseStatus::Completed, PartyKind::Legal, 100),
        ]);
        let [active, completed, _] = status_shares(&registry);
        assert_eq!(active.1.percentage, 33.3);
        assert_eq!(completed.1.percentage, 66.7);
    }

    #[test]
    fn test_average_debt_over_full_registry() {
        let registry = bundled_registry();
        assert_eq!(average_debt(&registry), 42_762_500.0);
    }

    #[test]
    fn test_empty_registry_yields_zero_sentinels() {
        let registry = Registry::new(Vec::new());
        assert_eq!(average_debt(&registry), 0.0);
        for (_, share) in status_shares(&registry) {
            assert_eq!(share.count, 0);
            assert_eq!(share.percentage, 0.0);
        }
        for (_, share) in kind_shares(&registry) {
            assert_eq!(share.count, 0);
            assert_eq!(share.percentage, 0.0);
        }
    }

    #[test]
    fn test_share_fraction_for_progress_bars() {
        let registry = bundled_registry();
        let [active, _, _] = status_shares(&registry);
        assert!((active.1.fraction() - 0.625).abs() < 1e-6);
    }
}
