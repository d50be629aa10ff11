use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PartyKind – who went bankrupt: a person or a legal entity
// ---------------------------------------------------------------------------

/// Classification of the bankrupt party. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyKind {
    Individual,
    Legal,
}

impl PartyKind {
    /// All variants, in the order the statistics panels list them.
    pub const ALL: [PartyKind; 2] = [PartyKind::Legal, PartyKind::Individual];

    /// Wire name, as used in the CSV export and the JSON dump.
    pub fn as_str(self) -> &'static str {
        match self {
            PartyKind::Individual => "individual",
            PartyKind::Legal => "legal",
        }
    }

    /// Full label for the detail view and filter combos.
    pub fn label(self) -> &'static str {
        match self {
            PartyKind::Individual => "Физическое лицо",
            PartyKind::Legal => "Юридическое лицо",
        }
    }

    /// Abbreviated label for table cells.
    pub fn short_label(self) -> &'static str {
        match self {
            PartyKind::Individual => "Физ. лицо",
            PartyKind::Legal => "Юр. лицо",
        }
    }

    /// Plural label for the distribution panel.
    pub fn plural_label(self) -> &'static str {
        match self {
            PartyKind::Individual => "Физические лица",
            PartyKind::Legal => "Юридические лица",
        }
    }
}

// ---------------------------------------------------------------------------
// CaseStatus – lifecycle stage of a bankruptcy case
// ---------------------------------------------------------------------------

/// Lifecycle stage of a case. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Active,
    Completed,
    Suspended,
}

impl CaseStatus {
    /// All variants, in the order the statistics panels list them.
    pub const ALL: [CaseStatus; 3] = [
        CaseStatus::Active,
        CaseStatus::Completed,
        CaseStatus::Suspended,
    ];

    /// Wire name, as used in the CSV export and the JSON dump.
    pub fn as_str(self) -> &'static str {
        match self {
            CaseStatus::Active => "active",
            CaseStatus::Completed => "completed",
            CaseStatus::Suspended => "suspended",
        }
    }

    /// Badge label for table cells, the detail view and filter combos.
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Active => "Активное",
            CaseStatus::Completed => "Завершено",
            CaseStatus::Suspended => "Приостановлено",
        }
    }

    /// Plural label for the distribution panel.
    pub fn plural_label(self) -> &'static str {
        match self {
            CaseStatus::Active => "Активные",
            CaseStatus::Completed => "Завершенные",
            CaseStatus::Suspended => "Приостановленные",
        }
    }
}

// ---------------------------------------------------------------------------
// CaseRecord – one row of the registry
// ---------------------------------------------------------------------------

/// A single bankruptcy case entry.
///
/// Records are immutable for the lifetime of the process: the registry is
/// fixed at startup and offers no create/update/delete operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    /// Unique across the registry.
    pub id: u32,
    /// Organization or person display name.
    pub name: String,
    /// Taxpayer identifier; 10 digits for legal entities, 12 for individuals.
    pub tax_id: String,
    pub kind: PartyKind,
    pub status: CaseStatus,
    /// Claimed debt in whole rubles.
    pub debt_amount: u64,
    /// Court case identifier, free text.
    pub case_number: String,
    /// Date the proceedings opened.
    pub start_date: NaiveDate,
    pub region: String,
    /// Assigned case administrator (арбитражный управляющий).
    pub administrator: String,
}

// ---------------------------------------------------------------------------
// Registry – the complete dataset
// ---------------------------------------------------------------------------

/// The full record sequence, in registry order.
#[derive(Debug, Clone)]
pub struct Registry {
    records: Vec<CaseRecord>,
}

impl Registry {
    /// Wrap a record sequence. Ids must be unique; the bundled dataset is
    /// checked by the test suite.
    pub fn new(records: Vec<CaseRecord>) -> Self {
        Registry { records }
    }

    /// All records, in registry order.
    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    /// Record at a dataset index.
    pub fn get(&self, index: usize) -> Option<&CaseRecord> {
        self.records.get(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(CaseStatus::Active.as_str(), "active");
        assert_eq!(CaseStatus::Completed.as_str(), "completed");
        assert_eq!(CaseStatus::Suspended.as_str(), "suspended");
        assert_eq!(PartyKind::Legal.as_str(), "legal");
        assert_eq!(PartyKind::Individual.as_str(), "individual");
    }

    #[test]
    fn test_enum_serde_matches_wire_names() {
        for status in CaseStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: CaseStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
        for kind in PartyKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: PartyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_record_serializes_with_camel_case_fields() {
        let record = CaseRecord {
            id: 7,
            name: "Тестов Тест Тестович".to_string(),
            tax_id: "770000000000".to_string(),
            kind: PartyKind::Individual,
            status: CaseStatus::Active,
            debt_amount: 1_000,
            case_number: "А40-1/2024".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            region: "Москва".to_string(),
            administrator: "Иванов И. И.".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["taxId"], "770000000000");
        assert_eq!(json["debtAmount"], 1_000);
        assert_eq!(json["caseNumber"], "А40-1/2024");
        assert_eq!(json["startDate"], "2024-01-02");
        assert_eq!(json["kind"], "individual");
        assert_eq!(json["status"], "active");
    }
}
