//! CSV export of the current view.
//!
//! The output targets spreadsheet applications: a UTF-8 BOM so Excel picks
//! the right encoding for Cyrillic text, and every field quoted so names
//! containing commas or quotation marks survive the round trip.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::data::model::CaseRecord;

/// Column headers, in the fixed export order.
pub const CSV_HEADERS: [&str; 7] = [
    "Название/ФИО",
    "ИНН",
    "Номер дела",
    "Статус",
    "Сумма долга",
    "Дата начала",
    "Регион",
];

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize `records` to CSV bytes, BOM included.
///
/// The row order is the caller's; export preserves the visible view as-is.
pub fn csv_bytes(records: &[&CaseRecord]) -> Result<Vec<u8>, ExportError> {
    let mut out = Vec::from(UTF8_BOM);
    {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(&mut out);
        writer.write_record(CSV_HEADERS)?;
        for record in records {
            let debt = record.debt_amount.to_string();
            let date = record.start_date.to_string();
            writer.write_record([
                record.name.as_str(),
                record.tax_id.as_str(),
                record.case_number.as_str(),
                record.status.as_str(),
                debt.as_str(),
                date.as_str(),
                record.region.as_str(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(out)
}

/// Write `records` as CSV to `path`. Returns the number of exported rows.
pub fn write_csv(path: &Path, records: &[&CaseRecord]) -> Result<usize, ExportError> {
    let bytes = csv_bytes(records)?;
    fs::write(path, &bytes)?;
    Ok(records.len())
}

/// Suggested export file name, stamped with epoch milliseconds.
pub fn file_name(at: DateTime<Utc>) -> String {
    format!("bankrupts_{}.csv", at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::bundled_registry;

    fn export_text(records: &[&CaseRecord]) -> String {
        let bytes = csv_bytes(records).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM.as_slice());
        String::from_utf8(bytes[3..].to_vec()).unwrap()
    }

    #[test]
    fn test_export_starts_with_utf8_bom() {
        let bytes = csv_bytes(&[]).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn test_header_row_is_fully_quoted() {
        let text = export_text(&[]);
        assert_eq!(
            text.lines().next().unwrap(),
            "\"Название/ФИО\",\"ИНН\",\"Номер дела\",\"Статус\",\"Сумма долга\",\"Дата начала\",\"Регион\""
        );
    }

    #[test]
    fn test_empty_view_exports_header_only() {
        let text = export_text(&[]);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_every_visible_record_becomes_one_row() {
        let registry = bundled_registry();
        let records: Vec<&CaseRecord> = registry.records().iter().collect();
        let text = export_text(&records);
        assert_eq!(text.lines().count(), 1 + registry.len());
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let registry = bundled_registry();
        let records: Vec<&CaseRecord> = registry.records().iter().collect();
        let text = export_text(&records);
        assert!(text.contains("\"ООО \"\"Строительная Компания Монолит\"\"\""));
    }

    #[test]
    fn test_data_row_layout() {
        let registry = bundled_registry();
        let records: Vec<&CaseRecord> = registry.records().iter().collect();
        let text = export_text(&records);
        assert_eq!(
            text.lines().nth(1).unwrap(),
            "\"ООО \"\"Строительная Компания Монолит\"\"\",\"7728123456\",\"А40-12345/2024\",\"active\",\"45000000\",\"2024-03-15\",\"Москва\""
        );
    }

    #[test]
    fn test_file_name_embeds_epoch_millis() {
        let at = DateTime::from_timestamp_millis(1_722_513_600_000).unwrap();
        assert_eq!(file_name(at), "bankrupts_1722513600000.csv");
    }

    #[test]
    fn test_write_csv_reports_row_count() {
        let registry = bundled_registry();
        let records: Vec<&CaseRecord> = registry.records().iter().collect();
        let path = std::env::temp_dir().join(format!("bankrupts_test_{}.csv", std::process::id()));

        let written = write_csv(&path, &records).unwrap();
        assert_eq!(written, registry.len());

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM.as_slice());
        fs::remove_file(&path).unwrap();
    }
}
