//! Command-line dump of the bundled registry, for checking the export
//! output without opening the viewer.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;

use bankrot_registry::data::dataset::bundled_registry;
use bankrot_registry::data::export;
use bankrot_registry::data::model::CaseRecord;
use bankrot_registry::data::stats::summarize;

fn main() -> anyhow::Result<()> {
    let registry = bundled_registry();
    let records: Vec<&CaseRecord> = registry.records().iter().collect();

    let csv_path = export::file_name(Utc::now());
    let written = export::write_csv(Path::new(&csv_path), &records)
        .with_context(|| format!("writing {csv_path}"))?;

    let json_path = "registry.json";
    let json = serde_json::to_string_pretty(registry.records())?;
    fs::write(json_path, json).with_context(|| format!("writing {json_path}"))?;

    let all: Vec<usize> = (0..registry.len()).collect();
    let summary = summarize(&registry, &all);
    println!(
        "Wrote {written} records to {csv_path} and {json_path} (active: {}, total debt: {} rubles)",
        summary.active_count, summary.total_debt
    );
    Ok(())
}
