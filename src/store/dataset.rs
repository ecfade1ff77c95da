//! Seed Dataset
//!
//! Loads the initial employee set. Seed records are trusted: fields are
//! coerced the same way request bodies are (string salaries, loose
//! `on_contract` flags) but salary bounds are not enforced.

use std::path::Path;

use tracing::info;

use crate::config::DatasetSource;
use crate::error::{Error, Result};
use crate::model::{Currency, Employee, EmployeeDraft};

const BUNDLED_DATASET: &str = include_str!("../../data/dataset.json");

/// The dataset shipped with the binary
pub fn default_dataset() -> Result<Vec<Employee>> {
    parse_dataset("<bundled>", BUNDLED_DATASET)
}

/// Resolve the configured seed into records
pub fn seed_records(source: &DatasetSource) -> Result<Vec<Employee>> {
    match source {
        DatasetSource::Bundled => default_dataset(),
        DatasetSource::File(path) => load_dataset(path),
        DatasetSource::Empty => Ok(Vec::new()),
    }
}

/// Load a JSON array of employee records from disk
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<Employee>> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|e| Error::dataset(&label, e))?;
    let records = parse_dataset(&label, &raw)?;
    info!("Loaded {} seed records from {}", records.len(), label);
    Ok(records)
}

pub fn parse_dataset(label: &str, raw: &str) -> Result<Vec<Employee>> {
    let drafts: Vec<EmployeeDraft> = serde_json::from_str(raw).map_err(|e| Error::dataset(label, e))?;

    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| coerce(draft).map_err(|msg| Error::dataset(label, format!("record {}: {}", index, msg))))
        .collect()
}

fn coerce(draft: EmployeeDraft) -> std::result::Result<Employee, String> {
    let currency = draft.currency.as_deref().unwrap_or("");
    let currency = currency
        .parse::<Currency>()
        .map_err(|_| format!("invalid currency: {}", if currency.is_empty() { "none" } else { currency }))?;

    Ok(Employee {
        salary: draft.salary(),
        on_contract: draft.on_contract(),
        currency,
        name: draft.name.unwrap_or_default(),
        department: draft.department.unwrap_or_default(),
        sub_department: draft.sub_department.unwrap_or_default(),
    })
}
