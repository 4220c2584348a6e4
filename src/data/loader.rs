use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::error::DataError;
use super::model::{COLUMNS, Dataset, FoodRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the nutrition table from a comma-separated file.
///
/// Expected header (any column order, extra columns ignored):
///
/// ```text
/// food,la_cal,cal,percent,category
/// Corn Oil,60.0,90.0,66.7,High LA
/// ```
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let dataset = load_reader(file).with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} foods from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse records from any reader and build a [`Dataset`].
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let records = read_records(reader)?;
    let dataset = Dataset::from_records(records)?;

    let report = dataset.report();
    if report.malformed_numeric > 0 {
        log::warn!(
            "{} of {} rows have missing or malformed numbers and never match a range",
            report.malformed_numeric,
            report.rows
        );
    }
    if report.unknown_category > 0 {
        log::warn!("{} rows have no recognised category", report.unknown_category);
    }
    if report.missing_food > 0 {
        log::warn!("{} rows have no food name", report.missing_food);
    }
    Ok(dataset)
}

/// Parse CSV text (e.g. an earlier export) back into records.
pub fn parse_text(text: &str) -> Result<Vec<FoodRecord>, DataError> {
    read_records(text.as_bytes())
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Read every row. Bad cells become `None` on the record; only structural
/// problems (I/O, missing columns, broken quoting) are errors.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<FoodRecord>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?;
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for result in reader.deserialize::<FoodRecord>() {
        let mut record = result?;
        record.normalize();
        records.push(record);
    }
    Ok(records)
}
