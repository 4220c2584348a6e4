use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::error::DataError;
use super::filter::FilteredView;
use super::model::COLUMNS;

/// Write a view as CSV in the input column order.
///
/// The header row is always written, so an empty view still produces a
/// file that loads back (as zero records).
pub fn write_csv<W: Write>(writer: W, view: &FilteredView<'_>) -> Result<(), DataError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(COLUMNS)?;
    for record in view.iter() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serialize a view to CSV text (the download artifact).
pub fn to_csv_text(view: &FilteredView<'_>) -> Result<String, DataError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, view)?;
    Ok(String::from_utf8(buf)?)
}

/// Write a view to `path`, replacing any existing file.
pub fn write_file(path: &Path, view: &FilteredView<'_>) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(io::BufWriter::new(file), view)
        .with_context(|| format!("writing {}", path.display()))?;

    log::info!("Exported {} rows to {}", view.len(), path.display());
    Ok(())
}
