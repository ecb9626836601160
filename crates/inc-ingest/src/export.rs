use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use inc_model::{CLEAN_COLUMNS, CleanDataset};
use tracing::info;

use crate::error::Result;

/// Write the clean table as CSV, header first even when there are no rows.
pub fn write_clean_csv<W: Write>(dataset: &CleanDataset, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(CLEAN_COLUMNS.iter().map(|column| column.name()))?;
    for record in dataset {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_clean_csv_path(dataset: &CleanDataset, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_clean_csv(dataset, file)?;
    info!(path = %path.display(), rows = dataset.len(), "wrote clean table");
    Ok(())
}
