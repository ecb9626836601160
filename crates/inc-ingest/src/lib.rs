pub mod csv_table;
pub mod error;
pub mod export;
pub mod records;

pub use csv_table::{ColumnProfile, CsvTable, profile_columns, read_csv_table};
pub use error::{IngestError, Result};
pub use export::{write_clean_csv, write_clean_csv_path};
pub use records::{SourceColumns, load_raw_records, parse_f64, parse_year, raw_records_from_table};
