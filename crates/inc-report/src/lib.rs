pub mod analysis;
pub mod json;
pub mod table;

pub use analysis::{
    Analysis, CORRELATION_COLUMNS, ColumnSummary, DESCRIBE_COLUMNS, MASKED_CORRELATION_COLUMNS,
    MissingCount, PAIRPLOT_COLUMNS, ReportOptions, correlation_matrix,
};
pub use json::{JsonReport, write_json_report};
pub use table::{apply_table_style, format_value, summary_lines, write_table_report};
