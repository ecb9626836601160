use std::io::{self, Write};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inc_model::DropReason;
use inc_normalization::NormalizationSummary;
use inc_stats::{Describe, ValueCount};

use crate::analysis::Analysis;

/// Plain-text lines describing what normalization did.
pub fn summary_lines(summary: &NormalizationSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Rows read: {}", summary.input_rows),
        format!("Rows kept: {}", summary.kept_rows),
    ];
    for reason in [
        DropReason::MissingRevenue,
        DropReason::MissingFounded,
        DropReason::MissingRevenueAndFounded,
    ] {
        let count = summary.dropped.get(&reason).copied().unwrap_or(0);
        if count > 0 {
            lines.push(format!("Dropped ({reason}): {count}"));
        }
    }
    match summary.workers_median {
        Some(median) => lines.push(format!(
            "Workers imputed: {} (median {})",
            summary.workers_imputed,
            format_value(median)
        )),
        None => lines.push("Workers imputed: 0 (no worker counts present)".to_string()),
    }
    lines.push(format!("Founded year unknown: {}", summary.founded_unknown));
    lines.push(format!(
        "Revenue without magnitude suffix: {}",
        summary.revenue_unrecognized
    ));
    if summary.revenue_errors > 0 {
        lines.push(format!("Revenue parse errors: {}", summary.revenue_errors));
    }
    lines
}

/// Format a statistic for display: fixed two decimals, scientific when large.
pub fn format_value(value: f64) -> String {
    if value != 0.0 && (value.abs() >= 1e7 || value.abs() < 1e-2) {
        format!("{value:.4e}")
    } else {
        format!("{value:.2}")
    }
}

/// Write the full console report.
pub fn write_table_report<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    summary: &NormalizationSummary,
) -> io::Result<()> {
    writeln!(out, "Normalization:")?;
    for line in summary_lines(summary) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Shape of dataset: ({}, {})",
        analysis.shape.0, analysis.shape.1
    )?;
    writeln!(out, "Columns: {}", analysis.columns.join(", "))?;

    writeln!(out)?;
    writeln!(out, "Missing values:")?;
    writeln!(out, "{}", missing_table(analysis))?;

    writeln!(out)?;
    writeln!(out, "Descriptive Statistics:")?;
    writeln!(out, "{}", describe_table(analysis))?;

    writeln!(out)?;
    writeln!(out, "Top {} Industries:", analysis.top_n)?;
    writeln!(out, "{}", counts_table("Industry", analysis.top_industries()))?;

    writeln!(out)?;
    writeln!(out, "Top {} States:", analysis.top_n)?;
    writeln!(out, "{}", counts_table("State", analysis.top_states()))?;

    writeln!(out)?;
    writeln!(out, "Average Growth by Founded Year:")?;
    writeln!(out, "{}", growth_table(analysis))?;

    writeln!(out)?;
    writeln!(out, "Correlation Matrix:")?;
    writeln!(out, "{}", correlation_table(analysis))?;
    Ok(())
}

fn missing_table(analysis: &Analysis) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for missing in &analysis.missing {
        let count = if missing.count > 0 {
            Cell::new(missing.count).fg(Color::Yellow)
        } else {
            dim_cell(missing.count)
        };
        table.add_row(vec![Cell::new(missing.column), count]);
    }
    table
}

fn describe_table(analysis: &Analysis) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(analysis.describe.iter().map(|summary| header_cell(summary.column)));
    table.set_header(header);
    apply_wide_table_style(&mut table);
    for idx in 1..=analysis.describe.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    let rows: [(&str, fn(&Describe) -> Option<f64>); 8] = [
        ("count", |d| Some(d.count as f64)),
        ("mean", |d| Some(d.mean)),
        ("std", |d| d.std),
        ("min", |d| Some(d.min)),
        ("25%", |d| Some(d.q25)),
        ("50%", |d| Some(d.median)),
        ("75%", |d| Some(d.q75)),
        ("max", |d| Some(d.max)),
    ];
    for (label, statistic) in rows {
        let mut row = vec![Cell::new(label).add_attribute(Attribute::Bold)];
        for summary in &analysis.describe {
            let value = summary.stats.as_ref().and_then(statistic);
            row.push(match value {
                Some(value) if label == "count" => Cell::new(value as usize),
                Some(value) => Cell::new(format_value(value)),
                None => dim_cell("-"),
            });
        }
        table.add_row(row);
    }
    table
}

fn counts_table(label: &str, counts: &[ValueCount]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Companies")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in counts {
        table.add_row(vec![Cell::new(&entry.value), Cell::new(entry.count)]);
    }
    table
}

fn growth_table(analysis: &Analysis) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Founded"), header_cell("Avg growth %")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (year, growth) in &analysis.growth_by_founded {
        table.add_row(vec![Cell::new(year), Cell::new(format!("{growth:.2}"))]);
    }
    table
}

fn correlation_table(analysis: &Analysis) -> Table {
    let matrix = &analysis.correlation;
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(matrix.columns.iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_wide_table_style(&mut table);
    for idx in 1..=matrix.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for (i, name) in matrix.columns.iter().enumerate() {
        let mut row = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        for j in 0..matrix.len() {
            row.push(match matrix.get(i, j) {
                Some(r) => correlation_cell(r),
                None => dim_cell("-"),
            });
        }
        table.add_row(row);
    }
    table
}

fn correlation_cell(r: f64) -> Cell {
    let cell = Cell::new(format!("{r:.3}"));
    if r >= 0.5 {
        cell.fg(Color::Green)
    } else if r <= -0.5 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
