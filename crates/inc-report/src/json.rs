use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use inc_normalization::NormalizationSummary;
use inc_stats::{CorrelationMatrix, ValueCount};
use serde::Serialize;

use crate::analysis::{Analysis, ColumnSummary, MissingCount};

/// Machine-readable form of the console report.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub normalization: &'a NormalizationSummary,
    pub shape: (usize, usize),
    pub columns: &'a [&'static str],
    pub missing: &'a [MissingCount],
    pub describe: &'a [ColumnSummary],
    pub top_industries: &'a [ValueCount],
    pub top_states: &'a [ValueCount],
    pub growth_by_founded: &'a BTreeMap<i32, f64>,
    pub correlation: &'a CorrelationMatrix,
}

impl<'a> JsonReport<'a> {
    pub fn new(analysis: &'a Analysis, summary: &'a NormalizationSummary) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            normalization: summary,
            shape: analysis.shape,
            columns: &analysis.columns,
            missing: &analysis.missing,
            describe: &analysis.describe,
            top_industries: analysis.top_industries(),
            top_states: analysis.top_states(),
            growth_by_founded: &analysis.growth_by_founded,
            correlation: &analysis.correlation,
        }
    }
}

pub fn write_json_report<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    summary: &NormalizationSummary,
) -> Result<()> {
    let report = JsonReport::new(analysis, summary);
    serde_json::to_writer_pretty(&mut *out, &report).context("serialize json report")?;
    writeln!(out).context("write json report")?;
    Ok(())
}
