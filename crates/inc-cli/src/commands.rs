use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use inc_chart::{ChartOptions, render_all};
use inc_ingest::{load_raw_records, write_clean_csv, write_clean_csv_path};
use inc_model::NormalizationOptions;
use inc_normalization::{Normalized, normalize};
use inc_report::{Analysis, ReportOptions, write_json_report, write_table_report};

use crate::cli::{AnalyzeArgs, CleanArgs, ReportFormatArg};

/// Everything an `analyze` run produced.
#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub normalized: Normalized,
    pub analysis: Analysis,
    /// Written chart files, empty with `--no-charts`.
    pub charts: Vec<PathBuf>,
}

/// Clean the input, write the report to `out`, then render charts.
pub fn run_analyze<W: Write>(args: &AnalyzeArgs, out: &mut W) -> Result<AnalyzeOutcome> {
    let span = info_span!("analyze", input = %args.input.display());
    let _guard = span.enter();

    let normalized = load_and_normalize(&args.input, args.strict_revenue)?;
    if let Some(path) = &args.export {
        write_clean_csv_path(&normalized.dataset, path)
            .with_context(|| format!("export clean table to {}", path.display()))?;
    }

    let analysis = info_span!("report").in_scope(|| {
        Analysis::compute(&normalized.dataset, &ReportOptions { top_n: args.top })
    });
    match args.format {
        ReportFormatArg::Table => write_table_report(out, &analysis, &normalized.summary)
            .context("write report")?,
        ReportFormatArg::Json => write_json_report(out, &analysis, &normalized.summary)?,
    }
    out.flush().context("write report")?;

    let charts = if args.no_charts {
        Vec::new()
    } else {
        let options = args
            .chart_dir
            .clone()
            .map_or_else(|| ChartOptions::beside(&args.input), ChartOptions::new);
        info_span!("charts", dir = %options.output_dir.display())
            .in_scope(|| render_all(&normalized.dataset, &analysis, &options))?
    };

    Ok(AnalyzeOutcome {
        normalized,
        analysis,
        charts,
    })
}

/// Clean the input and write it to `--output`, or to `out` when no path is given.
pub fn run_clean<W: Write>(args: &CleanArgs, out: &mut W) -> Result<Normalized> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();

    let normalized = load_and_normalize(&args.input, args.strict_revenue)?;
    match &args.output {
        Some(path) => write_clean_csv_path(&normalized.dataset, path)
            .with_context(|| format!("write clean table to {}", path.display()))?,
        None => write_clean_csv(&normalized.dataset, out).context("write clean table")?,
    }
    Ok(normalized)
}

fn load_and_normalize(input: &Path, strict_revenue: bool) -> Result<Normalized> {
    let records = info_span!("ingest")
        .in_scope(|| load_raw_records(input))
        .context("read input table")?;
    let options = if strict_revenue {
        NormalizationOptions::strict()
    } else {
        NormalizationOptions::default()
    };
    let normalized = info_span!("normalize")
        .in_scope(|| normalize(&records, &options))
        .context("normalize records")?;
    info!(
        rows = normalized.dataset.len(),
        dropped = normalized.summary.dropped_rows(),
        "clean table ready"
    );
    Ok(normalized)
}
