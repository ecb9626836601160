use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use inc_cli::cli::{AnalyzeArgs, CleanArgs, Cli, Command, ReportFormatArg};
use inc_cli::commands::{run_analyze, run_clean};
use inc_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

const HEADER: &str = "rank,name,state,city,metro,industry,revenue,growth_%,workers,previous_workers,founded";

fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("inc5000.csv");
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    fs::write(&path, text).expect("write csv");
    path
}

fn three_rows(dir: &Path) -> PathBuf {
    write_csv(
        dir,
        &[
            "1,Acme,CA,San Jose,,Software,$2 Million,150.5,4,2,2001",
            "2,Beta,TX,Austin,,Health,$5 Million,80,10,8,0",
            "3,Gamma,NY,New York,,Retail,N/A,40,7,5,2010",
        ],
    )
}

fn analyze_args(input: PathBuf) -> AnalyzeArgs {
    AnalyzeArgs {
        input,
        chart_dir: None,
        no_charts: true,
        format: ReportFormatArg::Table,
        top: 10,
        strict_revenue: false,
        export: None,
    }
}

#[test]
fn clean_keeps_only_complete_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = CleanArgs {
        input: three_rows(dir.path()),
        output: None,
        strict_revenue: false,
    };
    let mut out = Vec::new();
    let normalized = run_clean(&args, &mut out).expect("clean");

    assert_eq!(normalized.summary.input_rows, 3);
    assert_eq!(normalized.summary.kept_rows, 1);
    let csv = String::from_utf8(out).expect("utf8");
    insta::assert_snapshot!(csv.trim_end(), @r"
    rank,name,state,city,metro,industry,revenue,growth_%,workers,previous_workers,founded,revenue_clean,revenue_per_worker,worker_growth
    1,Acme,CA,San Jose,,Software,$2 Million,150.5,4.0,2.0,2001,2000000.0,500000.0,2.0
    ");
}

#[test]
fn clean_writes_to_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("clean.csv");
    let args = CleanArgs {
        input: three_rows(dir.path()),
        output: Some(output.clone()),
        strict_revenue: false,
    };
    let mut out = Vec::new();
    run_clean(&args, &mut out).expect("clean");

    assert!(out.is_empty());
    let text = fs::read_to_string(output).expect("read output");
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn analyze_prints_report_and_renders_charts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let export = dir.path().join("clean.csv");
    let args = AnalyzeArgs {
        no_charts: false,
        export: Some(export.clone()),
        ..analyze_args(three_rows(dir.path()))
    };
    let mut out = Vec::new();
    let outcome = run_analyze(&args, &mut out).expect("analyze");

    let report = String::from_utf8(out).expect("utf8");
    assert!(report.contains("Shape of dataset: (1, 14)"));
    assert!(report.contains("Dropped (missing founded year): 1"));
    assert_eq!(outcome.charts.len(), 6);
    assert!(outcome.charts.iter().all(|path| path.starts_with(dir.path().join("charts"))));
    assert!(dir.path().join("charts/dashboard.svg").is_file());
    assert!(export.is_file());
}

#[test]
fn analyze_renders_charts_when_revenue_overflows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_csv(
        dir.path(),
        &[
            "1,Acme,CA,San Jose,,Software,$2 Million,150.5,4,2,2001",
            "2,Huge,TX,Austin,,Health,$1e300 Billion,80,10,8,2003",
            "3,Gamma,NY,New York,,Retail,$7 Million,40,7,5,2010",
        ],
    );
    let args = AnalyzeArgs {
        no_charts: false,
        ..analyze_args(input)
    };
    let outcome = run_analyze(&args, &mut Vec::new()).expect("analyze");

    assert_eq!(outcome.normalized.summary.revenue_errors, 1);
    assert_eq!(outcome.normalized.summary.kept_rows, 2);
    assert!(
        outcome
            .normalized
            .dataset
            .records()
            .iter()
            .all(|record| record.revenue_clean.is_finite())
    );
    assert_eq!(outcome.charts.len(), 6);
    assert!(outcome.charts.iter().all(|path| path.is_file()));
}

#[test]
fn analyze_json_report_is_machine_readable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = AnalyzeArgs {
        format: ReportFormatArg::Json,
        ..analyze_args(three_rows(dir.path()))
    };
    let mut out = Vec::new();
    let outcome = run_analyze(&args, &mut out).expect("analyze");

    let report = String::from_utf8(out).expect("utf8");
    assert!(report.trim_start().starts_with('{'));
    assert!(report.contains("\"kept_rows\": 1"));
    assert!(outcome.charts.is_empty());
    assert!(!dir.path().join("charts").exists());
}

#[test]
fn strict_revenue_aborts_on_bad_number() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_csv(
        dir.path(),
        &[
            "1,Acme,CA,,,Software,$2 Million,10,4,2,2001",
            "2,Beta,TX,,,Health,$abc Million,10,4,2,2005",
        ],
    );

    let lenient = run_clean(
        &CleanArgs {
            input: input.clone(),
            output: None,
            strict_revenue: false,
        },
        &mut Vec::new(),
    )
    .expect("lenient clean");
    assert_eq!(lenient.summary.revenue_errors, 1);
    assert_eq!(lenient.summary.kept_rows, 1);

    let error = run_clean(
        &CleanArgs {
            input,
            output: None,
            strict_revenue: true,
        },
        &mut Vec::new(),
    )
    .expect_err("strict clean fails");
    let message = format!("{error:#}");
    assert!(message.starts_with("normalize records: row 2"), "{message}");
}

#[test]
fn missing_columns_are_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("partial.csv");
    fs::write(&path, "name,revenue,industry\nAcme,$1 Million,Software\n").expect("write");

    let error = run_analyze(&analyze_args(path), &mut Vec::new()).expect_err("missing columns");
    let message = format!("{error:#}");
    assert!(message.starts_with("read input table"), "{message}");
    assert!(message.contains("workers"), "{message}");
    assert!(message.contains("growth_%"), "{message}");
}

#[test]
fn cli_defaults_and_log_precedence() {
    let cli = Cli::try_parse_from(["inc-insights", "analyze", "data.csv"]).expect("parse");
    let Command::Analyze(args) = &cli.command else {
        panic!("expected analyze");
    };
    assert_eq!(args.top, 10);
    assert_eq!(args.format, ReportFormatArg::Table);
    assert!(!args.no_charts);
    let config = cli.log_config();
    assert!(config.use_env_filter);
    assert_eq!(config.level_filter, LevelFilter::WARN);
    assert!(!config.with_timestamps);

    let cli = Cli::try_parse_from([
        "inc-insights",
        "clean",
        "data.csv",
        "-v",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--log-timestamps",
    ])
    .expect("parse");
    let config = cli.log_config();
    assert!(!config.use_env_filter);
    assert_eq!(config.level_filter, LevelFilter::DEBUG);
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.with_timestamps);
}
