use std::fs;
use std::path::PathBuf;

use inc_ingest::{IngestError, load_raw_records, parse_year, read_csv_table, write_clean_csv};
use inc_model::{CleanDataset, CleanRecord};
use tempfile::TempDir;

const HEADER: &str = "rank,name,state,revenue,growth_%,industry,workers,previous_workers,founded";

fn temp_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("companies.csv");
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn loads_typed_records() {
    let dir = TempDir::new().expect("temp dir");
    let contents = format!(
        "{HEADER}\n1,Acme,CA,$1.2 Billion,150.5,Software,100,80,2004\n\
         2,Beta,NY,,12,Health,,5,0\n"
    );
    let path = temp_csv(&dir, &contents);
    let records = load_raw_records(&path).expect("load records");
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.rank, Some(1));
    assert_eq!(first.name.as_deref(), Some("Acme"));
    assert_eq!(first.revenue.as_deref(), Some("$1.2 Billion"));
    assert_eq!(first.growth_pct, Some(150.5));
    assert_eq!(first.workers, Some(100.0));
    assert_eq!(first.previous_workers, Some(80.0));
    assert_eq!(first.founded, Some(2004));

    let second = &records[1];
    assert_eq!(second.revenue, None);
    assert_eq!(second.workers, None);
    assert_eq!(second.founded, Some(0));
    assert_eq!(second.city, None);
}

#[test]
fn non_numeric_cells_become_missing() {
    let dir = TempDir::new().expect("temp dir");
    let contents = format!("{HEADER}\n1,Acme,CA,$3 Million,n/a,Software,lots,80,2004.5\n");
    let path = temp_csv(&dir, &contents);
    let records = load_raw_records(&path).expect("load records");
    assert_eq!(records[0].growth_pct, None);
    assert_eq!(records[0].workers, None);
    assert_eq!(records[0].founded, None);
}

#[test]
fn missing_required_columns_are_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_csv(&dir, "name,revenue,workers\nAcme,$1 Million,3\n");
    let error = load_raw_records(&path).expect_err("schema error");
    match error {
        IngestError::MissingColumns { columns, .. } => {
            assert_eq!(
                columns,
                vec!["previous_workers", "founded", "growth_%", "industry", "state"]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let error = load_raw_records(&dir.path().join("absent.csv")).expect_err("open error");
    assert!(matches!(error, IngestError::Open { .. }));
}

#[test]
fn empty_file_has_no_header() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_csv(&dir, "\n\n");
    let error = read_csv_table(&path).expect_err("empty error");
    assert!(matches!(error, IngestError::Empty { .. }));
}

#[test]
fn header_cells_are_trimmed_and_matched_case_insensitively() {
    let dir = TempDir::new().expect("temp dir");
    let contents = "\u{feff}Revenue , Workers,previous_workers,FOUNDED,growth_%,industry,state\n\
                    $2 Thousand,1,1,1999,3,Retail,TX\n";
    let path = temp_csv(&dir, contents);
    let records = load_raw_records(&path).expect("load records");
    assert_eq!(records[0].revenue.as_deref(), Some("$2 Thousand"));
    assert_eq!(records[0].founded, Some(1999));
}

#[test]
fn parses_float_spelled_years() {
    assert_eq!(parse_year("2004.0"), Some(2004));
    assert_eq!(parse_year(" 1999 "), Some(1999));
    assert_eq!(parse_year("0"), Some(0));
    assert_eq!(parse_year("19x9"), None);
    assert_eq!(parse_year(""), None);
}

#[test]
fn fractional_years_are_invalid() {
    assert_eq!(parse_year("2004.5"), None);
    assert_eq!(parse_year("1999.999"), None);
    assert_eq!(parse_year("1e10"), None);
}

#[test]
fn exports_header_and_rows() {
    let dataset = CleanDataset::new(vec![CleanRecord {
        rank: Some(7),
        name: Some("Acme".to_string()),
        state: Some("CA".to_string()),
        city: None,
        metro: None,
        industry: Some("Software".to_string()),
        revenue: Some("$2 Million".to_string()),
        growth_pct: Some(10.0),
        workers: Some(4.0),
        previous_workers: None,
        founded: 2001,
        revenue_clean: 2e6,
        revenue_per_worker: Some(5e5),
        worker_growth: None,
    }]);
    let mut buffer = Vec::new();
    write_clean_csv(&dataset, &mut buffer).expect("write csv");
    let text = String::from_utf8(buffer).expect("utf8");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some(
            "rank,name,state,city,metro,industry,revenue,growth_%,workers,previous_workers,\
             founded,revenue_clean,revenue_per_worker,worker_growth"
        )
    );
    assert_eq!(
        lines.next(),
        Some("7,Acme,CA,,,Software,$2 Million,10.0,4.0,,2001,2000000.0,500000.0,")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn exports_header_for_empty_dataset() {
    let mut buffer = Vec::new();
    write_clean_csv(&CleanDataset::default(), &mut buffer).expect("write csv");
    let text = String::from_utf8(buffer).expect("utf8");
    assert_eq!(text.lines().count(), 1);
}
