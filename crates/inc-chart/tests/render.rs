use std::fs;
use std::path::Path;

use inc_chart::{Chart, ChartOptions, render_all};
use inc_model::{CleanDataset, NormalizationOptions, RawRecord};
use inc_normalization::normalize;
use inc_report::{Analysis, ReportOptions};

fn company(
    industry: &str,
    state: &str,
    revenue: &str,
    workers: f64,
    founded: i32,
    growth: f64,
) -> RawRecord {
    RawRecord {
        name: Some(format!("{industry} {workers}")),
        revenue: Some(revenue.to_string()),
        workers: Some(workers),
        previous_workers: Some(workers / 2.0),
        founded: Some(founded),
        growth_pct: Some(growth),
        industry: Some(industry.to_string()),
        state: Some(state.to_string()),
        ..RawRecord::default()
    }
}

fn sample() -> CleanDataset {
    let industries = ["Software", "Health", "Retail", "Energy", "Media", "Travel"];
    let states = ["CA", "TX", "NY", "FL"];
    let records: Vec<RawRecord> = (0..40)
        .map(|idx| {
            let n = f64::from(idx);
            company(
                industries[idx as usize % industries.len()],
                states[idx as usize % states.len()],
                &format!("${} Million", 1.5 * n + 2.0),
                5.0 + 3.0 * n,
                1990 + idx % 12,
                40.0 + (n * 7.3) % 300.0,
            )
        })
        .collect();
    normalize(&records, &NormalizationOptions::default())
        .expect("normalize")
        .dataset
}

fn assert_svg(path: &Path) {
    let text = fs::read_to_string(path).expect("read chart");
    assert!(text.contains("<svg"), "{} is not an SVG", path.display());
}

#[test]
fn renders_every_chart_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dataset = sample();
    let analysis = Analysis::compute(&dataset, &ReportOptions::default());
    let options = ChartOptions::new(dir.path().join("charts"));

    let written = render_all(&dataset, &analysis, &options).expect("render");

    let names: Vec<&str> = written
        .iter()
        .filter_map(|path| path.file_name()?.to_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "dashboard.svg",
            "states.svg",
            "regression.svg",
            "correlation_masked.svg",
            "pairplot.svg",
            "boxplot.svg",
        ]
    );
    for path in &written {
        assert_svg(path);
    }
    let dashboard = fs::read_to_string(options.path_for(Chart::Dashboard)).expect("read");
    assert!(dashboard.contains("Top 10 Industries"));
    assert!(dashboard.contains("Software"));
}

#[test]
fn empty_dataset_renders_placeholders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dataset = CleanDataset::default();
    let analysis = Analysis::compute(&dataset, &ReportOptions::default());
    let options = ChartOptions::new(dir.path());

    let written = render_all(&dataset, &analysis, &options).expect("render");

    assert_eq!(written.len(), Chart::ALL.len());
    let states = fs::read_to_string(options.path_for(Chart::States)).expect("read");
    assert!(states.contains("no categories"));
}

#[test]
fn default_directory_sits_beside_the_input() {
    let options = ChartOptions::beside(Path::new("data/inc5000.csv"));
    assert_eq!(options.output_dir, Path::new("data/charts"));
    let options = ChartOptions::beside(Path::new("inc5000.csv"));
    assert_eq!(options.output_dir, Path::new("./charts"));
}
