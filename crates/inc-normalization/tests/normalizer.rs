use inc_model::{DropReason, NormalizationOptions, RawRecord};
use inc_normalization::{NormalizeError, normalize, parse_revenue};
use proptest::prelude::*;

fn row(revenue: Option<&str>, workers: Option<f64>, founded: Option<i32>) -> RawRecord {
    RawRecord {
        name: Some(format!("{revenue:?}/{workers:?}/{founded:?}")),
        revenue: revenue.map(str::to_string),
        workers,
        previous_workers: Some(5.0),
        founded,
        growth_pct: Some(100.0),
        industry: Some("Software".to_string()),
        state: Some("CA".to_string()),
        ..RawRecord::default()
    }
}

#[test]
fn parses_documented_revenue_examples() {
    assert_eq!(parse_revenue(Some("$1.2 Billion")), Ok(Some(1.2e9)));
    assert_eq!(parse_revenue(Some("500 Thousand")), Ok(Some(5e5)));
    assert_eq!(parse_revenue(Some("2.5 Million")), Ok(Some(2.5e6)));
    assert_eq!(parse_revenue(None), Ok(None));
    assert_eq!(parse_revenue(Some("N/A")), Ok(None));
}

#[test]
fn bare_numbers_have_no_revenue() {
    assert_eq!(parse_revenue(Some("1500000")), Ok(None));
    assert_eq!(parse_revenue(Some("$1500000")), Ok(None));
}

#[test]
fn keeps_only_complete_rows() {
    let records = vec![
        row(Some("$1.2 Billion"), Some(100.0), Some(2004)),
        row(Some("$3 Million"), Some(10.0), Some(0)),
        row(Some("N/A"), Some(10.0), Some(1999)),
    ];
    let normalized = normalize(&records, &NormalizationOptions::default()).expect("normalize");
    let kept = normalized.dataset.records();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, records[0].name);
    assert_eq!(kept[0].revenue_clean, 1.2e9);
    assert_eq!(kept[0].founded, 2004);

    let summary = normalized.summary;
    assert_eq!(summary.input_rows, 3);
    assert_eq!(summary.kept_rows, 1);
    assert_eq!(summary.dropped.get(&DropReason::MissingFounded), Some(&1));
    assert_eq!(summary.dropped.get(&DropReason::MissingRevenue), Some(&1));
    assert_eq!(summary.founded_unknown, 1);
    assert_eq!(summary.revenue_unrecognized, 1);
}

#[test]
fn imputes_workers_before_deriving_columns() {
    let records = vec![
        row(Some("$1 Million"), Some(10.0), Some(2000)),
        row(Some("$2 Million"), None, Some(2001)),
        row(Some("$3 Million"), Some(30.0), Some(2002)),
    ];
    let normalized = normalize(&records, &NormalizationOptions::default()).expect("normalize");
    let second = &normalized.dataset.records()[1];
    assert_eq!(second.workers, Some(20.0));
    assert_eq!(second.revenue_per_worker, Some(100_000.0));
    assert_eq!(second.worker_growth, Some(15.0));
    assert_eq!(normalized.summary.workers_median, Some(20.0));
    assert_eq!(normalized.summary.workers_imputed, 1);
}

#[test]
fn median_includes_rows_that_are_later_dropped() {
    let records = vec![
        row(Some("$1 Million"), Some(10.0), Some(2000)),
        row(None, Some(100.0), Some(0)),
        row(Some("$1 Million"), None, Some(2000)),
    ];
    let normalized = normalize(&records, &NormalizationOptions::default()).expect("normalize");
    assert_eq!(normalized.dataset.len(), 2);
    assert_eq!(normalized.dataset.records()[1].workers, Some(55.0));
    assert_eq!(
        normalized.summary.dropped.get(&DropReason::MissingRevenueAndFounded),
        Some(&1)
    );
}

#[test]
fn zero_workers_leaves_revenue_per_worker_undefined() {
    let records = vec![row(Some("$4 Million"), Some(0.0), Some(2010))];
    let normalized = normalize(&records, &NormalizationOptions::default()).expect("normalize");
    let record = &normalized.dataset.records()[0];
    assert_eq!(record.revenue_per_worker, None);
    assert_eq!(record.worker_growth, Some(-5.0));
}

#[test]
fn lenient_policy_recovers_from_bad_revenue() {
    let records = vec![
        row(Some("$abc Million"), Some(3.0), Some(2010)),
        row(Some("$1 Thousand"), Some(1.0), Some(2010)),
    ];
    let normalized = normalize(&records, &NormalizationOptions::default()).expect("normalize");
    assert_eq!(normalized.dataset.len(), 1);
    assert_eq!(normalized.summary.revenue_errors, 1);
}

#[test]
fn silent_recovery_still_counts_errors() {
    let records = vec![
        row(Some("$abc Million"), Some(3.0), Some(2010)),
        row(Some("$1 Thousand"), Some(1.0), Some(2010)),
    ];
    let options = NormalizationOptions {
        warn_on_recovery: false,
        ..NormalizationOptions::default()
    };
    let normalized = normalize(&records, &options).expect("normalize");
    assert_eq!(normalized.dataset.len(), 1);
    assert_eq!(normalized.summary.revenue_errors, 1);
}

#[test]
fn strict_policy_propagates_bad_revenue() {
    let records = vec![
        row(Some("$1 Thousand"), Some(1.0), Some(2010)),
        row(Some("$abc Million"), Some(3.0), Some(2010)),
    ];
    let error = normalize(&records, &NormalizationOptions::strict()).expect_err("strict error");
    let NormalizeError::Revenue { row, .. } = error;
    assert_eq!(row, 2);
}

#[test]
fn revenue_that_overflows_once_scaled_is_dropped() {
    let records = vec![
        row(Some("$1e300 Billion"), Some(10.0), Some(2010)),
        row(Some("$2e3 Thousand"), Some(4.0), Some(2011)),
    ];
    let normalized = normalize(&records, &NormalizationOptions::default()).expect("normalize");
    assert_eq!(normalized.summary.revenue_errors, 1);
    assert_eq!(normalized.summary.dropped.get(&DropReason::MissingRevenue), Some(&1));
    let kept = normalized.dataset.records();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].revenue_clean, 2e6);
    assert!(kept.iter().all(|record| record.revenue_clean.is_finite()));

    let error = normalize(&records, &NormalizationOptions::strict()).expect_err("strict error");
    let NormalizeError::Revenue { row, .. } = error;
    assert_eq!(row, 1);
}

#[test]
fn empty_input_yields_empty_dataset() {
    let normalized = normalize(&[], &NormalizationOptions::default()).expect("normalize");
    assert!(normalized.dataset.is_empty());
    assert_eq!(normalized.summary.dropped_rows(), 0);
    assert_eq!(normalized.summary.workers_median, None);
}

fn revenue_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ $]{0,2}-?[0-9]{0,4}(\\.[0-9]{0,3})? ?(Billion|Million|Thousand)? ?",
        "\\$?[0-9]e[0-9]{1,3} (Billion|Million|Thousand)",
        "\\PC{0,16}",
    ]
}

proptest! {
    #[test]
    fn revenue_is_never_negative(text in revenue_text()) {
        if let Ok(Some(value)) = parse_revenue(Some(&text)) {
            prop_assert!(value >= 0.0);
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn clean_rows_always_carry_revenue_and_founded(
        rows in prop::collection::vec(
            (
                prop::option::of(revenue_text()),
                prop::option::of(0.0f64..10_000.0),
                prop::option::of(prop_oneof![Just(0i32), 1900i32..2020]),
            ),
            0..24,
        )
    ) {
        let records: Vec<RawRecord> = rows
            .iter()
            .map(|(revenue, workers, founded)| row(revenue.as_deref(), *workers, *founded))
            .collect();
        let normalized = normalize(&records, &NormalizationOptions::default()).expect("lenient normalize");
        prop_assert_eq!(
            normalized.summary.kept_rows + normalized.summary.dropped_rows(),
            records.len()
        );
        for record in normalized.dataset.records() {
            prop_assert!(record.revenue_clean >= 0.0);
            prop_assert!(record.revenue_clean.is_finite());
            prop_assert!(record.founded != 0);
            if let Some(per_worker) = record.revenue_per_worker {
                let workers = record.workers.expect("workers present when ratio defined");
                prop_assert!(workers != 0.0);
                prop_assert!((per_worker - record.revenue_clean / workers).abs() <= 1e-9 * per_worker.abs().max(1.0));
            }
        }
    }
}
