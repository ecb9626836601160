pub mod column;
pub mod dataset;
pub mod options;
pub mod record;

pub use column::{CLEAN_COLUMNS, Column, NumericColumn};
pub use dataset::CleanDataset;
pub use options::{NormalizationOptions, RevenuePolicy};
pub use record::{CleanRecord, DropReason, NormalizedRecord, RawRecord};

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(industry: &str, workers: Option<f64>) -> CleanRecord {
        CleanRecord {
            rank: None,
            name: Some("Acme".to_string()),
            city: None,
            metro: None,
            state: Some("CA".to_string()),
            industry: Some(industry.to_string()),
            revenue: Some("$1 Million".to_string()),
            growth_pct: Some(120.0),
            workers,
            previous_workers: None,
            founded: 2010,
            revenue_clean: 1e6,
            revenue_per_worker: workers.map(|w| 1e6 / w),
            worker_growth: None,
        }
    }

    #[test]
    fn dataset_shape_counts_clean_columns() {
        let dataset = CleanDataset::new(vec![clean("Software", Some(10.0))]);
        assert_eq!(dataset.shape(), (1, CLEAN_COLUMNS.len()));
    }

    #[test]
    fn missing_counts_follow_column_order() {
        let dataset = CleanDataset::new(vec![
            clean("Software", Some(10.0)),
            clean("Health", None),
        ]);
        let counts = dataset.missing_counts();
        let workers = counts
            .iter()
            .find(|(column, _)| *column == Column::Workers)
            .map(|(_, count)| *count);
        assert_eq!(workers, Some(1));
        let rank = counts
            .iter()
            .find(|(column, _)| *column == Column::Rank)
            .map(|(_, count)| *count);
        assert_eq!(rank, Some(2));
        assert_eq!(counts.len(), CLEAN_COLUMNS.len());
    }

    #[test]
    fn clean_record_serializes_with_source_header_names() {
        let json = serde_json::to_value(clean("Software", Some(4.0))).expect("serialize record");
        assert_eq!(json["growth_%"], 120.0);
        assert_eq!(json["revenue_per_worker"], 250000.0);
        assert!(json["worker_growth"].is_null());
    }
}
