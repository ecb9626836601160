//! Per-row derived columns.

/// `revenue / workers`, undefined when either side is missing, workers is
/// zero, or the quotient is not finite.
pub fn revenue_per_worker(revenue: Option<f64>, workers: Option<f64>) -> Option<f64> {
    let (revenue, workers) = (revenue?, workers?);
    if workers == 0.0 {
        return None;
    }
    Some(revenue / workers).filter(|value| value.is_finite())
}

/// `workers - previous_workers`, undefined when either side is missing.
pub fn worker_growth(workers: Option<f64>, previous_workers: Option<f64>) -> Option<f64> {
    Some(workers? - previous_workers?).filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_revenue_by_workers() {
        assert_eq!(revenue_per_worker(Some(1e6), Some(4.0)), Some(250_000.0));
    }

    #[test]
    fn zero_workers_is_undefined() {
        assert_eq!(revenue_per_worker(Some(1e6), Some(0.0)), None);
        assert_eq!(revenue_per_worker(Some(0.0), Some(0.0)), None);
    }

    #[test]
    fn missing_operand_is_undefined() {
        assert_eq!(revenue_per_worker(None, Some(3.0)), None);
        assert_eq!(revenue_per_worker(Some(3.0), None), None);
        assert_eq!(worker_growth(Some(3.0), None), None);
        assert_eq!(worker_growth(None, Some(3.0)), None);
    }

    #[test]
    fn growth_can_be_negative() {
        assert_eq!(worker_growth(Some(40.0), Some(55.0)), Some(-15.0));
    }
}
