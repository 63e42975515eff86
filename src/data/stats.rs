// ---------------------------------------------------------------------------
// Aggregation primitives
// ---------------------------------------------------------------------------

/// Arithmetic mean. An empty input yields 0.0 rather than NaN, so reports
/// over an unloaded gradebook print a number instead of garbage. The same
/// convention holds for [`min`] and [`max`].
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Smallest value in the input, 0.0 when empty.
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Largest value in the input, 0.0 when empty.
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_is_sum_over_count() {
        let values = [90.0, 80.0, 70.0, 60.0];
        assert_eq!(mean(&values), 75.0);
        assert_eq!(mean(&[85.5]), 85.5);
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_min_max_empty_are_zero() {
        assert_eq!(min(&[]), 0.0);
        assert_eq!(max(&[]), 0.0);
    }

    #[test]
    fn test_min_max_bound_every_value() {
        let values = [55.0, 91.5, 12.0, 100.0, 77.25];
        let lo = min(&values);
        let hi = max(&values);
        assert!(values.iter().all(|&v| v >= lo && v <= hi));
        assert_eq!(lo, 12.0);
        assert_eq!(hi, 100.0);
    }
}
