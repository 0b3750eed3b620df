/// Compute the arithmetic mean, summing in order and dividing once.
pub fn compute_mean(vals: &[f64]) -> f64 {
    if vals.is_empty() {
        return f64::NAN;
    }
    vals.iter().sum::<f64>() / vals.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_matches_sum_over_count() {
        let (a, b, c) = (4.701, 4.644, 4.630);
        assert_eq!(compute_mean(&[a, b, c]), (a + b + c) / 3.0);
        assert!((compute_mean(&[a, b, c]) - 4.658333333333333).abs() < 1e-12);
        assert_eq!(compute_mean(&[2.5]), 2.5);
    }

    #[test]
    fn empty_mean_is_nan() {
        assert!(compute_mean(&[]).is_nan());
    }
}
