//! Cumulative confidence over repeated independent checks.

use gt_common::{Error, Result};

/// Probability that at least one of `trials` independent attempts succeeds,
/// given a per-trial success probability `p` in `[0, 1]`.
pub fn cumulative_confidence(p: f64, trials: u32) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidProbability { value: p });
    }
    Ok(1.0 - (1.0 - p).powf(f64::from(trials)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_confidence_compounds_over_trials() {
        assert!(approx_eq(cumulative_confidence(0.5, 1).unwrap(), 0.5));
        assert!(approx_eq(cumulative_confidence(0.5, 2).unwrap(), 0.75));
        assert!(approx_eq(cumulative_confidence(0.5, 3).unwrap(), 0.875));
    }

    #[test]
    fn test_confidence_is_monotonic_in_trials() {
        let mut last = 0.0;
        for trials in 1..=20 {
            let confidence = cumulative_confidence(0.3, trials).unwrap();
            assert!(confidence > last);
            last = confidence;
        }
    }

    #[test]
    fn test_degenerate_probabilities() {
        assert!(approx_eq(cumulative_confidence(0.0, 10).unwrap(), 0.0));
        assert!(approx_eq(cumulative_confidence(1.0, 1).unwrap(), 1.0));
        assert!(approx_eq(cumulative_confidence(0.5, 0).unwrap(), 0.0));
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        assert!(matches!(
            cumulative_confidence(1.5, 3),
            Err(Error::InvalidProbability { .. })
        ));
        assert!(matches!(
            cumulative_confidence(-0.1, 3),
            Err(Error::InvalidProbability { .. })
        ));
        assert!(matches!(
            cumulative_confidence(f64::NAN, 3),
            Err(Error::InvalidProbability { .. })
        ));
    }
}
