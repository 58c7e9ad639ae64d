//! Gaussian (normal) distribution wrappers.

use ds_core::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

fn dist(mu: f64, sigma: f64) -> Result<Normal> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::Validation(format!("sigma must be finite and > 0, got {}", sigma)));
    }
    Normal::new(mu, sigma).map_err(|e| Error::Computation(format!("normal({}, {}): {}", mu, sigma, e)))
}

/// PDF of `N(mu, sigma)` at `x`.
pub fn pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(dist(mu, sigma)?.pdf(x))
}

/// CDF `Φ((x - mu) / sigma)`.
pub fn cdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(dist(mu, sigma)?.cdf(x))
}

/// Upper-tail complement `1 - Φ((x - mu) / sigma)`.
///
/// Computed as the literal complement of [`cdf`] so that the two tails sum
/// to exactly 1.
pub fn cdf_upper(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(1.0 - cdf(x, mu, sigma)?)
}

/// Interval CDF `Φ(hi) - Φ(lo)` for a two-element interval `[lo, hi]`.
pub fn cdf_interval(interval: &[f64], mu: f64, sigma: f64) -> Result<f64> {
    if interval.len() != 2 {
        return Err(Error::Validation(format!(
            "interval must be a two-element pair, got {} elements",
            interval.len()
        )));
    }
    let d = dist(mu, sigma)?;
    Ok(d.cdf(interval[1]) - d.cdf(interval[0]))
}

/// Percent point function (inverse CDF): the `v` with `Φ((v - mu) / sigma) = prob`.
pub fn ppf(prob: f64, mu: f64, sigma: f64) -> Result<f64> {
    if prob.is_nan() || !(0.0..=1.0).contains(&prob) {
        return Err(Error::Validation(format!("prob must be in [0,1], got {}", prob)));
    }
    Ok(dist(mu, sigma)?.inverse_cdf(prob))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_at_zero() {
        assert_abs_diff_eq!(cdf(0.0, 0.0, 1.0).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let lo = cdf(-1.3, 0.0, 2.0).unwrap();
        let hi = cdf(1.3, 0.0, 2.0).unwrap();
        assert_abs_diff_eq!(lo + hi, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tails_sum_to_one_exactly() {
        for &x in &[-3.0, -0.5, 0.0, 0.7, 4.2] {
            let lower = cdf(x, 1.5, 0.8).unwrap();
            let upper = cdf_upper(x, 1.5, 0.8).unwrap();
            assert_eq!(lower + upper, 1.0, "x={}", x);
        }
    }

    #[test]
    fn test_interval_matches_cdf_difference() {
        let got = cdf_interval(&[512.0, 530.0], 520.0, 112.0).unwrap();
        let want = cdf(530.0, 520.0, 112.0).unwrap() - cdf(512.0, 520.0, 112.0).unwrap();
        assert_abs_diff_eq!(got, want, epsilon = 1e-15);
    }

    #[test]
    fn test_interval_rejects_non_pair() {
        assert!(cdf_interval(&[512.0], 520.0, 112.0).is_err());
        assert!(cdf_interval(&[1.0, 2.0, 3.0], 520.0, 112.0).is_err());
    }

    #[test]
    fn test_ppf_round_trip() {
        for &x in &[400.0, 512.0, 520.0, 641.0] {
            let p = cdf(x, 520.0, 112.0).unwrap();
            let back = ppf(p, 520.0, 112.0).unwrap();
            assert_abs_diff_eq!(back, x, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_worked_example() {
        assert_abs_diff_eq!(cdf(512.0, 520.0, 112.0).unwrap(), 0.4716, epsilon = 1e-3);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(cdf(0.0, 0.0, 0.0).is_err());
        assert!(cdf(0.0, 0.0, -1.0).is_err());
        assert!(ppf(-0.1, 0.0, 1.0).is_err());
        assert!(ppf(1.1, 0.0, 1.0).is_err());
        assert!(ppf(f64::NAN, 0.0, 1.0).is_err());
    }
}
