//! Binomial distribution wrappers.

use ds_core::{Error, Result};
use statrs::distribution::{Binomial, Discrete, DiscreteCDF};
use statrs::statistics::Distribution;

fn dist(n: u64, p: f64) -> Result<Binomial> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(Error::Validation(format!("p must be finite and in [0,1], got {}", p)));
    }
    Binomial::new(p, n).map_err(|e| Error::Computation(format!("binomial({}, {}): {}", n, p, e)))
}

/// PMF of a Binomial distribution `Binom(n, p)` at count `k`.
pub fn pmf(k: u64, n: u64, p: f64) -> Result<f64> {
    if k > n {
        return Err(Error::Validation(format!("k must be <= n, got k={} n={}", k, n)));
    }
    Ok(dist(n, p)?.pmf(k))
}

/// CDF `P(X <= k)` of a Binomial distribution `Binom(n, p)`.
pub fn cdf(k: u64, n: u64, p: f64) -> Result<f64> {
    if k > n {
        return Err(Error::Validation(format!("k must be <= n, got k={} n={}", k, n)));
    }
    Ok(dist(n, p)?.cdf(k))
}

/// Upper-tail complement `1 - P(X <= k)`.
///
/// Computed as the literal complement of [`cdf`] so that the two tails sum
/// to exactly 1.
pub fn cdf_upper(k: u64, n: u64, p: f64) -> Result<f64> {
    Ok(1.0 - cdf(k, n, p)?)
}

/// Interval CDF `P(lo < X <= hi)` for a two-element interval `[lo, hi]`.
///
/// The lower bound is exclusive and the upper bound inclusive: the result is
/// `cdf(hi) - cdf(lo)`. An interval that is not exactly two elements is
/// rejected.
pub fn cdf_interval(interval: &[u64], n: u64, p: f64) -> Result<f64> {
    if interval.len() != 2 {
        return Err(Error::Validation(format!(
            "interval must be a two-element pair, got {} elements",
            interval.len()
        )));
    }
    let (lo, hi) = (interval[0], interval[1]);
    Ok(cdf(hi, n, p)? - cdf(lo, n, p)?)
}

/// PMF evaluated across the full support `0..=n`.
pub fn support_pmf(n: u64, p: f64) -> Result<Vec<f64>> {
    let d = dist(n, p)?;
    Ok((0..=n).map(|k| d.pmf(k)).collect())
}

/// CDF evaluated across the full support `0..=n`.
pub fn support_cdf(n: u64, p: f64) -> Result<Vec<f64>> {
    let d = dist(n, p)?;
    Ok((0..=n).map(|k| d.cdf(k)).collect())
}

/// Population mean `n*p` and variance `n*p*(1-p)`.
pub fn mean_var(n: u64, p: f64) -> Result<(f64, f64)> {
    let d = dist(n, p)?;
    let mean = d
        .mean()
        .ok_or_else(|| Error::Computation(format!("binomial({}, {}): mean undefined", n, p)))?;
    let var = d
        .variance()
        .ok_or_else(|| Error::Computation(format!("binomial({}, {}): variance undefined", n, p)))?;
    Ok((mean, var))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use statrs::function::gamma::ln_gamma;

    fn pmf_reference(k: u64, n: u64, p: f64) -> f64 {
        // ln(n choose k) = ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)
        if p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if p == 1.0 {
            return if k == n { 1.0 } else { 0.0 };
        }
        let ln_choose = ln_gamma(n as f64 + 1.0)
            - ln_gamma(k as f64 + 1.0)
            - ln_gamma((n - k) as f64 + 1.0);
        (ln_choose + (k as f64) * p.ln() + ((n - k) as f64) * (1.0 - p).ln()).exp()
    }

    #[test]
    fn test_pmf_matches_mass_formula() {
        for &(n, p) in &[(1_u64, 0.5), (6, 0.83), (12, 0.25), (20, 0.97)] {
            for k in 0..=n {
                let got = pmf(k, n, p).unwrap();
                assert_relative_eq!(got, pmf_reference(k, n, p), epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_pmf_edges_p0_p1() {
        assert_eq!(pmf(0, 5, 0.0).unwrap(), 1.0);
        assert_eq!(pmf(1, 5, 0.0).unwrap(), 0.0);
        assert_eq!(pmf(5, 5, 1.0).unwrap(), 1.0);
        assert_eq!(pmf(4, 5, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_support_pmf_sums_to_one() {
        for &(n, p) in &[(0_u64, 0.3), (6, 0.83), (15, 0.02)] {
            let total: f64 = support_pmf(n, p).unwrap().iter().sum();
            assert_abs_diff_eq!(total, 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_tails_sum_to_one_exactly() {
        for &(n, p) in &[(6_u64, 0.83), (10, 0.5), (25, 0.12)] {
            for k in 0..=n {
                let lower = cdf(k, n, p).unwrap();
                let upper = cdf_upper(k, n, p).unwrap();
                assert_eq!(lower + upper, 1.0, "k={} n={} p={}", k, n, p);
            }
        }
    }

    #[test]
    fn test_interval_matches_cdf_difference() {
        let n = 6;
        let p = 0.83;
        let got = cdf_interval(&[2, 5], n, p).unwrap();
        let want = cdf(5, n, p).unwrap() - cdf(2, n, p).unwrap();
        assert_abs_diff_eq!(got, want, epsilon = 1e-15);
        assert_abs_diff_eq!(got, 0.663697757741, epsilon = 1e-9);
    }

    #[test]
    fn test_interval_rejects_non_pair() {
        assert!(cdf_interval(&[3], 6, 0.5).is_err());
        assert!(cdf_interval(&[], 6, 0.5).is_err());
        assert!(cdf_interval(&[1, 2, 3], 6, 0.5).is_err());
    }

    #[test]
    fn test_worked_example() {
        // C(6,4) * 0.83^4 * 0.17^2
        assert_abs_diff_eq!(pmf(4, 6, 0.83).unwrap(), 0.205731821535, epsilon = 1e-10);
        assert_abs_diff_eq!(cdf(4, 6, 0.83).unwrap(), 0.271277481045, epsilon = 1e-10);
    }

    #[test]
    fn test_mean_var() {
        let (mean, var) = mean_var(6, 0.83).unwrap();
        assert_abs_diff_eq!(mean, 6.0 * 0.83, epsilon = 1e-12);
        assert_abs_diff_eq!(var, 6.0 * 0.83 * 0.17, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(pmf(5, 4, 0.5).is_err());
        assert!(pmf(2, 4, -0.1).is_err());
        assert!(pmf(2, 4, 1.1).is_err());
        assert!(cdf(2, 4, f64::NAN).is_err());
        assert!(cdf_interval(&[2, 5], 4, 0.5).is_err());
    }
}
