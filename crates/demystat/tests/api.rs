use approx::assert_abs_diff_eq;
use demystat::{Binomial, Gaussian, PlotOptions};

#[test]
fn binomial_pmf_matches_mass_formula() {
    let mut b = Binomial::new();
    // C(6,4) * 0.83^4 * 0.17^2
    let p = b.pmf(4, 6, 0.83, &PlotOptions::off()).unwrap();
    assert_abs_diff_eq!(p, 0.205731821535, epsilon = 1e-10);
}

#[test]
fn binomial_cdf_tails_sum_to_one() {
    let mut b = Binomial::new();
    for x in 0..=6 {
        let lower = b.cdf(x, 6, 0.83, &PlotOptions::off(), false).unwrap();
        let upper = b.cdf(x, 6, 0.83, &PlotOptions::off(), true).unwrap();
        assert_eq!(lower + upper, 1.0, "x={}", x);
    }
}

#[test]
fn binomial_cdf2_is_cdf_difference() {
    let mut b = Binomial::new();
    let got = b.cdf2(&[2, 5], 6, 0.83, &PlotOptions::off()).unwrap();
    let hi = b.cdf(5, 6, 0.83, &PlotOptions::off(), false).unwrap();
    let lo = b.cdf(2, 6, 0.83, &PlotOptions::off(), false).unwrap();
    assert_abs_diff_eq!(got, hi - lo, epsilon = 1e-12);
}

#[test]
fn binomial_cdf2_rejects_non_pair() {
    let mut b = Binomial::new();
    assert!(b.cdf2(&[4], 6, 0.83, &PlotOptions::off()).is_err());
    assert!(b.cdf2(&[], 6, 0.83, &PlotOptions::off()).is_err());
    assert!(b.cdf2(&[1, 2, 3], 6, 0.83, &PlotOptions::off()).is_err());
}

#[test]
fn gaussian_cdf_worked_example() {
    let g = Gaussian::new();
    let c = g.cdf(512.0, 520.0, 112.0, &PlotOptions::off(), false).unwrap();
    assert_abs_diff_eq!(c, 0.4716, epsilon = 1e-3);
}

#[test]
fn gaussian_tails_sum_to_one() {
    let g = Gaussian::new();
    for &x in &[300.0, 512.0, 520.0, 777.0] {
        let lower = g.cdf(x, 520.0, 112.0, &PlotOptions::off(), false).unwrap();
        let upper = g.cdf(x, 520.0, 112.0, &PlotOptions::off(), true).unwrap();
        assert_eq!(lower + upper, 1.0, "x={}", x);
    }
}

#[test]
fn gaussian_ppf_round_trips_cdf() {
    let g = Gaussian::new();
    for &x in &[400.0, 512.0, 520.0, 641.0] {
        let p = g.cdf(x, 520.0, 112.0, &PlotOptions::off(), false).unwrap();
        let back = g.ppf(p, 520.0, 112.0, &PlotOptions::off()).unwrap();
        assert_abs_diff_eq!(back, x, epsilon = 1e-6);
    }
}

#[test]
fn gaussian_cdf2_between_bounds() {
    let g = Gaussian::new();
    let got = g.cdf2(&[512.0, 530.0], 520.0, 112.0, &PlotOptions::off()).unwrap();
    let hi = g.cdf(530.0, 520.0, 112.0, &PlotOptions::off(), false).unwrap();
    let lo = g.cdf(512.0, 520.0, 112.0, &PlotOptions::off(), false).unwrap();
    assert_abs_diff_eq!(got, hi - lo, epsilon = 1e-12);
    assert!(g.cdf2(&[512.0], 520.0, 112.0, &PlotOptions::off()).is_err());
}

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("demystat-{}-{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn visualized_pmf_writes_svg_with_requested_fill() {
    let dir = scratch_dir("pmf");
    let opts = PlotOptions::default().fill("orange").dir(dir.clone());

    let mut b = Binomial::new();
    let p = b.pmf(4, 6, 0.83, &opts).unwrap();
    assert_abs_diff_eq!(p, 0.205731821535, epsilon = 1e-10);

    let svg = std::fs::read_to_string(dir.join("binomial_pmf.svg")).expect("chart written");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("#ffa500"));
    assert!(svg.contains("Probability Mass Function"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn visualized_gaussian_cdf_writes_shaded_svg() {
    let dir = scratch_dir("gauss");
    let opts = PlotOptions::default().fill("lightblue").dir(dir.clone());

    let g = Gaussian::new();
    g.cdf(512.0, 520.0, 112.0, &opts, false).unwrap();

    let svg = std::fs::read_to_string(dir.join("gaussian_cdf.svg")).expect("chart written");
    assert!(svg.contains("<polyline"));
    assert!(svg.contains("#add8e6"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn render_failure_does_not_affect_the_value() {
    // Pointing the sink at an unwritable path only loses the chart.
    let opts = PlotOptions::default().dir("/nonexistent/demystat");
    let mut b = Binomial::new();
    let p = b.pmf(4, 6, 0.83, &opts).unwrap();
    assert_abs_diff_eq!(p, 0.205731821535, epsilon = 1e-10);
}
