//! Descriptive statistics over `f64` samples.
//!
//! Functions here are deliberately small and allocation-free where possible;
//! they take slices so callers can run them over rolling windows without
//! copying. Functions return `None` rather than NaN when the sample is too
//! short for the statistic to be defined.

/// Arithmetic mean. Returns 0.0 for an empty slice.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// ```
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with an `n - 1` denominator.
///
/// Returns `None` for fewer than two observations.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some(sum_sq / (n - 1) as f64)
}

/// Sample standard deviation with an `n - 1` denominator.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::sample_std_dev;
///
/// let sd = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((sd - 2.138089935).abs() < 1e-9);
/// assert!(sample_std_dev(&[1.0]).is_none());
/// ```
#[inline]
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Population variance with an `n` denominator.
///
/// Returns `None` for an empty slice.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let m = mean(values);
    Some(values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64)
}

/// Returns an ascending sorted copy of `values`.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Empirical quantile of an ascending sorted sample.
///
/// Uses linear interpolation between the order statistics bracketing rank
/// `q * (n - 1)`, so `q = 0` is the minimum and `q = 1` the maximum.
///
/// Returns `None` for an empty sample or `q` outside `[0, 1]`.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::quantile_sorted;
///
/// let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(quantile_sorted(&xs, 0.5), Some(3.0));
/// assert!((quantile_sorted(&xs, 0.1).unwrap() - 1.4).abs() < 1e-12);
/// ```
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let weight = rank - lower as f64;
    Some(sorted[lower] + weight * (sorted[upper] - sorted[lower]))
}

/// Empirical quantile of an unsorted sample. See [`quantile_sorted`].
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    quantile_sorted(&sorted(values), q)
}

/// Pearson correlation of two equally long samples.
///
/// Returns `None` when lengths differ, fewer than two observations are
/// given, or either sample has zero variance.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::correlation;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [2.0, 4.0, 6.0, 8.0];
/// assert!((correlation(&x, &y).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let mx = mean(x);
    let my = mean(y);
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}
