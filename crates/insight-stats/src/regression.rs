//! Least-squares line fitting.

/// Slope of the least-squares line of `y` on `x`.
///
/// Returns `None` for fewer than two points, mismatched lengths or a
/// constant `x`.
pub fn linear_slope(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (a, b) in x.iter().zip(y) {
        sxy += (a - mean_x) * (b - mean_y);
        sxx += (a - mean_x).powi(2);
    }
    if sxx == 0.0 {
        return None;
    }
    Some(sxy / sxx)
}
