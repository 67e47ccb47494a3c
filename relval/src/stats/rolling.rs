use crate::series::Series;

/// Rolling z-score over a trailing window.
///
/// The head of the series uses a shrinking window (minimum one
/// observation); the deviation is the population standard deviation
/// (divide by N). A zero-deviation window yields NaN through plain IEEE
/// division, never an error.
pub fn rolling_zscore(s: &Series, window: usize) -> Series {
    assert!(window > 0, "window must be > 0");
    let points = s.points();
    let mut out = Series::new();
    for i in 0..points.len() {
        let start = (i + 1).saturating_sub(window);
        let valid: Vec<f64> = points[start..=i]
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| !v.is_nan())
            .collect();
        let value = if valid.is_empty() {
            f64::NAN
        } else {
            let n = valid.len() as f64;
            let mean = valid.iter().sum::<f64>() / n;
            let var = valid.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
            (points[i].1 - mean) / var.sqrt()
        };
        out.push(points[i].0, value);
    }
    out
}

/// Trailing-window Pearson correlation between two aligned series.
///
/// Unlike the z-score there is no shrinking-window fallback: positions
/// before the window fills are NaN, as is any window containing NaN or a
/// zero-variance side.
pub fn rolling_corr(a: &Series, b: &Series, window: usize) -> Series {
    assert!(window > 0, "window must be > 0");
    debug_assert_eq!(a.len(), b.len(), "correlation inputs must be aligned");
    let pa = a.points();
    let pb = b.points();
    let mut out = Series::new();
    for i in 0..pa.len().min(pb.len()) {
        let value = if i + 1 < window {
            f64::NAN
        } else {
            let start = i + 1 - window;
            pearson(&pa[start..=i], &pb[start..=i])
        };
        out.push(pa[i].0, value);
    }
    out
}

fn pearson(
    a: &[(chrono::DateTime<chrono::Utc>, f64)],
    b: &[(chrono::DateTime<chrono::Utc>, f64)],
) -> f64 {
    let n = a.len() as f64;
    if a.iter().any(|(_, v)| v.is_nan()) || b.iter().any(|(_, v)| v.is_nan()) {
        return f64::NAN;
    }
    let mean_a = a.iter().map(|(_, v)| v).sum::<f64>() / n;
    let mean_b = b.iter().map(|(_, v)| v).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for ((_, va), (_, vb)) in a.iter().zip(b.iter()) {
        let da = va - mean_a;
        let db = vb - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    if var_a == 0.0 || var_b == 0.0 {
        return f64::NAN;
    }
    cov / (var_a.sqrt() * var_b.sqrt())
}
