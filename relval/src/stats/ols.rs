use crate::constant::DataError;
use crate::series::Series;

/// OLS slope of `y = alpha + beta * x`, fitted on the inner-joined domain
/// with NaN pairs dropped. The intercept is estimated and discarded.
pub fn hedge_ratio(y: &Series, x: &Series) -> Result<f64, DataError> {
    let (y, x) = Series::align(y, x);
    if y.is_empty() {
        return Err(DataError::InsufficientData(
            "no aligned rows to estimate hedge ratio".to_string(),
        ));
    }

    let ys = y.values();
    let xs = x.values();
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut num = 0.0;
    let mut den = 0.0;
    for (xi, yi) in xs.iter().zip(ys.iter()) {
        let dx = xi - mean_x;
        num += dx * (yi - mean_y);
        den += dx * dx;
    }

    if den == 0.0 {
        return Err(DataError::InsufficientData(
            "explanatory series has zero variance".to_string(),
        ));
    }
    Ok(num / den)
}

/// `spread[t] = y[t] - hedge_ratio * x[t]`, pointwise over the aligned
/// domain. Alignment is the caller's job; this stage is total on equal
/// length inputs.
pub fn build_spread(y: &Series, x: &Series, hedge_ratio: f64) -> Series {
    debug_assert_eq!(y.len(), x.len(), "spread inputs must be aligned");
    Series::from_points(
        y.points()
            .iter()
            .zip(x.points().iter())
            .map(|((t, yv), (_, xv))| (*t, yv - hedge_ratio * xv))
            .collect(),
    )
}
