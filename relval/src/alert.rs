use chrono::{DateTime, Utc};

use crate::series::Series;

/// 阈值越界告警：z-score 绝对值超过阈值的时间点。
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub timestamp: DateTime<Utc>,
    pub zscore: f64,
}

/// Scan a z-score series and emit one alert per point where
/// `|z| > threshold` (strict), in chronological order. NaN never fires;
/// an empty series yields an empty list.
pub fn evaluate_alerts(z: &Series, threshold: f64) -> Vec<Alert> {
    z.points()
        .iter()
        .filter(|(_, value)| value.abs() > threshold)
        .map(|(timestamp, value)| Alert {
            timestamp: *timestamp,
            zscore: *value,
        })
        .collect()
}
