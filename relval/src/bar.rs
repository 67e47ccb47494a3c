use chrono::{DateTime, Utc};

/// OHLCV bar，键为 `(symbol, bucket 起始时间)`。
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub symbol: String,
    pub datetime: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn total_range(&self) -> f64 {
        self.high - self.low
    }

    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }
}
