//! tick 聚合模块。
//!
//! 负责把原始 tick 批量标准化时间戳、按 symbol 分组排序，并按固定宽度的
//! 左闭右开时间桶折叠为 OHLCV bar。无法解析时间戳的记录按条跳过并计数，
//! 不会使整次聚合失败。

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::bar::Bar;
use crate::constant::Interval;
use crate::series::Series;
use crate::tick::{RawTimestamp, TickRecord, normalize_timestamps};

/// 聚合结果：按 `(symbol, bucket_time)` 升序排列的 bar 集合。
#[derive(Debug, Clone, Default)]
pub struct BarSet {
    by_symbol: BTreeMap<String, Vec<Bar>>,
}

impl BarSet {
    pub fn symbols(&self) -> Vec<&str> {
        self.by_symbol.keys().map(String::as_str).collect()
    }

    pub fn bars(&self, symbol: &str) -> Option<&[Bar]> {
        self.by_symbol.get(symbol).map(Vec::as_slice)
    }

    pub fn bar_count(&self) -> usize {
        self.by_symbol.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }

    /// All bars, `(symbol, bucket_time)` ascending.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> + '_ {
        self.by_symbol.values().flat_map(|bars| bars.iter())
    }

    /// Close prices of one symbol as a time series.
    pub fn close_series(&self, symbol: &str) -> Option<Series> {
        self.by_symbol.get(symbol).map(|bars| {
            Series::from_points(bars.iter().map(|bar| (bar.datetime, bar.close)).collect())
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AggregationOutcome {
    pub bars: BarSet,
    /// Ticks dropped because their timestamp stayed unparseable.
    pub dropped: usize,
}

/// Aggregate raw ticks into per-symbol OHLCV bars at a fixed interval.
pub fn aggregate_ticks(ticks: &[TickRecord], interval: Interval) -> AggregationOutcome {
    if ticks.is_empty() {
        return AggregationOutcome::default();
    }

    let raws: Vec<&RawTimestamp> = ticks.iter().map(|tick| &tick.timestamp).collect();
    let parsed = normalize_timestamps(&raws);

    let mut dropped = 0usize;
    let mut by_symbol: BTreeMap<String, Vec<(DateTime<Utc>, &TickRecord)>> = BTreeMap::new();
    for (tick, datetime) in ticks.iter().zip(parsed) {
        match datetime {
            Some(datetime) => {
                by_symbol
                    .entry(tick.symbol.clone())
                    .or_default()
                    .push((datetime, tick));
            }
            None => {
                warn!(
                    symbol = %tick.symbol,
                    timestamp = %tick.timestamp.as_display(),
                    "unparseable tick timestamp, skipping record"
                );
                dropped += 1;
            }
        }
    }

    let width = interval.millis();
    let mut bars = BarSet::default();
    for (symbol, mut entries) in by_symbol {
        // Stable sort: same-instant ticks keep input order for open/close.
        entries.sort_by_key(|(datetime, _)| *datetime);

        let mut buckets: BTreeMap<i64, Bar> = BTreeMap::new();
        for (datetime, tick) in entries {
            let bucket_ms = datetime.timestamp_millis().div_euclid(width) * width;
            match buckets.get_mut(&bucket_ms) {
                None => {
                    let bucket_start =
                        DateTime::from_timestamp_millis(bucket_ms).unwrap_or(datetime);
                    buckets.insert(
                        bucket_ms,
                        Bar {
                            symbol: symbol.clone(),
                            datetime: bucket_start,
                            open: tick.price,
                            high: tick.price,
                            low: tick.price,
                            close: tick.price,
                            volume: tick.quantity,
                        },
                    );
                }
                Some(bar) => {
                    bar.high = bar.high.max(tick.price);
                    bar.low = bar.low.min(tick.price);
                    bar.close = tick.price;
                    bar.volume += tick.quantity;
                }
            }
        }

        bars.by_symbol
            .insert(symbol, buckets.into_values().collect());
    }

    AggregationOutcome { bars, dropped }
}
