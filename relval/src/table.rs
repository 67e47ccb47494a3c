//! 展示表模块。
//!
//! 把 bar 集合与配对快照转换为 polars `DataFrame`（datetime 列为 epoch
//! 毫秒），供调用方做表格/图表展示；`forward_fill` 仅用于展示层的断点
//! 连续化，分析阶段不使用。

use polars::df;
use polars::prelude::DataFrame;

use crate::aggregator::BarSet;
use crate::constant::DataError;
use crate::engine::PairSnapshot;
use crate::series::Series;

pub fn bars_dataframe(bars: &BarSet) -> Result<DataFrame, DataError> {
    let mut datetime = Vec::new();
    let mut symbol = Vec::new();
    let mut open = Vec::new();
    let mut high = Vec::new();
    let mut low = Vec::new();
    let mut close = Vec::new();
    let mut volume = Vec::new();
    for bar in bars.iter() {
        datetime.push(bar.datetime.timestamp_millis());
        symbol.push(bar.symbol.clone());
        open.push(bar.open);
        high.push(bar.high);
        low.push(bar.low);
        close.push(bar.close);
        volume.push(bar.volume);
    }

    let frame = df!(
        "datetime" => datetime,
        "symbol" => symbol,
        "open" => open,
        "high" => high,
        "low" => low,
        "close" => close,
        "volume" => volume
    )?;
    Ok(frame)
}

pub fn snapshot_dataframe(snapshot: &PairSnapshot) -> Result<DataFrame, DataError> {
    let datetime: Vec<i64> = snapshot
        .spread
        .points()
        .iter()
        .map(|(t, _)| t.timestamp_millis())
        .collect();

    let frame = df!(
        "datetime" => datetime,
        snapshot.symbol_a.as_str() => snapshot.close_a.values(),
        snapshot.symbol_b.as_str() => snapshot.close_b.values(),
        "spread" => snapshot.spread.values(),
        "zscore" => snapshot.zscore.values()
    )?;
    Ok(frame)
}

/// Forward-fill NaN gaps with the last valid value; leading gaps stay NaN.
pub fn forward_fill(s: &Series) -> Series {
    let mut last_valid = f64::NAN;
    Series::from_points(
        s.points()
            .iter()
            .map(|(t, v)| {
                if !v.is_nan() {
                    last_valid = *v;
                }
                (*t, last_valid)
            })
            .collect(),
    )
}
