//! CSV 读写模块。
//!
//! - tick 输入：列 `timestamp,symbol,price,quantity`，时间戳允许
//!   ISO 文本与 epoch 整数混用，统一交由核心 crate 的分层解析处理。
//! - 配对导出：timestamp、两条 close、spread、zscore，NaN 写为空字段。

use std::path::Path;

use chrono::SecondsFormat;
use csv::{Reader, Writer};

use relval::{DataError, PairSnapshot, TickRecord};

/// 读取 tick CSV。列头必须为 `timestamp,symbol,price,quantity`。
pub fn load_ticks_csv(path: impl AsRef<Path>) -> Result<Vec<TickRecord>, DataError> {
	let mut reader = Reader::from_path(path)?;
	let mut out = Vec::new();
	for row in reader.deserialize::<TickRecord>() {
		out.push(row?);
	}
	Ok(out)
}

/// 写出 tick CSV，与 `load_ticks_csv` 互为往返。
pub fn write_ticks_csv(path: impl AsRef<Path>, ticks: &[TickRecord]) -> Result<(), DataError> {
	let mut writer = Writer::from_path(path)?;
	for tick in ticks {
		writer.serialize(tick)?;
	}
	writer.flush()?;
	Ok(())
}

/// 导出配对分析结果（`pair_analysis.csv` 形制）。
pub fn export_pair_csv(path: impl AsRef<Path>, snapshot: &PairSnapshot) -> Result<(), DataError> {
	let mut writer = Writer::from_path(path)?;
	writer.write_record([
		"timestamp",
		snapshot.symbol_a.as_str(),
		snapshot.symbol_b.as_str(),
		"spread",
		"zscore",
	])?;

	for (idx, (timestamp, spread)) in snapshot.spread.points().iter().enumerate() {
		writer.write_record([
			timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
			format_value(snapshot.close_a.points()[idx].1),
			format_value(snapshot.close_b.points()[idx].1),
			format_value(*spread),
			format_value(snapshot.zscore.points()[idx].1),
		])?;
	}
	writer.flush()?;
	Ok(())
}

fn format_value(value: f64) -> String {
	if value.is_nan() {
		String::new()
	} else {
		value.to_string()
	}
}
