use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// 原始 tick 的时间戳表示：ISO 文本或 epoch 整数，解析前不做假设。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Epoch(i64),
    Text(String),
}

impl RawTimestamp {
    pub fn as_display(&self) -> String {
        match self {
            Self::Epoch(v) => v.to_string(),
            Self::Text(v) => v.clone(),
        }
    }
}

/// 标准化前的原始 tick 记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub timestamp: RawTimestamp,
    pub symbol: String,
    pub price: f64,
    pub quantity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseStrategy {
    Rfc3339,
    Pattern(&'static str),
    Epoch,
}

const PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y%m%d%H%M%S%.f",
];

fn strategies() -> impl Iterator<Item = ParseStrategy> {
    std::iter::once(ParseStrategy::Rfc3339)
        .chain(PATTERNS.iter().map(|p| ParseStrategy::Pattern(*p)))
        .chain(std::iter::once(ParseStrategy::Epoch))
}

fn parse_with(strategy: ParseStrategy, raw: &RawTimestamp) -> Option<DateTime<Utc>> {
    match (strategy, raw) {
        (ParseStrategy::Epoch, RawTimestamp::Epoch(value)) => epoch_to_datetime(*value),
        (ParseStrategy::Epoch, RawTimestamp::Text(text)) => {
            text.trim().parse::<i64>().ok().and_then(epoch_to_datetime)
        }
        (_, RawTimestamp::Epoch(_)) => None,
        (ParseStrategy::Rfc3339, RawTimestamp::Text(text)) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        (ParseStrategy::Pattern(pattern), RawTimestamp::Text(text)) => {
            NaiveDateTime::parse_from_str(text, pattern)
                .ok()
                .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        }
    }
}

// Epoch integers carry no unit marker; decide by magnitude.
fn epoch_to_datetime(value: i64) -> Option<DateTime<Utc>> {
    let magnitude = value.unsigned_abs();
    if magnitude >= 10_u64.pow(16) {
        Some(DateTime::from_timestamp_nanos(value))
    } else if magnitude >= 10_u64.pow(12) {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}

/// Parse one timestamp against the full strategy ladder.
pub fn parse_timestamp(raw: &RawTimestamp) -> Option<DateTime<Utc>> {
    strategies().find_map(|strategy| parse_with(strategy, raw))
}

/// Normalize a batch of timestamps.
///
/// Tier 1 infers a single format from the first record and applies it to the
/// whole batch; tier 2 retries each failure against the full ladder. A `None`
/// entry marks a record that stays unparseable under every strategy.
pub fn normalize_timestamps(raws: &[&RawTimestamp]) -> Vec<Option<DateTime<Utc>>> {
    let bulk = raws
        .first()
        .and_then(|first| strategies().find(|s| parse_with(*s, first).is_some()));

    raws.iter()
        .map(|raw| {
            bulk.and_then(|strategy| parse_with(strategy, raw))
                .or_else(|| parse_timestamp(raw))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_with_and_without_fraction() {
        let plain = RawTimestamp::Text("2025-01-01T00:00:00".to_string());
        let fractional = RawTimestamp::Text("2025-01-01T00:00:00.500000".to_string());
        let a = parse_timestamp(&plain).expect("plain iso parses");
        let b = parse_timestamp(&fractional).expect("fractional iso parses");
        assert_eq!((b - a).num_milliseconds(), 500);
    }

    #[test]
    fn parses_epoch_units_by_magnitude() {
        let seconds = parse_timestamp(&RawTimestamp::Epoch(1_735_689_600)).expect("seconds");
        let millis = parse_timestamp(&RawTimestamp::Epoch(1_735_689_600_000)).expect("millis");
        let nanos =
            parse_timestamp(&RawTimestamp::Epoch(1_735_689_600_000_000_000)).expect("nanos");
        assert_eq!(seconds, millis);
        assert_eq!(millis, nanos);
    }

    #[test]
    fn mixed_batch_falls_back_per_record() {
        let a = RawTimestamp::Text("2025-01-01T00:00:00Z".to_string());
        let b = RawTimestamp::Text("2025/01/01 00:00:01".to_string());
        let c = RawTimestamp::Text("not a timestamp".to_string());
        let parsed = normalize_timestamps(&[&a, &b, &c]);
        assert!(parsed[0].is_some());
        assert!(parsed[1].is_some());
        assert!(parsed[2].is_none());
    }
}
