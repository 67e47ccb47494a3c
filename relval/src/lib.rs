pub mod aggregator;
pub mod alert;
pub mod bar;
pub mod config;
pub mod constant;
pub mod engine;
pub mod logging;
pub mod series;
pub mod stats;
pub mod table;
pub mod tick;

pub use aggregator::{AggregationOutcome, BarSet, aggregate_ticks};
pub use alert::{Alert, evaluate_alerts};
pub use bar::Bar;
pub use config::{AnalysisConfig, ConfigLoader};
pub use constant::{Const, DataError, Interval};
pub use engine::{PairEngine, PairSnapshot};
pub use logging::init_logging;
pub use series::Series;
pub use stats::{AdfSummary, adf_test, build_spread, hedge_ratio, rolling_corr, rolling_zscore};
pub use table::{bars_dataframe, forward_fill, snapshot_dataframe};
pub use tick::{RawTimestamp, TickRecord, normalize_timestamps, parse_timestamp};
