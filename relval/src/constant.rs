use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    S1,
    M1,
    M5,
}

impl Interval {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S1 => "1s",
            Self::M1 => "1m",
            Self::M5 => "5m",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DataError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1s" => Ok(Self::S1),
            "1m" => Ok(Self::M1),
            "5m" => Ok(Self::M5),
            _ => Err(DataError::InvalidInterval(value.to_string())),
        }
    }

    /// Bucket width in milliseconds.
    pub fn millis(self) -> i64 {
        match self {
            Self::S1 => 1_000,
            Self::M1 => 60_000,
            Self::M5 => 300_000,
        }
    }
}

#[derive(Debug)]
pub enum DataError {
    InvalidInterval(String),
    InvalidTimestamp(String),
    InsufficientData(String),
    UnknownSymbol(String),
    Io(std::io::Error),
    Csv(csv::Error),
    Polars(polars::error::PolarsError),
}

pub struct Const;

impl Const {
    /// Minimum valid observations before the ADF test is attempted.
    pub const MIN_ADF_OBS: usize = 10;
    pub const DEFAULT_ROLLING_WINDOW: usize = 60;
    pub const DEFAULT_Z_THRESHOLD: f64 = 2.0;
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval(v) => write!(f, "invalid interval: {v}"),
            Self::InvalidTimestamp(v) => write!(f, "invalid timestamp: {v}"),
            Self::InsufficientData(v) => write!(f, "insufficient data: {v}"),
            Self::UnknownSymbol(v) => write!(f, "unknown symbol: {v}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Csv(e) => write!(f, "csv error: {e}"),
            Self::Polars(e) => write!(f, "polars error: {e}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for DataError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<polars::error::PolarsError> for DataError {
    fn from(value: polars::error::PolarsError) -> Self {
        Self::Polars(value)
    }
}
