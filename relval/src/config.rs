use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constant::{Const, DataError, Interval};

/// 单次配对分析的运行参数，由调用方持有并显式传入。
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub interval: Interval,
    pub rolling_window: usize,
    pub z_threshold: f64,
    pub symbol_a: String,
    pub symbol_b: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            interval: Interval::S1,
            rolling_window: Const::DEFAULT_ROLLING_WINDOW,
            z_threshold: Const::DEFAULT_Z_THRESHOLD,
            symbol_a: "SYM1".to_string(),
            symbol_b: "SYM2".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AnalysisConfigFile {
    #[serde(default = "default_interval")]
    interval: String,
    #[serde(default = "default_rolling_window")]
    rolling_window: usize,
    #[serde(default = "default_z_threshold")]
    z_threshold: f64,
    symbol_a: String,
    symbol_b: String,
}

fn default_interval() -> String {
    Interval::S1.as_str().to_string()
}

fn default_rolling_window() -> usize {
    Const::DEFAULT_ROLLING_WINDOW
}

fn default_z_threshold() -> f64 {
    Const::DEFAULT_Z_THRESHOLD
}

impl AnalysisConfigFile {
    fn into_config(self) -> Result<AnalysisConfig, DataError> {
        Ok(AnalysisConfig {
            interval: Interval::parse(&self.interval)?,
            rolling_window: self.rolling_window,
            z_threshold: self.z_threshold,
            symbol_a: self.symbol_a,
            symbol_b: self.symbol_b,
        })
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<AnalysisConfig, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        let file: AnalysisConfigFile = match path.extension().and_then(|x| x.to_str()) {
            Some("json") => serde_json::from_str(&text)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            _ => return Err("unsupported config file format".into()),
        };

        if file.rolling_window == 0 {
            return Err("rolling_window must be positive".into());
        }
        if file.z_threshold <= 0.0 {
            return Err("z_threshold must be positive".into());
        }

        Ok(file.into_config()?)
    }
}
