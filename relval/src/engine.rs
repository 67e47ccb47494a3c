//! 配对分析引擎。
//!
//! 职责：
//! - 按配置选取两条 close 序列并做内连接对齐；
//! - 串联 hedge 估计、spread 构建、滚动统计、ADF 检验与告警扫描；
//! - 每次 `analyze` 都是无共享状态的纯计算，上下文由调用方持有。

use tracing::info;

use crate::aggregator::BarSet;
use crate::alert::{Alert, evaluate_alerts};
use crate::config::AnalysisConfig;
use crate::constant::DataError;
use crate::series::Series;
use crate::stats::{AdfSummary, adf_test, build_spread, hedge_ratio, rolling_corr, rolling_zscore};

/// 一次配对分析的完整输出。
#[derive(Debug, Clone)]
pub struct PairSnapshot {
    pub symbol_a: String,
    pub symbol_b: String,
    /// Aligned close series for symbol A / symbol B.
    pub close_a: Series,
    pub close_b: Series,
    pub hedge_ratio: f64,
    pub spread: Series,
    pub zscore: Series,
    pub correlation: Series,
    pub adf: AdfSummary,
    pub alerts: Vec<Alert>,
}

pub struct PairEngine {
    config: AnalysisConfig,
}

impl PairEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, bars: &BarSet) -> Result<PairSnapshot, DataError> {
        let close_a = bars
            .close_series(&self.config.symbol_a)
            .ok_or_else(|| DataError::UnknownSymbol(self.config.symbol_a.clone()))?;
        let close_b = bars
            .close_series(&self.config.symbol_b)
            .ok_or_else(|| DataError::UnknownSymbol(self.config.symbol_b.clone()))?;

        let (close_a, close_b) = Series::align(&close_a, &close_b);
        if close_a.is_empty() {
            return Err(DataError::InsufficientData(format!(
                "no overlapping bars for {} / {}",
                self.config.symbol_a, self.config.symbol_b
            )));
        }

        let hedge = hedge_ratio(&close_a, &close_b)?;
        let spread = build_spread(&close_a, &close_b, hedge);
        let zscore = rolling_zscore(&spread, self.config.rolling_window);
        let correlation = rolling_corr(&close_a, &close_b, self.config.rolling_window);
        let adf = adf_test(&spread);
        let alerts = evaluate_alerts(&zscore, self.config.z_threshold);

        info!(
            symbol_a = %self.config.symbol_a,
            symbol_b = %self.config.symbol_b,
            rows = close_a.len(),
            hedge_ratio = hedge,
            alerts = alerts.len(),
            "pair analysis complete"
        );

        Ok(PairSnapshot {
            symbol_a: self.config.symbol_a.clone(),
            symbol_b: self.config.symbol_b.clone(),
            close_a,
            close_b,
            hedge_ratio: hedge,
            spread,
            zscore,
            correlation,
            adf,
            alerts,
        })
    }
}
