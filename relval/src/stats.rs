pub mod adf;
pub mod ols;
pub mod rolling;

pub use adf::{AdfSummary, adf_test};
pub use ols::{build_spread, hedge_ratio};
pub use rolling::{rolling_corr, rolling_zscore};
