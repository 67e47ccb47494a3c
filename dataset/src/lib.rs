//! `dataset` crate 入口。
//!
//! 职责：为核心分析管线提供数据来源——可复现的合成 tick 生成与
//! 分隔文件读写。核心 crate 对数据出处保持无感知。
//! 该文件只做模块装配与统一导出，具体实现位于各子模块。
//!
//! 模块分工：
//! - `synthetic`：带种子的高斯随机游走 tick 生成器。
//! - `csvio`：tick CSV 读写与配对分析结果导出。

mod csvio;
mod synthetic;

pub use csvio::{export_pair_csv, load_ticks_csv, write_ticks_csv};
pub use synthetic::{SyntheticSpec, gen_ticks, gen_universe};
