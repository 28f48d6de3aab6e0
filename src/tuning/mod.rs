//! 权重调优模块 - 用进化搜索寻找分布更均匀的哈希权重

pub mod config;
pub mod genetic;
pub mod logbook;

pub use config::TunerConfig;
pub use genetic::{evaluate_weights, TuningOutcome, WeightTuner};
pub use logbook::{GenerationRecord, Logbook};
