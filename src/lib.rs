//! 单词集合库 - 基于分离链接哈希表的定长单词集合
//!
//! 将单词规范化（去掉首尾标点、转大写）后存入固定 53 个桶的哈希表，
//! 支持插入、成员判断，并输出桶分布统计（最短/平均/最长链长与效率因子）。
//!
//! ## 主要特性
//! - 固定桶数，不扩容、不删除
//! - 带元音与词尾加权的多项式滚动哈希
//! - 桶分布统计报告
//! - 哈希权重的进化搜索调优
//!
//! ## 快速开始
//!
//! ```rust
//! use hash_word_set::WordSet;
//!
//! let mut set = WordSet::new();
//! set.add("testWord");
//! set.add("  testWord!!");
//! assert_eq!(set.len(), 1);
//! println!("{}", set.report());
//! ```

#![warn(clippy::all)]

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}

// 核心模块导出
pub mod corpus;
pub mod error;
pub mod hash;
pub mod normalize;
pub mod set;
pub mod stats;
pub mod sync;
pub mod tuning;
pub mod types;

// 公共接口导出
pub use crate::{
    corpus::split_words,
    error::{Result, WordSetError},
    hash::{default_word_hasher, HashWeights, WeightedPolyHasher, WordHasher},
    normalize::{is_special_char, normalize, SPECIAL_CHARS},
    set::{Chain, WordSet, WordSetConfig, DEFAULT_CONFIG},
    stats::{
        export_prometheus, operation_snapshot, reset_stats, BucketStats, StatsRecorder,
    },
    sync::SharedWordSet,
    tuning::{GenerationRecord, Logbook, TunerConfig, TuningOutcome, WeightTuner},
    types::{OperationType, BUCKETS},
};
