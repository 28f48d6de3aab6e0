//! 单词集合模块 - 桶数组与冲突链

pub mod chain;
pub mod word_set;

pub use chain::Chain;
pub use word_set::{WordSet, WordSetConfig};

use once_cell::sync::Lazy;

/// 全局默认配置
pub static DEFAULT_CONFIG: Lazy<WordSetConfig> = Lazy::new(WordSetConfig::default);
