//! 哈希模块 - 统一管理单词哈希相关功能

pub mod strategy;
pub mod weighted;

pub use strategy::WordHasher;
pub use weighted::{HashWeights, WeightedPolyHasher};

/// 默认哈希策略
pub fn default_word_hasher() -> Box<dyn WordHasher> {
    Box::new(WeightedPolyHasher::default())
}

/// 指定权重的哈希策略
pub fn weighted_word_hasher(weights: HashWeights) -> crate::Result<Box<dyn WordHasher>> {
    Ok(Box::new(WeightedPolyHasher::new(weights)?))
}
