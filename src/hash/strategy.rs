//! 哈希策略模块 - 定义单词到桶的映射接口

use crate::{hash::HashWeights, types::BUCKETS};

/// 单词哈希特征
///
/// 输入应当是规范化后的单词，返回值必须落在 `[0, bucket_count())` 内，
/// 且对同一单词始终相同。
pub trait WordHasher: Send + Sync {
    /// 获取单词对应的桶位置
    fn bucket_of(&self, word: &str) -> usize;

    /// 桶数量
    fn bucket_count(&self) -> usize {
        BUCKETS
    }

    /// 当前使用的权重
    fn weights(&self) -> HashWeights;

    /// 批量定位桶位置
    fn locate_batch(&self, words: &[&str]) -> Vec<usize> {
        words.iter().map(|word| self.bucket_of(word)).collect()
    }
}
