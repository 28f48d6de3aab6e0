//! 单词集合核心实现

use crate::{
    error::Result,
    hash::{HashWeights, WeightedPolyHasher, WordHasher},
    normalize::normalize,
    set::chain::Chain,
    stats::{BucketStats, DefaultStatsRecorder, DisabledStatsRecorder, StatsRecorder},
    types::{OperationType, BUCKETS},
};
use std::{fmt, sync::Arc};

/// 单词集合配置
#[derive(Clone, Debug)]
pub struct WordSetConfig {
    /// 哈希权重
    pub weights: HashWeights,
    /// 是否记录操作计数
    pub record_stats: bool,
}

impl Default for WordSetConfig {
    fn default() -> Self {
        Self {
            weights: HashWeights::default(),
            record_stats: true,
        }
    }
}

impl WordSetConfig {
    pub fn with_weights(weights: HashWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }
}

/// 基于分离链接的单词集合
///
/// 桶数固定为 [`BUCKETS`]，只增不减。非线程安全，跨线程使用见
/// [`SharedWordSet`](crate::SharedWordSet)。
pub struct WordSet {
    buckets: Vec<Chain>,
    size: usize,
    hasher: Box<dyn WordHasher>,
    stats: Arc<dyn StatsRecorder>,
}

impl WordSet {
    /// 创建默认配置的空集合
    pub fn new() -> Self {
        Self::from_parts(
            Box::new(WeightedPolyHasher::default()),
            Arc::new(DefaultStatsRecorder::new()),
        )
    }

    /// 按配置创建空集合
    pub fn with_config(config: WordSetConfig) -> Result<Self> {
        let stats: Arc<dyn StatsRecorder> = if config.record_stats {
            Arc::new(DefaultStatsRecorder::new())
        } else {
            Arc::new(DisabledStatsRecorder)
        };
        Self::with_recorder(config, stats)
    }

    /// 按配置创建空集合，操作计数写入给定记录器
    pub fn with_recorder(config: WordSetConfig, stats: Arc<dyn StatsRecorder>) -> Result<Self> {
        let hasher = WeightedPolyHasher::new(config.weights)?;
        crate::log_debug!("WordSet created with weights {}", config.weights);
        Ok(Self::from_parts(Box::new(hasher), stats))
    }

    /// 使用自定义哈希策略创建空集合
    ///
    /// 哈希策略返回的桶位置必须小于 [`BUCKETS`]。
    pub fn with_hasher(hasher: Box<dyn WordHasher>) -> Self {
        Self::from_parts(hasher, Arc::new(DefaultStatsRecorder::new()))
    }

    fn from_parts(hasher: Box<dyn WordHasher>, stats: Arc<dyn StatsRecorder>) -> Self {
        Self {
            buckets: vec![Chain::new(); BUCKETS],
            size: 0,
            hasher,
            stats,
        }
    }

    /// 插入单词（先规范化），返回是否新增
    ///
    /// 已存在时不做任何修改。任何输入都被接受，包括规范化后为空的单词。
    pub fn add(&mut self, word: &str) -> bool {
        let norm_word = normalize(word);
        if self.contains_normalized(&norm_word) {
            self.stats.record_operation(OperationType::Duplicate);
            return false;
        }
        let h = self.hasher.bucket_of(&norm_word);
        self.buckets[h].push_front(norm_word);
        self.size += 1;
        self.stats.record_operation(OperationType::Insert);
        true
    }

    /// 批量插入，返回新增单词数
    pub fn add_all<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.add(word.as_ref()))
            .count()
    }

    /// 判断原始单词（规范化后）是否存在
    pub fn contains(&self, word: &str) -> bool {
        self.stats.record_operation(OperationType::Contains);
        self.contains_normalized(&normalize(word))
    }

    /// 判断已规范化的单词是否存在，只扫描其目标桶
    pub fn contains_normalized(&self, word: &str) -> bool {
        let h = self.hasher.bucket_of(word);
        self.buckets[h].contains(word)
    }

    /// 不同规范化单词的数量
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// 当前哈希权重
    pub fn weights(&self) -> HashWeights {
        self.hasher.weights()
    }

    /// 单词所在桶位置（先规范化）
    pub fn bucket_of(&self, word: &str) -> usize {
        self.hasher.bucket_of(&normalize(word))
    }

    /// 各桶链长
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Chain::len).collect()
    }

    /// 各桶内容，链头在前
    pub fn buckets(&self) -> Vec<Vec<String>> {
        self.buckets
            .iter()
            .map(|chain| chain.iter().map(str::to_string).collect())
            .collect()
    }

    /// 计算桶分布统计
    pub fn statistics(&self) -> BucketStats {
        self.stats.record_operation(OperationType::Statistics);
        BucketStats::from_lengths(self.size, &self.chain_lengths())
    }

    /// 生成文本报告
    pub fn report(&self) -> String {
        self.statistics().to_string()
    }

    /// 操作计数记录器
    pub fn stats_recorder(&self) -> &Arc<dyn StatsRecorder> {
        &self.stats
    }
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordSet")
            .field("size", &self.size)
            .field("buckets", &self.buckets.len())
            .field("weights", &self.hasher.weights())
            .finish()
    }
}

impl fmt::Display for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = BucketStats::from_lengths(self.size, &self.chain_lengths());
        fmt::Display::fmt(&stats, f)
    }
}

impl<S: AsRef<str>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = WordSet::new();
        set.add_all(iter);
        set
    }
}
