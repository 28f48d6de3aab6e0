// src/set/chain.rs
//! 链实现 - 单个桶内的冲突链

use std::fmt;

/// 桶内的单词链
///
/// 用向量存放，向量尾部即链头：最近插入的单词最先被遍历。
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Chain {
    words: Vec<String>,
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chain(len: {})", self.words.len())
    }
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在链中查找单词
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// 插入到链头，不检查重复
    pub fn push_front(&mut self, word: String) {
        self.words.push(word);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// 从链头开始遍历
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().rev().map(String::as_str)
    }

    /// 链头单词
    pub fn head(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }
}
