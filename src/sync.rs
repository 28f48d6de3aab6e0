//! 共享单词集合 - 在单词集合外层加一把互斥锁
//!
//! 链头插入与并发读取之间没有原子性，因此读写都经过同一把锁。

use crate::{
    error::Result,
    set::{WordSet, WordSetConfig},
    stats::BucketStats,
};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// 可跨线程共享的单词集合
#[derive(Clone, Default)]
pub struct SharedWordSet {
    inner: Arc<Mutex<WordSet>>,
}

impl SharedWordSet {
    pub fn new() -> Self {
        Self::from_set(WordSet::new())
    }

    pub fn with_config(config: WordSetConfig) -> Result<Self> {
        Ok(Self::from_set(WordSet::with_config(config)?))
    }

    pub fn from_set(set: WordSet) -> Self {
        Self {
            inner: Arc::new(Mutex::new(set)),
        }
    }

    pub fn add(&self, word: &str) -> bool {
        self.inner.lock().add(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.inner.lock().contains(word)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn statistics(&self) -> BucketStats {
        self.inner.lock().statistics()
    }

    pub fn report(&self) -> String {
        self.inner.lock().report()
    }

    /// 持有锁访问内部集合
    pub fn lock(&self) -> MutexGuard<'_, WordSet> {
        self.inner.lock()
    }

    /// 唯一持有者时取回内部集合，否则原样返回
    pub fn try_into_inner(self) -> std::result::Result<WordSet, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner()),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl std::fmt::Debug for SharedWordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedWordSet")
            .field("size", &self.len())
            .finish()
    }
}
