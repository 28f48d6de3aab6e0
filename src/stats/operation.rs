// src/stats/operation.rs
//! 操作统计 - 跟踪单词集合的操作次数

use crate::types::OperationType;
use std::sync::atomic::{AtomicU64, Ordering};

/// 操作统计接口
pub trait OperationRecorder: Send + Sync {
    /// 记录一次操作
    fn record(&self, op_type: OperationType);

    /// 获取操作统计快照
    fn snapshot(&self) -> OperationStatsSnapshot;

    /// 重置统计
    fn reset(&self);

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String;
}

/// 操作统计快照
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperationStatsSnapshot {
    pub insert_count: u64,
    pub duplicate_count: u64,
    pub contains_count: u64,
    pub statistics_count: u64,
}

impl OperationStatsSnapshot {
    pub fn count(&self, op_type: OperationType) -> u64 {
        match op_type {
            OperationType::Insert => self.insert_count,
            OperationType::Duplicate => self.duplicate_count,
            OperationType::Contains => self.contains_count,
            OperationType::Statistics => self.statistics_count,
        }
    }
}

/// 原子操作统计
#[derive(Debug, Default)]
pub struct AtomicOperationStats {
    insert_count: AtomicU64,
    duplicate_count: AtomicU64,
    contains_count: AtomicU64,
    statistics_count: AtomicU64,
}

impl AtomicOperationStats {
    /// 创建新统计
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, op_type: OperationType) -> &AtomicU64 {
        match op_type {
            OperationType::Insert => &self.insert_count,
            OperationType::Duplicate => &self.duplicate_count,
            OperationType::Contains => &self.contains_count,
            OperationType::Statistics => &self.statistics_count,
        }
    }
}

impl OperationRecorder for AtomicOperationStats {
    fn record(&self, op_type: OperationType) {
        self.counter(op_type).fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot {
            insert_count: self.insert_count.load(Ordering::Relaxed),
            duplicate_count: self.duplicate_count.load(Ordering::Relaxed),
            contains_count: self.contains_count.load(Ordering::Relaxed),
            statistics_count: self.statistics_count.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        for op in OperationType::ALL {
            self.counter(op).store(0, Ordering::Relaxed);
        }
    }

    fn export_prometheus(&self) -> String {
        let mut output = String::new();
        for op in OperationType::ALL {
            let count = self.counter(op).load(Ordering::Relaxed);
            output.push_str(&format!(
                "# TYPE word_set_operation_{}_count counter\nword_set_operation_{}_count {}\n",
                op.name(),
                op.name(),
                count
            ));
        }
        output
    }
}
