//! 统计模块 - 桶分布统计与操作计数

pub mod distribution;
pub mod operation;
pub mod recorder;

use std::sync::Arc;

pub use distribution::BucketStats;
pub use operation::{AtomicOperationStats, OperationRecorder, OperationStatsSnapshot};
pub use recorder::{DefaultStatsRecorder, DisabledStatsRecorder, StatsRecorder};

use crate::types::OperationType;

/// 全局统计记录器
pub static GLOBAL_STATS: once_cell::sync::Lazy<Arc<dyn StatsRecorder>> =
    once_cell::sync::Lazy::new(|| Arc::new(DefaultStatsRecorder::new()));

/// 记录操作统计
pub fn record_operation(op_type: OperationType) {
    GLOBAL_STATS.record_operation(op_type);
}

/// 获取操作统计快照
pub fn operation_snapshot() -> OperationStatsSnapshot {
    GLOBAL_STATS.operation_stats_snapshot()
}

/// 重置所有统计
pub fn reset_stats() {
    GLOBAL_STATS.reset();
}

/// 导出Prometheus格式指标
pub fn export_prometheus() -> String {
    GLOBAL_STATS.export_prometheus()
}
