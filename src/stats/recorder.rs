// src/stats/recorder.rs
//! 统计记录器接口 - 定义统一统计API

use crate::{
    stats::operation::{AtomicOperationStats, OperationRecorder, OperationStatsSnapshot},
    types::OperationType,
};

/// 统计记录器特征
pub trait StatsRecorder: Send + Sync {
    /// 记录操作
    fn record_operation(&self, op_type: OperationType);

    /// 获取操作统计快照
    fn operation_stats_snapshot(&self) -> OperationStatsSnapshot;

    /// 重置所有统计
    fn reset(&self);

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String;
}

/// 默认统计记录器实现
#[derive(Debug, Default)]
pub struct DefaultStatsRecorder {
    operation: AtomicOperationStats,
}

impl DefaultStatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsRecorder for DefaultStatsRecorder {
    fn record_operation(&self, op_type: OperationType) {
        self.operation.record(op_type);
    }

    fn operation_stats_snapshot(&self) -> OperationStatsSnapshot {
        self.operation.snapshot()
    }

    fn reset(&self) {
        self.operation.reset();
    }

    fn export_prometheus(&self) -> String {
        self.operation.export_prometheus()
    }
}

/// 禁用统计，所有记录为空操作
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStatsRecorder;

impl StatsRecorder for DisabledStatsRecorder {
    fn record_operation(&self, _op_type: OperationType) {}

    fn operation_stats_snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot::default()
    }

    fn reset(&self) {}

    fn export_prometheus(&self) -> String {
        String::new()
    }
}
