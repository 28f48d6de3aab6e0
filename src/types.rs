//! 核心类型定义 - 共享常量与操作类型

use std::fmt;

/// 桶数量，集合生命周期内固定
pub const BUCKETS: usize = 53;

/// 多项式滚动哈希的乘子
pub const HASH_PRIME: u64 = 31;

/// 操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// 插入了新单词
    Insert,
    /// 插入的单词已存在
    Duplicate,
    /// 成员判断
    Contains,
    /// 生成分布统计
    Statistics,
}

impl OperationType {
    pub const ALL: [OperationType; 4] = [
        OperationType::Insert,
        OperationType::Duplicate,
        OperationType::Contains,
        OperationType::Statistics,
    ];

    /// 指标名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Duplicate => "duplicate",
            Self::Contains => "contains",
            Self::Statistics => "statistics",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_unique() {
        let mut names: Vec<_> = OperationType::ALL.iter().map(|op| op.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), OperationType::ALL.len());
        assert_eq!(OperationType::Insert.to_string(), "insert");
    }
}
