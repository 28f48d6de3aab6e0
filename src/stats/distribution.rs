//! 桶分布统计 - 链长极值、截断平均值与效率因子

use crate::types::BUCKETS;
use std::fmt;

/// 桶分布统计快照
#[derive(Debug, Clone, PartialEq)]
pub struct BucketStats {
    pub size: usize,
    pub min_length: usize,
    /// `size / BUCKETS` 向下取整
    pub avg_length: usize,
    pub max_length: usize,
    pub efficiency_factor: f64,
}

impl BucketStats {
    /// 由各桶链长计算统计
    ///
    /// 效率因子是链长围绕截断整数平均值（而非真实均值）的方差。
    /// 注意：截断是有意为之还是缺陷尚无定论，结果须与既有度量逐位一致，不要改成真实均值。
    pub fn from_lengths(size: usize, lengths: &[usize]) -> Self {
        let avg_length = size / BUCKETS;
        let min_length = lengths.iter().copied().min().unwrap_or(0);
        let max_length = lengths.iter().copied().max().unwrap_or(0);

        let mut efficiency_factor = 0.0;
        for &len in lengths {
            let diff = (len as i64 - avg_length as i64) as f64;
            efficiency_factor += diff * diff;
        }
        efficiency_factor /= BUCKETS as f64;

        Self {
            size,
            min_length,
            avg_length,
            max_length,
            efficiency_factor,
        }
    }
}

impl fmt::Display for BucketStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size = {}", self.size)?;
        writeln!(f, "minLength = {}", self.min_length)?;
        writeln!(f, "avgLength = {}", self.avg_length)?;
        writeln!(f, "maxLength = {}", self.max_length)?;
        // Debug 格式保证整数值带 ".0"
        write!(f, "efficiencyFactor = {:?}", self.efficiency_factor)
    }
}
