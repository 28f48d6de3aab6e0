//! 调优日志 - 每代适应度统计

use std::fmt;

/// 单代适应度统计
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    pub generation: usize,
    /// 本代重新评估的个体数
    pub evaluations: usize,
    pub min: f64,
    pub avg: f64,
    /// 总体标准差
    pub std: f64,
    pub max: f64,
}

impl GenerationRecord {
    pub fn from_fitnesses(generation: usize, evaluations: usize, fitnesses: &[f64]) -> Self {
        let n = fitnesses.len().max(1) as f64;
        let min = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
        let max = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = fitnesses.iter().sum::<f64>() / n;
        let var = fitnesses.iter().map(|f| (f - avg) * (f - avg)).sum::<f64>() / n;
        Self {
            generation,
            evaluations,
            min,
            avg,
            std: var.sqrt(),
            max,
        }
    }
}

/// 调优日志
#[derive(Debug, Clone, Default)]
pub struct Logbook {
    records: Vec<GenerationRecord>,
}

impl Logbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: GenerationRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 各代平均适应度
    pub fn averages(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.avg).collect()
    }
}

impl fmt::Display for Logbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "gen\tevals\tmin\tavg\tstd\tmax")?;
        for r in &self.records {
            writeln!(
                f,
                "{}\t{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
                r.generation, r.evaluations, r.min, r.avg, r.std, r.max
            )?;
        }
        Ok(())
    }
}
