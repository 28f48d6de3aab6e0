//! 调优配置

use crate::error::{Result, WordSetError};

/// 权重调优配置
#[derive(Clone, Debug)]
pub struct TunerConfig {
    /// 种群大小
    pub population_size: usize,
    /// 最大代数
    pub max_generations: usize,
    /// 锦标赛规模
    pub tournament_size: usize,
    /// 两两交叉的概率
    pub crossover_prob: f64,
    /// 个体变异的概率
    pub mutation_prob: f64,
    /// 变异时每个基因被修改的概率
    pub gene_mutation_prob: f64,
    /// 混合交叉的扩展系数
    pub blend_alpha: f64,
    /// 单次变异的最大步长
    pub mutation_step: u32,
    /// 基因取值下界（含）
    pub gene_min: u32,
    /// 基因取值上界（含）
    pub gene_max: u32,
    /// 平均适应度变化小于该值视为停滞
    pub convergence_threshold: f64,
    /// 连续停滞多少代后停止
    pub convergence_generations: usize,
    /// 初始种群是否包含默认权重
    pub include_default: bool,
    /// 随机种子
    pub seed: u64,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            tournament_size: 3,
            crossover_prob: 0.5,
            mutation_prob: 0.4,
            gene_mutation_prob: 0.2,
            blend_alpha: 0.5,
            mutation_step: 3,
            gene_min: 1,
            gene_max: 100,
            convergence_threshold: 0.01,
            convergence_generations: 5,
            include_default: true,
            seed: 42,
        }
    }
}

impl TunerConfig {
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(WordSetError::InvalidTunerConfig {
                reason: reason.to_string(),
            })
        };

        if self.population_size < 2 {
            return invalid("population_size must be at least 2");
        }
        if self.max_generations == 0 {
            return invalid("max_generations must be positive");
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return invalid("tournament_size must be in [1, population_size]");
        }
        for (name, p) in [
            ("crossover_prob", self.crossover_prob),
            ("mutation_prob", self.mutation_prob),
            ("gene_mutation_prob", self.gene_mutation_prob),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(WordSetError::InvalidTunerConfig {
                    reason: format!("{} must be in [0, 1], got {}", name, p),
                });
            }
        }
        if !(self.blend_alpha >= 0.0) {
            return invalid("blend_alpha must be non-negative");
        }
        if self.gene_min == 0 || self.gene_min > self.gene_max {
            return invalid("gene range must satisfy 1 <= gene_min <= gene_max");
        }
        if !(self.convergence_threshold >= 0.0) {
            return invalid("convergence_threshold must be non-negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TunerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let cases = [
            TunerConfig { population_size: 1, ..TunerConfig::default() },
            TunerConfig { max_generations: 0, ..TunerConfig::default() },
            TunerConfig { tournament_size: 51, ..TunerConfig::default() },
            TunerConfig { crossover_prob: 1.5, ..TunerConfig::default() },
            TunerConfig { mutation_prob: f64::NAN, ..TunerConfig::default() },
            TunerConfig { gene_min: 0, ..TunerConfig::default() },
            TunerConfig { gene_min: 10, gene_max: 5, ..TunerConfig::default() },
            TunerConfig { blend_alpha: -1.0, ..TunerConfig::default() },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(WordSetError::InvalidTunerConfig { .. })),
                "{:?}",
                config
            );
        }
    }
}
