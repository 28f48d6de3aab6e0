//! 遗传算法 - 以效率因子为适应度搜索哈希权重

use crate::{
    error::{Result, WordSetError},
    hash::HashWeights,
    set::{WordSet, WordSetConfig},
    tuning::{
        config::TunerConfig,
        logbook::{GenerationRecord, Logbook},
    },
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

/// 个体：四个乘数及其适应度（未评估为 None）
#[derive(Debug, Clone, PartialEq)]
struct Individual {
    genes: [u32; 4],
    fitness: Option<f64>,
}

impl Individual {
    fn new(genes: [u32; 4]) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    fn weights(&self) -> HashWeights {
        HashWeights::from_genes(self.genes)
    }

    fn score(&self) -> f64 {
        self.fitness.unwrap_or(f64::INFINITY)
    }
}

/// 调优结果
#[derive(Debug, Clone)]
pub struct TuningOutcome {
    /// 历代最优权重
    pub best: HashWeights,
    /// 最优权重的效率因子
    pub best_fitness: f64,
    pub logbook: Logbook,
    /// 是否因平均适应度停滞而提前结束
    pub converged: bool,
}

/// 计算给定权重在语料上的效率因子
pub fn evaluate_weights<S: AsRef<str>>(weights: HashWeights, words: &[S]) -> Result<f64> {
    let config = WordSetConfig {
        weights,
        record_stats: false,
    };
    let mut set = WordSet::with_config(config)?;
    set.add_all(words);
    Ok(set.statistics().efficiency_factor)
}

/// 哈希权重调优器
#[derive(Debug)]
pub struct WeightTuner {
    config: TunerConfig,
    words: Vec<String>,
}

impl WeightTuner {
    pub fn new(config: TunerConfig, words: Vec<String>) -> Result<Self> {
        config.validate()?;
        if words.is_empty() {
            return Err(WordSetError::EmptyCorpus);
        }
        Ok(Self { config, words })
    }

    pub fn config(&self) -> &TunerConfig {
        &self.config
    }

    /// 运行进化搜索
    pub fn run(&self) -> Result<TuningOutcome> {
        let cfg = &self.config;
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let mut population = self.initial_population(&mut rng);
        let mut hall_of_fame: Option<Individual> = None;
        let mut logbook = Logbook::new();
        let mut stagnant = 0;
        let mut converged = false;

        crate::log_info!(
            "tuning over {} words: population={}, generations={}",
            self.words.len(),
            cfg.population_size,
            cfg.max_generations
        );

        for generation in 0..cfg.max_generations {
            let evaluations = self.evaluate_population(&mut population)?;

            for ind in &population {
                let better = hall_of_fame
                    .as_ref()
                    .map_or(true, |best| ind.score() < best.score());
                if better {
                    hall_of_fame = Some(ind.clone());
                }
            }

            let fitnesses: Vec<f64> = population.iter().map(Individual::score).collect();
            let record = GenerationRecord::from_fitnesses(generation, evaluations, &fitnesses);
            crate::log_info!(
                "generation {}: min={:.6} avg={:.6} max={:.6}",
                generation,
                record.min,
                record.avg,
                record.max
            );

            let previous_avg = logbook.last().map(|r| r.avg);
            let current_avg = record.avg;
            logbook.record(record);

            match previous_avg {
                Some(prev) if (current_avg - prev).abs() < cfg.convergence_threshold => stagnant += 1,
                _ => stagnant = 0,
            }
            if stagnant >= cfg.convergence_generations {
                crate::log_info!("convergence reached at generation {}", generation);
                converged = true;
                break;
            }

            if generation + 1 < cfg.max_generations {
                population = self.next_generation(&population, &mut rng);
            }
        }

        let best = hall_of_fame.ok_or(WordSetError::EmptyCorpus)?;
        crate::log_info!("best weights {} fitness {:.6}", best.weights(), best.score());
        Ok(TuningOutcome {
            best: best.weights(),
            best_fitness: best.score(),
            logbook,
            converged,
        })
    }

    fn random_gene(&self, rng: &mut StdRng) -> u32 {
        rng.gen_range(self.config.gene_min..=self.config.gene_max)
    }

    fn clamp_gene(&self, value: f64) -> u32 {
        let min = self.config.gene_min as f64;
        let max = self.config.gene_max as f64;
        value.round().clamp(min, max) as u32
    }

    fn initial_population(&self, rng: &mut StdRng) -> Vec<Individual> {
        let mut population = Vec::with_capacity(self.config.population_size);
        if self.config.include_default {
            let genes = HashWeights::default().genes().map(|g| self.clamp_gene(g as f64));
            population.push(Individual::new(genes));
        }
        while population.len() < self.config.population_size {
            let genes = [
                self.random_gene(rng),
                self.random_gene(rng),
                self.random_gene(rng),
                self.random_gene(rng),
            ];
            population.push(Individual::new(genes));
        }
        population
    }

    /// 并行评估未评估的个体，返回评估数量
    fn evaluate_population(&self, population: &mut [Individual]) -> Result<usize> {
        let words = self.words.as_slice();
        let pending = population.iter().filter(|ind| ind.fitness.is_none()).count();
        population
            .par_iter_mut()
            .filter(|ind| ind.fitness.is_none())
            .try_for_each(|ind| -> Result<()> {
                ind.fitness = Some(evaluate_weights(ind.weights(), words)?);
                Ok(())
            })?;
        Ok(pending)
    }

    /// 锦标赛选择
    fn select(&self, population: &[Individual], rng: &mut StdRng) -> Vec<Individual> {
        (0..population.len())
            .map(|_| {
                let mut winner = &population[rng.gen_range(0..population.len())];
                for _ in 1..self.config.tournament_size {
                    let challenger = &population[rng.gen_range(0..population.len())];
                    if challenger.score() < winner.score() {
                        winner = challenger;
                    }
                }
                winner.clone()
            })
            .collect()
    }

    /// 混合交叉
    fn mate(&self, a: &mut Individual, b: &mut Individual, rng: &mut StdRng) {
        let alpha = self.config.blend_alpha;
        for i in 0..a.genes.len() {
            let gamma = (1.0 + 2.0 * alpha) * rng.gen::<f64>() - alpha;
            let x1 = a.genes[i] as f64;
            let x2 = b.genes[i] as f64;
            a.genes[i] = self.clamp_gene((1.0 - gamma) * x1 + gamma * x2);
            b.genes[i] = self.clamp_gene(gamma * x1 + (1.0 - gamma) * x2);
        }
        a.fitness = None;
        b.fitness = None;
    }

    /// 随机步长变异
    fn mutate(&self, ind: &mut Individual, rng: &mut StdRng) {
        let step = self.config.mutation_step as i64;
        for gene in ind.genes.iter_mut() {
            if rng.gen_bool(self.config.gene_mutation_prob) {
                let delta = if step == 0 { 0 } else { rng.gen_range(-step..=step) };
                *gene = self.clamp_gene((*gene as i64 + delta) as f64);
            }
        }
        ind.fitness = None;
    }

    fn next_generation(&self, population: &[Individual], rng: &mut StdRng) -> Vec<Individual> {
        let mut offspring = self.select(population, rng);

        for i in (1..offspring.len()).step_by(2) {
            if rng.gen_bool(self.config.crossover_prob) {
                let (left, right) = offspring.split_at_mut(i);
                self.mate(&mut left[i - 1], &mut right[0], rng);
            }
        }
        for ind in offspring.iter_mut() {
            if rng.gen_bool(self.config.mutation_prob) {
                self.mutate(ind, rng);
            }
        }
        offspring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        "it is a truth universally acknowledged that a single man in possession \
         of a good fortune must be in want of a wife however little known the \
         feelings or views of such a man may be on his first entering a neighbourhood"
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn small_config() -> TunerConfig {
        TunerConfig {
            population_size: 8,
            max_generations: 4,
            convergence_generations: 10,
            ..TunerConfig::default()
        }
    }

    #[test]
    fn test_evaluate_weights_matches_set() {
        let words = corpus();
        let mut set = WordSet::new();
        set.add_all(&words);
        let fitness = evaluate_weights(HashWeights::default(), &words[..]).unwrap();
        assert_eq!(fitness, set.statistics().efficiency_factor);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let err = WeightTuner::new(TunerConfig::default(), Vec::new()).unwrap_err();
        assert!(matches!(err, WordSetError::EmptyCorpus));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TunerConfig {
            population_size: 0,
            ..TunerConfig::default()
        };
        assert!(WeightTuner::new(config, corpus()).is_err());
    }

    #[test]
    fn test_run_never_worse_than_default() {
        let words = corpus();
        let default_fitness = evaluate_weights(HashWeights::default(), &words[..]).unwrap();
        let tuner = WeightTuner::new(small_config(), words).unwrap();
        let outcome = tuner.run().unwrap();
        assert!(outcome.best_fitness <= default_fitness);
        assert_eq!(outcome.logbook.len(), 4);
        assert!(!outcome.converged);
        let overall_min = outcome
            .logbook
            .records()
            .iter()
            .map(|r| r.min)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(outcome.best_fitness, overall_min);
        assert_eq!(outcome.logbook.records()[0].evaluations, 8);
    }

    #[test]
    fn test_run_is_deterministic() {
        let a = WeightTuner::new(small_config(), corpus()).unwrap().run().unwrap();
        let b = WeightTuner::new(small_config(), corpus()).unwrap().run().unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.logbook.records(), b.logbook.records());
    }

    #[test]
    fn test_converges_on_flat_landscape() {
        // 单个单词时任何权重的效率因子都是 1/53
        let config = TunerConfig {
            population_size: 6,
            max_generations: 50,
            convergence_generations: 5,
            ..TunerConfig::default()
        };
        let outcome = WeightTuner::new(config, vec!["word".to_string()])
            .unwrap()
            .run()
            .unwrap();
        assert!(outcome.converged);
        assert_eq!(outcome.logbook.len(), 6);
        assert_eq!(outcome.best_fitness, 1.0 / 53.0);
    }

    #[test]
    fn test_genes_stay_in_range() {
        let tuner = WeightTuner::new(
            TunerConfig {
                gene_min: 2,
                gene_max: 9,
                mutation_step: 20,
                ..small_config()
            },
            corpus(),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut population = tuner.initial_population(&mut rng);
        tuner.evaluate_population(&mut population).unwrap();
        for _ in 0..10 {
            population = tuner.next_generation(&population, &mut rng);
            tuner.evaluate_population(&mut population).unwrap();
            for ind in &population {
                assert!(ind.genes.iter().all(|g| (2..=9).contains(g)), "{:?}", ind.genes);
            }
        }
    }
}
