//! word-stats - 读取文本，输出单词集合的桶分布统计
//!
//! Usage:
//!   cargo run --features cli --bin word-stats -- books/pride_and_prejudice.txt
//!   cargo run --features cli --bin word-stats -- books/pride_and_prejudice.txt --tune --generations 20

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use hash_word_set::{
    corpus::read_words_from_path,
    stats::GLOBAL_STATS,
    HashWeights, TunerConfig, WeightTuner, WordSet, DEFAULT_CONFIG,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "word-stats")]
#[command(about = "Report how a text's words spread over the hash buckets")]
struct Cli {
    /// Text file to read
    file: PathBuf,

    /// Hash weights as vowel,ending,consonant,frequent
    #[arg(long, value_parser = parse_weights)]
    weights: Option<HashWeights>,

    /// Search for better hash weights after reporting
    #[arg(long)]
    tune: bool,

    /// Maximum generations for --tune
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Population size for --tune
    #[arg(long, default_value_t = 50)]
    population: usize,

    /// Random seed for --tune
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print operation counters in Prometheus format
    #[arg(long)]
    metrics: bool,
}

fn parse_weights(s: &str) -> std::result::Result<HashWeights, String> {
    let genes: Vec<u32> = s
        .split(',')
        .map(|part| part.trim().parse::<u32>().map_err(|e| format!("{}: {}", part, e)))
        .collect::<std::result::Result<_, _>>()?;
    let genes: [u32; 4] = genes
        .try_into()
        .map_err(|_| "expected four comma-separated multipliers".to_string())?;
    let weights = HashWeights::from_genes(genes);
    weights.validate().map_err(|e| e.to_string())?;
    Ok(weights)
}

fn init_logger() {
    Builder::from_env(Env::default().filter_or("RUST_LOG", "warn")).init();
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let mut config = DEFAULT_CONFIG.clone();
    if let Some(weights) = cli.weights {
        config.weights = weights;
    }

    println!("Hello to the Hashing competition!");

    let mut set = WordSet::with_recorder(config, GLOBAL_STATS.clone())?;
    set.extend_from_path(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    println!("{}", set.report());

    if cli.tune {
        let words = read_words_from_path(&cli.file)
            .with_context(|| format!("failed to read {}", cli.file.display()))?;
        let tuner_config = TunerConfig {
            population_size: cli.population,
            max_generations: cli.generations,
            seed: cli.seed,
            ..TunerConfig::default()
        };
        let outcome = WeightTuner::new(tuner_config, words)?.run()?;
        print!("{}", outcome.logbook);
        if outcome.converged {
            println!("Convergence likely reached.");
        }
        println!(
            "Hall of Famer: {}, Fitness: {}",
            outcome.best, outcome.best_fitness
        );
    }

    if cli.metrics {
        print!("{}", hash_word_set::export_prometheus());
    }

    println!("Goodbye!");
    Ok(())
}
