//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use scour::CorruptionPlan;

/// Scour: benchmark data cleaning strategies on a tabular dataset
#[derive(Parser)]
#[command(name = "scour")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Corrupt a dataset, clean it with every strategy, and rank the results
    Run {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Regression target column
        #[arg(short, long, default_value = "quality")]
        target: String,

        #[command(flatten)]
        plan: PlanArgs,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Corrupt a dataset and write the dirty copy to a file
    Corrupt {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the dirty data (default: <file>.dirty.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Regression target column
        #[arg(short, long, default_value = "quality")]
        target: String,

        #[command(flatten)]
        plan: PlanArgs,
    },
}

/// Corruption plan overrides shared by subcommands.
#[derive(Args)]
pub struct PlanArgs {
    /// Fraction of feature cells to blank out
    #[arg(long, default_value_t = 0.05)]
    pub missing_rate: f64,

    /// Standard deviation of Gaussian noise added to feature cells
    #[arg(long, default_value_t = 0.02)]
    pub noise_std: f64,

    /// Number of duplicate rows to append
    #[arg(long, default_value_t = 50)]
    pub duplicates: usize,

    /// Fraction of rows to receive an outlier
    #[arg(long, default_value_t = 0.03)]
    pub outlier_rate: f64,

    /// Multiplier applied to outlier cells
    #[arg(long, default_value_t = 6.0)]
    pub outlier_multiplier: f64,

    /// RNG seed for reproducible corruption
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl PlanArgs {
    pub fn to_plan(&self) -> CorruptionPlan {
        CorruptionPlan {
            missing_rate: self.missing_rate,
            noise_std: self.noise_std,
            n_duplicates: self.duplicates,
            outlier_rate: self.outlier_rate,
            outlier_multiplier: self.outlier_multiplier,
            seed: self.seed,
        }
    }
}
