//! CLI argument structures for the `reagent` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cross-repository structural clone detection over pre-parsed method ASTs.
#[derive(Parser)]
#[command(name = "reagent")]
#[command(version = VERSION)]
#[command(about = "Cross-repository structural clone detection over pre-parsed method ASTs")]
#[command(long_about = "
Detects duplicated code across one or two already-parsed repositories.

Common usage:

  # Exact duplicates within a single repository
  reagent analyze --algorithm oxygen repo.json

  # Exact duplicates shared between two repositories
  reagent analyze --algorithm chlorine repo-a.json repo-b.json

  # Approximate (near-)duplicates shared between two repositories
  reagent analyze --algorithm iodine repo-a.json repo-b.json
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a clone-detection analysis
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Which algorithm to run
    #[arg(short, long, value_enum)]
    pub algorithm: AlgorithmArg,

    /// Module-list JSON file(s) to analyze: one for Oxygen, one or two for
    /// Chlorine, exactly two for Iodine
    #[arg(required = true, num_args = 1..=2)]
    pub repos: Vec<PathBuf>,

    /// Output file path (defaults to a timestamped `clones_<timestamp>.json`
    /// in the current directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Suppress the human-readable summary; still writes the JSON output
    #[arg(short, long)]
    pub quiet: bool,
}

/// The CLI-facing mirror of [`reagent::model::Algorithm`], kept separate so
/// the model crate stays free of a `clap` dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Single-repo exact duplicate detection by subtree hash.
    Oxygen,
    /// Cross-repo exact duplicate detection by subtree hash.
    Chlorine,
    /// Cross-repo approximate detection via anti-unification.
    Iodine,
}

impl From<AlgorithmArg> for reagent::model::Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Oxygen => Self::Oxygen,
            AlgorithmArg::Chlorine => Self::Chlorine,
            AlgorithmArg::Iodine => Self::Iodine,
        }
    }
}
