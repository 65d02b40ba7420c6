//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank the pages of an HTML corpus with sampled and iterated PageRank"
)]
pub struct Cli {
    /// Directory containing the corpus documents
    pub corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of pages the random surfer visits
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for the random surfer
    #[arg(long)]
    pub seed: Option<u64>,

    /// Largest per-page change at which iteration stops
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Glob pattern selecting documents inside the corpus
    #[arg(long)]
    pub pattern: Option<String>,

    /// Directory depth to scan (1 = corpus root only)
    #[arg(long)]
    pub depth: Option<usize>,

    /// Config file (defaults to LINKRANK_CONFIG or the user config dir)
    #[arg(long, env = "LINKRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Split sampling across parallel walks
    #[arg(long)]
    pub parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "linkrank", "corpus0", "-d", "0.5", "-n", "20", "--seed", "3", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.corpus, PathBuf::from("corpus0"));
        assert_eq!(cli.damping, Some(0.5));
        assert_eq!(cli.samples, Some(20));
        assert_eq!(cli.seed, Some(3));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_corpus_is_required() {
        assert!(Cli::try_parse_from(["linkrank"]).is_err());
        assert!(Cli::try_parse_from(["linkrank", "a", "b"]).is_err());
    }
}
