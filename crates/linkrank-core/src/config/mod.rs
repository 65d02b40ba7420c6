//! Configuration management

use crate::error::{LinkRankError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Ranking parameters
    #[serde(default)]
    pub rank: RankConfig,

    /// Corpus scanning parameters
    #[serde(default)]
    pub crawl: CrawlConfig,
}

/// Parameters shared by the sampling and iterative estimators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than teleporting
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Number of pages visited by the random surfer
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Maximum per-page change below which iteration stops
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Upper bound on iteration passes
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,

    /// Seed for the random surfer (OS entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Independent walks used by the parallel sampler
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            max_passes: default_max_passes(),
            seed: None,
            workers: default_workers(),
        }
    }
}

fn default_damping() -> f64 {
    0.85
}

fn default_samples() -> usize {
    10_000
}

fn default_tolerance() -> f64 {
    0.001
}

fn default_max_passes() -> usize {
    10_000
}

fn default_workers() -> usize {
    4
}

impl RankConfig {
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override fields from `LINKRANK_DAMPING`, `LINKRANK_SAMPLES` and
    /// `LINKRANK_SEED` when they are set.
    pub fn apply_env(mut self) -> Result<Self> {
        if let Some(damping) = env_var("LINKRANK_DAMPING")? {
            self.damping = damping;
        }
        if let Some(samples) = env_var("LINKRANK_SAMPLES")? {
            self.samples = samples;
        }
        if let Some(seed) = env_var("LINKRANK_SEED")? {
            self.seed = Some(seed);
        }
        Ok(self)
    }

    /// Check the damping factor alone
    pub fn validate_damping(&self) -> Result<()> {
        validate_damping(self.damping)
    }

    /// Check every field
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(LinkRankError::InvalidSampleCount(self.samples));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(LinkRankError::InvalidTolerance(self.tolerance));
        }
        if self.max_passes == 0 {
            return Err(LinkRankError::Config(
                "max_passes must be at least 1".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(LinkRankError::Config(
                "workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if damping.is_finite() && damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(LinkRankError::InvalidDamping(damping))
    }
}

fn env_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| LinkRankError::Config(format!("{} has invalid value {:?}", key, raw))),
        Err(_) => Ok(None),
    }
}

/// Corpus scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Glob pattern for documents, relative to the corpus root
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Directory depth to descend into (1 = corpus root only)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Also crawl dot-files and dot-directories
    #[serde(default)]
    pub include_hidden: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            max_depth: default_max_depth(),
            include_hidden: false,
        }
    }
}

fn default_pattern() -> String {
    "*.html".to_string()
}

fn default_max_depth() -> usize {
    1
}

impl Config {
    /// Load config from `LINKRANK_CONFIG` or the default path, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var("LINKRANK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());
        Self::load_from(&path)?.with_env()
    }

    /// Apply environment overrides to the ranking parameters
    pub fn with_env(mut self) -> Result<Self> {
        self.rank = self.rank.apply_env()?;
        Ok(self)
    }

    /// Load config from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }
}
