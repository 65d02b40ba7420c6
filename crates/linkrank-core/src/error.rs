//! Error types for linkrank

use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("Invalid damping factor {0}: must lie strictly between 0 and 1")]
    InvalidDamping(f64),

    #[error("Invalid sample count {0}: at least one sample is required")]
    InvalidSampleCount(usize),

    #[error("Invalid convergence tolerance {0}: must be a positive finite number")]
    InvalidTolerance(f64),

    #[error("Node not found: {0}")]
    UnknownNode(String),

    #[error("Node links to itself: {0}")]
    SelfLink(String),

    #[error("Link from {source_node} targets unknown node {target}")]
    UnknownTarget { source_node: String, target: String },

    #[error("Iteration did not converge after {passes} passes (max delta {max_delta:e})")]
    NotConverged { passes: usize, max_delta: f64 },

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl LinkRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownNode(_) => exit_codes::NOT_FOUND,
            Self::EmptyGraph
            | Self::InvalidDamping(_)
            | Self::InvalidSampleCount(_)
            | Self::InvalidTolerance(_)
            | Self::SelfLink(_)
            | Self::UnknownTarget { .. }
            | Self::Config(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(LinkRankError::EmptyGraph.exit_code(), exit_codes::INVALID_INPUT);
        assert_eq!(
            LinkRankError::UnknownNode("a.html".into()).exit_code(),
            exit_codes::NOT_FOUND
        );
        assert_eq!(
            LinkRankError::NotConverged {
                passes: 3,
                max_delta: 0.5
            }
            .exit_code(),
            exit_codes::GENERAL_ERROR
        );
    }
}
