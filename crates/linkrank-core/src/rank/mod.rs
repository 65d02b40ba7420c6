//! PageRank estimators
//!
//! Two independent estimates of the same stationary distribution:
//! - [`sample_pagerank`] walks a random surfer through the graph and counts visits
//! - [`iterate_pagerank`] applies the PageRank recurrence until it stops changing
//!
//! Both use the same surfer model, described by [`transition_model`].

mod distribution;
mod iterative;
mod sampling;
mod transition;

pub use distribution::{Distribution, SUM_TOLERANCE};
pub use iterative::{iterate_pagerank, iterate_pagerank_with_report, IterationReport};
#[cfg(feature = "parallel")]
pub use sampling::sample_pagerank_parallel;
pub use sampling::{sample_pagerank, sample_pagerank_seeded};
pub use transition::{transition_model, transition_weights};
