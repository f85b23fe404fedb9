//! Single-objective shortest paths.
//!
//! Vector edge weights are scalarized (component sum, or a dot product
//! with configured coefficients). The search then runs Dijkstra's
//! algorithm from a source to a destination.
//!
//! A destination that cannot be reached is a normal outcome:
//! [`DijkstraRunner::run`] returns `Ok(None)`.
//!
//! # References
//!
//! - Dijkstra (1959), "A note on two problems in connexion with graphs"

mod config;
mod dijkstra;
mod types;

pub use config::DijkstraConfig;
pub use dijkstra::DijkstraRunner;
pub use types::ShortestPath;
