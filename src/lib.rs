//! Elf Paths - weighted graphs and Dijkstra shortest paths
//!
//! A small graph core shared by the daily puzzle solvers: a directed graph
//! generic over node payload and edge weight, and a lazy-deletion Dijkstra
//! with an optional early-exit target.
//!
//! Weights must be non-negative. The graph rejects negative weights when an
//! edge is inserted, so the solver never sees one.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod puzzles;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::{Edge, Graph, Weight, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid node index: {0}")]
    InvalidNode(usize),

    #[error("Negative edge weight: from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("No solution: {0}")]
    Unsolvable(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
