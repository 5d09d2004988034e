//! Puzzle solvers built on the graph core
//!
//! Each module parses its own input format, builds a [`crate::WeightedGraph`]
//! from the puzzle's adjacency rules, and answers with [`crate::Dijkstra`].

pub mod blizzard_basin;
pub mod hill_climb;
pub mod valve_network;

use crate::Error;

/// Builds a parse error for the 1-based `line`
pub(crate) fn parse_error(line: usize, reason: impl Into<String>) -> Error {
    Error::Parse {
        line,
        reason: reason.into(),
    }
}
