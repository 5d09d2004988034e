use log::warn;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// Both vectors are indexed by node. When the run stopped early at a
/// target, only finalized nodes (see [`ShortestPathResult::is_finalized`])
/// are guaranteed to hold their true distance; the rest are tentative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each node, `None` when never reached
    pub distances: Vec<Option<W>>,

    /// Predecessor of each node on a cheapest path, `None` for the source and unreached nodes
    pub predecessors: Vec<Option<usize>>,

    /// Nodes whose distance was proven minimal
    pub finalized: Vec<bool>,

    /// Source node index
    pub source: usize,

    /// Early-exit target, if the run was restricted to one
    pub target: Option<usize>,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    pub fn distance(&self, node: usize) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    pub fn is_finalized(&self, node: usize) -> bool {
        self.finalized.get(node).copied().unwrap_or(false)
    }

    /// Number of nodes with a known distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Distances with unreached nodes mapped to `W::max_value()`
    pub fn distances_or_max(&self) -> Vec<W> {
        self.distances
            .iter()
            .map(|d| d.unwrap_or_else(W::max_value))
            .collect()
    }

    /// Nodes on the recorded path from the source to `target`, both inclusive
    ///
    /// Returns `None` when `target` is unknown or was never reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            // A predecessor chain never revisits a node, so it is shorter than the node count.
            if path.len() > self.predecessors.len() {
                warn!("Predecessor chain from {} does not reach source {}", target, self.source);
                return None;
            }
            current = self.predecessors[current]?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from `source`
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
