use log::{debug, trace};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion
///
/// The frontier is a binary heap without decrease-key. An improved distance
/// pushes a fresh entry and the superseded one is skipped when popped. Among
/// nodes at equal distance the lowest index is finalized first.
///
/// Edge weights must be non-negative; [`crate::WeightedGraph`] refuses
/// negative weights on insertion. A relaxation whose sum would exceed
/// `W::max_value()` is skipped, so a node only reachable through such a
/// path stays unreached.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    /// Stop as soon as this node is finalized
    target: Option<usize>,
}

impl Dijkstra {
    /// Creates a Dijkstra instance that explores every reachable node
    pub fn new() -> Self {
        Dijkstra { target: None }
    }

    /// Stop once `target` is finalized instead of exploring everything
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Runs the search from `source`
    ///
    /// Fails with [`Error::InvalidNode`] when `source` or the target is not a
    /// node of `graph`.
    pub fn search<W, G>(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        if !graph.has_node(source) {
            return Err(Error::InvalidNode(source));
        }
        if let Some(target) = self.target {
            if !graph.has_node(target) {
                return Err(Error::InvalidNode(target));
            }
        }

        let n = graph.node_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut settled = 0;
        let mut stale = 0;

        distances[source] = Some(W::zero());

        let mut frontier = MinQueue::with_capacity(n);
        frontier.push(source, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            if finalized[u] {
                stale += 1;
                continue;
            }
            finalized[u] = true;
            settled += 1;
            trace!("Finalized node {} at distance {:?}", u, dist_u);

            if self.target == Some(u) {
                break;
            }

            for edge in graph.out_edges(u) {
                let v = edge.to;
                if finalized[v] {
                    continue;
                }

                let Some(new_dist) = dist_u.checked_sum(edge.weight) else {
                    trace!("Skipping edge {} -> {}: distance overflows", u, v);
                    continue;
                };
                let improves = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };

                if improves {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    frontier.push(v, new_dist);
                }
            }

            if settled == n {
                break;
            }
        }

        debug!(
            "Dijkstra from {}: {} of {} nodes settled, {} stale frontier entries skipped, {} left",
            source,
            settled,
            n,
            stale,
            frontier.len()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            finalized,
            source,
            target: self.target,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.search(graph, source)
    }
}
