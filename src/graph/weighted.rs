use std::ops::Index;

use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A directed weighted edge between two node indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

/// A graph of index-addressed nodes and weighted edges
///
/// Nodes carry an arbitrary payload and are identified by the index returned
/// from [`WeightedGraph::add_node`], not by value: two nodes may hold equal
/// payloads. Edges are kept in one list per source node, parallel edges
/// included.
///
/// An undirected graph (see [`WeightedGraph::new_undirected`]) stores every
/// logical edge as a pair of opposing directed edges and keeps both halves in
/// sync on insertion and removal.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N, W> {
    /// Node payloads in index order
    nodes: Vec<N>,

    /// Outgoing edges for each node, indexed like `nodes`
    outgoing: Vec<Vec<Edge<W>>>,

    /// Total number of directed edges
    edge_count: usize,

    directed: bool,
}

impl<N, W> Default for WeightedGraph<N, W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> WeightedGraph<N, W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        WeightedGraph {
            nodes: Vec::new(),
            outgoing: Vec::new(),
            edge_count: 0,
            directed: true,
        }
    }

    /// Creates a new empty undirected graph
    pub fn new_undirected() -> Self {
        WeightedGraph {
            directed: false,
            ..Self::new()
        }
    }

    /// Creates a new directed graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        WeightedGraph {
            nodes: Vec::with_capacity(nodes),
            outgoing: Vec::with_capacity(nodes),
            edge_count: 0,
            directed: true,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Removes every node and edge, keeping the directedness
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.outgoing.clear();
        self.edge_count = 0;
    }

    /// Appends a node and returns its index
    pub fn add_node(&mut self, value: N) -> usize {
        self.nodes.push(value);
        self.outgoing.push(Vec::new());
        self.nodes.len() - 1
    }

    /// Removes a node together with every edge touching it
    ///
    /// Every node above `node` moves down by one index, and edge endpoints are
    /// renumbered to match. Indices obtained before the call are stale.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn remove_node(&mut self, node: usize) -> N {
        self.check_node("remove_node", node);

        let value = self.nodes.remove(node);
        let dropped = self.outgoing.remove(node);
        self.edge_count -= dropped.len();

        for edges in &mut self.outgoing {
            let before = edges.len();
            edges.retain(|edge| edge.to != node);
            self.edge_count -= before - edges.len();

            for edge in edges.iter_mut() {
                if edge.from > node {
                    edge.from -= 1;
                }
                if edge.to > node {
                    edge.to -= 1;
                }
            }
        }

        value
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn has_node(&self, node: usize) -> bool {
        node < self.nodes.len()
    }

    fn check_node(&self, operation: &str, node: usize) {
        assert!(
            self.has_node(node),
            "{}: node index {} out of range (node count {})",
            operation,
            node,
            self.nodes.len()
        );
    }

    /// Returns the payload of a node
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn node(&self, node: usize) -> &N {
        match self.nodes.get(node) {
            Some(value) => value,
            None => panic!(
                "node index {} out of range (node count {})",
                node,
                self.nodes.len()
            ),
        }
    }

    pub fn get_node(&self, node: usize) -> Option<&N> {
        self.nodes.get(node)
    }

    pub fn get_node_mut(&mut self, node: usize) -> Option<&mut N> {
        self.nodes.get_mut(node)
    }

    /// Node payloads in index order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Adds an edge from `from` to `to`
    ///
    /// In an undirected graph the opposing edge is added as well.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of range or `weight` is negative.
    /// Use [`WeightedGraph::try_add_edge`] to get these as errors instead.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) {
        if let Err(err) = self.try_add_edge(from, to, weight) {
            panic!("add_edge({}, {}): {}", from, to, err);
        }
    }

    /// Adds an edge, reporting bad endpoints and negative weights as errors
    pub fn try_add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_node(from) {
            return Err(Error::InvalidNode(from));
        }
        if !self.has_node(to) {
            return Err(Error::InvalidNode(to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight { from, to });
        }

        self.push_edge(from, to, weight);
        if !self.directed {
            self.push_edge(to, from, weight);
        }
        Ok(())
    }

    fn push_edge(&mut self, from: usize, to: usize, weight: W) {
        self.outgoing[from].push(Edge::new(from, to, weight));
        self.edge_count += 1;
    }

    /// Removes every edge from `from` to `to` and returns how many were removed
    ///
    /// In an undirected graph the opposing edges are removed too and counted.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of range.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> usize {
        self.check_node("remove_edge", from);
        self.check_node("remove_edge", to);

        let mut removed = self.remove_directed_edges(from, to);
        if !self.directed && from != to {
            removed += self.remove_directed_edges(to, from);
        }
        removed
    }

    fn remove_directed_edges(&mut self, from: usize, to: usize) -> usize {
        let edges = &mut self.outgoing[from];
        let before = edges.len();
        edges.retain(|edge| edge.to != to);
        let removed = before - edges.len();
        self.edge_count -= removed;
        removed
    }

    /// Removes the edge at position `index` of [`WeightedGraph::edges`] and returns it
    ///
    /// Positions of the edges after it shift down by one. In an undirected
    /// graph one opposing edge of the same weight goes with it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `edge_count()`.
    pub fn remove_edge_at(&mut self, index: usize) -> Edge<W> {
        assert!(
            index < self.edge_count,
            "remove_edge_at: edge index {} out of range (edge count {})",
            index,
            self.edge_count
        );

        let mut offset = index;
        let mut source = 0;
        while offset >= self.outgoing[source].len() {
            offset -= self.outgoing[source].len();
            source += 1;
        }
        let edge = self.outgoing[source].remove(offset);
        self.edge_count -= 1;

        if !self.directed {
            let twin = self.outgoing[edge.to]
                .iter()
                .position(|other| other.to == edge.from && other.weight == edge.weight);
            if let Some(twin) = twin {
                self.outgoing[edge.to].remove(twin);
                self.edge_count -= 1;
            }
        }
        edge
    }

    /// # Panics
    ///
    /// Panics if either endpoint is out of range.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.check_node("has_edge", from);
        self.check_node("has_edge", to);
        self.outgoing[from].iter().any(|edge| edge.to == to)
    }

    /// Edges leaving `node`
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn out_edges(&self, node: usize) -> impl Iterator<Item = Edge<W>> + '_ {
        self.check_node("out_edges", node);
        self.outgoing[node].iter().copied()
    }

    /// Edges entering `node`, found by scanning every edge list
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn in_edges(&self, node: usize) -> impl Iterator<Item = Edge<W>> + '_ {
        self.check_node("in_edges", node);
        self.edges().filter(move |edge| edge.to == node)
    }

    /// Every directed edge, grouped by source node
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.outgoing.iter().flatten().copied()
    }

    pub fn out_degree(&self, node: usize) -> usize {
        self.check_node("out_degree", node);
        self.outgoing[node].len()
    }

    pub fn in_degree(&self, node: usize) -> usize {
        self.in_edges(node).count()
    }
}

impl<N, W> WeightedGraph<N, W>
where
    N: PartialEq,
    W: Weight,
{
    /// Index of the first node whose payload equals `value`
    pub fn find_node(&self, value: &N) -> Option<usize> {
        self.nodes.iter().position(|node| node == value)
    }
}

impl<N, W> Index<usize> for WeightedGraph<N, W>
where
    W: Weight,
{
    type Output = N;

    fn index(&self, node: usize) -> &N {
        self.node(node)
    }
}

impl<N, W> Graph<W> for WeightedGraph<N, W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn out_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(WeightedGraph::out_edges(self, node))
    }

    fn in_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(WeightedGraph::in_edges(self, node))
    }
}
