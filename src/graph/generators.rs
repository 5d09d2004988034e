use crate::graph::WeightedGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with `n` nodes and about `edge_factor * n` edges
///
/// Weights are drawn uniformly from `1..=max_weight`. Self-loops are skipped,
/// parallel edges are kept. Node payloads are the node indices.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> WeightedGraph<usize, u64> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = WeightedGraph::with_capacity(n);
    for i in 0..n {
        graph.add_node(i);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=max_weight));
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 8-connectivity
///
/// Cardinal moves cost 1.0 and diagonal moves 1.4. Node payloads are
/// `(x, y)` coordinates and the node index is `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> WeightedGraph<(usize, usize), OrderedFloat<f64>> {
    let mut graph = WeightedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_node((x, y));
        }
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(node, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}
