use elf_paths::graph::generators::generate_random;
use elf_paths::{Dijkstra, WeightedGraph};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn build(n: usize, edges: &[(usize, usize, u32)]) -> WeightedGraph<(), u32> {
    let mut graph = WeightedGraph::new();
    for _ in 0..n {
        graph.add_node(());
    }
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight);
    }
    graph
}

// Cheapest simple path from `node` to every node, by exhaustive search
fn brute_force(
    graph: &WeightedGraph<(), u32>,
    node: usize,
    cost: u32,
    on_path: &mut [bool],
    best: &mut [Option<u32>],
) {
    if best[node].map_or(true, |b| cost < b) {
        best[node] = Some(cost);
    }
    on_path[node] = true;
    for edge in graph.out_edges(node) {
        if !on_path[edge.to] {
            brute_force(graph, edge.to, cost + edge.weight, on_path, best);
        }
    }
    on_path[node] = false;
}

// Relax every edge n times
fn bellman_ford(graph: &WeightedGraph<usize, u64>, source: usize) -> Vec<Option<u64>> {
    let mut dist = vec![None; graph.node_count()];
    dist[source] = Some(0);
    for _ in 0..graph.node_count() {
        for edge in graph.edges() {
            if let Some(d) = dist[edge.from] {
                let candidate = d + edge.weight;
                if dist[edge.to].map_or(true, |current| candidate < current) {
                    dist[edge.to] = Some(candidate);
                }
            }
        }
    }
    dist
}

fn small_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..7).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n, 0u32..20), 0..20)))
}

proptest! {
    #[test]
    fn distances_match_exhaustive_search((n, edges) in small_graph(), source in 0usize..7) {
        let source = source % n;
        let graph = build(n, &edges);

        let mut expected = vec![None; n];
        brute_force(&graph, source, 0, &mut vec![false; n], &mut expected);

        let result = Dijkstra::new().search(&graph, source).unwrap();
        prop_assert_eq!(&result.distances, &expected);
        prop_assert_eq!(result.distance(source), Some(0));
        prop_assert_eq!(result.predecessors[source], None);

        for target in 0..n {
            match result.path_to(target) {
                Some(path) => {
                    prop_assert_eq!(path[0], source);
                    let cost: u32 = path
                        .windows(2)
                        .map(|pair| {
                            graph
                                .out_edges(pair[0])
                                .filter(|edge| edge.to == pair[1])
                                .map(|edge| edge.weight)
                                .min()
                                .unwrap()
                        })
                        .sum();
                    prop_assert_eq!(Some(cost), expected[target]);
                }
                None => {
                    prop_assert_eq!(expected[target], None);
                    prop_assert_eq!(result.predecessors[target], None);
                }
            }
        }
    }

    #[test]
    fn target_search_agrees_with_full_search((n, edges) in small_graph(), source in 0usize..7, target in 0usize..7) {
        let (source, target) = (source % n, target % n);
        let graph = build(n, &edges);

        let full = Dijkstra::new().search(&graph, source).unwrap();
        let targeted = Dijkstra::new().with_target(target).search(&graph, source).unwrap();

        prop_assert_eq!(targeted.distance(target), full.distance(target));
        prop_assert_eq!(targeted.is_finalized(target), full.distance(target).is_some());
    }

    #[test]
    fn removing_a_node_drops_its_edges((n, edges) in small_graph(), victim in 0usize..7) {
        let victim = victim % n;
        let mut graph = build(n, &edges);
        let incident = edges.iter().filter(|(from, to, _)| *from == victim || *to == victim).count();

        graph.remove_node(victim);

        prop_assert_eq!(graph.node_count(), n - 1);
        prop_assert_eq!(graph.edge_count(), edges.len() - incident);

        let shift = |node: usize| if node > victim { node - 1 } else { node };
        let mut expected: Vec<_> = edges
            .iter()
            .filter(|(from, to, _)| *from != victim && *to != victim)
            .map(|&(from, to, weight)| (shift(from), shift(to), weight))
            .collect();
        let mut actual: Vec<_> = graph.edges().map(|e| (e.from, e.to, e.weight)).collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn test_random_graphs_match_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(24);

    for _ in 0..20 {
        let graph = generate_random(60, 2.5, 50, &mut rng);
        for source in [0, 17, 59] {
            let result = Dijkstra::new().search(&graph, source).unwrap();
            assert_eq!(result.distances, bellman_ford(&graph, source));
        }
    }
}
