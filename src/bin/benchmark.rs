use std::time::{Duration, Instant};

use elf_paths::graph::generators::generate_random;
use elf_paths::{Dijkstra, WeightedGraph};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Function to benchmark one search configuration on a graph
fn benchmark_search(name: &str, dijkstra: &Dijkstra, graph: &WeightedGraph<usize, u64>, source: usize) -> Duration {
    println!("Running {} on graph with {} nodes...", name, graph.node_count());

    let start = Instant::now();
    let result = match dijkstra.search(graph, source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - {} failed: {}", name, err);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    let settled = result.finalized.iter().filter(|&&done| done).count();
    println!("  - Settled {} nodes ({} reached) in {:?}", settled, result.reachable_count(), duration);

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000];

    // Edge factor: average number of edges per node
    let edge_factor = 3.0;
    let mut rng = StdRng::seed_from_u64(2022);

    println!("=====================================================");
    println!("Benchmark: full Dijkstra vs target-restricted Dijkstra");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random(size, edge_factor, 100, &mut rng);
        info!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let source = 0;
        let target = size / 2;

        let full_time = benchmark_search("Dijkstra (all nodes)", &Dijkstra::new(), &graph, source);
        let target_time = benchmark_search(
            "Dijkstra (single target)",
            &Dijkstra::new().with_target(target),
            &graph,
            source,
        );

        results.push((size, full_time, target_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Nodes", "All (ms)", "Target (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, full_time, target_time) in &results {
        let speedup = full_time.as_secs_f64() / target_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            full_time.as_millis(),
            target_time.as_millis(),
            speedup
        );
    }
}
