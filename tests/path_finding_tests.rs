use elf_paths::{Dijkstra, ShortestPathAlgorithm, WeightedGraph};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

type CityGraph = WeightedGraph<(usize, usize), OrderedFloat<f64>>;

// City grid with two 3x3 blocks of buildings that cannot be entered
fn create_city(width: usize, height: usize) -> CityGraph {
    let mut graph = WeightedGraph::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            graph.add_node((x, y));
        }
    }

    let mut buildings = vec![vec![false; width]; height];
    for (left, top) in [(3, 3), (10, 10)] {
        for y in top..top + 3 {
            for x in left..left + 3 {
                buildings[y][x] = true;
            }
        }
    }

    let directions = [
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            if buildings[y][x] {
                continue;
            }
            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !buildings[ny][nx] {
                    graph.add_edge(y * width + x, ny * width + nx, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

// Test the city pathfinding scenario
#[test]
fn test_city_pathfinding() {
    let width = 25;
    let height = 18;
    let graph = create_city(width, height);

    let locations = HashMap::from([
        ("home", (0, 0)),
        ("work", (20, 15)),
        ("gym", (15, 8)),
        ("park", (8, 12)),
    ]);

    let dijkstra = Dijkstra::new();
    for (from_name, &(fx, fy)) in &locations {
        let source = fy * width + fx;
        let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();

        for (to_name, &(tx, ty)) in &locations {
            let target = ty * width + tx;

            assert!(
                result.distance(target).is_some(),
                "Should find a path from {} to {}",
                from_name,
                to_name
            );

            let path = <Dijkstra as ShortestPathAlgorithm<OrderedFloat<f64>, CityGraph>>::get_path(
                &dijkstra, &result, target,
            )
            .unwrap_or_else(|| panic!("Should construct a path from {} to {}", from_name, to_name));

            assert_eq!(path[0], source, "Path should start at source");
            assert_eq!(path[path.len() - 1], target, "Path should end at target");

            let mut cost = 0.0;
            for pair in path.windows(2) {
                let edge = graph
                    .out_edges(pair[0])
                    .filter(|edge| edge.to == pair[1])
                    .min_by_key(|edge| edge.weight)
                    .expect("Path should only use existing edges");
                cost += edge.weight.into_inner();
            }
            assert!((cost - result.distance(target).unwrap().into_inner()).abs() < 1e-9);
        }
    }
}

// A search restricted to one target settles no more nodes than a full one
#[test]
fn test_city_single_target() {
    let width = 25;
    let graph = create_city(width, 18);
    let home = 0;
    let work = 15 * width + 20;

    let full = Dijkstra::new().search(&graph, home).unwrap();
    let targeted = Dijkstra::new().with_target(work).search(&graph, home).unwrap();

    assert_eq!(targeted.distance(work), full.distance(work));
    let settled = |done: &[bool]| done.iter().filter(|&&d| d).count();
    assert!(settled(&targeted.finalized[..]) <= settled(&full.finalized[..]));
    assert_eq!(graph[targeted.path_to(work).unwrap()[0]], (0, 0));
}
