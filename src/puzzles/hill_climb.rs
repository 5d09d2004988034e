//! Fewest steps up a height map.
//!
//! Heights run from `a` (lowest) to `z`; `S` sits at height `a` and `E` at
//! height `z`. A step may climb at most one level and drop any number. Edges
//! are added reversed so one search from `E` answers both parts.

use log::debug;

use crate::puzzles::parse_error;
use crate::{Dijkstra, Error, Result, WeightedGraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    /// Heights in row-major order, 0 for `a` up to 25 for `z`
    pub heights: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub start: usize,
    pub end: usize,
}

pub fn parse(input: &str) -> Result<HeightMap> {
    let mut heights = Vec::new();
    let mut width = 0;
    let mut height = 0;
    let mut start = None;
    let mut end = None;

    for (row, line) in input.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        if height == 0 {
            width = line.len();
        } else if line.len() != width {
            return Err(parse_error(
                row + 1,
                format!("expected {} columns, found {}", width, line.len()),
            ));
        }

        for ch in line.chars() {
            let index = heights.len();
            let level = match ch {
                'S' => {
                    if start.replace(index).is_some() {
                        return Err(parse_error(row + 1, "more than one start"));
                    }
                    0
                }
                'E' => {
                    if end.replace(index).is_some() {
                        return Err(parse_error(row + 1, "more than one end"));
                    }
                    25
                }
                'a'..='z' => ch as u8 - b'a',
                other => return Err(parse_error(row + 1, format!("unexpected '{}'", other))),
            };
            heights.push(level);
        }
        height += 1;
    }

    let start = start.ok_or_else(|| parse_error(height, "no start 'S'"))?;
    let end = end.ok_or_else(|| parse_error(height, "no end 'E'"))?;

    Ok(HeightMap {
        heights,
        width,
        height,
        start,
        end,
    })
}

impl HeightMap {
    /// Builds the graph of reversed legal steps
    ///
    /// Node `i` is cell `i` in row-major order, with its height as payload.
    /// An edge `a -> b` means a climber may step from `b` to `a`.
    pub fn to_graph(&self) -> WeightedGraph<u8, u32> {
        let mut graph = WeightedGraph::with_capacity(self.heights.len());
        for &level in &self.heights {
            graph.add_node(level);
        }

        for row in 0..self.height {
            for col in 0..self.width {
                let here = row * self.width + col;
                for next in self.neighbours(row, col) {
                    if self.heights[next] <= self.heights[here] + 1 {
                        graph.add_edge(next, here, 1);
                    }
                }
            }
        }

        graph
    }

    fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = usize> {
        let width = self.width;
        let up = (row > 0).then(|| (row - 1) * width + col);
        let down = (row + 1 < self.height).then(|| (row + 1) * width + col);
        let left = (col > 0).then(|| row * width + col - 1);
        let right = (col + 1 < width).then(|| row * width + col + 1);
        [up, down, left, right].into_iter().flatten()
    }
}

/// Fewest steps from `S` to `E`
pub fn part_one(map: &HeightMap) -> Result<u32> {
    let graph = map.to_graph();
    let result = Dijkstra::new().with_target(map.start).search(&graph, map.end)?;

    result
        .distance(map.start)
        .ok_or_else(|| Error::Unsolvable("'E' cannot be reached from 'S'".to_string()))
}

/// Fewest steps to `E` from any cell at height `a`
pub fn part_two(map: &HeightMap) -> Result<u32> {
    let graph = map.to_graph();
    let result = Dijkstra::new().search(&graph, map.end)?;

    let best = graph
        .nodes()
        .enumerate()
        .filter(|(_, level)| **level == 0)
        .filter_map(|(node, _)| result.distance(node))
        .min();
    debug!(
        "{} of {} cells can reach 'E'",
        result.reachable_count(),
        graph.node_count()
    );

    best.ok_or_else(|| Error::Unsolvable("no 'a' cell can reach 'E'".to_string()))
}
