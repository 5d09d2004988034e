//! Tunnel distances between the valves worth opening.
//!
//! Input lines look like
//! `Valve AA has flow rate=0; tunnels lead to valves DD, II, BB`.
//! The tunnel network is reduced to a table of walking distances between the
//! start valve `AA` and every valve with a positive flow rate.

use log::debug;

use crate::puzzles::parse_error;
use crate::{Dijkstra, Error, Result, WeightedGraph};

pub const START_VALVE: &str = "AA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valve {
    pub name: String,
    pub flow_rate: u32,
    pub tunnels: Vec<String>,

    /// 1-based input line the valve was read from
    pub line: usize,
}

/// Distances between the start valve and the valves with flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValveDistances {
    /// Kept valves in input order
    pub valves: Vec<Valve>,

    /// `distances[i][j]` is the walking time from `valves[i]` to `valves[j]`,
    /// `None` when no tunnel route exists
    pub distances: Vec<Vec<Option<u32>>>,
}

impl ValveDistances {
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.valves.iter().position(|valve| valve.name == name)
    }

    pub fn distance(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.distances[from][to]
    }
}

pub fn parse(input: &str) -> Result<Vec<Valve>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(row, line)| {
            parse_line(line.trim(), row + 1)
                .ok_or_else(|| parse_error(row + 1, format!("unrecognised valve line '{}'", line)))
        })
        .collect()
}

fn parse_line(line: &str, line_no: usize) -> Option<Valve> {
    let (valve, tunnels) = line.split_once("; ")?;
    let (name, flow_rate) = valve.strip_prefix("Valve ")?.split_once(" has flow rate=")?;
    let (_, tunnels) = tunnels
        .split_once("valves ")
        .or_else(|| tunnels.split_once("valve "))?;

    Some(Valve {
        name: name.to_string(),
        flow_rate: flow_rate.parse().ok()?,
        tunnels: tunnels.split(", ").map(str::to_string).collect(),
        line: line_no,
    })
}

/// Builds the tunnel graph: one node per valve name, a unit edge per listed tunnel
///
/// A tunnel to a valve that is never described is a parse error on the line
/// listing it.
pub fn to_graph(valves: &[Valve]) -> Result<WeightedGraph<String, u32>> {
    let mut graph = WeightedGraph::with_capacity(valves.len());
    for valve in valves {
        graph.add_node(valve.name.clone());
    }

    for (from, valve) in valves.iter().enumerate() {
        for tunnel in &valve.tunnels {
            let to = graph.find_node(tunnel).ok_or_else(|| {
                parse_error(
                    valve.line,
                    format!("valve {} leads to unknown valve {}", valve.name, tunnel),
                )
            })?;
            graph.try_add_edge(from, to, 1)?;
        }
    }

    Ok(graph)
}

/// Reduces the network to distances between `AA` and the valves with flow
pub fn reduce(valves: &[Valve]) -> Result<ValveDistances> {
    let graph = to_graph(valves)?;
    if graph.find_node(&START_VALVE.to_string()).is_none() {
        return Err(Error::Unsolvable(format!("no start valve {}", START_VALVE)));
    }

    let kept: Vec<usize> = valves
        .iter()
        .enumerate()
        .filter(|(_, valve)| valve.name == START_VALVE || valve.flow_rate > 0)
        .map(|(node, _)| node)
        .collect();

    let mut distances = Vec::with_capacity(kept.len());
    for &from in &kept {
        let result = Dijkstra::new().search(&graph, from)?;
        distances.push(kept.iter().map(|&to| result.distance(to)).collect());
    }
    debug!("Reduced {} valves to {}", valves.len(), kept.len());

    Ok(ValveDistances {
        valves: kept.into_iter().map(|node| valves[node].clone()).collect(),
        distances,
    })
}
