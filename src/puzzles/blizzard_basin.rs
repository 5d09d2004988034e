//! Crossing a valley of moving blizzards.
//!
//! Blizzards move one cell per minute and wrap around the valley walls, so
//! the valley repeats after a fixed number of minutes. The search runs on a
//! time-expanded graph: one node per free cell per minute of the cycle, an
//! edge for every legal move or wait, and the last minute wired back to the
//! start of the cycle.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::puzzles::parse_error;
use crate::{Dijkstra, Error, Result, WeightedGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Cell { row, col }
    }

    fn offset(self, (d_row, d_col): (i32, i32)) -> Self {
        Cell::new(self.row + d_row, self.col + d_col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

impl Direction {
    fn from_arrow(ch: char) -> Option<Self> {
        match ch {
            '^' => Some(Direction::Up),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            '>' => Some(Direction::Right),
            _ => None,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blizzard {
    pub cell: Cell,
    pub direction: Direction,
}

/// Payload of a node in the time-expanded graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimedCell {
    pub cell: Cell,
    /// Minute within the cycle; `None` for the entrance and exit nodes
    pub minute: Option<usize>,
}

/// Valley interior is `height` x `width`, walls excluded
///
/// The entrance sits in the top wall (row -1) and the exit in the bottom wall
/// (row `height`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valley {
    pub width: i32,
    pub height: i32,
    pub blizzards: Vec<Blizzard>,
    pub entrance: Cell,
    pub exit: Cell,
}

pub fn parse(input: &str) -> Result<Valley> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 3 {
        return Err(parse_error(lines.len(), "a valley needs two walls and one row"));
    }

    let top = lines[0];
    if top.len() < 3 {
        return Err(parse_error(1, "wall too short"));
    }
    let width = top.len() - 2;
    let entrance_col = wall_gap(top).ok_or_else(|| parse_error(1, "no entrance in top wall"))?;

    let mut blizzards = Vec::new();
    let interior = &lines[1..lines.len() - 1];
    for (row, line) in interior.iter().enumerate() {
        let line_no = row + 2;
        if line.len() != width + 2 || !line.starts_with('#') || !line.ends_with('#') {
            return Err(parse_error(line_no, "row does not match the valley walls"));
        }

        for (col, ch) in line[1..=width].chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let direction = Direction::from_arrow(ch)
                .ok_or_else(|| parse_error(line_no, format!("unexpected '{}'", ch)))?;
            blizzards.push(Blizzard {
                cell: Cell::new(row as i32, col as i32),
                direction,
            });
        }
    }

    let bottom = lines[lines.len() - 1];
    if bottom.len() != width + 2 {
        return Err(parse_error(lines.len(), "bottom wall does not match the top wall"));
    }
    let exit_col = wall_gap(bottom).ok_or_else(|| parse_error(lines.len(), "no exit in bottom wall"))?;

    let height = interior.len() as i32;
    Ok(Valley {
        width: width as i32,
        height,
        blizzards,
        entrance: Cell::new(-1, entrance_col as i32),
        exit: Cell::new(height, exit_col as i32),
    })
}

/// Interior column of the single gap in a wall line
fn wall_gap(line: &str) -> Option<usize> {
    if line.len() < 3 || !line.starts_with('#') || !line.ends_with('#') {
        return None;
    }
    let inner = &line[1..line.len() - 1];
    let col = inner.find('.')?;
    (inner.matches('.').count() == 1).then_some(col)
}

impl Valley {
    fn contains(&self, cell: Cell) -> bool {
        (0..self.height).contains(&cell.row) && (0..self.width).contains(&cell.col)
    }

    fn step_blizzards(&self, blizzards: &mut [Blizzard]) {
        for blizzard in blizzards.iter_mut() {
            let (d_row, d_col) = blizzard.direction.delta();
            blizzard.cell = Cell::new(
                (blizzard.cell.row + d_row).rem_euclid(self.height),
                (blizzard.cell.col + d_col).rem_euclid(self.width),
            );
        }
    }

    /// Occupied cells for each minute from `start_minute` until the valley repeats
    ///
    /// Returns the boards and the index of the board the last one loops back to.
    /// The valley repeats when every blizzard is back in the same cell heading
    /// the same way; two minutes with equal occupied cells can still diverge.
    pub fn boards_from(&self, start_minute: usize) -> Result<(Vec<BTreeSet<Cell>>, usize)> {
        let mut blizzards = self.blizzards.clone();
        for _ in 0..start_minute {
            self.step_blizzards(&mut blizzards);
        }

        // Every blizzard is back where it started after lcm(width, height) minutes.
        let limit = (self.width as usize * self.height as usize).max(1) + 1;
        let mut boards = Vec::new();
        let mut seen: HashMap<Vec<Blizzard>, usize> = HashMap::new();

        for minute in 0..limit {
            if let Some(&cycle_start) = seen.get(&blizzards) {
                debug!("Valley repeats after {} minutes (back to minute {})", minute, cycle_start);
                return Ok((boards, cycle_start));
            }
            seen.insert(blizzards.clone(), minute);
            boards.push(blizzards.iter().map(|blizzard| blizzard.cell).collect());
            self.step_blizzards(&mut blizzards);
        }

        Err(Error::Unsolvable("blizzard pattern never repeats".to_string()))
    }

    /// Builds the time-expanded graph for a trip from `from` to `to`
    ///
    /// Returns the graph with the indices of the trip's start and goal nodes.
    pub fn to_graph(
        &self,
        boards: &[BTreeSet<Cell>],
        cycle_start: usize,
        from: Cell,
        to: Cell,
    ) -> (WeightedGraph<TimedCell, u32>, usize, usize) {
        let mut graph = WeightedGraph::new();
        let mut index: HashMap<(Cell, usize), usize> = HashMap::new();

        for (minute, board) in boards.iter().enumerate() {
            for row in 0..self.height {
                for col in 0..self.width {
                    let cell = Cell::new(row, col);
                    if board.contains(&cell) {
                        continue;
                    }
                    let node = graph.add_node(TimedCell {
                        cell,
                        minute: Some(minute),
                    });
                    index.insert((cell, minute), node);
                }
            }

            if minute > 0 {
                self.add_step_edges(&mut graph, &index, minute - 1, minute);
            }
        }
        self.add_step_edges(&mut graph, &index, boards.len() - 1, cycle_start);

        // Entering the valley at minute `m` means waiting outside until then.
        // Minutes 1..=len reach every board of the cycle once.
        let start = graph.add_node(TimedCell { cell: from, minute: None });
        let first_step = self.inside_of(from);
        for minute in 1..=boards.len() {
            let board = board_at(minute, boards.len(), cycle_start);
            if let Some(&node) = index.get(&(first_step, board)) {
                graph.add_edge(start, node, minute as u32);
            }
        }

        let goal = graph.add_node(TimedCell { cell: to, minute: None });
        let last_step = self.inside_of(to);
        for minute in 0..boards.len() {
            if let Some(&node) = index.get(&(last_step, minute)) {
                graph.add_edge(node, goal, 1);
            }
        }

        (graph, start, goal)
    }

    fn add_step_edges(
        &self,
        graph: &mut WeightedGraph<TimedCell, u32>,
        index: &HashMap<(Cell, usize), usize>,
        minute: usize,
        next_minute: usize,
    ) {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                let Some(&here) = index.get(&(cell, minute)) else {
                    continue;
                };

                let moves = DIRECTIONS.iter().map(|direction| cell.offset(direction.delta()));
                for next in moves.chain(std::iter::once(cell)) {
                    if !self.contains(next) {
                        continue;
                    }
                    if let Some(&there) = index.get(&(next, next_minute)) {
                        graph.add_edge(here, there, 1);
                    }
                }
            }
        }
    }

    /// The valley cell next to a wall gap
    fn inside_of(&self, gap: Cell) -> Cell {
        if gap.row < 0 {
            Cell::new(gap.row + 1, gap.col)
        } else {
            Cell::new(gap.row - 1, gap.col)
        }
    }

    /// Minutes needed to walk from `from` to `to`, leaving at `start_minute`
    pub fn crossing_time(&self, from: Cell, to: Cell, start_minute: usize) -> Result<u32> {
        let (boards, cycle_start) = self.boards_from(start_minute)?;
        let (graph, start, goal) = self.to_graph(&boards, cycle_start, from, to);
        debug!(
            "Time-expanded graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        let result = Dijkstra::new().with_target(goal).search(&graph, start)?;
        result.distance(goal).ok_or_else(|| {
            Error::Unsolvable(format!("no way from {:?} to {:?}", from, to))
        })
    }
}

/// Board shown at `minute` when boards past the last loop back to `cycle_start`
fn board_at(minute: usize, len: usize, cycle_start: usize) -> usize {
    if minute < len {
        minute
    } else {
        cycle_start + (minute - cycle_start) % (len - cycle_start)
    }
}

/// Fewest minutes from the entrance to the exit
pub fn part_one(valley: &Valley) -> Result<u32> {
    valley.crossing_time(valley.entrance, valley.exit, 0)
}

/// Fewest minutes to reach the exit, go back to the entrance, and reach the exit again
pub fn part_two(valley: &Valley) -> Result<u32> {
    let mut elapsed = 0;
    for (from, to) in [
        (valley.entrance, valley.exit),
        (valley.exit, valley.entrance),
        (valley.entrance, valley.exit),
    ] {
        elapsed += valley.crossing_time(from, to, elapsed as usize)?;
    }
    Ok(elapsed)
}
