use std::fs;
use std::process::ExitCode;

use elf_paths::puzzles::{blizzard_basin, hill_climb, valve_network};
use log::{error, info};

const USAGE: &str = "usage: solve <hill-climb|valve-network|blizzard-basin> <input file>";

#[derive(Debug, Clone, Copy)]
enum Puzzle {
    HillClimb,
    ValveNetwork,
    BlizzardBasin,
}

impl Puzzle {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "hill-climb" => Some(Puzzle::HillClimb),
            "valve-network" => Some(Puzzle::ValveNetwork),
            "blizzard-basin" => Some(Puzzle::BlizzardBasin),
            _ => None,
        }
    }
}

fn run(puzzle: Puzzle, input: &str) -> elf_paths::Result<()> {
    match puzzle {
        Puzzle::HillClimb => {
            let map = hill_climb::parse(input)?;
            println!("Part one: {}", hill_climb::part_one(&map)?);
            println!("Part two: {}", hill_climb::part_two(&map)?);
        }
        Puzzle::ValveNetwork => {
            let valves = valve_network::parse(input)?;
            let reduced = valve_network::reduce(&valves)?;
            for (from, row) in reduced.valves.iter().zip(&reduced.distances) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|d| d.map_or_else(|| "-".to_string(), |d| d.to_string()))
                    .collect();
                println!("{} ({:>2}): {}", from.name, from.flow_rate, cells.join(" "));
            }
        }
        Puzzle::BlizzardBasin => {
            let valley = blizzard_basin::parse(input)?;
            println!("Part one: {}", blizzard_basin::part_one(&valley)?);
            println!("Part two: {}", blizzard_basin::part_two(&valley)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [puzzle, path] = args.as_slice() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };
    let Some(puzzle) = Puzzle::from_name(puzzle) else {
        error!("Unknown puzzle '{}'", puzzle);
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let input = match fs::read_to_string(path) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Cannot read {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };
    info!("Solving {:?} with {} bytes of input", puzzle, input.len());

    match run(puzzle, &input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
