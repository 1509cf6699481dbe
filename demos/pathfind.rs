//! Run every search strategy between two random roads of the reference maze.
//!
//! Run: cargo run --bin pathfind

use mazer_demos::{format_path, random_road, reference_grid};
use mazer_paths::{PathGraph, SearchConfig, Strategy};

fn main() {
    let grid = match reference_grid() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let graph = PathGraph::new(&grid);
    let config = SearchConfig::default();
    let mut rng = rand::rng();

    let (Some(start), Some(target)) = (
        random_road(&grid, &[], &mut rng),
        random_road(&grid, &[], &mut rng),
    ) else {
        eprintln!("Error: the maze has no roads");
        std::process::exit(1);
    };

    for strategy in Strategy::ALL {
        match graph.search(strategy, start, target, &config, &mut rng) {
            Ok(path) => {
                println!(
                    "{strategy} path ({} steps) from {start} to {target}:",
                    path.len()
                );
                println!("{}", format_path(&path));
            }
            Err(e) => println!("{strategy}: {e}"),
        }
        println!("----");
    }
}
