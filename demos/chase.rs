//! Text-mode chase on the reference maze: one collector, one pursuer.
//!
//! Run: cargo run --bin chase

use mazer_demos::{Chase, random_road, reference_grid};
use mazer_planner::{Outcome, Planner, PlannerConfig};

const MAX_TURNS: u32 = 500;

fn main() {
    let grid = match reference_grid() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let mut rng = rand::rng();
    let (Some(collector), Some(pursuer)) = (
        random_road(&grid, &[], &mut rng),
        random_road(&grid, &[], &mut rng),
    ) else {
        eprintln!("Error: the maze has no roads");
        std::process::exit(1);
    };
    let pursuer = if pursuer == collector {
        random_road(&grid, &[collector], &mut rng).unwrap_or(pursuer)
    } else {
        pursuer
    };

    let planner = Planner::new(&grid, PlannerConfig::default());
    let mut chase = Chase::new(grid, collector, vec![pursuer], planner);
    println!("collector at {collector}, pursuer at {pursuer}");

    while !chase.outcome().is_terminal() && chase.turn < MAX_TURNS {
        let report = match chase.turn() {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        let collector = match report.collector {
            Some(step) => format!("{} -> {} ({:?})", step.from, step.to, step.dir),
            None => "stays".to_string(),
        };
        let pursuers: Vec<String> = report
            .pursuers
            .iter()
            .map(|s| match s {
                Some(step) => format!("{} -> {}", step.from, step.to),
                None => "stays".to_string(),
            })
            .collect();
        println!(
            "turn {:>3}: collector {collector}{} | pursuers {}",
            report.turn,
            if report.collected { " +1" } else { "" },
            pursuers.join(", ")
        );
    }

    match chase.outcome() {
        Outcome::Win => println!("collector cleared the maze (score {})", chase.score),
        Outcome::Loss => println!("collector caught (score {})", chase.score),
        Outcome::Neutral => println!("stopped after {MAX_TURNS} turns (score {})", chase.score),
    }
}
