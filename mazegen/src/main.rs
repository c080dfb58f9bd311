use std::process;

use generation::{Config, MazeFactory};
use log::debug;

fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to read maze settings.");
            eprintln!("Details: {}.", e);
            eprintln!("Check MAZE_WIDTH, MAZE_HEIGHT, MAZE_ALGORITHM and MAZE_SEED.");
            process::exit(1);
        }
    };
    debug!("Using {:?}.", config);

    let mut factory = MazeFactory::new();
    let delivered = factory
        .order(config.order())
        .and_then(|()| factory.wait_till_delivered());

    let maze = match delivered {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Error: Failed to generate a maze.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    println!("{}", maze);

    let exit = maze.exit();
    let start = maze.start();
    println!(
        "{}x{} maze ({}). Exit: ({}, {}) {:?}. Start: ({}, {}), {} steps from the exit.",
        maze.width(),
        maze.height(),
        config.algorithm,
        exit.x,
        exit.y,
        exit.direction,
        start.x,
        start.y,
        maze.max_distance()
    );
}
