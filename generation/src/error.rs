use thiserror::Error;

use crate::factory::MAX_CELLS;
use crate::floorplan::Wallboard;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error(
        "maze dimensions {width}x{height} must be at least 1x1 and at most {} cells",
        MAX_CELLS
    )]
    InvalidDimensions { width: usize, height: usize },

    #[error("exit {exit:?} is not on the outer border of a {width}x{height} maze")]
    ExitNotOnBorder {
        exit: Wallboard,
        width: usize,
        height: usize,
    },

    // The grid is connected, so some component must always have a border edge.
    // Reaching this means the floorplan itself is inconsistent.
    #[error("no component could be merged while {components} components remain")]
    DeadEnd { components: usize },

    #[error("a maze is already on order")]
    AlreadyOrdered,

    #[error("could not start the maze generation worker: {0}")]
    Spawn(String),

    #[error("maze generation worker panicked: {0}")]
    WorkerPanicked(String),

    #[error("no maze has been ordered")]
    NothingOrdered,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
