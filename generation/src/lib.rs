pub mod config;
pub mod direction;
pub mod error;
pub mod factory;
pub mod floorplan;
pub mod maze;

pub use config::Config;
pub use direction::Direction;
pub use error::{ConfigError, GenerationError};
pub use factory::{MazeFactory, Order};
pub use floorplan::{Cell, Floorplan, Wallboard};
pub use maze::{Algorithm, Maze};
