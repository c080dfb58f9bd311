use std::any::Any;
use std::thread::{self, JoinHandle};

use log::{error, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use crate::error::GenerationError;
use crate::floorplan::{Cell, Wallboard};
use crate::maze::{Algorithm, Maze};

/// Largest floorplan an order may ask for, 2048x2048 cells.
pub const MAX_CELLS: usize = 1 << 22;

/// Everything needed to build one maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub width: usize,
    pub height: usize,
    pub algorithm: Algorithm,
    pub seed: Option<u64>,       // `None` draws a fresh seed from the OS.
    pub exit: Option<Wallboard>, // `None` picks a random border wallboard.
}

impl Order {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            algorithm: Algorithm::default(),
            seed: None,
            exit: None,
        }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn exit(mut self, exit: Wallboard) -> Self {
        self.exit = Some(exit);
        self
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        let (width, height) = (self.width, self.height);
        let cells = width.checked_mul(height).unwrap_or(usize::MAX);
        if width == 0 || height == 0 || cells > MAX_CELLS {
            return Err(GenerationError::InvalidDimensions { width, height });
        }

        if let Some(exit) = self.exit {
            let Wallboard { x, y, direction } = exit;
            let inside = x < width && y < height;
            let (dx, dy) = direction.delta();
            let outward = x.checked_add_signed(dx).is_none_or(|x| x >= width)
                || y.checked_add_signed(dy).is_none_or(|y| y >= height);

            if !inside || !outward {
                return Err(GenerationError::ExitNotOnBorder {
                    exit,
                    width,
                    height,
                });
            }
        }

        Ok(())
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Builds mazes off the caller's thread.
///
/// One order is outstanding at a time. [`MazeFactory::order`] hands the work
/// to a fresh thread and returns at once; [`MazeFactory::wait_till_delivered`]
/// blocks until that thread is done and hands back its maze. The half-built
/// floorplan never leaves the worker, so there is nothing to lock.
#[derive(Default)]
pub struct MazeFactory {
    worker: Option<JoinHandle<Result<Maze, GenerationError>>>,
}

impl MazeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(&mut self, order: Order) -> Result<(), GenerationError> {
        if self.worker.is_some() {
            warn!("Rejected maze order: a previous order has not been collected yet.");
            return Err(GenerationError::AlreadyOrdered);
        }

        info!(
            "Ordered a {}x{} maze using {}.",
            order.width, order.height, order.algorithm
        );

        let worker = thread::Builder::new()
            .name("maze-builder".to_string())
            .spawn(move || Maze::generate(&order))
            .map_err(|e| GenerationError::Spawn(e.to_string()))?;

        self.worker = Some(worker);
        Ok(())
    }

    /// Whether the outstanding order has finished, successfully or not.
    pub fn is_delivered(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| worker.is_finished())
    }

    pub fn wait_till_delivered(&mut self) -> Result<Maze, GenerationError> {
        let worker = self.worker.take().ok_or(GenerationError::NothingOrdered)?;

        let result = worker
            .join()
            .unwrap_or_else(|panic| Err(GenerationError::WorkerPanicked(panic_message(panic))));

        match &result {
            Ok(maze) => {
                let Cell { x, y } = maze.start();
                info!(
                    "Delivered a {}x{} maze; start ({x}, {y}) is {} steps from the exit.",
                    maze.width(),
                    maze.height(),
                    maze.max_distance()
                );
            }
            Err(e) => error!("Maze generation failed: {e}."),
        }

        result
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn validate_accepts_border_exits() {
        for exit in [
            Wallboard::new(0, 0, Direction::North),
            Wallboard::new(0, 2, Direction::West),
            Wallboard::new(3, 2, Direction::South),
            Wallboard::new(3, 0, Direction::East),
        ] {
            assert_eq!(Order::new(4, 3).exit(exit).validate(), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_internal_and_outside_exits() {
        for exit in [
            Wallboard::new(1, 1, Direction::North),
            Wallboard::new(0, 0, Direction::East),
            Wallboard::new(4, 0, Direction::North),
        ] {
            assert_eq!(
                Order::new(4, 3).exit(exit).validate(),
                Err(GenerationError::ExitNotOnBorder {
                    exit,
                    width: 4,
                    height: 3
                })
            );
        }
    }

    #[test]
    fn validate_rejects_empty_grids() {
        assert_eq!(
            Order::new(3, 0).validate(),
            Err(GenerationError::InvalidDimensions {
                width: 3,
                height: 0
            })
        );
    }

    #[test]
    fn validate_rejects_oversized_grids() {
        for (width, height) in [(4096, 4096), (MAX_CELLS + 1, 1), (usize::MAX, 2)] {
            assert_eq!(
                Order::new(width, height).validate(),
                Err(GenerationError::InvalidDimensions { width, height })
            );
        }

        assert_eq!(Order::new(2048, 2048).validate(), Ok(()));
        assert_eq!(Order::new(MAX_CELLS, 1).validate(), Ok(()));
    }

    #[test]
    fn seeded_orders_share_a_random_stream() {
        use rand::Rng;

        let order = Order::new(2, 2).seed(99);
        let a: u64 = order.rng().random();
        let b: u64 = order.rng().random();
        assert_eq!(a, b);
    }

    fn explode(code: u8) {
        panic!("boom {code}");
    }

    fn explode_without_message() {
        std::panic::panic_any(5_u8);
    }

    #[test]
    fn panic_messages_are_recovered() {
        let handle = thread::spawn(|| explode(7));
        let panic = handle.join().expect_err("thread should panic");
        assert_eq!(panic_message(panic), "boom 7");

        let handle = thread::spawn(explode_without_message);
        let panic = handle.join().expect_err("thread should panic");
        assert_eq!(panic_message(panic), "unknown panic");
    }
}
