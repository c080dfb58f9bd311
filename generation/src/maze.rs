pub mod maker;

use std::collections::VecDeque;
use std::fmt;

pub use maker::Algorithm;
use maker::MazeMaker;

use crate::direction::Direction;
use crate::error::GenerationError;
use crate::factory::Order;
use crate::floorplan::{Cell, Floorplan, Wallboard};

/// A finished perfect maze: the carved floorplan, its exit, and the start
/// cell furthest from that exit.
#[derive(Clone, Debug)]
pub struct Maze {
    floorplan: Floorplan,
    exit: Wallboard,
    start: Cell,
    distances: Distances,
}

impl Maze {
    /// Builds the maze described by `order` on the calling thread.
    pub fn generate(order: &Order) -> Result<Self, GenerationError> {
        order.validate()?;

        let floorplan = Floorplan::new(order.width, order.height);
        let mut maker = MazeMaker::new(floorplan, order.rng());
        let exit = maker.make_exit(order.exit);
        maker.build(order.algorithm)?;

        Ok(Self::new(maker.floorplan, exit))
    }

    pub fn new(floorplan: Floorplan, exit: Wallboard) -> Self {
        let distances = Distances::from_exit(&floorplan, exit.cell());
        let (start, _) = distances.furthest();

        Self {
            floorplan,
            exit,
            start,
            distances,
        }
    }

    pub fn floorplan(&self) -> &Floorplan {
        &self.floorplan
    }

    pub fn width(&self) -> usize {
        self.floorplan.width()
    }

    pub fn height(&self) -> usize {
        self.floorplan.height()
    }

    pub fn exit(&self) -> Wallboard {
        self.exit
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    /// Steps from `cell` to the exit cell, or `None` if it is walled off.
    pub fn distance_to_exit(&self, cell: Cell) -> Option<usize> {
        self.distances.get(cell)
    }

    pub fn max_distance(&self) -> usize {
        self.distances.furthest().1
    }

    /// Distance to the exit as a share of the start's distance, or `None` if
    /// `cell` is walled off.
    pub fn percentage_for_distance_to_exit(&self, cell: Cell) -> Option<f32> {
        let distance = self.distance_to_exit(cell)?;
        let max = self.max_distance();
        if max == 0 {
            return Some(1.0);
        }

        Some(distance as f32 / max as f32)
    }

    pub fn log(&self) -> String {
        let columns = 2 * self.width() + 1;
        let rows = 2 * self.height() + 1;

        (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|column| {
                        if self.is_start(column, row) {
                            "()"
                        } else if self.is_wall(column, row) {
                            "██"
                        } else {
                            "  "
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn is_start(&self, column: usize, row: usize) -> bool {
        column % 2 == 1 && row % 2 == 1 && Cell::new(column / 2, row / 2) == self.start
    }

    // Render coordinates: odd/odd is a cell, even/even a pillar, the rest are
    // the wallboards between them. The last row and column hold the south
    // and east border.
    fn is_wall(&self, column: usize, row: usize) -> bool {
        let floorplan = &self.floorplan;
        match (column % 2, row % 2) {
            (1, 1) => false,
            (0, 0) => true,
            (1, _) => {
                let x = column / 2;
                if row / 2 < floorplan.height() {
                    floorplan.has_wall(Cell::new(x, row / 2), Direction::North)
                } else {
                    floorplan.has_wall(Cell::new(x, floorplan.height() - 1), Direction::South)
                }
            }
            _ => {
                let y = row / 2;
                if column / 2 < floorplan.width() {
                    floorplan.has_wall(Cell::new(column / 2, y), Direction::West)
                } else {
                    floorplan.has_wall(Cell::new(floorplan.width() - 1, y), Direction::East)
                }
            }
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

/// Breadth-first step counts from the exit cell through open walls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Distances {
    width: usize,
    steps: Vec<Option<usize>>,
}

impl Distances {
    pub fn from_exit(floorplan: &Floorplan, exit: Cell) -> Self {
        let mut steps = vec![None; floorplan.cell_count()];
        let mut queue = VecDeque::new();

        steps[floorplan.index(exit)] = Some(0);
        queue.push_back((exit, 0));

        while let Some((cell, distance)) = queue.pop_front() {
            for neighbor in floorplan.open_neighbors(cell) {
                let i = floorplan.index(neighbor);
                if steps[i].is_none() {
                    steps[i] = Some(distance + 1);
                    queue.push_back((neighbor, distance + 1));
                }
            }
        }

        Self {
            width: floorplan.width(),
            steps,
        }
    }

    /// Panics if `cell` lies outside the grid the distances were taken on.
    pub fn get(&self, cell: Cell) -> Option<usize> {
        assert!(
            cell.x < self.width,
            "cell ({}, {}) is outside a grid {} cells wide",
            cell.x,
            cell.y,
            self.width
        );
        self.steps[cell.y * self.width + cell.x]
    }

    /// The reachable cell furthest from the exit. Ties go to the first cell
    /// in row-major order.
    pub fn furthest(&self) -> (Cell, usize) {
        let mut best = (0, 0);

        for (i, steps) in self.steps.iter().enumerate() {
            if let Some(steps) = *steps {
                if steps > best.1 {
                    best = (i, steps);
                }
            }
        }

        (Cell::new(best.0 % self.width, best.0 / self.width), best.1)
    }
}
