pub mod algorithms;

use rand::prelude::{IndexedRandom, Rng, StdRng};
use strum::{Display, EnumIter, EnumString};

use algorithms::{backtrack::Backtrack, boruvka::Boruvka, kruskal::Kruskal, prim::Prim};

use crate::direction::Direction;
use crate::error::GenerationError;
use crate::floorplan::{Cell, Floorplan, Wallboard};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Algorithm {
    #[default]
    Boruvka, // Cheapest-edge forest merging.
    Backtrack, // Easy: more long corridors.
    Prim,      // Hard: more dead ends.
    Kruskal,   // Hard: more dead ends.
}

/// Carves a perfect maze into a fully walled floorplan.
///
/// The maker owns the floorplan for the whole run, so nothing else can look
/// at a half-built maze. Every algorithm only ever tears down internal
/// wallboards, and each removal joins two parts that were not yet connected.
pub struct MazeMaker {
    pub floorplan: Floorplan,
    pub rng: StdRng,
}

impl MazeMaker {
    pub fn new(floorplan: Floorplan, rng: StdRng) -> Self {
        MazeMaker { floorplan, rng }
    }

    /// Opens the exit on the outer border: the requested one, or a random
    /// border wallboard. Must happen before [`MazeMaker::build`].
    pub fn make_exit(&mut self, requested: Option<Wallboard>) -> Wallboard {
        let exit = match requested {
            Some(exit) => exit,
            None => *self
                .floorplan
                .border_wallboards()
                .choose(&mut self.rng)
                .expect("every floorplan has a border"),
        };

        self.floorplan.open_border(exit);
        exit
    }

    pub fn build(&mut self, algorithm: Algorithm) -> Result<(), GenerationError> {
        match algorithm {
            Algorithm::Boruvka => self.boruvka()?,
            Algorithm::Backtrack => self.backtrack(),
            Algorithm::Prim => self.prim(),
            Algorithm::Kruskal => self.kruskal(),
        }

        Ok(())
    }

    /// Wallboards of `cell` that are still up and may be torn down, paired
    /// with the cell on the other side.
    fn removable_walls(&self, cell: Cell) -> Vec<(Wallboard, Cell)> {
        let mut walls = Vec::with_capacity(4);

        for direction in Direction::all() {
            let wallboard = Wallboard::new(cell.x, cell.y, direction);
            if !self.floorplan.has_wall(cell, direction) || !self.floorplan.can_tear_down(wallboard)
            {
                continue;
            }

            if let Some(neighbor) = self.floorplan.neighbor(cell, direction) {
                walls.push((wallboard, neighbor));
            }
        }

        walls
    }

    fn pick_neighbor(&mut self, cell: Cell, visited: &[bool]) -> Option<(Wallboard, Cell)> {
        let unvisited: Vec<(Wallboard, Cell)> = self
            .removable_walls(cell)
            .into_iter()
            .filter(|(_, neighbor)| !visited[self.floorplan.index(*neighbor)])
            .collect();

        unvisited.choose(&mut self.rng).copied()
    }

    fn pick_cell(&mut self) -> Cell {
        let i = self.rng.random_range(0..self.floorplan.cell_count());
        self.floorplan.cell_at(i)
    }

    fn pick_out<T: Copy>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }

        let i = self.rng.random_range(0..items.len());
        Some(items.swap_remove(i))
    }

    /// One wallboard per physical internal wall: the south and east sides.
    fn internal_wallboards(&self) -> Vec<Wallboard> {
        let mut walls = Vec::new();

        for cell in self.floorplan.cells() {
            for direction in [Direction::South, Direction::East] {
                if self.floorplan.neighbor(cell, direction).is_some() {
                    walls.push(Wallboard::new(cell.x, cell.y, direction));
                }
            }
        }

        walls
    }
}
