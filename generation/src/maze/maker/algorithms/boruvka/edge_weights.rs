use rand::Rng;

use crate::direction::Direction;
use crate::floorplan::{Floorplan, Wallboard};

pub const MIN_WEIGHT: u8 = 1;
pub const MAX_WEIGHT: u8 = 9;

const UNWEIGHED: u8 = 0;

/// Lazily drawn cost of every internal wall.
///
/// A weight is drawn the first time either side of a wall is asked for and
/// is stored on both sides at once, so the answer never depends on which
/// cell asks. Weights never change once drawn.
pub struct EdgeWeights {
    slots: Vec<[u8; Direction::COUNT]>,
}

impl EdgeWeights {
    pub fn new(floorplan: &Floorplan) -> Self {
        Self {
            slots: vec![[UNWEIGHED; Direction::COUNT]; floorplan.cell_count()],
        }
    }

    pub fn weight_of<R: Rng + ?Sized>(
        &mut self,
        floorplan: &Floorplan,
        wallboard: Wallboard,
        rng: &mut R,
    ) -> u8 {
        let cell = wallboard.cell();
        let Some(neighbor) = floorplan.neighbor(cell, wallboard.direction) else {
            panic!("border wallboard {wallboard:?} has no weight");
        };

        let i = floorplan.index(cell);
        let cached = self.slots[i][wallboard.direction.index()];
        if cached != UNWEIGHED {
            return cached;
        }

        let weight = rng.random_range(MIN_WEIGHT..=MAX_WEIGHT);
        self.slots[i][wallboard.direction.index()] = weight;
        self.slots[floorplan.index(neighbor)][wallboard.direction.opposite().index()] = weight;

        weight
    }

    pub fn cached(&self, floorplan: &Floorplan, wallboard: Wallboard) -> Option<u8> {
        let weight = self.slots[floorplan.index(wallboard.cell())][wallboard.direction.index()];
        (weight != UNWEIGHED).then_some(weight)
    }
}
