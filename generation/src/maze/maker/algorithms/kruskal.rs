use disjoint::DisjointSet;
use rand::seq::SliceRandom;

use super::super::MazeMaker;

pub trait Kruskal {
    fn kruskal(&mut self);
}

impl Kruskal for MazeMaker {
    fn kruskal(&mut self) {
        let mut walls = self.internal_wallboards();
        let mut rooms = DisjointSet::with_len(self.floorplan.cell_count());

        walls.shuffle(&mut self.rng);
        for wall in walls {
            let cell = wall.cell();
            let neighbor = self
                .floorplan
                .neighbor(cell, wall.direction)
                .expect("internal wallboards always have a cell on both sides");

            let i = self.floorplan.index(cell);
            let j = self.floorplan.index(neighbor);
            if rooms.root_of(i) != rooms.root_of(j) {
                rooms.join(i, j);
                self.floorplan.delete_wallboard(wall);
            }
        }
    }
}
