use crate::floorplan::{Cell, Wallboard};

use super::super::MazeMaker;

pub trait Prim {
    fn prim(&mut self);
}

impl Prim for MazeMaker {
    fn prim(&mut self) {
        let mut visited = vec![false; self.floorplan.cell_count()];

        let initial_cell = self.pick_cell();
        let mut frontier = Vec::new();
        visit_cell_and_add_its_walls(self, initial_cell, &mut visited, &mut frontier);

        // A wall can sit in the frontier twice, once from each side. The
        // second copy is discarded because both its cells are visited by then.
        while let Some((wallboard, far_side)) = self.pick_out(&mut frontier) {
            if visited[self.floorplan.index(far_side)] {
                continue;
            }

            self.floorplan.delete_wallboard(wallboard);
            visit_cell_and_add_its_walls(self, far_side, &mut visited, &mut frontier);
        }
    }
}

fn visit_cell_and_add_its_walls(
    maze: &MazeMaker,
    cell: Cell,
    visited: &mut [bool],
    frontier: &mut Vec<(Wallboard, Cell)>,
) {
    visited[maze.floorplan.index(cell)] = true;

    for (wallboard, neighbor) in maze.removable_walls(cell) {
        if !visited[maze.floorplan.index(neighbor)] {
            frontier.push((wallboard, neighbor));
        }
    }
}
