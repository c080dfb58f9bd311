mod cheapest;
pub mod edge_weights;
pub mod forest;

use log::debug;

use cheapest::Cheapest;
use edge_weights::EdgeWeights;
use forest::Forest;

use crate::direction::Direction;
use crate::error::GenerationError;
use crate::floorplan::{Cell, Wallboard};

use super::super::MazeMaker;

pub trait Boruvka {
    fn boruvka(&mut self) -> Result<(), GenerationError>;
}

impl Boruvka for MazeMaker {
    /// Randomized Boruvka: every internal wall gets a cost from 1 to 9, a
    /// greedy walk from each unclaimed cell seeds a forest of trees, and then
    /// each tree repeatedly tears down its cheapest wall to a different tree
    /// until one tree spans the grid.
    fn boruvka(&mut self) -> Result<(), GenerationError> {
        let mut weights = EdgeWeights::new(&self.floorplan);
        let mut forest = Forest::new(self.floorplan.cell_count());

        bootstrap(self, &mut weights, &mut forest);
        debug!(
            "Boruvka bootstrap left {} trees on a {}x{} grid.",
            forest.count(),
            self.floorplan.width(),
            self.floorplan.height()
        );

        let rounds = merge_trees(self, &mut weights, &mut forest)?;
        debug!("Boruvka merged the forest in {rounds} rounds.");

        Ok(())
    }
}

pub(crate) fn bootstrap(maze: &mut MazeMaker, weights: &mut EdgeWeights, forest: &mut Forest) {
    for cell in maze.floorplan.cells() {
        let i = maze.floorplan.index(cell);
        if forest.is_assigned(i) {
            continue;
        }

        let id = forest.start_component(i);
        let mut curr = cell;

        while let Some(wallboard) = cheapest_way_out(maze, weights, forest, curr) {
            let next = maze.floorplan.delete_wallboard(wallboard);
            forest.grow(id, maze.floorplan.index(next));
            curr = next;
        }
    }
}

// Only walls into unclaimed cells qualify, so the walk never closes a loop
// and never touches a tree that an earlier walk built.
fn cheapest_way_out(
    maze: &mut MazeMaker,
    weights: &mut EdgeWeights,
    forest: &Forest,
    cell: Cell,
) -> Option<Wallboard> {
    let mut cheapest = Cheapest::new();

    for (wallboard, neighbor) in maze.removable_walls(cell) {
        if forest.is_assigned(maze.floorplan.index(neighbor)) {
            continue;
        }

        let weight = weights.weight_of(&maze.floorplan, wallboard, &mut maze.rng);
        cheapest.offer(weight, wallboard, &mut maze.rng);
    }

    cheapest.into_inner()
}

/// Runs merge rounds until one tree is left and returns how many it took.
pub(crate) fn merge_trees(
    maze: &mut MazeMaker,
    weights: &mut EdgeWeights,
    forest: &mut Forest,
) -> Result<usize, GenerationError> {
    let mut rounds = 0;

    while forest.count() > 1 {
        let before = forest.count();
        for id in forest.component_ids() {
            join_cheapest_neighbor(maze, weights, forest, id);
        }
        rounds += 1;

        if forest.count() == before {
            return Err(GenerationError::DeadEnd { components: before });
        }
    }

    Ok(rounds)
}

/// Tears down the cheapest wall between tree `id` and any other tree, then
/// relabels the other tree as `id`. Returns whether a merge happened.
fn join_cheapest_neighbor(
    maze: &mut MazeMaker,
    weights: &mut EdgeWeights,
    forest: &mut Forest,
    id: usize,
) -> bool {
    if forest.members(id).is_empty() {
        return false; // Absorbed earlier this round.
    }

    let mut cells = forest.members(id).to_vec();
    cells.sort_unstable();

    let mut cheapest = Cheapest::new();
    for i in cells {
        let cell = maze.floorplan.cell_at(i);
        for direction in Direction::all() {
            let wallboard = Wallboard::new(cell.x, cell.y, direction);
            if !maze.floorplan.has_wall(cell, direction) || !maze.floorplan.can_tear_down(wallboard)
            {
                continue;
            }

            let Some(neighbor) = maze.floorplan.neighbor(cell, direction) else {
                continue;
            };
            let other = forest
                .component_of(maze.floorplan.index(neighbor))
                .expect("bootstrap assigns every cell to a tree");
            if other == id {
                continue;
            }

            let weight = weights.weight_of(&maze.floorplan, wallboard, &mut maze.rng);
            cheapest.offer(weight, (wallboard, other), &mut maze.rng);
        }
    }

    let Some((wallboard, other)) = cheapest.into_inner() else {
        return false;
    };

    maze.floorplan.delete_wallboard(wallboard);
    forest.merge(id, other);
    true
}
