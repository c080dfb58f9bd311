use super::super::MazeMaker;

pub trait Backtrack {
    fn backtrack(&mut self);
}

impl Backtrack for MazeMaker {
    fn backtrack(&mut self) {
        let mut visited = vec![false; self.floorplan.cell_count()];
        let mut stack = Vec::new();

        let initial_cell = self.pick_cell();
        visited[self.floorplan.index(initial_cell)] = true;
        stack.push(initial_cell);

        while let Some(curr) = stack.pop() {
            if let Some((wallboard, next)) = self.pick_neighbor(curr, &visited) {
                stack.push(curr);
                self.floorplan.delete_wallboard(wallboard);
                visited[self.floorplan.index(next)] = true;
                stack.push(next);
            }
        }
    }
}
