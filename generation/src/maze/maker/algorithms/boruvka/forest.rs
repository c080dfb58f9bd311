/// Which tree each cell belongs to while walls come down.
///
/// A cell with no label is still a tree of its own. `count` is the number of
/// trees in the whole grid, so it starts at the number of cells and drops by
/// one for every wall removed. Component ids are handed out densely from 0.
pub struct Forest {
    labels: Vec<Option<usize>>,
    members: Vec<Vec<usize>>, // Cell indices, per component id.
    count: usize,
}

impl Forest {
    pub fn new(cell_count: usize) -> Self {
        Self {
            labels: vec![None; cell_count],
            members: Vec::new(),
            count: cell_count,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn component_of(&self, cell: usize) -> Option<usize> {
        self.labels[cell]
    }

    pub fn is_assigned(&self, cell: usize) -> bool {
        self.labels[cell].is_some()
    }

    /// Ids of every component ever started, in ascending order. Absorbed ones
    /// are still listed but have no members.
    pub fn component_ids(&self) -> std::ops::Range<usize> {
        0..self.members.len()
    }

    pub fn members(&self, id: usize) -> &[usize] {
        &self.members[id]
    }

    /// Gives an unassigned cell a fresh id. Nothing is joined, so the count
    /// stays the same.
    pub fn start_component(&mut self, cell: usize) -> usize {
        assert!(!self.is_assigned(cell), "cell {cell} already has a component");

        let id = self.members.len();
        self.labels[cell] = Some(id);
        self.members.push(vec![cell]);
        id
    }

    /// Pulls an unassigned cell into component `id` across one removed wall.
    pub fn grow(&mut self, id: usize, cell: usize) {
        assert!(!self.is_assigned(cell), "cell {cell} already has a component");

        self.labels[cell] = Some(id);
        self.members[id].push(cell);
        self.count -= 1;
    }

    /// Relabels every cell of `absorbed` as `survivor` across one removed wall.
    pub fn merge(&mut self, survivor: usize, absorbed: usize) {
        assert_ne!(survivor, absorbed, "a component cannot merge with itself");

        let moved = std::mem::take(&mut self.members[absorbed]);
        for &cell in &moved {
            self.labels[cell] = Some(survivor);
        }
        self.members[survivor].extend(moved);
        self.count -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_tree_per_cell() {
        let forest = Forest::new(6);
        assert_eq!(forest.count(), 6);
        assert!(forest.component_ids().is_empty());
        assert!((0..6).all(|cell| !forest.is_assigned(cell)));
    }

    #[test]
    fn growing_and_merging_each_remove_one_tree() {
        let mut forest = Forest::new(4);

        let a = forest.start_component(0);
        forest.grow(a, 1);
        assert_eq!(forest.count(), 3);

        let b = forest.start_component(2);
        forest.grow(b, 3);
        assert_eq!(forest.count(), 2);
        assert_eq!(forest.component_ids(), 0..2);

        forest.merge(a, b);
        assert_eq!(forest.count(), 1);
        assert!(forest.members(b).is_empty());
        assert_eq!(forest.members(a), &[0, 1, 2, 3]);
        assert!((0..4).all(|cell| forest.component_of(cell) == Some(a)));
    }

    #[test]
    #[should_panic(expected = "already has a component")]
    fn grow_rejects_assigned_cells() {
        let mut forest = Forest::new(2);
        let a = forest.start_component(0);
        forest.grow(a, 0);
    }

    #[test]
    #[should_panic(expected = "cannot merge with itself")]
    fn merge_rejects_self_merges() {
        let mut forest = Forest::new(2);
        let a = forest.start_component(0);
        forest.merge(a, a);
    }
}
