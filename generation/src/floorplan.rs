use crate::direction::Direction;

const ALL_WALLS: u8 = 0b1111;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Cell {
        Cell { x, y }
    }
}

/// The wall on one side of one cell. An internal wallboard has a twin on the
/// neighboring cell facing the opposite way; both name the same physical wall.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Wallboard {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Wallboard {
    pub const fn new(x: usize, y: usize, direction: Direction) -> Wallboard {
        Wallboard { x, y, direction }
    }

    pub const fn cell(&self) -> Cell {
        Cell::new(self.x, self.y)
    }
}

/// A `width` x `height` grid of cells, each starting with all four walls up.
///
/// Walls are stored once per side of each cell as a bitmask indexed by
/// [`Direction::index`]. Tearing down an internal wall clears the bit on both
/// cells that share it, so the two views never disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Floorplan {
    width: usize,
    height: usize,
    walls: Vec<u8>,
}

impl Floorplan {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "floorplan dimensions must be at least 1x1, got {width}x{height}"
        );

        let Some(cells) = width.checked_mul(height) else {
            panic!("floorplan {width}x{height} has more cells than fit in memory");
        };

        Self {
            width,
            height,
            walls: vec![ALL_WALLS; cells],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major index of `cell`. Panics if the cell lies outside the grid.
    pub fn index(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "cell ({}, {}) is outside the {}x{} floorplan",
            cell.x,
            cell.y,
            self.width,
            self.height
        );

        cell.y * self.width + cell.x
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index % self.width, index / self.width)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        let x = cell.x.checked_add_signed(dx)?;
        let y = cell.y.checked_add_signed(dy)?;
        let neighbor = Cell::new(x, y);
        self.contains(neighbor).then_some(neighbor)
    }

    pub fn has_wall(&self, cell: Cell, direction: Direction) -> bool {
        self.walls[self.index(cell)] & bit(direction) != 0
    }

    pub fn has_no_wall(&self, cell: Cell, direction: Direction) -> bool {
        !self.has_wall(cell, direction)
    }

    pub fn is_border(&self, wallboard: Wallboard) -> bool {
        let cell = wallboard.cell();
        assert!(
            self.contains(cell),
            "wallboard {wallboard:?} is outside the {}x{} floorplan",
            self.width,
            self.height
        );

        self.neighbor(cell, wallboard.direction).is_none()
    }

    /// The outer border is permanent; everything inside may come down.
    pub fn can_tear_down(&self, wallboard: Wallboard) -> bool {
        !self.is_border(wallboard)
    }

    /// Removes an internal wall for both of the cells it separates and
    /// returns the cell on the far side.
    pub fn delete_wallboard(&mut self, wallboard: Wallboard) -> Cell {
        let cell = wallboard.cell();
        let Some(neighbor) = self.neighbor(cell, wallboard.direction) else {
            panic!("cannot tear down border wallboard {wallboard:?}");
        };

        let i = self.index(cell);
        let j = self.index(neighbor);
        self.walls[i] &= !bit(wallboard.direction);
        self.walls[j] &= !bit(wallboard.direction.opposite());

        neighbor
    }

    /// Opens a wallboard on the outer border. Only exit placement does this.
    pub fn open_border(&mut self, wallboard: Wallboard) {
        assert!(
            self.is_border(wallboard),
            "{wallboard:?} is not on the outer border"
        );

        let i = self.index(wallboard.cell());
        self.walls[i] &= !bit(wallboard.direction);
    }

    /// Cells reachable from `cell` in one step through an open internal wall.
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::all().filter_map(move |direction| {
            if self.has_wall(cell, direction) {
                None
            } else {
                self.neighbor(cell, direction)
            }
        })
    }

    /// Number of internal walls torn down, each physical wall counted once.
    pub fn open_internal_wallboards(&self) -> usize {
        self.cells()
            .map(|cell| {
                [Direction::South, Direction::East]
                    .into_iter()
                    .filter(|&direction| {
                        self.neighbor(cell, direction).is_some()
                            && self.has_no_wall(cell, direction)
                    })
                    .count()
            })
            .sum()
    }

    pub fn border_wallboards(&self) -> Vec<Wallboard> {
        let mut border = Vec::new();

        for cell in self.cells() {
            for direction in Direction::all() {
                if self.neighbor(cell, direction).is_none() {
                    border.push(Wallboard::new(cell.x, cell.y, direction));
                }
            }
        }

        border
    }

    pub fn open_border_wallboards(&self) -> Vec<Wallboard> {
        self.border_wallboards()
            .into_iter()
            .filter(|wallboard| self.has_no_wall(wallboard.cell(), wallboard.direction))
            .collect()
    }
}

const fn bit(direction: Direction) -> u8 {
    1 << direction.index()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_floorplan_has_every_wall_up() {
        let floorplan = Floorplan::new(3, 2);
        for cell in floorplan.cells() {
            for direction in Direction::all() {
                assert!(floorplan.has_wall(cell, direction));
            }
        }
        assert_eq!(floorplan.open_internal_wallboards(), 0);
        assert!(floorplan.open_border_wallboards().is_empty());
    }

    #[test]
    fn cells_are_row_major() {
        let floorplan = Floorplan::new(3, 2);
        let cells: Vec<Cell> = floorplan.cells().collect();
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[3], Cell::new(0, 1));
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(floorplan.index(*cell), i);
            assert_eq!(floorplan.cell_at(i), *cell);
        }
    }

    #[test]
    fn deleting_a_wallboard_opens_both_sides() {
        let mut floorplan = Floorplan::new(2, 2);
        let far_side = floorplan.delete_wallboard(Wallboard::new(0, 1, Direction::North));

        assert_eq!(far_side, Cell::new(0, 0));
        assert!(floorplan.has_no_wall(Cell::new(0, 1), Direction::North));
        assert!(floorplan.has_no_wall(Cell::new(0, 0), Direction::South));
        assert!(floorplan.has_wall(Cell::new(0, 0), Direction::East));
        assert_eq!(floorplan.open_internal_wallboards(), 1);
    }

    #[test]
    fn border_wallboards_cannot_be_torn_down() {
        let floorplan = Floorplan::new(2, 2);
        assert!(!floorplan.can_tear_down(Wallboard::new(0, 0, Direction::North)));
        assert!(!floorplan.can_tear_down(Wallboard::new(0, 0, Direction::West)));
        assert!(!floorplan.can_tear_down(Wallboard::new(1, 1, Direction::South)));
        assert!(!floorplan.can_tear_down(Wallboard::new(1, 1, Direction::East)));
        assert!(floorplan.can_tear_down(Wallboard::new(0, 0, Direction::East)));
        assert!(floorplan.can_tear_down(Wallboard::new(1, 1, Direction::North)));
    }

    #[test]
    fn border_wallboards_cover_the_perimeter() {
        let floorplan = Floorplan::new(4, 3);
        assert_eq!(floorplan.border_wallboards().len(), 2 * (4 + 3));

        let single = Floorplan::new(1, 1);
        assert_eq!(single.border_wallboards().len(), 4);
    }

    #[test]
    #[should_panic(expected = "cannot tear down border wallboard")]
    fn deleting_a_border_wallboard_panics() {
        let mut floorplan = Floorplan::new(2, 2);
        floorplan.delete_wallboard(Wallboard::new(1, 0, Direction::East));
    }

    #[test]
    fn open_border_only_touches_one_cell() {
        let mut floorplan = Floorplan::new(2, 2);
        let exit = Wallboard::new(0, 0, Direction::North);
        floorplan.open_border(exit);

        assert_eq!(floorplan.open_border_wallboards(), vec![exit]);
        assert_eq!(floorplan.open_internal_wallboards(), 0);
        assert_eq!(floorplan.open_neighbors(Cell::new(0, 0)).count(), 0);
    }

    #[test]
    #[should_panic(expected = "not on the outer border")]
    fn open_border_rejects_internal_wallboards() {
        let mut floorplan = Floorplan::new(2, 2);
        floorplan.open_border(Wallboard::new(0, 0, Direction::East));
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 floorplan")]
    fn out_of_range_cells_panic() {
        let floorplan = Floorplan::new(2, 2);
        floorplan.has_wall(Cell::new(2, 0), Direction::North);
    }

    #[test]
    #[should_panic(expected = "more cells than fit in memory")]
    fn overflowing_dimensions_panic() {
        Floorplan::new(usize::MAX, 2);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_dimensions_panic() {
        Floorplan::new(0, 3);
    }
}
