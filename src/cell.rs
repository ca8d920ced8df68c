use core::fmt;

/// Unit steps in the order neighbours are enumerated: `+row`, `+column`, `-row`, `-column`.
/// Breadth-first and depth-first traversal order (and thus their tie-breaking) follows from it.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A grid coordinate. Cells carry no identity beyond their coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub column: i32,
}

impl Cell {
    pub const fn new(row: i32, column: i32) -> Cell {
        Cell { row, column }
    }

    /// The cell reached by moving `delta_row` rows and `delta_column` columns, or `None` if
    /// either coordinate leaves the `i32` range.
    pub fn step(&self, (delta_row, delta_column): (i32, i32)) -> Option<Cell> {
        Some(Cell::new(
            self.row.checked_add(delta_row)?,
            self.column.checked_add(delta_column)?,
        ))
    }

    /// The axis-aligned neighbours in [DIRECTIONS] order, without any bounds filtering.
    /// Neighbours outside the `i32` range are skipped.
    pub fn neumann_neighborhood(&self) -> impl Iterator<Item = Cell> {
        let cell = *self;
        DIRECTIONS.into_iter().filter_map(move |d| cell.step(d))
    }

    /// True if `other` is exactly one unit step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.column.abs_diff(other.column))
            == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, column): (i32, i32)) -> Cell {
        Cell::new(row, column)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
