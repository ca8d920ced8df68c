use crate::cell::Cell;
use crate::search::SearchResult;
use crate::FxIndexSet;
use core::fmt;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;

/// [Grid] owns the static topology a search runs over: fixed dimensions, the set of blocked
/// cells and the optional source and target. In addition it maintains a [UnionFind] over the
/// 4-connected traversable cells, which answers reachability queries without running a search.
///
/// A cell that is the source or the target is never a wall at the same time: every edit evicts
/// the conflicting role first. Edits outside the grid bounds are ignored.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    walls: FxIndexSet<Cell>,
    source: Option<Cell>,
    target: Option<Cell>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(0, 0)
    }
}

impl Grid {
    /// Creates an empty grid. A grid with zero rows or columns has no in-bounds cells, so every
    /// edit on it is a no-op and every search on it declines.
    pub fn new(rows: usize, columns: usize) -> Grid {
        Grid {
            rows,
            columns,
            walls: FxIndexSet::default(),
            source: None,
            target: None,
            components: UnionFind::new(rows * columns),
            components_dirty: false,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn source(&self) -> Option<Cell> {
        self.source
    }

    pub fn target(&self) -> Option<Cell> {
        self.target
    }

    /// Blocked cells in the order they were placed.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.walls.iter().copied()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.column >= 0
            && (cell.row as usize) < self.rows
            && (cell.column as usize) < self.columns
    }

    /// All in-bounds cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        iproduct!(0..self.rows as i32, 0..self.columns as i32)
            .map(|(row, column)| Cell::new(row, column))
    }

    /// True iff the cell is in bounds and not a wall. Source and target are traversable.
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_wall(cell)
    }

    /// The traversable axis-aligned neighbours of `cell` in [DIRECTIONS](crate::DIRECTIONS)
    /// order. The target is always yielded when adjacent so that arrival is detected through the
    /// same enumeration.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neumann_neighborhood()
            .filter(move |&n| self.is_traversable(n) || self.target == Some(n))
    }

    /// Places a wall. Evicts the source or target role if `cell` holds one. Returns whether the
    /// grid changed.
    pub fn set_wall(&mut self, cell: Cell) -> bool {
        if !self.in_bounds(cell) {
            return false;
        }
        let evicted = self.evict_role(cell);
        let inserted = self.walls.insert(cell);
        if inserted {
            // Placing a wall may split a component, which a union-find cannot undo
            self.components_dirty = true;
        }
        evicted || inserted
    }

    /// Returns `cell` to the empty state, removing a wall or the source/target role.
    pub fn clear_cell(&mut self, cell: Cell) -> bool {
        if !self.in_bounds(cell) {
            return false;
        }
        let evicted = self.evict_role(cell);
        let removed = self.remove_wall(cell);
        evicted || removed
    }

    /// Moves the source to `cell`. The previous source cell becomes empty and a wall at `cell`
    /// is removed. Source and target may share a cell.
    pub fn set_source(&mut self, cell: Cell) -> bool {
        if !self.in_bounds(cell) || self.source == Some(cell) {
            return false;
        }
        self.remove_wall(cell);
        self.source = Some(cell);
        true
    }

    /// Moves the target to `cell`, symmetric to [set_source](Self::set_source).
    pub fn set_target(&mut self, cell: Cell) -> bool {
        if !self.in_bounds(cell) || self.target == Some(cell) {
            return false;
        }
        self.remove_wall(cell);
        self.target = Some(cell);
        true
    }

    /// Clears source, target and all walls. Dimensions are kept.
    pub fn reset(&mut self) {
        self.source = None;
        self.target = None;
        self.walls.clear();
        self.generate_components();
    }

    fn evict_role(&mut self, cell: Cell) -> bool {
        let mut evicted = false;
        if self.source == Some(cell) {
            self.source = None;
            evicted = true;
        }
        if self.target == Some(cell) {
            self.target = None;
            evicted = true;
        }
        evicted
    }

    fn remove_wall(&mut self, cell: Cell) -> bool {
        // shift_remove keeps the placement order of the remaining walls
        if self.walls.shift_remove(&cell) {
            self.join_components(cell);
            true
        } else {
            false
        }
    }

    /// Row-major index of an in-bounds cell.
    pub fn get_ix(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.row as usize * self.columns + cell.column as usize)
    }

    /// Joins a freshly freed cell with the components of its traversable neighbours.
    fn join_components(&mut self, cell: Cell) {
        let Some(ix) = self.get_ix(cell) else {
            return;
        };
        for n in cell.neumann_neighborhood() {
            if !self.is_traversable(n) {
                continue;
            }
            if let Some(n_ix) = self.get_ix(n) {
                self.components.union(ix, n_ix);
            }
        }
    }

    /// Checks if both cells are traversable and on the same component. Only meaningful after
    /// [update](Self::update) when walls have been placed since the last regeneration.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        if !self.is_traversable(start) || !self.is_traversable(goal) {
            return false;
        }
        match (self.get_ix(start), self.get_ix(goal)) {
            (Some(start_ix), Some(goal_ix)) => self.components.equiv(start_ix, goal_ix),
            _ => false,
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: Cell, goal: Cell) -> bool {
        !self.reachable(start, goal)
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up traversable neighbours.
    pub fn generate_components(&mut self) {
        debug!(
            "Generating connected components for {}x{} grid",
            self.rows, self.columns
        );
        self.components = UnionFind::new(self.rows * self.columns);
        self.components_dirty = false;
        for (row, column) in iproduct!(0..self.rows as i32, 0..self.columns as i32) {
            let cell = Cell::new(row, column);
            if self.is_wall(cell) {
                continue;
            }
            let Some(ix) = self.get_ix(cell) else {
                continue;
            };
            // Links downwards and rightwards suffice to cover every edge once
            for n in [Cell::new(row + 1, column), Cell::new(row, column + 1)] {
                if !self.is_traversable(n) {
                    continue;
                }
                if let Some(n_ix) = self.get_ix(n) {
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    fn symbol(&self, cell: Cell) -> char {
        if self.source == Some(cell) {
            'S'
        } else if self.target == Some(cell) {
            'T'
        } else if self.is_wall(cell) {
            '#'
        } else {
            '.'
        }
    }

    /// Draws the grid like its [Display](fmt::Display) implementation, with path cells marked `*` and
    /// explored cells marked `o`.
    pub fn render_with(&self, result: &SearchResult) -> String {
        let mut out = String::with_capacity((self.columns + 1) * self.rows);
        for row in 0..self.rows as i32 {
            for column in 0..self.columns as i32 {
                let cell = Cell::new(row, column);
                let symbol = match self.symbol(cell) {
                    '.' if result.path.contains(&cell) => '*',
                    '.' if result.explored.contains(&cell) => 'o',
                    s => s,
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows as i32 {
            let line = (0..self.columns as i32)
                .map(|column| self.symbol(Cell::new(row, column)))
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
