//! # grid_search
//!
//! Breadth-first search, depth-first search and [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! on a rectangular, 4-connected, uniform-cost grid, built so that a search can be watched while
//! it runs.
//!
//! A [Grid] holds the walls, the source and the target. Every algorithm runs the same [Search]
//! loop and differs only in its [Frontier] and [CostModel], bundled by the solvers in [solver].
//! A search can be run to completion, or advanced one frontier pop at a time while an observer
//! is told which cells are pushed and which are examined.
//!
//! ```
//! use grid_search::{Algorithm, Cell, Grid, Heuristic};
//!
//! let mut grid = Grid::new(5, 5);
//! grid.set_source(Cell::new(0, 0));
//! grid.set_target(Cell::new(4, 4));
//! for column in 0..4 {
//!     grid.set_wall(Cell::new(2, column));
//! }
//! let result = Algorithm::AStar(Heuristic::Manhattan).solve(&grid);
//! assert_eq!(result.edge_count(), Some(8));
//! assert!(result.path.contains(&Cell::new(2, 4)));
//! ```
mod cell;
pub mod frontier;
mod grid;
mod heuristic;
pub mod path;
pub mod search;
pub mod solver;

use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

pub use cell::{Cell, DIRECTIONS};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use grid::Grid;
pub use heuristic::{euclidean, manhattan, Heuristic};
pub use path::reconstruct;
pub use search::{CostModel, Role, Search, SearchResult, SearchState};
pub use solver::{Algorithm, AstarSolver, BfsSolver, DfsSolver, GridSolver};
