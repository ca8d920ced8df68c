use crate::cell::Cell;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::search::{CostModel, Role, Search, SearchResult};

pub mod astar;
pub mod bfs;
pub mod dfs;

pub use astar::AstarSolver;
pub use bfs::BfsSolver;
pub use dfs::DfsSolver;

/// A traversal algorithm expressed as a frontier ordering plus a rule for admitting neighbours.
/// The provided methods run the shared [Search] loop with them.
pub trait GridSolver {
    type Frontier: Frontier;

    fn frontier(&self) -> Self::Frontier;

    fn cost_model(&self) -> CostModel;

    /// Starts a search that the caller advances with [Search::step].
    fn start<'g>(&self, grid: &'g Grid) -> Search<'g, Self::Frontier> {
        Search::new(grid, self.frontier(), self.cost_model())
    }

    /// Runs a search on `grid` to completion.
    fn solve(&self, grid: &Grid) -> SearchResult {
        self.start(grid).run()
    }

    /// Runs a search on `grid` to completion, reporting each examined and pushed cell.
    fn solve_observed<O>(&self, grid: &Grid, observer: O) -> SearchResult
    where
        O: FnMut(Cell, Role),
    {
        self.start(grid).run_observed(observer)
    }
}

/// Runtime choice between the solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    AStar(Heuristic),
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::AStar(Heuristic::Manhattan),
        Algorithm::AStar(Heuristic::Euclidean),
    ];

    pub fn name(&self) -> String {
        match self {
            Algorithm::BreadthFirst => "BFS".to_string(),
            Algorithm::DepthFirst => "DFS".to_string(),
            Algorithm::AStar(heuristic) => format!("A* ({})", heuristic.name()),
        }
    }

    /// Starts a search behind a boxed frontier so that the caller can store it regardless of
    /// the algorithm picked.
    pub fn start<'g>(&self, grid: &'g Grid) -> Search<'g, Box<dyn Frontier>> {
        match self {
            Algorithm::BreadthFirst => boxed(&BfsSolver, grid),
            Algorithm::DepthFirst => boxed(&DfsSolver, grid),
            Algorithm::AStar(heuristic) => boxed(&AstarSolver::with_heuristic(*heuristic), grid),
        }
    }

    pub fn solve(&self, grid: &Grid) -> SearchResult {
        self.solve_observed(grid, |_, _| {})
    }

    pub fn solve_observed<O>(&self, grid: &Grid, observer: O) -> SearchResult
    where
        O: FnMut(Cell, Role),
    {
        match self {
            Algorithm::BreadthFirst => BfsSolver.solve_observed(grid, observer),
            Algorithm::DepthFirst => DfsSolver.solve_observed(grid, observer),
            Algorithm::AStar(heuristic) => {
                AstarSolver::with_heuristic(*heuristic).solve_observed(grid, observer)
            }
        }
    }
}

fn boxed<'g, S>(solver: &S, grid: &'g Grid) -> Search<'g, Box<dyn Frontier>>
where
    S: GridSolver,
    S::Frontier: 'static,
{
    let frontier: Box<dyn Frontier> = Box::new(solver.frontier());
    Search::new(grid, frontier, solver.cost_model())
}
