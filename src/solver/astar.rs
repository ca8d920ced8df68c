use crate::frontier::PriorityFrontier;
use crate::heuristic::Heuristic;
use crate::search::CostModel;
use crate::solver::GridSolver;

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
    /// Multiplies the heuristic estimate. Values above 1.0 trade optimality for fewer
    /// explored cells.
    pub heuristic_factor: f64,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::with_heuristic(Heuristic::Manhattan)
    }

    pub fn with_heuristic(heuristic: Heuristic) -> AstarSolver {
        AstarSolver {
            heuristic,
            heuristic_factor: 1.0,
        }
    }
}

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier;

    fn frontier(&self) -> PriorityFrontier {
        PriorityFrontier::new()
    }

    fn cost_model(&self) -> CostModel {
        CostModel::Relax {
            heuristic: self.heuristic,
            heuristic_factor: self.heuristic_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::is_connected_path;
    use crate::{BfsSolver, Cell, Grid};

    const HEURISTICS: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::Euclidean];

    /// Asserts that the optimal 4 step solution is found.
    #[test]
    fn solve_simple_problem() {
        let mut grid = Grid::new(3, 3);
        grid.set_wall(Cell::new(1, 1));
        grid.set_source(Cell::new(0, 0));
        grid.set_target(Cell::new(2, 2));
        for heuristic in HEURISTICS {
            let result = AstarSolver::with_heuristic(heuristic).solve(&grid);
            assert_eq!(result.edge_count(), Some(4));
        }
    }

    /// A straight corridor is followed without detours.
    #[test]
    fn straight_line_explores_only_the_line() {
        let mut grid = Grid::new(10, 10);
        grid.set_source(Cell::new(0, 0));
        grid.set_target(Cell::new(0, 9));
        for heuristic in HEURISTICS {
            let result = AstarSolver::with_heuristic(heuristic).solve(&grid);
            assert_eq!(result.edge_count(), Some(9));
            assert_eq!(result.explored.len(), 10);
        }
    }

    #[test]
    fn test_complex() {
        let mut grid = Grid::new(10, 10);
        for wall in [(1, 1), (5, 0), (0, 5), (8, 8), (6, 1), (6, 2), (6, 3), (6, 4), (6, 5)] {
            grid.set_wall(Cell::from(wall));
        }
        let source = Cell::new(0, 0);
        grid.set_source(source);
        grid.set_target(Cell::new(9, 2));
        let expected = BfsSolver.solve(&grid).edge_count();
        // Row 6 can only be crossed at column 6 or beyond
        assert_eq!(expected, Some(19));
        for heuristic in HEURISTICS {
            let result = AstarSolver::with_heuristic(heuristic).solve(&grid);
            assert_eq!(result.edge_count(), expected);
            assert!(is_connected_path(source, &result.path));
        }
    }

    /// An inflated estimate may reach cells again along cheaper routes; the path stays connected.
    #[test]
    fn weighted_heuristic_still_connects() {
        let mut grid = Grid::new(8, 8);
        for row in 0..7 {
            grid.set_wall(Cell::new(row, 4));
        }
        let source = Cell::new(0, 0);
        grid.set_source(source);
        grid.set_target(Cell::new(0, 7));
        let mut solver = AstarSolver::new();
        solver.heuristic_factor = 2.0;
        let weighted = solver.solve(&grid);
        assert!(weighted.found());
        assert!(is_connected_path(source, &weighted.path));
        assert!(weighted.edge_count() >= BfsSolver.solve(&grid).edge_count());
    }
}
