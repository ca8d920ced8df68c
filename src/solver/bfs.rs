use crate::frontier::FifoFrontier;
use crate::search::CostModel;
use crate::solver::GridSolver;

/// Breadth-first search. Returns a path with the fewest steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier;

    fn frontier(&self) -> FifoFrontier {
        FifoFrontier::new()
    }

    fn cost_model(&self) -> CostModel {
        CostModel::DiscoverOnce
    }
}
