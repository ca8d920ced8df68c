use crate::frontier::LifoFrontier;
use crate::search::CostModel;
use crate::solver::GridSolver;

/// Depth-first search. Cells are marked as discovered when pushed, so every cell enters the
/// stack at most once. The path is connected and wall-free but usually not the shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = LifoFrontier;

    fn frontier(&self) -> LifoFrontier {
        LifoFrontier::new()
    }

    fn cost_model(&self) -> CostModel {
        CostModel::DiscoverOnce
    }
}
