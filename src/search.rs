//! The traversal loop shared by every algorithm.
//!
//! A [Search] is a plain value holding the frontier, the parent map, the cost map and the
//! explored set, so a caller can advance it one frontier pop at a time with [Search::step] and
//! resume across ticks, or drive it to completion with [Search::run].
use crate::cell::Cell;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::path::reconstruct;
use crate::{FxIndexMap, FxIndexSet};
use fxhash::FxHashMap;
use log::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
    Running,
    /// The target was popped from the frontier.
    Found,
    /// The frontier ran empty, or the search declined because source or target is unset.
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        *self != SearchState::Running
    }
}

/// What happened to a cell reported to an observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Pushed onto the frontier.
    Frontier,
    /// Popped from the frontier and examined.
    Explored,
}

/// Outcome of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub state: SearchState,
    /// Cells after the source up to and including the target. Empty if the target was not
    /// reached, or if source and target coincide.
    pub path: Vec<Cell>,
    /// Every cell popped and examined, in the order it was popped.
    pub explored: FxIndexSet<Cell>,
}

impl SearchResult {
    /// The result of a search that never ran.
    pub fn declined() -> SearchResult {
        SearchResult {
            state: SearchState::Exhausted,
            path: Vec::new(),
            explored: FxIndexSet::default(),
        }
    }

    pub fn found(&self) -> bool {
        self.state == SearchState::Found
    }

    /// Number of edges from source to target, if the target was reached.
    pub fn edge_count(&self) -> Option<usize> {
        self.found().then_some(self.path.len())
    }
}

/// How neighbours of an examined cell are admitted to the frontier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CostModel {
    /// A cell is pushed the first time it is discovered and never again.
    DiscoverOnce,
    /// A cell is pushed whenever a strictly cheaper route to it is found, keyed by the route
    /// cost plus the weighted heuristic estimate.
    Relax {
        heuristic: Heuristic,
        heuristic_factor: f64,
    },
}

impl CostModel {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        match self {
            CostModel::DiscoverOnce => 0.0,
            CostModel::Relax {
                heuristic,
                heuristic_factor,
            } => heuristic.estimate(from, to) * heuristic_factor,
        }
    }
}

/// A search in progress over a borrowed [Grid]. The borrow keeps the grid from being edited
/// while the search is alive; clone the grid first to keep editing during an animated run.
#[derive(Clone, Debug)]
pub struct Search<'g, F: Frontier> {
    grid: &'g Grid,
    endpoints: Option<(Cell, Cell)>,
    frontier: F,
    cost_model: CostModel,
    parents: FxIndexMap<Cell, Cell>,
    costs: FxHashMap<Cell, u32>,
    explored: FxIndexSet<Cell>,
    path: Vec<Cell>,
    state: SearchState,
}

impl<'g, F: Frontier> Search<'g, F> {
    /// Seeds `frontier` with the grid's source. If source or target is unset the search starts
    /// out [Exhausted](SearchState::Exhausted).
    pub fn new(grid: &'g Grid, mut frontier: F, cost_model: CostModel) -> Search<'g, F> {
        let endpoints = grid.source().zip(grid.target());
        let mut costs = FxHashMap::default();
        let state = match endpoints {
            Some((source, target)) => {
                info!("Searching from {} to {}", source, target);
                costs.insert(source, 0);
                frontier.push(source, cost_model.estimate(source, target));
                SearchState::Running
            }
            None => {
                warn!("Source or target is not set, declining to search");
                SearchState::Exhausted
            }
        };
        Search {
            grid,
            endpoints,
            frontier,
            cost_model,
            parents: FxIndexMap::default(),
            costs,
            explored: FxIndexSet::default(),
            path: Vec::new(),
            state,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn explored(&self) -> &FxIndexSet<Cell> {
        &self.explored
    }

    /// Number of entries in the frontier, stale duplicates included.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The path found so far; empty until the search is [Found](SearchState::Found).
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Pops and examines one frontier cell.
    pub fn step(&mut self) -> SearchState {
        self.step_observed(&mut |_, _| {})
    }

    /// Like [step](Self::step), reporting every examined cell and every push to `observer`.
    /// Once terminal, further calls return the terminal state without doing anything.
    pub fn step_observed<O>(&mut self, observer: &mut O) -> SearchState
    where
        O: FnMut(Cell, Role),
    {
        if self.state.is_terminal() {
            return self.state;
        }
        let Some((source, target)) = self.endpoints else {
            self.state = SearchState::Exhausted;
            return self.state;
        };
        let Some(current) = self.frontier.pop() else {
            self.finish(SearchState::Exhausted);
            return self.state;
        };
        // A cell pushed again with a cheaper key comes out once more; the first pop won
        if !self.explored.insert(current) {
            return self.state;
        }
        observer(current, Role::Explored);

        if current == target {
            self.path = if current == source {
                Vec::new()
            } else {
                reconstruct(target, &self.parents)
            };
            self.finish(SearchState::Found);
            return self.state;
        }

        let grid = self.grid;
        match self.cost_model {
            CostModel::DiscoverOnce => {
                for n in grid.neighbors(current) {
                    if n == source || self.parents.contains_key(&n) {
                        continue;
                    }
                    self.parents.insert(n, current);
                    self.frontier.push(n, 0.0);
                    observer(n, Role::Frontier);
                }
            }
            CostModel::Relax { .. } => {
                let tentative = self.costs.get(&current).copied().unwrap_or_default() + 1;
                for n in grid.neighbors(current) {
                    if self.costs.get(&n).is_some_and(|&known| known <= tentative) {
                        continue;
                    }
                    self.parents.insert(n, current);
                    self.costs.insert(n, tentative);
                    let key = tentative as f64 + self.cost_model.estimate(n, target);
                    self.frontier.push(n, key);
                    observer(n, Role::Frontier);
                }
            }
        }
        self.state
    }

    fn finish(&mut self, state: SearchState) {
        self.state = state;
        info!(
            "Search {:?} after exploring {} cells, path of {} cells",
            state,
            self.explored.len(),
            self.path.len()
        );
    }

    /// Steps until the search is terminal.
    pub fn run(self) -> SearchResult {
        self.run_observed(|_, _| {})
    }

    pub fn run_observed<O>(mut self, mut observer: O) -> SearchResult
    where
        O: FnMut(Cell, Role),
    {
        while !self.step_observed(&mut observer).is_terminal() {}
        self.into_result()
    }

    /// Converts the search into its result. A search that is still running yields an empty
    /// path and the cells explored so far.
    pub fn into_result(self) -> SearchResult {
        let path = if self.state == SearchState::Found {
            self.path
        } else {
            Vec::new()
        };
        SearchResult {
            state: self.state,
            path,
            explored: self.explored,
        }
    }
}
