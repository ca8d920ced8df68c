use crate::cell::Cell;

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry). Exact on an empty
/// 4-connected grid, so never an overestimate.
pub fn manhattan(a: Cell, b: Cell) -> u64 {
    u64::from(a.row.abs_diff(b.row)) + u64::from(a.column.abs_diff(b.column))
}

/// Straight-line distance. A looser lower bound than [manhattan] on a 4-connected grid.
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let delta_row = a.row as f64 - b.row as f64;
    let delta_column = a.column as f64 - b.column as f64;
    (delta_row * delta_row + delta_column * delta_column).sqrt()
}

/// Distance estimate used by A* to order its frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub fn estimate(&self, from: Cell, to: Cell) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan(from, to) as f64,
            Heuristic::Euclidean => euclidean(from, to),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(manhattan(a, a), 0);
        assert_eq!(euclidean(a, a), 0.0);
    }

    #[test]
    fn extreme_coordinates() {
        let low = Cell::new(i32::MIN, 0);
        let high = Cell::new(i32::MAX, 0);
        assert_eq!(manhattan(low, Cell::new(1, 0)), (1 << 31) + 1);
        assert_eq!(manhattan(low, high), u32::MAX as u64);
        let corners = manhattan(Cell::new(i32::MIN, i32::MIN), Cell::new(i32::MAX, i32::MAX));
        assert_eq!(corners, 2 * u32::MAX as u64);
        assert!((euclidean(low, high) - u32::MAX as f64).abs() < 1e-6);
        let (a, b) = (Cell::new(i32::MIN, i32::MAX), Cell::new(i32::MAX, i32::MIN));
        assert!(Heuristic::Euclidean.estimate(a, b) <= Heuristic::Manhattan.estimate(a, b));
    }

    /// Euclidean never exceeds Manhattan, so both stay below the true 4-grid distance.
    #[test]
    fn euclidean_is_looser() {
        let origin = Cell::new(0, 0);
        for row in -5..=5 {
            for column in -5..=5 {
                let c = Cell::new(row, column);
                assert!(
                    Heuristic::Euclidean.estimate(origin, c)
                        <= Heuristic::Manhattan.estimate(origin, c)
                );
            }
        }
    }
}
