use crate::cell::Cell;
use crate::FxIndexMap;
use itertools::Itertools;
use std::iter;

/// Walks parent pointers back from `target` and returns the cells after the source up to and
/// including `target`. The source is the cell without a parent entry and is left out. A target
/// without a parent yields `[target]`.
pub fn reconstruct(target: Cell, parents: &FxIndexMap<Cell, Cell>) -> Vec<Cell> {
    let mut chain: Vec<Cell> =
        iter::successors(Some(target), |current| parents.get(current).copied()).collect();
    if chain.len() > 1 {
        // The last cell of the chain is the source
        chain.pop();
    }
    chain.reverse();
    chain
}

/// True if every consecutive pair, starting from `source`, is one unit step apart.
pub fn is_connected_path(source: Cell, path: &[Cell]) -> bool {
    iter::once(&source)
        .chain(path)
        .tuple_windows()
        .all(|(a, b)| a.is_adjacent(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excludes_source() {
        let mut parents = FxIndexMap::default();
        let s = Cell::new(0, 0);
        let a = Cell::new(0, 1);
        let b = Cell::new(1, 1);
        let t = Cell::new(1, 2);
        parents.insert(a, s);
        parents.insert(b, a);
        parents.insert(t, b);
        let path = reconstruct(t, &parents);
        assert_eq!(path, vec![a, b, t]);
        assert!(is_connected_path(s, &path));
        assert_eq!(reconstruct(a, &parents), vec![a]);
    }

    #[test]
    fn target_without_parent() {
        let parents = FxIndexMap::default();
        let t = Cell::new(3, 3);
        assert_eq!(reconstruct(t, &parents), vec![t]);
    }

    #[test]
    fn connectivity() {
        let s = Cell::new(0, 0);
        assert!(is_connected_path(s, &[]));
        assert!(!is_connected_path(s, &[Cell::new(1, 1)]));
        assert!(!is_connected_path(s, &[Cell::new(0, 1), Cell::new(0, 3)]));
        let edge = Cell::new(i32::MAX, i32::MIN);
        assert!(is_connected_path(edge, &[Cell::new(i32::MAX - 1, i32::MIN)]));
        assert!(!is_connected_path(edge, &[Cell::new(i32::MIN, i32::MIN)]));
    }
}
