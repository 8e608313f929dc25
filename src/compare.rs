use crate::engine::VisibilityMap;
use crate::grid::Cell;

/// Differences between two visibility map artifacts, typically produced by
/// two implementations of the same engine.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MapDiff {
    /// Cells present only in the first map, sorted.
    pub only_in_first: Vec<Cell>,
    /// Cells present only in the second map, sorted.
    pub only_in_second: Vec<Cell>,
    /// Cells present in both whose visible sets differ, sorted.
    pub differing: Vec<Cell>,
}

impl MapDiff {
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty() && self.differing.is_empty()
    }
}

/// Compare two maps key-by-key. Value sets are compared order-independently;
/// serialization order never counts as a difference.
pub fn compare_maps(first: &VisibilityMap, second: &VisibilityMap) -> MapDiff {
    let mut diff = MapDiff::default();
    for (&cell, visible) in first.iter() {
        match second.get(cell) {
            None => diff.only_in_first.push(cell),
            Some(other) if visible != other => diff.differing.push(cell),
            Some(_) => {}
        }
    }
    for (&cell, _) in second.iter() {
        if first.get(cell).is_none() {
            diff.only_in_second.push(cell);
        }
    }
    diff.only_in_first.sort();
    diff.only_in_second.sort();
    diff.differing.sort();
    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn map_of(entries: &[(Cell, &[Cell])]) -> VisibilityMap {
        let entries: HashMap<Cell, HashSet<Cell>> = entries
            .iter()
            .map(|&(cell, visible)| (cell, visible.iter().copied().collect()))
            .collect();
        VisibilityMap::from(entries)
    }

    #[test]
    fn test_identical_maps_have_empty_diff() {
        let a = map_of(&[((0, 0), &[(0, 0), (1, 0)]), ((1, 0), &[(1, 0)])]);
        let b = map_of(&[((1, 0), &[(1, 0)]), ((0, 0), &[(1, 0), (0, 0)])]);
        assert!(compare_maps(&a, &b).is_empty());
    }

    #[test]
    fn test_missing_keys_are_reported_on_both_sides() {
        let a = map_of(&[((0, 0), &[(0, 0)]), ((1, 0), &[(1, 0)])]);
        let b = map_of(&[((0, 0), &[(0, 0)]), ((2, 0), &[(2, 0)])]);
        let diff = compare_maps(&a, &b);
        assert_eq!(diff.only_in_first, vec![(1, 0)]);
        assert_eq!(diff.only_in_second, vec![(2, 0)]);
        assert!(diff.differing.is_empty());
    }

    #[test]
    fn test_differing_value_sets_are_reported() {
        let a = map_of(&[((0, 0), &[(0, 0), (1, 0)])]);
        let b = map_of(&[((0, 0), &[(0, 0)])]);
        let diff = compare_maps(&a, &b);
        assert_eq!(diff.differing, vec![(0, 0)]);
        assert!(!diff.is_empty());
    }
}
