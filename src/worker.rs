use std::collections::{HashMap, HashSet};

use crate::grid::{Cell, Grid};
use crate::probe::probe;
use crate::ray::trace;

/// Compute the visible set for every query cell in `task` against the full
/// `universe`, returning this worker's slice of the visibility map.
///
/// Workers are fully independent: the grid is read-only, the partial map is
/// exclusively owned until handed back, and no ordering between workers is
/// assumed anywhere.
pub fn run_task(task: &[Cell], grid: &Grid, universe: &[Cell]) -> HashMap<Cell, HashSet<Cell>> {
    let mut partial = HashMap::with_capacity(task.len());
    for &cell in task {
        partial.insert(cell, visible_set(cell, grid, universe));
    }
    partial
}

/// Union of unobstructed ray prefixes from `observer` toward every cell of
/// `universe`. Rays toward different targets overlap, so the result is a
/// set, and a cell short of any endpoint still counts as seen.
///
/// A blocked observer sees nothing, its own cell included.
pub fn visible_set(observer: Cell, grid: &Grid, universe: &[Cell]) -> HashSet<Cell> {
    let mut visible = HashSet::new();
    if grid.is_blocked(observer.0, observer.1) {
        return visible;
    }
    for &target in universe {
        let ray = trace(observer, target);
        visible.extend(probe(&ray, grid).visible);
    }
    visible
}
