use std::collections::{HashMap, HashSet};
use std::thread;

use crossbeam_channel::unbounded;
use log::{debug, info};

use crate::error::VisError;
use crate::grid::{Cell, Grid};
use crate::partition::{partition, Task};
use crate::worker::run_task;

/// Complete mapping from every grid cell to its visible set.
///
/// Built once per run by the coordinator from disjoint per-task partials,
/// then handed off immutable. Exactly one entry per grid cell; blocked
/// cells map to empty sets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisibilityMap {
    entries: HashMap<Cell, HashSet<Cell>>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, cell: Cell) -> Option<&HashSet<Cell>> {
        self.entries.get(&cell)
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, Cell, HashSet<Cell>> {
        self.entries.iter()
    }

    /// Absorb one worker's partial map. Tasks tile the cell space, so a key
    /// seen twice means the partitioning is broken; that aborts the run
    /// rather than silently overwriting an entry.
    fn merge_partial(&mut self, partial: HashMap<Cell, HashSet<Cell>>) -> Result<(), VisError> {
        for (cell, visible) in partial {
            if self.entries.insert(cell, visible).is_some() {
                return Err(VisError::Invariant(format!(
                    "cell ({}, {}) was reported by more than one worker",
                    cell.0, cell.1
                )));
            }
        }
        Ok(())
    }
}

impl From<HashMap<Cell, HashSet<Cell>>> for VisibilityMap {
    fn from(entries: HashMap<Cell, HashSet<Cell>>) -> Self {
        VisibilityMap { entries }
    }
}

/// Run the full all-cells visibility precomputation.
///
/// The universe (every grid cell, row-major) is split into one task per
/// worker, the tasks go onto a channel, and a fixed pool of `worker_count`
/// OS threads drains it, sending one partial map back per task. The
/// coordinator waits for the whole pool (there is no streaming consumption
/// of the map), then merges the partials by key.
///
/// Worker count is an explicit parameter: callers decide, nothing is
/// auto-detected here.
pub fn compute_visibility(grid: &Grid, worker_count: usize) -> Result<VisibilityMap, VisError> {
    if worker_count < 1 {
        return Err(VisError::Config(format!(
            "worker count must be >= 1, got {}",
            worker_count
        )));
    }
    if grid.rows < 1 || grid.cols < 1 {
        return Err(VisError::Config(format!(
            "grid dimensions must be positive, got {}x{}",
            grid.cols, grid.rows
        )));
    }

    let universe = grid.cells_row_major();
    let tasks = partition(&universe, worker_count);
    let task_count = tasks.len();
    info!(
        "visibility run: {}x{} grid, {} workers, {} cells",
        grid.cols,
        grid.rows,
        worker_count,
        universe.len()
    );

    let (task_tx, task_rx) = unbounded::<Task>();
    let (result_tx, result_rx) = unbounded::<HashMap<Cell, HashSet<Cell>>>();
    for task in tasks {
        task_tx
            .send(task)
            .map_err(|_| VisError::Worker("task channel closed before dispatch".to_string()))?;
    }
    drop(task_tx);

    let partials = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(worker_count);
        for id in 0..worker_count {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let universe = &universe;
            handles.push(scope.spawn(move || {
                while let Ok(task) = task_rx.recv() {
                    debug!("worker {}: {} query cells", id, task.len());
                    if result_tx.send(run_task(&task, grid, universe)).is_err() {
                        break;
                    }
                }
            }));
        }
        drop(result_tx);

        let mut partials = Vec::with_capacity(task_count);
        for partial in result_rx.iter().take(task_count) {
            partials.push(partial);
        }

        // Join the whole pool before touching the results: a partial
        // visibility map is never a valid output.
        let mut clean = true;
        for handle in handles {
            clean &= handle.join().is_ok();
        }
        if !clean {
            return Err(VisError::Worker("a worker thread panicked".to_string()));
        }
        if partials.len() != task_count {
            return Err(VisError::Worker(format!(
                "only {} of {} partial results were delivered",
                partials.len(),
                task_count
            )));
        }
        if result_rx.try_recv().is_ok() {
            return Err(VisError::Invariant(
                "extra partial result received after the worker barrier".to_string(),
            ));
        }
        Ok(partials)
    })?;

    let mut map = VisibilityMap::new();
    for partial in partials {
        map.merge_partial(partial)?;
    }
    if map.len() != grid.cell_count() {
        return Err(VisError::Invariant(format!(
            "visibility map has {} entries, expected {}",
            map.len(),
            grid.cell_count()
        )));
    }
    info!("visibility map complete: {} cells", map.len());
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_rejects_duplicate_key() {
        let mut map = VisibilityMap::new();
        let partial: HashMap<Cell, HashSet<Cell>> =
            HashMap::from([((0, 0), HashSet::from([(0, 0)]))]);
        map.merge_partial(partial.clone()).unwrap();
        assert!(matches!(
            map.merge_partial(partial),
            Err(VisError::Invariant(_))
        ));
    }

    #[test]
    fn test_worker_count_zero_is_rejected() {
        let grid = Grid::new(2, 2);
        assert!(matches!(
            compute_visibility(&grid, 0),
            Err(VisError::Config(_))
        ));
    }
}
