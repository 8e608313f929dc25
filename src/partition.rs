use crate::grid::Cell;

/// A contiguous slice of the cell universe assigned to one worker.
pub type Task = Vec<Cell>;

/// Split `cells` into `worker_count` contiguous chunks whose sizes differ by
/// at most one: every chunk gets `n / worker_count` cells and the first
/// `n % worker_count` chunks take one extra.
///
/// Deterministic by construction, so task assignment is reproducible across
/// runs. `worker_count` beyond the cell count is legal and yields empty
/// tasks, which downstream stages treat as no-ops. The engine validates
/// `worker_count >= 1` before calling.
pub fn partition(cells: &[Cell], worker_count: usize) -> Vec<Task> {
    assert!(worker_count >= 1, "worker_count must be >= 1");
    let n = cells.len();
    let base = n / worker_count;
    let extra = n % worker_count;

    let mut tasks = Vec::with_capacity(worker_count);
    let mut start = 0;
    for i in 0..worker_count {
        let size = base + usize::from(i < extra);
        tasks.push(cells[start..start + size].to_vec());
        start += size;
    }
    tasks
}
