use crate::error::VisError;
use crate::grid::{Cell, Grid};
use crate::ray::trace;

/// Outcome of walking one ray against the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// True if the walk hit a blocked cell before the ray ended.
    pub blocked: bool,
    /// Every cell strictly before the first blocked cell, or the whole ray
    /// when nothing blocks it.
    pub visible: Vec<Cell>,
}

/// Walk `ray` in emitted order and stop at the first blocked cell.
///
/// The blocked cell itself is excluded - nothing is seen through it. This
/// is the single obstruction rule for the whole crate: line-of-sight
/// queries and the bulk engine both go through here. A blocked observer
/// (first ray cell) yields an empty prefix.
pub fn probe(ray: &[Cell], grid: &Grid) -> ProbeResult {
    for (i, &(x, y)) in ray.iter().enumerate() {
        if grid.is_blocked(x, y) {
            return ProbeResult {
                blocked: true,
                visible: ray[..i].to_vec(),
            };
        }
    }
    ProbeResult {
        blocked: false,
        visible: ray.to_vec(),
    }
}

/// Line-of-sight query: is `target` visible from `observer`?
///
/// Both cells must be inside the grid. Directional, like the trace itself.
pub fn visible_between(grid: &Grid, observer: Cell, target: Cell) -> Result<bool, VisError> {
    grid.require_in_bounds(observer)?;
    grid.require_in_bounds(target)?;
    let result = probe(&trace(observer, target), grid);
    Ok(!result.blocked)
}
