use crate::grid::Cell;

/// Trace the discretized line from `observer` to `target`, both endpoints
/// included.
///
/// Integer Bresenham stepping: the result is a single 8-connected path with
/// no skipped cells and no repeated cells. The path is directional - the
/// tie-break rules can make `trace(b, a)` visit different cells than
/// `trace(a, b)`, and callers must not assume symmetry.
///
/// The grid is never consulted here; obstacle logic lives in the probe.
pub fn trace(observer: Cell, target: Cell) -> Vec<Cell> {
    let (mut x, mut y) = observer;
    let (x1, y1) = target;
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let mut cells = Vec::with_capacity((dx.max(dy) + 1) as usize);

    loop {
        cells.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = err * 2;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    cells
}
