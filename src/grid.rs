use crate::error::VisError;

/// Integer grid coordinate, `(x, y)`. Used both as array index and map key.
pub type Cell = (i32, i32);

/// Occupancy grid of free/blocked cells.
/// Cell values: 0=free, 1=blocked. Out-of-bounds reads count as blocked.
///
/// The grid is built once per run and shared read-only across all workers;
/// nothing mutates it while a computation is in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    cells: Vec<u8>,
}

impl Grid {
    /// Create a new grid with all cells set to free (0)
    pub fn new(rows: i32, cols: i32) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![0; (rows * cols) as usize],
        }
    }

    /// Create a grid with specific blocked cells, given as flat cell IDs
    pub fn with_blocked(rows: i32, cols: i32, blocked: &[i32]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &cell_id in blocked {
            if cell_id >= 0 && cell_id < (rows * cols) {
                grid.cells[cell_id as usize] = 1;
            }
        }
        grid
    }

    /// Build a grid from row-major cell values. Any nonzero value is
    /// blocked. Ragged or empty input is a configuration error.
    pub fn from_rows(rows_data: &[Vec<u8>]) -> Result<Self, VisError> {
        if rows_data.is_empty() || rows_data[0].is_empty() {
            return Err(VisError::Config(
                "grid must have at least one row and one column".to_string(),
            ));
        }
        let cols = rows_data[0].len();
        for (y, row) in rows_data.iter().enumerate() {
            if row.len() != cols {
                return Err(VisError::Config(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    cols
                )));
            }
        }
        let cells = rows_data
            .iter()
            .flat_map(|row| row.iter().map(|&v| if v != 0 { 1 } else { 0 }))
            .collect();
        Ok(Grid {
            rows: rows_data.len() as i32,
            cols: cols as i32,
            cells,
        })
    }

    /// Check if a cell at (x, y) is blocked
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.cols || y < 0 || y >= self.rows {
            return true; // Out of bounds is considered blocked
        }
        self.cells[self.get_id(x, y) as usize] == 1
    }

    /// Convert (x, y) coordinates to cell ID
    pub fn get_id(&self, x: i32, y: i32) -> i32 {
        x + y * self.cols
    }

    /// Convert cell ID to (x, y) coordinates
    pub fn get_coords(&self, id: i32) -> Cell {
        (id % self.cols, id / self.cols)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.0 >= 0 && cell.0 < self.cols && cell.1 >= 0 && cell.1 < self.rows
    }

    /// Reject coordinates outside the grid before any computation starts.
    pub fn require_in_bounds(&self, cell: Cell) -> Result<(), VisError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(VisError::Config(format!(
                "cell ({}, {}) is outside the {}x{} grid",
                cell.0, cell.1, self.cols, self.rows
            )))
        }
    }

    pub fn cell_count(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    /// All cells in row-major order - the universe of one computation
    pub fn cells_row_major(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for y in 0..self.rows {
            for x in 0..self.cols {
                cells.push((x, y));
            }
        }
        cells
    }

    /// Set cell value at (x, y). Only used while building a grid; the
    /// engine never writes after construction.
    pub fn set_cell(&mut self, x: i32, y: i32, value: u8) {
        if x >= 0 && x < self.cols && y >= 0 && y < self.rows {
            let id = self.get_id(x, y);
            self.cells[id as usize] = if value != 0 { 1 } else { 0 };
        }
    }
}
