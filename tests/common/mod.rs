use gridvis::Grid;

/// Build a grid from ASCII art rows: '.' is free, '#' is blocked.
/// All rows must have the same width.
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    let data: Vec<Vec<u8>> = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '.' => 0,
                    '#' => 1,
                    other => panic!("unexpected grid character '{}'", other),
                })
                .collect()
        })
        .collect();
    Grid::from_rows(&data).expect("test grid must be rectangular")
}

/// The 3x3 scenario grid with a single obstacle in the center.
pub fn center_obstacle_grid() -> Grid {
    grid_from_ascii(&[
        "...", //
        ".#.", //
        "...",
    ])
}

/// The 5x5 scenario grid with a 3-cell wall and a trailing spur.
pub fn wall_grid() -> Grid {
    grid_from_ascii(&[
        ".....", //
        ".###.", //
        "...#.", //
        ".....", //
        ".....",
    ])
}
