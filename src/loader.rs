use image::imageops::FilterType;
use log::info;

use crate::error::VisError;
use crate::grid::Grid;

/// Decode a raster image into an occupancy grid.
///
/// The image is converted to 8-bit grayscale, resized to `width` x `height`
/// with a triangle filter, and thresholded: pixels at or above `threshold`
/// are free, darker pixels are blocked.
pub fn grid_from_image(
    path: &str,
    width: u32,
    height: u32,
    threshold: u8,
) -> Result<Grid, VisError> {
    if width == 0 || height == 0 {
        return Err(VisError::Config(format!(
            "grid dimensions must be positive, got {}x{}",
            width, height
        )));
    }

    let img = image::open(path)?;
    let gray = img.to_luma8();
    let resized = image::imageops::resize(&gray, width, height, FilterType::Triangle);

    let mut grid = Grid::new(height as i32, width as i32);
    let mut blocked = 0usize;
    for y in 0..height {
        for x in 0..width {
            if resized.get_pixel(x, y)[0] < threshold {
                grid.set_cell(x as i32, y as i32, 1);
                blocked += 1;
            }
        }
    }
    info!(
        "loaded '{}' as {}x{} grid, {} blocked cells",
        path, width, height, blocked
    );
    Ok(grid)
}
