//! Coordinate transformations between grid and world space.
//!
//! The maze occupies a rectangle centered on the world origin: cell (0, 0)
//! sits at the north-west corner, x grows east and z grows south. All
//! transforms take the grid dimensions and cell size explicitly so they stay
//! pure functions of their inputs.

use crate::maze::grid::Cell;
use glam::Vec3;

/// World-space position of the grid's north-west corner.
///
/// # Arguments
/// * `maze_dimensions` - The dimensions of the maze (width, height) in cells
/// * `cell_size` - Edge length of one cell in world units
///
/// # Returns
/// The `(x, z)` world coordinates of grid point (0, 0)
pub fn grid_origin(maze_dimensions: (usize, usize), cell_size: f32) -> (f32, f32) {
    let (maze_width, maze_height) = maze_dimensions;
    let origin_x = -(maze_width as f32 * cell_size) / 2.0;
    let origin_z = -(maze_height as f32 * cell_size) / 2.0;
    (origin_x, origin_z)
}

/// Converts a maze grid cell to the world position of its center.
///
/// # Arguments
/// * `cell` - The maze cell in grid coordinates
/// * `maze_dimensions` - The dimensions of the maze (width, height) in cells
/// * `cell_size` - Edge length of one cell in world units
/// * `y_position` - The desired y-coordinate (height) in the world
///
/// # Returns
/// The corresponding 3D world coordinates
pub fn cell_to_world(
    cell: Cell,
    maze_dimensions: (usize, usize),
    cell_size: f32,
    y_position: f32,
) -> Vec3 {
    let (origin_x, origin_z) = grid_origin(maze_dimensions, cell_size);

    // Center of the cell, not its corner
    let world_x = origin_x + (cell.x as f32 + 0.5) * cell_size;
    let world_z = origin_z + (cell.z as f32 + 0.5) * cell_size;

    Vec3::new(world_x, y_position, world_z)
}

/// Converts a world position to the maze grid cell containing it.
///
/// Positions outside the maze clamp to the nearest edge cell, so the result
/// is always a valid index into the grid. The y-coordinate is ignored.
///
/// # Arguments
/// * `position` - The 3D world coordinates
/// * `maze_dimensions` - The dimensions of the maze (width, height) in cells
/// * `cell_size` - Edge length of one cell in world units
///
/// # Returns
/// The corresponding maze grid cell
pub fn world_to_cell(position: Vec3, maze_dimensions: (usize, usize), cell_size: f32) -> Cell {
    let (maze_width, maze_height) = maze_dimensions;
    let (origin_x, origin_z) = grid_origin(maze_dimensions, cell_size);

    let col = ((position.x - origin_x) / cell_size).floor() as i64;
    let row = ((position.z - origin_z) / cell_size).floor() as i64;

    let col = col.clamp(0, maze_width as i64 - 1) as usize;
    let row = row.clamp(0, maze_height as i64 - 1) as usize;

    Cell::new(col, row)
}
