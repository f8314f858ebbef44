//! Maze generation, wall extraction, and the queries the game layer runs
//! against the finished maze.
//!
//! [`Maze`] ties the submodules together: construction runs the hunt-and-kill
//! generator, extracts merged wall segments, builds the spatial index, and
//! spawns pellets, all before the constructor returns. Everything after that
//! is a read query, except pellet removal.

pub mod direction;
pub mod generator;
pub mod grid;
pub mod walls;

use glam::Vec3;
use log::info;

use crate::error::{EngineError, Result};
use crate::game::collision::{self, Aabb, Collision};
use crate::game::pathfinding;
use crate::game::spatial::{PelletId, PelletView, SpatialIndex};
use crate::math::coordinates;
use crate::maze::generator::MazeGenerator;
use crate::maze::grid::{Cell, PassageGrid};
use crate::maze::walls::{WallSegment, extract_segments};

/// Construction parameters for a maze.
#[derive(Debug, Clone)]
pub struct MazeConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// World-space edge length of one cell.
    pub cell_size: f32,
    /// Wall height above the ground plane.
    pub wall_height: f32,
    /// Full wall thickness across its grid line.
    pub wall_thickness: f32,
    /// Generator seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            cell_size: 10.0,
            wall_height: 10.0,
            wall_thickness: 1.0,
            seed: None,
        }
    }
}

/// A fully generated, indexed maze ready for queries.
///
/// # Examples
///
/// ```
/// use laberinto::maze::Maze;
///
/// let maze = Maze::with_seed(8, 8, 10.0, 10.0, 42).unwrap();
/// assert_eq!(maze.cell_size(), 10.0);
/// assert_eq!(maze.live_pellet_count(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct Maze {
    grid: PassageGrid,
    segments: Vec<WallSegment>,
    index: SpatialIndex,
    cell_size: f32,
    wall_height: f32,
}

impl Maze {
    /// Generates a maze with a seed drawn from the OS.
    pub fn new(width: usize, height: usize, cell_size: f32, wall_height: f32) -> Result<Self> {
        Self::from_config(MazeConfig {
            width,
            height,
            cell_size,
            wall_height,
            ..MazeConfig::default()
        })
    }

    /// Generates a reproducible maze from an explicit seed.
    pub fn with_seed(
        width: usize,
        height: usize,
        cell_size: f32,
        wall_height: f32,
        seed: u64,
    ) -> Result<Self> {
        Self::from_config(MazeConfig {
            width,
            height,
            cell_size,
            wall_height,
            seed: Some(seed),
            ..MazeConfig::default()
        })
    }

    /// Generates a maze from a full configuration.
    ///
    /// Runs the whole construction pipeline: carve the passage grid, extract
    /// merged wall segments, build the spatial index, spawn pellets.
    pub fn from_config(config: MazeConfig) -> Result<Self> {
        validate(&config)?;

        let mut generator = match config.seed {
            Some(seed) => MazeGenerator::with_seed(config.width, config.height, seed)?,
            None => MazeGenerator::new(config.width, config.height)?,
        };
        let grid = generator.generate();
        let segments = extract_segments(&grid);
        let index = SpatialIndex::build(&config, &segments);

        info!(
            "maze ready: {}x{} cells, {} wall segments, {} pellets",
            config.width,
            config.height,
            segments.len(),
            index.live_pellet_count()
        );
        Ok(Self {
            grid,
            segments,
            index,
            cell_size: config.cell_size,
            wall_height: config.wall_height,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// World-space edge length of one cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Wall height above the ground plane.
    pub fn wall_height(&self) -> f32 {
        self.wall_height
    }

    /// The carved passage grid.
    pub fn grid(&self) -> &PassageGrid {
        &self.grid
    }

    /// Merged wall segments in grid coordinates.
    pub fn wall_segments(&self) -> &[WallSegment] {
        &self.segments
    }

    /// All wall colliders in world space.
    pub fn wall_colliders(&self) -> &[Aabb] {
        self.index.colliders()
    }

    /// Number of pellets not yet eaten.
    pub fn live_pellet_count(&self) -> usize {
        self.index.live_pellet_count()
    }

    /// Wall colliders near an entity box, from the spatial index.
    pub fn nearby_wall_colliders(&self, position: Vec3, half_extents: Vec3) -> Vec<Aabb> {
        self.index.nearby_wall_colliders(position, half_extents)
    }

    /// Live pellets near an entity box.
    pub fn nearby_pellets(&self, position: Vec3, half_extents: Vec3) -> Vec<PelletView> {
        self.index.nearby_pellets(position, half_extents)
    }

    /// Removes a pellet by handle; `true` only the first time.
    pub fn remove_pellet(&mut self, id: PelletId) -> bool {
        self.index.remove_pellet(id)
    }

    /// Collisions an entity box would have at a candidate position.
    ///
    /// Composes the spatial query with the resolver: fetch colliders near the
    /// box, then report a normal and depth per actual intersection, plus the
    /// implicit ground contact below `y = 0`.
    pub fn will_collide(&self, position: Vec3, half_extents: Vec3) -> Vec<Collision> {
        let entity = Aabb::from_center_half_extents(position, half_extents);
        let nearby = self.index.nearby_wall_colliders(position, half_extents);
        collision::resolve_collisions(&entity, &nearby)
    }

    /// Cells reachable from `(x, z)` through carved passages.
    ///
    /// Out-of-bounds coordinates have no neighbors.
    pub fn neighbors(&self, x: usize, z: usize) -> Vec<Cell> {
        let cell = Cell::new(x, z);
        if !self.grid.in_bounds(cell) {
            return Vec::new();
        }
        self.grid.connected_neighbors(cell)
    }

    /// Shortest corridor path between two cells, endpoints inclusive.
    ///
    /// Empty when either endpoint is out of bounds.
    pub fn find_path_to_tile(&self, start: Cell, goal: Cell) -> Vec<Cell> {
        pathfinding::find_path(&self.grid, start, goal)
    }

    /// The cell containing a world position, clamped to grid bounds.
    pub fn world_to_cell(&self, position: Vec3) -> Cell {
        coordinates::world_to_cell(position, (self.grid.width(), self.grid.height()), self.cell_size)
    }

    /// World-space center of a cell at the given height.
    pub fn cell_center(&self, cell: Cell, y: f32) -> Vec3 {
        coordinates::cell_to_world(cell, (self.grid.width(), self.grid.height()), self.cell_size, y)
    }
}

fn validate(config: &MazeConfig) -> Result<()> {
    if config.width == 0 || config.height == 0 {
        return Err(EngineError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }
    if !config.cell_size.is_finite() || config.cell_size <= 0.0 {
        return Err(EngineError::InvalidCellSize {
            cell_size: config.cell_size,
        });
    }
    if !config.wall_height.is_finite() || config.wall_height <= 0.0 {
        return Err(EngineError::InvalidWallHeight {
            wall_height: config.wall_height,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construction_rejects_bad_parameters() {
        assert!(matches!(
            Maze::new(0, 5, 10.0, 10.0),
            Err(EngineError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Maze::new(5, 5, -1.0, 10.0),
            Err(EngineError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            Maze::new(5, 5, 10.0, f32::NAN),
            Err(EngineError::InvalidWallHeight { .. })
        ));
    }

    #[test]
    fn test_construction_runs_full_pipeline() {
        let maze = Maze::with_seed(4, 4, 10.0, 10.0, 7).unwrap();

        assert_eq!(maze.width(), 4);
        assert_eq!(maze.height(), 4);
        assert_eq!(maze.live_pellet_count(), 16);
        assert_eq!(maze.wall_colliders().len(), maze.wall_segments().len());
        // A spanning maze leaves no cell without a passage.
        for z in 0..4 {
            for x in 0..4 {
                assert!(!maze.neighbors(x, z).is_empty());
            }
        }
    }

    #[test]
    fn test_neighbors_out_of_bounds_is_empty() {
        let maze = Maze::with_seed(4, 4, 10.0, 10.0, 7).unwrap();
        assert!(maze.neighbors(4, 0).is_empty());
        assert!(maze.neighbors(0, 17).is_empty());
    }

    #[test]
    fn test_path_spans_requested_cells() {
        let maze = Maze::with_seed(6, 6, 10.0, 10.0, 11).unwrap();
        let path = maze.find_path_to_tile(Cell::new(0, 0), Cell::new(5, 5));

        assert_eq!(path.first(), Some(&Cell::new(0, 0)));
        assert_eq!(path.last(), Some(&Cell::new(5, 5)));
    }

    #[test]
    fn test_cell_center_is_clear_of_walls() {
        let maze = Maze::with_seed(4, 4, 10.0, 10.0, 3).unwrap();
        let center = maze.cell_center(Cell::new(1, 1), 1.0);

        let collisions = maze.will_collide(center, Vec3::splat(0.5));
        assert!(collisions.is_empty());
    }

    #[test]
    fn test_boundary_wall_reports_collision() {
        // Press an entity into the west boundary of a 4x4 maze with cell
        // size 10; the wall plane sits at x = -20 regardless of seed.
        let maze = Maze::with_seed(4, 4, 10.0, 10.0, 3).unwrap();
        let position = Vec3::new(-19.2, 1.0, -5.0);

        let collisions = maze.will_collide(position, Vec3::splat(0.5));

        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].normal, Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(collisions[0].depth, 0.2, epsilon = 1e-4);
    }

    #[test]
    fn test_world_to_cell_round_trip() {
        let maze = Maze::with_seed(5, 3, 10.0, 10.0, 9).unwrap();
        for z in 0..3 {
            for x in 0..5 {
                let cell = Cell::new(x, z);
                let center = maze.cell_center(cell, 0.0);
                assert_eq!(maze.world_to_cell(center), cell);
            }
        }
    }

    #[test]
    fn test_pellet_removal_through_facade() {
        let mut maze = Maze::with_seed(3, 3, 10.0, 10.0, 5).unwrap();
        let center = maze.cell_center(Cell::new(0, 0), 5.0);
        let pellet = maze.nearby_pellets(center, Vec3::splat(1.0))[0];

        assert!(maze.remove_pellet(pellet.id));
        assert!(!maze.remove_pellet(pellet.id));
        assert_eq!(maze.live_pellet_count(), 8);
    }
}
