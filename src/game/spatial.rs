//! Per-cell spatial hashing for wall colliders and pellets.
//!
//! # Overview
//!
//! The index is built once at maze construction and answers nearby-object
//! queries in time proportional to the entity's footprint, not the maze
//! size. Wall colliders live in a single flat array; each grid cell holds a
//! bucket of indices into that array, so a collider flanked by two cells is
//! stored once and referenced twice. Pellets get their own buckets with one
//! pellet per cell center until eaten.
//!
//! Queries never index out of range: the cell rectangle covered by an
//! entity's box is clamped to grid bounds, so even a position far outside
//! the maze resolves to the nearest border cells.

use glam::Vec3;
use log::debug;

use crate::game::collision::Aabb;
use crate::math::coordinates::{cell_to_world, grid_origin, world_to_cell};
use crate::maze::MazeConfig;
use crate::maze::grid::Cell;
use crate::maze::walls::WallSegment;

/// Pellet radius as a fraction of the cell size.
const PELLET_RADIUS_FRACTION: f32 = 0.08;

/// Opaque handle to a spawned pellet.
///
/// Handles stay valid for the lifetime of the maze; removing a pellet
/// retires its handle without shifting any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PelletId(u32);

/// A pellet visible to a nearby query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PelletView {
    pub id: PelletId,
    /// Sphere center in world space.
    pub position: Vec3,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy)]
struct Pellet {
    position: Vec3,
    radius: f32,
    bucket: u32,
    alive: bool,
}

/// Bucketed index over wall colliders and pellets.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    width: usize,
    height: usize,
    cell_size: f32,
    colliders: Vec<Aabb>,
    wall_buckets: Vec<Vec<u32>>,
    pellets: Vec<Pellet>,
    pellet_buckets: Vec<Vec<u32>>,
    live_pellets: usize,
}

impl SpatialIndex {
    /// Builds the index for a maze: extrudes every wall segment into a world
    /// space collider, registers it with the 1-2 cells flanking each unit
    /// step of its run, and spawns one pellet at every cell center.
    ///
    /// A vertical segment on grid line `x = i` flanks cells `(i-1, z)` and
    /// `(i, z)` for each step `z` along its span; boundary lines have only
    /// one in-grid side. Horizontal segments are symmetric.
    pub fn build(config: &MazeConfig, segments: &[WallSegment]) -> Self {
        let width = config.width;
        let height = config.height;
        let (origin_x, origin_z) = grid_origin((width, height), config.cell_size);
        let half_thickness = config.wall_thickness * 0.5;

        let mut colliders = Vec::with_capacity(segments.len());
        let mut wall_buckets = vec![Vec::new(); width * height];

        for segment in segments {
            let index = colliders.len() as u32;
            if segment.is_vertical() {
                let x = origin_x + segment.start.x as f32 * config.cell_size;
                colliders.push(Aabb::new(
                    Vec3::new(
                        x - half_thickness,
                        0.0,
                        origin_z + segment.start.z as f32 * config.cell_size,
                    ),
                    Vec3::new(
                        x + half_thickness,
                        config.wall_height,
                        origin_z + segment.end.z as f32 * config.cell_size,
                    ),
                ));

                let line = segment.start.x;
                for z in segment.start.z..segment.end.z {
                    if line > 0 {
                        wall_buckets[z * width + (line - 1)].push(index);
                    }
                    if line < width {
                        wall_buckets[z * width + line].push(index);
                    }
                }
            } else {
                let z = origin_z + segment.start.z as f32 * config.cell_size;
                colliders.push(Aabb::new(
                    Vec3::new(
                        origin_x + segment.start.x as f32 * config.cell_size,
                        0.0,
                        z - half_thickness,
                    ),
                    Vec3::new(
                        origin_x + segment.end.x as f32 * config.cell_size,
                        config.wall_height,
                        z + half_thickness,
                    ),
                ));

                let line = segment.start.z;
                for x in segment.start.x..segment.end.x {
                    if line > 0 {
                        wall_buckets[(line - 1) * width + x].push(index);
                    }
                    if line < height {
                        wall_buckets[line * width + x].push(index);
                    }
                }
            }
        }

        let mut index = Self {
            width,
            height,
            cell_size: config.cell_size,
            colliders,
            wall_buckets,
            pellets: Vec::new(),
            pellet_buckets: vec![Vec::new(); width * height],
            live_pellets: 0,
        };
        index.spawn_pellets(config);

        debug!(
            "indexed {} wall colliders and {} pellets across {}x{} cells",
            index.colliders.len(),
            index.live_pellets,
            width,
            height
        );
        index
    }

    /// Places one pellet at the center of every cell, floating at half the
    /// wall height.
    fn spawn_pellets(&mut self, config: &MazeConfig) {
        let radius = config.cell_size * PELLET_RADIUS_FRACTION;
        let y = config.wall_height * 0.5;

        for z in 0..self.height {
            for x in 0..self.width {
                let bucket = (z * self.width + x) as u32;
                let id = self.pellets.len() as u32;
                let position = cell_to_world(
                    Cell::new(x, z),
                    (self.width, self.height),
                    self.cell_size,
                    y,
                );
                self.pellets.push(Pellet {
                    position,
                    radius,
                    bucket,
                    alive: true,
                });
                self.pellet_buckets[bucket as usize].push(id);
            }
        }
        self.live_pellets = self.pellets.len();
    }

    /// All wall colliders, in segment extraction order.
    pub fn colliders(&self) -> &[Aabb] {
        &self.colliders
    }

    /// Number of pellets not yet removed.
    pub fn live_pellet_count(&self) -> usize {
        self.live_pellets
    }

    /// Wall colliders near an entity box.
    ///
    /// Concatenates the buckets of every cell the box overlaps. A collider
    /// registered with several of those cells appears once per registration;
    /// exact intersection tests downstream tolerate the duplicates.
    pub fn nearby_wall_colliders(&self, position: Vec3, half_extents: Vec3) -> Vec<Aabb> {
        let (min, max) = self.cell_range(position, half_extents);
        let mut result = Vec::new();
        for z in min.1..=max.1 {
            for x in min.0..=max.0 {
                for &index in &self.wall_buckets[z * self.width + x] {
                    result.push(self.colliders[index as usize]);
                }
            }
        }
        result
    }

    /// Live pellets near an entity box.
    pub fn nearby_pellets(&self, position: Vec3, half_extents: Vec3) -> Vec<PelletView> {
        let (min, max) = self.cell_range(position, half_extents);
        let mut result = Vec::new();
        for z in min.1..=max.1 {
            for x in min.0..=max.0 {
                for &id in &self.pellet_buckets[z * self.width + x] {
                    let pellet = &self.pellets[id as usize];
                    result.push(PelletView {
                        id: PelletId(id),
                        position: pellet.position,
                        radius: pellet.radius,
                    });
                }
            }
        }
        result
    }

    /// Removes a pellet by handle.
    ///
    /// Returns `true` if the pellet was live and is now gone, `false` if the
    /// handle was already removed or never existed. Safe to call twice with
    /// the same handle.
    pub fn remove_pellet(&mut self, id: PelletId) -> bool {
        let Some(pellet) = self.pellets.get_mut(id.0 as usize) else {
            return false;
        };
        if !pellet.alive {
            return false;
        }
        pellet.alive = false;
        let bucket = pellet.bucket as usize;
        self.pellet_buckets[bucket].retain(|&p| p != id.0);
        self.live_pellets -= 1;
        true
    }

    /// Inclusive cell rectangle covered by a box, clamped to grid bounds.
    fn cell_range(&self, position: Vec3, half_extents: Vec3) -> ((usize, usize), (usize, usize)) {
        let dims = (self.width, self.height);
        let min = world_to_cell(position - half_extents, dims, self.cell_size);
        let max = world_to_cell(position + half_extents, dims, self.cell_size);
        ((min.x, min.z), (max.x, max.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::direction::Direction;
    use crate::maze::grid::{Cell, PassageGrid};
    use crate::maze::walls::{GridPoint, extract_segments};
    use approx::assert_relative_eq;

    fn config(width: usize, height: usize) -> MazeConfig {
        MazeConfig {
            width,
            height,
            cell_size: 10.0,
            wall_height: 10.0,
            wall_thickness: 1.0,
            seed: None,
        }
    }

    fn two_by_two_index() -> SpatialIndex {
        // Same hand carve as the extraction tests: only interior wall is the
        // horizontal run between cells (1,0) and (1,1).
        let mut grid = PassageGrid::new(2, 2);
        grid.carve(Cell::new(0, 0), Direction::EAST);
        grid.carve(Cell::new(0, 0), Direction::SOUTH);
        grid.carve(Cell::new(0, 1), Direction::EAST);
        let segments = extract_segments(&grid);
        SpatialIndex::build(&config(2, 2), &segments)
    }

    #[test]
    fn test_single_cell_references_all_boundary_walls() {
        let grid = PassageGrid::new(1, 1);
        let segments = extract_segments(&grid);
        let index = SpatialIndex::build(&config(1, 1), &segments);

        assert_eq!(index.colliders.len(), 4);
        assert_eq!(index.wall_buckets[0].len(), 4);
    }

    #[test]
    fn test_vertical_collider_extents() {
        let segment = WallSegment::new(GridPoint::new(1, 0), GridPoint::new(1, 2));
        let index = SpatialIndex::build(&config(2, 2), &[segment]);

        // Grid origin is (-10, -10); line x=1 sits at world x=0.
        let aabb = index.colliders[0];
        assert_relative_eq!(aabb.min.x, -0.5);
        assert_relative_eq!(aabb.max.x, 0.5);
        assert_relative_eq!(aabb.min.z, -10.0);
        assert_relative_eq!(aabb.max.z, 10.0);
        assert_relative_eq!(aabb.min.y, 0.0);
        assert_relative_eq!(aabb.max.y, 10.0);
    }

    #[test]
    fn test_internal_segment_flanks_both_sides() {
        let segment = WallSegment::new(GridPoint::new(1, 0), GridPoint::new(1, 2));
        let index = SpatialIndex::build(&config(2, 2), &[segment]);

        // One collider shared by all four buckets, west and east of the line
        // at each of its two unit steps.
        assert_eq!(index.colliders.len(), 1);
        for bucket in &index.wall_buckets {
            assert_eq!(bucket.as_slice(), &[0]);
        }
    }

    #[test]
    fn test_query_spanning_cells_returns_duplicates() {
        let segment = WallSegment::new(GridPoint::new(1, 0), GridPoint::new(1, 2));
        let index = SpatialIndex::build(&config(2, 2), &[segment]);

        // A box straddling the center overlaps all four cells, so the shared
        // collider comes back once per bucket.
        let nearby = index.nearby_wall_colliders(Vec3::new(0.0, 1.0, 0.0), Vec3::splat(2.0));
        assert_eq!(nearby.len(), 4);
    }

    #[test]
    fn test_query_far_outside_grid_clamps_to_border() {
        let index = two_by_two_index();
        let nearby = index.nearby_wall_colliders(Vec3::new(-1000.0, 1.0, 0.0), Vec3::splat(1.0));

        // Clamps to the west border cells rather than indexing out of range.
        assert!(!nearby.is_empty());
    }

    #[test]
    fn test_every_cell_spawns_one_centered_pellet() {
        let index = two_by_two_index();

        assert_eq!(index.live_pellet_count(), 4);
        for (bucket, ids) in index.pellet_buckets.iter().enumerate() {
            assert_eq!(ids.len(), 1, "cell {bucket} should hold one pellet");
        }

        // Cell (0,0) of a 2x2 grid with cell size 10 is centered at (-5,-5).
        let views = index.nearby_pellets(Vec3::new(-5.0, 5.0, -5.0), Vec3::splat(1.0));
        assert_eq!(views.len(), 1);
        assert_relative_eq!(views[0].position.x, -5.0);
        assert_relative_eq!(views[0].position.z, -5.0);
        assert_relative_eq!(views[0].position.y, 5.0);
        assert_relative_eq!(views[0].radius, 0.8);
    }

    #[test]
    fn test_remove_pellet_is_idempotent() {
        let mut index = two_by_two_index();
        let views = index.nearby_pellets(Vec3::new(-5.0, 5.0, -5.0), Vec3::splat(1.0));
        let id = views[0].id;

        assert!(index.remove_pellet(id));
        assert_eq!(index.live_pellet_count(), 3);
        assert!(index.pellet_buckets[0].is_empty());

        assert!(!index.remove_pellet(id));
        assert_eq!(index.live_pellet_count(), 3);
    }

    #[test]
    fn test_removed_pellet_leaves_queries() {
        let mut index = two_by_two_index();
        let center = Vec3::new(-5.0, 5.0, -5.0);
        let id = index.nearby_pellets(center, Vec3::splat(1.0))[0].id;

        index.remove_pellet(id);

        assert!(index.nearby_pellets(center, Vec3::splat(1.0)).is_empty());
        let all = index.nearby_pellets(Vec3::ZERO, Vec3::splat(20.0));
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|view| view.id != id));
    }
}
