//! Ghost agents that chase a moving target through the corridors.

use glam::Vec3;
use log::trace;

use crate::game::collision::Aabb;
use crate::game::entity::Entity;
use crate::maze::Maze;
use crate::maze::grid::Cell;

/// Tuning for a chasing ghost.
#[derive(Debug, Clone)]
pub struct GhostConfig {
    /// Horizontal speed in units per second.
    pub speed: f32,
    /// Distance at which a waypoint counts as reached.
    pub arrival_threshold: f32,
    /// Half-size of the ghost's box on each axis.
    pub half_extents: Vec3,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            arrival_threshold: 0.5,
            half_extents: Vec3::new(1.5, 2.5, 1.5),
        }
    }
}

/// A path-following chaser.
///
/// The ghost keeps a corridor path to the target's cell and walks it
/// waypoint by waypoint, so it can never cut through walls. It replans only
/// when it has no path, has walked the current one to the end, or the
/// target has left the cell the path ends in; planning cost therefore
/// scales with how fast the target crosses cells, not with the tick rate.
#[derive(Debug, Clone)]
pub struct Ghost {
    position: Vec3,
    target: Vec3,
    path: Vec<Cell>,
    cursor: usize,
    config: GhostConfig,
}

impl Ghost {
    /// Creates a ghost at a position with default tuning.
    pub fn new(position: Vec3) -> Self {
        Self::with_config(position, GhostConfig::default())
    }

    /// Creates a ghost with explicit tuning.
    pub fn with_config(position: Vec3, config: GhostConfig) -> Self {
        Self {
            position,
            target: position,
            path: Vec::new(),
            cursor: 0,
            config,
        }
    }

    /// The path currently being walked, endpoints inclusive.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Stores the position [`Entity::update`] will chase.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Advances the chase by one tick toward an explicit target.
    ///
    /// Replans if needed, then moves toward the current waypoint at the
    /// configured speed, snapping onto it rather than overshooting when the
    /// remaining distance is shorter than the step.
    pub fn chase(&mut self, maze: &Maze, target: Vec3, dt: f32) {
        self.target = target;
        let target_cell = maze.world_to_cell(target);

        if self.needs_new_path(target_cell) {
            let start = maze.world_to_cell(self.position);
            self.path = maze.find_path_to_tile(start, target_cell);
            // The first path cell is the one the ghost stands in.
            self.cursor = if self.path.first() == Some(&start) { 1 } else { 0 };
            trace!(
                "replanned {} waypoints toward {:?}",
                self.path.len(),
                target_cell
            );
        }

        let Some(&waypoint) = self.path.get(self.cursor) else {
            return;
        };
        let center = maze.cell_center(waypoint, self.position.y);
        let to_waypoint = Vec3::new(center.x - self.position.x, 0.0, center.z - self.position.z);
        let distance = to_waypoint.length();
        if distance <= self.config.arrival_threshold {
            self.cursor += 1;
            return;
        }

        let step = self.config.speed * dt;
        if step >= distance {
            self.position.x = center.x;
            self.position.z = center.z;
            self.cursor += 1;
        } else {
            self.position += to_waypoint / distance * step;
        }
    }

    /// Whether the current path is unusable for a target in `target_cell`.
    fn needs_new_path(&self, target_cell: Cell) -> bool {
        self.path.is_empty()
            || self.cursor >= self.path.len()
            || self.path.last() != Some(&target_cell)
    }
}

impl Entity for Ghost {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn bounding_box_at(&self, position: Vec3) -> Aabb {
        Aabb::from_center_half_extents(position, self.config.half_extents)
    }

    fn update(&mut self, maze: &Maze, dt: f32) {
        self.chase(maze, self.target, dt);
    }
}
