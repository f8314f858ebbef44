//! Player state and the sliding collision mover.
//!
//! # Overview
//!
//! The player is the mover the collision resolver was designed around.
//! Each tick resolves two independent problems:
//!
//! - **Vertical**: gravity integrates velocity, and a feet test against the
//!   ground plane snaps the player onto `y = 0` and zeroes the fall.
//! - **Horizontal**: the intended movement is probed against nearby wall
//!   colliders; on contact, the component pointing into each wall is removed
//!   so the remainder slides along it, while a damped share of the summed
//!   penetration pushes the player back out. A few fixed adjustment rounds
//!   keep corners stable without jitter.
//!
//! The mover never mutates the maze; it only asks [`Maze::will_collide`]
//! about candidate positions.

use glam::Vec3;

use crate::game::collision::{Aabb, Collision};
use crate::game::entity::Entity;
use crate::maze::Maze;

/// Tuning for the sliding mover.
#[derive(Debug, Clone)]
pub struct MoverConfig {
    /// Downward acceleration in units per second squared.
    pub gravity: f32,
    /// Fraction of the accumulated penetration correction applied per step.
    ///
    /// Full-depth correction overshoots and jitters against corners; a
    /// damped share converges over a few frames instead.
    pub correction_fraction: f32,
    /// Maximum sliding adjustment rounds per step.
    pub max_slide_iterations: usize,
    /// Movement magnitudes below this count as standing still.
    pub min_movement: f32,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            gravity: -30.0,
            correction_fraction: 0.4,
            max_slide_iterations: 3,
            min_movement: 1e-4,
        }
    }
}

/// The player-controlled entity.
#[derive(Debug, Clone)]
pub struct Player {
    position: Vec3,
    velocity: Vec3,
    half_extents: Vec3,
    speed: f32,
    wish_dir: Vec3,
    on_ground: bool,
    config: MoverConfig,
}

impl Player {
    /// Creates a player at a position with the default mover tuning.
    ///
    /// # Arguments
    ///
    /// * `position` - Initial center of the player's box
    /// * `half_extents` - Half-size of the box on each axis
    /// * `speed` - Horizontal movement speed in units per second
    pub fn new(position: Vec3, half_extents: Vec3, speed: f32) -> Self {
        Self::with_config(position, half_extents, speed, MoverConfig::default())
    }

    /// Creates a player with explicit mover tuning.
    pub fn with_config(
        position: Vec3,
        half_extents: Vec3,
        speed: f32,
        config: MoverConfig,
    ) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            half_extents,
            speed,
            wish_dir: Vec3::ZERO,
            on_ground: false,
            config,
        }
    }

    /// Sets the intended movement direction for the next steps.
    ///
    /// The vertical component is discarded and the rest normalized, so
    /// diagonal input does not move faster than axis-aligned input. Zero
    /// input stands still.
    pub fn set_wish_dir(&mut self, direction: Vec3) {
        self.wish_dir = Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero();
    }

    /// Current vertical and horizontal velocity.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Whether the last step ended with feet on the ground plane.
    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Advances the player by one tick.
    ///
    /// Vertical motion is integrated and settled first, then the horizontal
    /// intent is slid along whatever walls it runs into.
    pub fn step(&mut self, maze: &Maze, dt: f32) {
        self.velocity.y += self.config.gravity * dt;
        self.position.y += self.velocity.y * dt;
        let feet = self.position.y - self.half_extents.y;
        if feet <= 0.0 {
            self.position.y = self.half_extents.y;
            self.velocity.y = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }

        let intended = self.wish_dir * self.speed * dt;
        let half_extents = self.half_extents;
        let delta = slide(self.position, intended, &self.config, |candidate| {
            maze.will_collide(candidate, half_extents)
        });
        self.position += delta;
        self.velocity.x = if dt > 0.0 { delta.x / dt } else { 0.0 };
        self.velocity.z = if dt > 0.0 { delta.z / dt } else { 0.0 };
    }
}

impl Entity for Player {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn bounding_box_at(&self, position: Vec3) -> Aabb {
        Aabb::from_center_half_extents(position, self.half_extents)
    }

    fn update(&mut self, maze: &Maze, dt: f32) {
        self.step(maze, dt);
    }
}

/// Slides an intended horizontal movement along the walls it would hit.
///
/// Each round probes the candidate position, strips the movement component
/// pointing into every wall contact, and accumulates the contacts'
/// penetration. Ground contacts are ignored; vertical motion is the step's
/// business. The returned delta is the surviving movement plus the damped
/// penetration correction.
fn slide<F>(position: Vec3, mut movement: Vec3, config: &MoverConfig, collide: F) -> Vec3
where
    F: Fn(Vec3) -> Vec<Collision>,
{
    let mut correction = Vec3::ZERO;

    for _ in 0..config.max_slide_iterations {
        if movement.length_squared() < config.min_movement * config.min_movement {
            movement = Vec3::ZERO;
            break;
        }

        let walls: Vec<Collision> = collide(position + movement)
            .into_iter()
            .filter(|collision| collision.normal.y == 0.0)
            .collect();
        if walls.is_empty() {
            break;
        }

        for collision in &walls {
            let into = movement.dot(collision.normal);
            if into < 0.0 {
                movement -= collision.normal * into;
            }
            correction += collision.normal * collision.depth;
        }
    }

    movement + correction * config.correction_fraction
}
