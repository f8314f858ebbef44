//! Capability interface shared by everything that moves through the maze.

use glam::Vec3;

use crate::game::collision::Aabb;
use crate::maze::Maze;

/// An entity that occupies space and advances with the per-frame tick.
///
/// The collision and pathfinding layers only ever see this interface, never
/// a concrete entity type, so new entity kinds plug in without touching the
/// core.
pub trait Entity {
    /// Current world-space position, the center of the bounding box.
    fn position(&self) -> Vec3;

    /// The entity's bounding box if it stood at `position`.
    ///
    /// Callers pass candidate positions to probe movement before committing
    /// to it.
    fn bounding_box_at(&self, position: Vec3) -> Aabb;

    /// Advances the entity by one tick against the maze.
    fn update(&mut self, maze: &Maze, dt: f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ghost::Ghost;
    use crate::game::player::Player;
    use crate::maze::grid::Cell;

    #[test]
    fn test_mixed_entities_advance_through_trait_object() {
        let maze = Maze::with_seed(4, 4, 10.0, 10.0, 2).unwrap();
        let spawn = maze.cell_center(Cell::new(0, 0), 1.0);
        let mut entities: Vec<Box<dyn Entity>> = vec![
            Box::new(Player::new(spawn, Vec3::splat(0.5), 4.0)),
            Box::new(Ghost::new(maze.cell_center(Cell::new(3, 3), 2.5))),
        ];

        for entity in &mut entities {
            entity.update(&maze, 0.016);
            let bounds = entity.bounding_box_at(entity.position());
            assert!(bounds.min.x < bounds.max.x);
            assert!(bounds.min.y < bounds.max.y);
        }
    }
}
