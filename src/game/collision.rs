//! Axis-aligned collision detection and resolution.
//!
//! # Overview
//!
//! Wall colliders are static boxes extruded from merged wall segments.
//! Resolution is horizontal-only: for each collider that intersects the
//! entity's box, the axis (X or Z) with the smaller overlap becomes the
//! separation axis, the normal points from the collider's center toward the
//! entity's center, and the depth is the overlap extent on that axis. The
//! floor at `y = 0` acts as an implicit collider for any box whose lower
//! face dips below it; vertical motion is integrated by the mover, not here.
//!
//! Resolution is a pure function over candidate positions. Movers call
//! [`resolve_collisions`] with a box at the position they intend to occupy
//! and decide how to react to the returned contacts.

use glam::Vec3;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from its minimum and maximum corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box from a center point and half-extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// World-space center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Checks whether this box overlaps another on all three axes.
    ///
    /// Boxes that merely touch on a face share no volume and do not count
    /// as overlapping.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }
}

/// A single contact between an entity's box and a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Unit separation normal pointing away from the collider.
    pub normal: Vec3,
    /// Penetration depth along the normal.
    pub depth: f32,
}

/// Resolves an entity box against a set of candidate colliders.
///
/// Every collider whose box intersects `entity` contributes one collision.
/// The overlap extents along X and Z are `min(max_a, max_b) - max(min_a,
/// min_b)` per axis; the axis with the smaller overlap is the separation
/// axis, which avoids pushing the entity out along whichever axis merely
/// happens to overlap more. An extra ground contact with normal `+Y` is
/// reported when the entity's lower face is below `y = 0`.
///
/// # Arguments
///
/// * `entity` - The entity's bounding box at its candidate position
/// * `colliders` - Candidate colliders, typically from a spatial index query
///
/// # Returns
///
/// One [`Collision`] per intersecting collider, plus the implicit ground
/// contact if applicable. Empty when the position is clear.
pub fn resolve_collisions(entity: &Aabb, colliders: &[Aabb]) -> Vec<Collision> {
    let mut collisions = Vec::new();
    let entity_center = entity.center();

    for collider in colliders {
        if !entity.intersects(collider) {
            continue;
        }

        let overlap_x = entity.max.x.min(collider.max.x) - entity.min.x.max(collider.min.x);
        let overlap_z = entity.max.z.min(collider.max.z) - entity.min.z.max(collider.min.z);
        let collider_center = collider.center();

        let (normal, depth) = if overlap_x < overlap_z {
            let sign = if entity_center.x >= collider_center.x {
                1.0
            } else {
                -1.0
            };
            (Vec3::new(sign, 0.0, 0.0), overlap_x)
        } else {
            let sign = if entity_center.z >= collider_center.z {
                1.0
            } else {
                -1.0
            };
            (Vec3::new(0.0, 0.0, sign), overlap_z)
        };

        collisions.push(Collision { normal, depth });
    }

    if entity.min.y < 0.0 {
        collisions.push(Collision {
            normal: Vec3::Y,
            depth: -entity.min.y,
        });
    }

    collisions
}
