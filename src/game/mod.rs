//! Game-side systems: collision, spatial queries, pathfinding, and the
//! entities that consume them.
//!
//! Everything in here is driven by one external per-frame tick. The systems
//! are pure functions or build-once structures; the entities ([`Player`],
//! [`Ghost`]) hold the only mutable state and advance through the
//! [`Entity`] capability trait.

pub mod collision;
pub mod entity;
pub mod ghost;
pub mod pathfinding;
pub mod player;
pub mod spatial;

pub use self::collision::{Aabb, Collision};
pub use self::entity::Entity;
pub use self::ghost::{Ghost, GhostConfig};
pub use self::player::{MoverConfig, Player};
pub use self::spatial::{PelletId, PelletView, SpatialIndex};
