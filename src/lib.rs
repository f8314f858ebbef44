//! Core engine for a grid-maze chase game.
//!
//! The crate generates a perfect maze with the hunt-and-kill algorithm,
//! merges its walls into run-length segments, extrudes those into
//! world-space colliders behind a per-cell spatial index, and answers the
//! queries a game loop needs every tick: nearby colliders and pellets,
//! collision resolution for sliding movers, and shortest corridor paths
//! for chasers.
//!
//! Everything is synchronous and in-memory. Construction does all the heavy
//! work once; per-tick queries touch only the cells an entity overlaps.
//!
//! # Examples
//!
//! ```
//! use glam::Vec3;
//! use laberinto::{Cell, Maze};
//!
//! let mut maze = Maze::with_seed(8, 8, 10.0, 10.0, 7).unwrap();
//!
//! // Corridor path for a chaser.
//! let path = maze.find_path_to_tile(Cell::new(0, 0), Cell::new(7, 7));
//! assert_eq!(path.last(), Some(&Cell::new(7, 7)));
//!
//! // Eat the pellet in the south-east corner cell.
//! let center = maze.cell_center(Cell::new(7, 7), 5.0);
//! let pellets = maze.nearby_pellets(center, Vec3::splat(1.0));
//! assert!(maze.remove_pellet(pellets[0].id));
//! ```

pub mod error;
pub mod game;
pub mod math;
pub mod maze;

pub use error::{EngineError, Result};
pub use maze::direction::Direction;
pub use maze::grid::Cell;
pub use maze::{Maze, MazeConfig};
