//! Math utilities for the maze engine.
//!
//! Vector math comes from [`glam`]; this module only adds what the engine
//! needs on top of it, currently the grid/world coordinate transforms.

pub mod coordinates;
