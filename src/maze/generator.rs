//! Maze generation using the hunt-and-kill algorithm.
//!
//! Hunt-and-kill combines a random walk (producing the long, winding
//! corridors of a depth-first carve) with a raster-scan "hunt" fallback that
//! reconnects the walk whenever it corners itself, so every cell ends up
//! reachable. The finished grid is a spanning tree of the cell graph: no
//! cycles, no isolated cells.
//!
//! # Examples
//!
//! ```rust
//! use laberinto::maze::generator::MazeGenerator;
//!
//! let mut generator = MazeGenerator::with_seed(8, 8, 42).unwrap();
//! let grid = generator.generate();
//!
//! assert_eq!(grid.width(), 8);
//! assert_eq!(grid.height(), 8);
//! ```

use crate::error::{EngineError, Result};
use crate::maze::direction::Direction;
use crate::maze::grid::{Cell, PassageGrid};
use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Maze generator using the hunt-and-kill algorithm.
pub struct MazeGenerator {
    width: usize,
    height: usize,
    rng: StdRng,
}

impl MazeGenerator {
    /// Creates a generator seeded from OS entropy.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidDimensions`] when either dimension is 0.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::from_rng(width, height, StdRng::from_entropy())
    }

    /// Creates a generator with a fixed seed, for reproducible layouts.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidDimensions`] when either dimension is 0.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::from_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn from_rng(width: usize, height: usize, rng: StdRng) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height, rng })
    }

    /// Runs generation to completion and returns the carved grid.
    ///
    /// Alternates walk and hunt phases until the hunt finds no unvisited cell
    /// adjacent to the carved region. A 1x1 grid is returned as-is: its single
    /// cell has nothing to connect to.
    pub fn generate(&mut self) -> PassageGrid {
        let mut grid = PassageGrid::new(self.width, self.height);
        let mut current = Cell::new(0, 0);

        loop {
            match self.walk(&mut grid, current) {
                Some(next) => current = next,
                None => match self.hunt(&mut grid) {
                    Some(reconnected) => current = reconnected,
                    None => break,
                },
            }
        }

        debug!("generated {}x{} maze", self.width, self.height);
        grid
    }

    /// One walk step: carve from `current` into a random unvisited neighbor.
    ///
    /// Tries the four directions in a fresh uniform order and takes the first
    /// in-bounds neighbor whose mask is still zero. `None` means the walk is
    /// boxed in and the hunt must take over.
    fn walk(&mut self, grid: &mut PassageGrid, current: Cell) -> Option<Cell> {
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.rng);

        for dir in directions {
            if let Some(next) = grid.neighbor(current, dir) {
                if grid.is_unvisited(next) {
                    grid.carve(current, dir);
                    return Some(next);
                }
            }
        }
        None
    }

    /// Hunt phase: raster-scan for the first unvisited cell that touches the
    /// carved region, connect it through one of its visited neighbors chosen
    /// uniformly, and resume walking from it.
    ///
    /// `None` means no such cell exists, so generation is complete.
    fn hunt(&mut self, grid: &mut PassageGrid) -> Option<Cell> {
        for z in 0..self.height {
            for x in 0..self.width {
                let cell = Cell::new(x, z);
                if !grid.is_unvisited(cell) {
                    continue;
                }

                let visited_dirs: Vec<Direction> = Direction::ALL
                    .into_iter()
                    .filter(|&dir| {
                        grid.neighbor(cell, dir)
                            .is_some_and(|next| !grid.is_unvisited(next))
                    })
                    .collect();

                if let Some(&dir) = visited_dirs.choose(&mut self.rng) {
                    grid.carve(cell, dir);
                    return Some(cell);
                }
            }
        }
        None
    }
}
