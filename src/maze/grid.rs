//! The logical passage grid underlying a maze.
//!
//! A [`PassageGrid`] is a `height x width` matrix of direction bitmasks. A set
//! bit means a passage exists from that cell toward that direction. The grid is
//! written exclusively through [`PassageGrid::carve`], which updates both cells
//! of a passage at once, so for every East bit there is a matching West bit on
//! the neighbor (and likewise North/South) at all times.

use crate::maze::direction::Direction;

/// Represents a cell in the maze grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column index of the cell (west to east).
    pub x: usize,
    /// Row index of the cell (north to south).
    pub z: usize,
}

impl Cell {
    /// Creates a new Cell with the given coordinates.
    pub fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }
}

/// A maze's connectivity as per-cell direction bitmasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl PassageGrid {
    /// Creates a fully walled grid: every mask starts at zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Width of the grid in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell lies inside the grid.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.z < self.height
    }

    /// Flat index of a cell, row-major by z.
    #[inline]
    pub fn index(&self, cell: Cell) -> usize {
        cell.z * self.width + cell.x
    }

    /// The passage bitmask of a cell.
    pub fn mask(&self, cell: Cell) -> Direction {
        Direction(self.cells[self.index(cell)])
    }

    /// Whether a cell has no passages yet.
    pub fn is_unvisited(&self, cell: Cell) -> bool {
        self.cells[self.index(cell)] == 0
    }

    /// Whether the cell has a passage toward `dir`.
    pub fn has_passage(&self, cell: Cell, dir: Direction) -> bool {
        self.mask(cell).contains(dir)
    }

    /// The in-bounds neighbor of `cell` in direction `dir`, if any.
    ///
    /// This is pure geometry; it does not consult the passage bits.
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let (dx, dz) = dir.offset();
        let x = cell.x.checked_add_signed(dx as isize)?;
        let z = cell.z.checked_add_signed(dz as isize)?;
        let neighbor = Cell::new(x, z);
        self.in_bounds(neighbor).then_some(neighbor)
    }

    /// Opens a passage from `cell` toward `dir`, setting the matching opposite
    /// bit on the neighbor.
    ///
    /// Does nothing when the neighbor would fall outside the grid; the
    /// boundary stays walled no matter what the caller asks for.
    pub fn carve(&mut self, cell: Cell, dir: Direction) {
        let Some(neighbor) = self.neighbor(cell, dir) else {
            return;
        };
        let cell_idx = self.index(cell);
        let neighbor_idx = self.index(neighbor);
        self.cells[cell_idx] |= dir.bits();
        self.cells[neighbor_idx] |= dir.opposite().bits();
    }

    /// The cells reachable from `cell` through one passage.
    ///
    /// Unlike [`neighbor`](Self::neighbor), this honors the carved maze: a
    /// geometric neighbor without the connecting bit is not returned.
    pub fn connected_neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut neighbors = Vec::with_capacity(4);
        for dir in Direction::ALL {
            if self.has_passage(cell, dir) {
                if let Some(next) = self.neighbor(cell, dir) {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }
}
