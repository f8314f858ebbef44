//! Wall segment extraction from the passage grid.
//!
//! A wall exists between two adjacent cells exactly when neither holds the
//! connecting passage bit, and the outer boundary is always walled. Rather
//! than emitting one segment per cell edge, contiguous walled edges along the
//! same grid line are merged into a single run; downstream geometry and
//! collider counts shrink by roughly 4x compared to per-edge output.

use crate::maze::direction::Direction;
use crate::maze::grid::{Cell, PassageGrid};
use log::debug;

/// An integer lattice point on the grid's wall lines.
///
/// Lattice coordinates run from `(0, 0)` at the north-west corner to
/// `(width, height)` at the south-east corner, one unit per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: usize,
    pub z: usize,
}

impl GridPoint {
    /// Creates a new lattice point.
    pub fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }
}

/// A merged straight run of wall between two lattice points.
///
/// Either vertical (`start.x == end.x`) or horizontal (`start.z == end.z`),
/// with `start` at the lower coordinate along the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallSegment {
    pub start: GridPoint,
    pub end: GridPoint,
}

impl WallSegment {
    /// Creates a new segment between two lattice points.
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    /// Whether the segment runs along a vertical grid line.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Length of the run in cell units.
    pub fn span(&self) -> usize {
        if self.is_vertical() {
            self.end.z - self.start.z
        } else {
            self.end.x - self.start.x
        }
    }
}

/// Extracts the merged wall segments of a carved grid.
///
/// The four boundary segments are emitted unconditionally. Each internal grid
/// line is then scanned perpendicular to its direction: a wall is present at a
/// position exactly when the cell on the lesser side lacks the passage bit
/// crossing the line (the symmetric invariant makes checking one side
/// sufficient). Consecutive walled positions extend the current run; a
/// passage, or the end of the scan, flushes it as one segment.
pub fn extract_segments(grid: &PassageGrid) -> Vec<WallSegment> {
    let width = grid.width();
    let height = grid.height();
    let mut segments = Vec::new();

    // Boundary, always fully walled.
    segments.push(WallSegment::new(
        GridPoint::new(0, 0),
        GridPoint::new(width, 0),
    ));
    segments.push(WallSegment::new(
        GridPoint::new(0, height),
        GridPoint::new(width, height),
    ));
    segments.push(WallSegment::new(
        GridPoint::new(0, 0),
        GridPoint::new(0, height),
    ));
    segments.push(WallSegment::new(
        GridPoint::new(width, 0),
        GridPoint::new(width, height),
    ));

    // Internal vertical lines, scanned north to south.
    for x in 1..width {
        let mut run_start: Option<usize> = None;
        for z in 0..height {
            let walled = !grid.has_passage(Cell::new(x - 1, z), Direction::EAST);
            if walled {
                run_start.get_or_insert(z);
            } else if let Some(start) = run_start.take() {
                segments.push(WallSegment::new(
                    GridPoint::new(x, start),
                    GridPoint::new(x, z),
                ));
            }
        }
        if let Some(start) = run_start {
            segments.push(WallSegment::new(
                GridPoint::new(x, start),
                GridPoint::new(x, height),
            ));
        }
    }

    // Internal horizontal lines, scanned west to east.
    for z in 1..height {
        let mut run_start: Option<usize> = None;
        for x in 0..width {
            let walled = !grid.has_passage(Cell::new(x, z - 1), Direction::SOUTH);
            if walled {
                run_start.get_or_insert(x);
            } else if let Some(start) = run_start.take() {
                segments.push(WallSegment::new(
                    GridPoint::new(start, z),
                    GridPoint::new(x, z),
                ));
            }
        }
        if let Some(start) = run_start {
            segments.push(WallSegment::new(
                GridPoint::new(start, z),
                GridPoint::new(width, z),
            ));
        }
    }

    debug!(
        "extracted {} wall segments from {}x{} grid",
        segments.len(),
        width,
        height
    );
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(x1: usize, z1: usize, x2: usize, z2: usize) -> WallSegment {
        WallSegment::new(GridPoint::new(x1, z1), GridPoint::new(x2, z2))
    }

    #[test]
    fn test_single_cell_has_only_boundary() {
        let grid = PassageGrid::new(1, 1);
        let segments = extract_segments(&grid);

        assert_eq!(segments.len(), 4);
        assert!(segments.contains(&segment(0, 0, 1, 0)));
        assert!(segments.contains(&segment(0, 1, 1, 1)));
        assert!(segments.contains(&segment(0, 0, 0, 1)));
        assert!(segments.contains(&segment(1, 0, 1, 1)));
    }

    #[test]
    fn test_two_by_two_known_carve() {
        // Carve an S-less spanning tree by hand:
        //   (0,0) - (1,0)
        //     |
        //   (0,1) - (1,1)
        // The only interior wall left is the horizontal run between (1,0)
        // and (1,1).
        let mut grid = PassageGrid::new(2, 2);
        grid.carve(Cell::new(0, 0), Direction::EAST);
        grid.carve(Cell::new(0, 0), Direction::SOUTH);
        grid.carve(Cell::new(0, 1), Direction::EAST);

        let segments = extract_segments(&grid);

        assert_eq!(segments.len(), 5);
        assert!(segments.contains(&segment(0, 0, 2, 0)));
        assert!(segments.contains(&segment(0, 2, 2, 2)));
        assert!(segments.contains(&segment(0, 0, 0, 2)));
        assert!(segments.contains(&segment(2, 0, 2, 2)));
        assert!(segments.contains(&segment(1, 1, 2, 1)));
    }

    #[test]
    fn test_open_corridor_has_no_internal_segments() {
        let mut grid = PassageGrid::new(1, 3);
        grid.carve(Cell::new(0, 0), Direction::SOUTH);
        grid.carve(Cell::new(0, 1), Direction::SOUTH);

        let segments = extract_segments(&grid);
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_contiguous_walls_merge_into_one_run() {
        // Three north-south corridors joined only along the southern row.
        // Both internal vertical lines stay walled for z in [0, 2) and must
        // come out as a single two-cell segment each, not unit pieces.
        let mut grid = PassageGrid::new(3, 3);
        for x in 0..3 {
            grid.carve(Cell::new(x, 0), Direction::SOUTH);
            grid.carve(Cell::new(x, 1), Direction::SOUTH);
        }
        grid.carve(Cell::new(0, 2), Direction::EAST);
        grid.carve(Cell::new(1, 2), Direction::EAST);

        let segments = extract_segments(&grid);

        assert_eq!(segments.len(), 6);
        assert!(segments.contains(&segment(1, 0, 1, 2)));
        assert!(segments.contains(&segment(2, 0, 2, 2)));
        let merged = segments.iter().find(|s| s.start == GridPoint::new(1, 0));
        assert_eq!(merged.unwrap().span(), 2);
    }

    #[test]
    fn test_vertical_and_horizontal_classification() {
        let vertical = segment(1, 0, 1, 3);
        let horizontal = segment(0, 2, 4, 2);

        assert!(vertical.is_vertical());
        assert!(!horizontal.is_vertical());
        assert_eq!(vertical.span(), 3);
        assert_eq!(horizontal.span(), 4);
    }
}
