//! A* pathfinding over the carved passage graph.
//!
//! # Overview
//!
//! Adjacency comes from the passage bitmask, not from open space: a
//! neighbor exists only where a passage bit is set, so paths follow the
//! corridors the generator carved. Moves are unit-cost and axis-aligned,
//! which makes the Manhattan distance an admissible heuristic and the
//! returned path provably shortest.
//!
//! The open list is a binary heap. Ties on the total estimate break toward
//! the lower cost-from-start, then toward the earlier insertion, so a
//! search over a given grid always expands in the same order and returns
//! the same path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use crate::maze::grid::{Cell, PassageGrid};

/// Open-list entry ordered for a min-heap on `(f, g, sequence)`.
#[derive(Debug, Clone, Copy)]
struct OpenNode {
    cell: Cell,
    /// Total estimated cost through this node.
    f: u32,
    /// Exact cost from the start.
    g: u32,
    /// Insertion counter, the final tie-break.
    sequence: u32,
}

impl OpenNode {
    fn sort_key(&self) -> (u32, u32, u32) {
        (self.f, self.g, self.sequence)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the lowest key first.
        other.sort_key().cmp(&self.sort_key())
    }
}

fn manhattan(a: Cell, b: Cell) -> u32 {
    (a.x.abs_diff(b.x) + a.z.abs_diff(b.z)) as u32
}

/// Finds the shortest corridor path between two cells.
///
/// # Arguments
///
/// * `grid` - The carved passage grid to search
/// * `start` - First cell of the returned path
/// * `goal` - Last cell of the returned path
///
/// # Returns
///
/// The ordered cells from `start` to `goal` inclusive, or an empty vector
/// when either endpoint is out of bounds or no passage chain connects them.
/// A fully generated maze is connected, so the empty case only arises from
/// bad input or hand-built grids.
pub fn find_path(grid: &PassageGrid, start: Cell, goal: Cell) -> Vec<Cell> {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        return Vec::new();
    }
    if start == goal {
        return vec![start];
    }

    let cell_count = grid.width() * grid.height();
    let mut open = BinaryHeap::new();
    let mut came_from: Vec<Option<Cell>> = vec![None; cell_count];
    let mut g_score: Vec<u32> = vec![u32::MAX; cell_count];
    let mut closed = vec![false; cell_count];
    let mut sequence = 0u32;

    g_score[grid.index(start)] = 0;
    open.push(OpenNode {
        cell: start,
        f: manhattan(start, goal),
        g: 0,
        sequence,
    });

    while let Some(current) = open.pop() {
        let current_index = grid.index(current.cell);
        if closed[current_index] {
            // Stale entry left behind by a later, cheaper relaxation.
            continue;
        }
        closed[current_index] = true;

        if current.cell == goal {
            return reconstruct(&came_from, grid, goal);
        }

        for neighbor in grid.connected_neighbors(current.cell) {
            let neighbor_index = grid.index(neighbor);
            if closed[neighbor_index] {
                continue;
            }
            let tentative = current.g + 1;
            if tentative >= g_score[neighbor_index] {
                continue;
            }
            g_score[neighbor_index] = tentative;
            came_from[neighbor_index] = Some(current.cell);
            sequence += 1;
            open.push(OpenNode {
                cell: neighbor,
                f: tentative + manhattan(neighbor, goal),
                g: tentative,
                sequence,
            });
        }
    }

    trace!("no path from {:?} to {:?}", start, goal);
    Vec::new()
}

/// Walks parent pointers back from the goal and reverses into start order.
fn reconstruct(came_from: &[Option<Cell>], grid: &PassageGrid, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(previous) = came_from[grid.index(current)] {
        current = previous;
        path.push(current);
    }
    path.reverse();
    path
}
