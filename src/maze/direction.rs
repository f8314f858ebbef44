//! Cardinal directions encoded as bit flags.
//!
//! Each cell of the passage grid stores one byte whose low four bits record
//! which neighbors it is connected to. The same flags double as the direction
//! argument when carving or walking the grid.

/// One or more cardinal directions packed into a byte.
///
/// A single flag names a direction; a cell's passage mask is the union of the
/// directions it has openings toward. Grid orientation: north is negative z,
/// east is positive x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction(pub u8);

impl Direction {
    /// No direction - a fully walled (unvisited) cell.
    pub const NONE: Self = Self(0);

    /// Toward negative z.
    pub const NORTH: Self = Self(1);

    /// Toward positive z.
    pub const SOUTH: Self = Self(1 << 1);

    /// Toward positive x.
    pub const EAST: Self = Self(1 << 2);

    /// Toward negative x.
    pub const WEST: Self = Self(1 << 3);

    /// The four cardinal directions in N, S, E, W order.
    pub const ALL: [Self; 4] = [Self::NORTH, Self::SOUTH, Self::EAST, Self::WEST];

    /// The direction pointing the opposite way.
    ///
    /// Carving a passage sets this bit on the far cell so the adjacency stays
    /// symmetric.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::NORTH => Self::SOUTH,
            Self::SOUTH => Self::NORTH,
            Self::EAST => Self::WEST,
            Self::WEST => Self::EAST,
            other => other,
        }
    }

    /// Grid offset `(dx, dz)` of the neighbor in this direction.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::NORTH => (0, -1),
            Self::SOUTH => (0, 1),
            Self::EAST => (1, 0),
            Self::WEST => (-1, 0),
            _ => (0, 0),
        }
    }

    /// Check if these flags contain a specific flag.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Raw bit pattern.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for Direction {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Direction {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert_eq!(Direction::NORTH.bits(), 1);
        assert_eq!(Direction::SOUTH.bits(), 2);
        assert_eq!(Direction::EAST.bits(), 4);
        assert_eq!(Direction::WEST.bits(), 8);
    }

    #[test]
    fn test_opposites_pair_up() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Direction::NORTH.opposite(), Direction::SOUTH);
        assert_eq!(Direction::EAST.opposite(), Direction::WEST);
    }

    #[test]
    fn test_offsets_cancel_with_opposite() {
        for dir in Direction::ALL {
            let (dx, dz) = dir.offset();
            let (ox, oz) = dir.opposite().offset();
            assert_eq!(dx + ox, 0);
            assert_eq!(dz + oz, 0);
            assert_eq!(dx.abs() + dz.abs(), 1);
        }
    }

    #[test]
    fn test_mask_operations() {
        let mask = Direction::NORTH | Direction::EAST;
        assert!(mask.contains(Direction::NORTH));
        assert!(mask.contains(Direction::EAST));
        assert!(!mask.contains(Direction::SOUTH));
        assert_eq!(mask & Direction::WEST, Direction::NONE);
    }
}
