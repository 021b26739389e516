//! Compass directions for doors and room links

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four door directions.
///
/// The discriminants are the slot indices used by every per-direction
/// array in the crate (room neighbors, doors, indicators). Do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Top edge of the room
    North = 0,
    /// Right edge of the room
    East = 1,
    /// Bottom edge of the room
    South = 2,
    /// Left edge of the room
    West = 3,
}

impl Direction {
    /// All directions in slot order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Slot index of this direction.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for a slot index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..4`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 4, "direction index out of range: {index}");
        Self::ALL[index]
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
