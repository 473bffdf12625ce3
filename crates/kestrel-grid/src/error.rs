//! Error types for grid construction and lookup.

use kestrel_core::Coord;
use std::error::Error;
use std::fmt;

/// Errors from [`GridMap`](crate::GridMap) construction and cell lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside the map's `[0, width) x [0, height)` area.
    ///
    /// Fatal to the operation that attempted the lookup. There is no
    /// recovery path; callers propagate it.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Map width at the time of the lookup.
        width: u32,
        /// Map height at the time of the lookup.
        height: u32,
    },
    /// Either map dimension is zero.
    EmptyGrid,
    /// A dimension exceeds the coordinate range (`i32::MAX`).
    DimensionTooLarge {
        /// Which dimension overflowed (`"width"` or `"height"`).
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The maximum supported value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(f, "coordinate {coord} outside [0, {width}) x [0, {height})")
            }
            Self::EmptyGrid => write!(f, "map dimensions must be positive"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum dimension {max}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_bounds() {
        let e = GridError::OutOfBounds {
            coord: Coord::new(20, 3),
            width: 20,
            height: 20,
        };
        let msg = e.to_string();
        assert!(msg.contains("(20, 3)"));
        assert!(msg.contains("[0, 20)"));
    }
}
