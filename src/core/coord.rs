//! Grid coordinates, move deltas, and raw target input.
//!
//! The board is an unbounded signed grid; the 4×4 footprint limit is a
//! property of the piece set, not of the coordinate space, so coordinates
//! may go negative freely.
//!
//! ## RawTarget
//!
//! Coordinates arrive from the outside as optional wide integers and are
//! checked into a `Coord` at the start of an action. Keeping the raw form
//! as its own type lets an API layer deserialize request bodies directly
//! into it.

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

/// A square on the unbounded grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// A signed move delta between two squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

/// Offsets of the four orthogonally adjacent squares: up, down, left, right.
pub const ORTHOGONAL_OFFSETS: [Delta; 4] = [
    Delta::new(0, -1),
    Delta::new(0, 1),
    Delta::new(-1, 0),
    Delta::new(1, 0),
];

/// Offsets of all eight surrounding squares.
pub const NEIGHBOR_OFFSETS: [Delta; 8] = [
    Delta::new(-1, -1),
    Delta::new(0, -1),
    Delta::new(1, -1),
    Delta::new(-1, 0),
    Delta::new(1, 0),
    Delta::new(-1, 1),
    Delta::new(0, 1),
    Delta::new(1, 1),
];

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The delta that carries `self` to `other`.
    ///
    /// ```
    /// use dog_territory::{Coord, Delta};
    ///
    /// let from = Coord::new(1, 1);
    /// let to = Coord::new(3, 0);
    /// assert_eq!(from.delta_to(to), Delta::new(2, -1));
    /// ```
    #[must_use]
    pub const fn delta_to(self, other: Coord) -> Delta {
        Delta::new(other.x - self.x, other.y - self.y)
    }

    /// The square reached by applying `delta`.
    #[must_use]
    pub const fn offset(self, delta: Delta) -> Coord {
        Coord::new(self.x + delta.dx, self.y + delta.dy)
    }

    /// The four orthogonally adjacent squares.
    #[must_use]
    pub fn orthogonal_neighbors(self) -> [Coord; 4] {
        ORTHOGONAL_OFFSETS.map(|d| self.offset(d))
    }

    /// All eight surrounding squares.
    #[must_use]
    pub fn neighbors(self) -> [Coord; 8] {
        NEIGHBOR_OFFSETS.map(|d| self.offset(d))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Delta {
    /// Create a delta.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl std::ops::Neg for Delta {
    type Output = Delta;

    fn neg(self) -> Delta {
        Delta::new(-self.dx, -self.dy)
    }
}

/// Target coordinates as they arrive from the caller, before validation.
///
/// Both components are optional and wide: a missing component or one that
/// does not fit the grid's coordinate type rejects with the input error.
///
/// ```
/// use dog_territory::{Coord, RawTarget};
///
/// let target = RawTarget::from((2, 1));
/// assert_eq!(target.parse().unwrap(), Coord::new(2, 1));
///
/// assert!(RawTarget { x: Some(2), y: None }.parse().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTarget {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

impl RawTarget {
    /// Validate into a `Coord`.
    pub fn parse(self) -> Result<Coord, ActionError> {
        let (Some(x), Some(y)) = (self.x, self.y) else {
            return Err(ActionError::InvalidCoordinates);
        };
        let x = i32::try_from(x).map_err(|_| ActionError::InvalidCoordinates)?;
        let y = i32::try_from(y).map_err(|_| ActionError::InvalidCoordinates)?;
        Ok(Coord::new(x, y))
    }
}

impl From<(i32, i32)> for RawTarget {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: Some(x as i64),
            y: Some(y as i64),
        }
    }
}

impl From<Coord> for RawTarget {
    fn from(coord: Coord) -> Self {
        Self::from((coord.x, coord.y))
    }
}
