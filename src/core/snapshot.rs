//! Derived board state: occupancy snapshots and the bounding box.
//!
//! ## BoardSnapshot
//!
//! The set of occupied squares of a game at a point in time. Snapshots are
//! derived from the `Game` per operation and never cached across
//! operations. They are backed by a persistent map, so building the
//! hypothetical board for a candidate action (`without` the mover, `with`
//! the destination) shares structure with the original instead of copying
//! it; the whole copy-on-write commit discipline rests on this.
//!
//! ## BoundingBox
//!
//! The smallest axis-aligned rectangle containing a set of squares. The
//! field may float anywhere on the unbounded grid, but its spans may never
//! exceed [`FIELD_MAX_SPAN`] in either direction.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::piece::{PieceId, PieceKind};
use super::player::PlayerId;

/// Maximum width and height of the field, in squares.
pub const FIELD_MAX_SPAN: i64 = 4;

/// What occupies a board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub piece: PieceId,
    pub owner: PlayerId,
    pub kind: PieceKind,
}

impl Occupant {
    /// The occupant a piece would be, wherever it stands.
    #[must_use]
    pub fn of(piece: &crate::core::piece::Piece) -> Self {
        Self {
            piece: piece.id,
            owner: piece.owner,
            kind: piece.kind,
        }
    }
}

/// The smallest axis-aligned rectangle containing a set of squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Coord,
    pub max: Coord,
}

impl BoundingBox {
    /// The box around a set of squares, or `None` for the empty set.
    #[must_use]
    pub fn of(points: impl IntoIterator<Item = Coord>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => BoundingBox { min: p, max: p },
                Some(bb) => bb.including(p),
            })
        })
    }

    /// The box expanded to also contain `point`.
    #[must_use]
    pub fn including(self, point: Coord) -> Self {
        BoundingBox {
            min: Coord::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Coord::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Horizontal span in squares. Spans are widened to `i64` so extreme
    /// coordinates from unvalidated input cannot wrap.
    #[must_use]
    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x) + 1
    }

    /// Vertical span in squares.
    #[must_use]
    pub fn height(&self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y) + 1
    }

    /// Is `point` inside the box?
    #[must_use]
    pub fn contains(&self, point: Coord) -> bool {
        self.min.x <= point.x && point.x <= self.max.x && self.min.y <= point.y && point.y <= self.max.y
    }

    /// Do both spans respect the field limit?
    #[must_use]
    pub fn fits_field(&self) -> bool {
        self.width() <= FIELD_MAX_SPAN && self.height() <= FIELD_MAX_SPAN
    }
}

/// Occupancy view of one game's board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    cells: ImHashMap<Coord, Occupant>,
}

impl BoardSnapshot {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The occupant of `at`, if any.
    #[must_use]
    pub fn occupant(&self, at: Coord) -> Option<&Occupant> {
        self.cells.get(&at)
    }

    /// Is `at` occupied?
    #[must_use]
    pub fn occupied(&self, at: Coord) -> bool {
        self.cells.contains_key(&at)
    }

    /// Number of occupied squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Is the board empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over occupied squares.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Occupant)> {
        self.cells.iter().map(|(at, occ)| (*at, occ))
    }

    /// Iterate over the occupied coordinates.
    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.keys().copied()
    }

    /// A snapshot with `occupant` standing on `at`; `self` is untouched.
    #[must_use]
    pub fn with(&self, at: Coord, occupant: Occupant) -> Self {
        Self {
            cells: self.cells.update(at, occupant),
        }
    }

    /// A snapshot with `at` vacated; `self` is untouched.
    #[must_use]
    pub fn without(&self, at: Coord) -> Self {
        Self {
            cells: self.cells.without(&at),
        }
    }

    /// The bounding box of the occupied squares, or `None` when empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of(self.positions())
    }

    /// The square of `player`'s boss, if it is on the board.
    #[must_use]
    pub fn boss_of(&self, player: PlayerId) -> Option<Coord> {
        self.iter()
            .find(|(_, occ)| occ.owner == player && occ.kind.is_boss())
            .map(|(at, _)| at)
    }
}

impl FromIterator<(Coord, Occupant)> for BoardSnapshot {
    fn from_iter<I: IntoIterator<Item = (Coord, Occupant)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
