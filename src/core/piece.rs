//! Piece definitions: identity, movement capability, kind, and location.
//!
//! ## Movement
//!
//! Movement capabilities form a closed set, each carrying its legality rule
//! as a pure function over a signed delta. The rule never consults board
//! occupancy: ranged orthogonal movement deliberately performs no
//! path-obstruction check, so a Totsu may pass over intervening pieces.
//!
//! ## PieceKind
//!
//! The six-kind roster is closed. Boss-ness is intrinsic data on the kind,
//! not something derived from a display name.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::{Coord, Delta, NEIGHBOR_OFFSETS, ORTHOGONAL_OFFSETS};
use super::player::PlayerId;

/// Unique identifier for a piece within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A movement capability: the direction pattern and range a piece may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    /// Single step in any of the eight directions.
    DiagonalOrthogonal,
    /// Any distance along a rank or file. Intervening pieces are not
    /// checked; the destination square alone decides legality.
    OrthogonalAny,
    /// Single step along a rank or file.
    OrthogonalOne,
    /// Single diagonal step.
    DiagonalOne,
    /// Jump two squares along one axis and one along the other.
    Hajike,
}

impl Movement {
    /// Is `delta` a legal move shape for this capability?
    ///
    /// Stateless and context-free: occupancy, adjacency, and the field
    /// limit are separate checks.
    ///
    /// ```
    /// use dog_territory::{Delta, Movement};
    ///
    /// assert!(Movement::Hajike.allows(Delta::new(2, -1)));
    /// assert!(!Movement::Hajike.allows(Delta::new(2, 2)));
    /// assert!(Movement::OrthogonalAny.allows(Delta::new(0, -3)));
    /// ```
    #[must_use]
    pub fn allows(self, delta: Delta) -> bool {
        let (dx, dy) = (delta.dx, delta.dy);
        let (adx, ady) = (dx.abs(), dy.abs());

        match self {
            Movement::DiagonalOrthogonal => adx.max(ady) == 1,
            Movement::OrthogonalAny => (dx == 0) != (dy == 0),
            Movement::OrthogonalOne => (adx == 1 && dy == 0) || (dx == 0 && ady == 1),
            Movement::DiagonalOne => adx == 1 && ady == 1,
            Movement::Hajike => (adx == 2 && ady == 1) || (adx == 1 && ady == 2),
        }
    }

    /// Does this capability move along open-ended rays rather than a fixed
    /// set of squares?
    #[must_use]
    pub const fn is_ranged(self) -> bool {
        matches!(self, Movement::OrthogonalAny)
    }

    /// The complete set of legal deltas for a fixed-range capability.
    ///
    /// Empty for [`Movement::OrthogonalAny`]; its candidates are rays,
    /// which the legal-move enumerator walks separately. Every returned
    /// delta satisfies [`Movement::allows`].
    #[must_use]
    pub fn step_deltas(self) -> SmallVec<[Delta; 8]> {
        match self {
            Movement::DiagonalOrthogonal => SmallVec::from_slice(&NEIGHBOR_OFFSETS),
            Movement::OrthogonalAny => SmallVec::new(),
            Movement::OrthogonalOne => SmallVec::from_slice(&ORTHOGONAL_OFFSETS),
            Movement::DiagonalOne => SmallVec::from_slice(&[
                Delta::new(-1, -1),
                Delta::new(1, -1),
                Delta::new(-1, 1),
                Delta::new(1, 1),
            ]),
            Movement::Hajike => SmallVec::from_slice(&[
                Delta::new(1, 2),
                Delta::new(2, 1),
                Delta::new(-1, 2),
                Delta::new(-2, 1),
                Delta::new(1, -2),
                Delta::new(2, -1),
                Delta::new(-1, -2),
                Delta::new(-2, -1),
            ]),
        }
    }
}

/// The six piece kinds of the game.
///
/// Exactly one kind per side is the boss; its full encirclement ends the
/// game, and it can never be returned to hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Boss,
    Aniki,
    Yaiba,
    Mamedeppo,
    Totsu,
    Hajike,
}

impl PieceKind {
    /// Every kind, in roster order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Boss,
        PieceKind::Aniki,
        PieceKind::Yaiba,
        PieceKind::Mamedeppo,
        PieceKind::Totsu,
        PieceKind::Hajike,
    ];

    /// The movement capability of this kind.
    #[must_use]
    pub const fn movement(self) -> Movement {
        match self {
            PieceKind::Boss | PieceKind::Aniki => Movement::DiagonalOrthogonal,
            PieceKind::Yaiba => Movement::OrthogonalOne,
            PieceKind::Mamedeppo => Movement::DiagonalOne,
            PieceKind::Totsu => Movement::OrthogonalAny,
            PieceKind::Hajike => Movement::Hajike,
        }
    }

    /// Is this the boss kind?
    #[must_use]
    pub const fn is_boss(self) -> bool {
        matches!(self, PieceKind::Boss)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Boss => "Boss",
            PieceKind::Aniki => "Aniki",
            PieceKind::Yaiba => "Yaiba",
            PieceKind::Mamedeppo => "Mamedeppo",
            PieceKind::Totsu => "Totsu",
            PieceKind::Hajike => "Hajike",
        };
        f.write_str(name)
    }
}

/// Where a piece currently is: in its owner's hand, or on a board square.
/// Never both, never neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    InHand,
    OnBoard(Coord),
}

impl Location {
    /// The board square, if the piece is on the board.
    #[must_use]
    pub const fn coord(self) -> Option<Coord> {
        match self {
            Location::InHand => None,
            Location::OnBoard(at) => Some(at),
        }
    }

    /// Is the piece in hand?
    #[must_use]
    pub const fn is_in_hand(self) -> bool {
        matches!(self, Location::InHand)
    }
}

/// A piece: owned by one player, of one kind, in exactly one location.
///
/// Mutated only by the three orchestrated actions on `Game`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub owner: PlayerId,
    pub kind: PieceKind,
    pub location: Location,
}

impl Piece {
    /// Shorthand for `kind.is_boss()`.
    #[must_use]
    pub const fn is_boss(&self) -> bool {
        self.kind.is_boss()
    }
}
