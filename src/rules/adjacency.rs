//! The no-isolated-piece guard.
//!
//! Every on-board piece must touch at least one other on-board piece of
//! the game, corner contact included. The criterion is per-piece, not
//! whole-board connectivity: two clusters that are each internally
//! adjacent pass, even if the clusters do not touch each other.
//!
//! Destination checks differ between the two arriving actions: a move may
//! lean on any piece, a placement only on the acting player's own pieces.
//! Either check is skipped while its reference set is empty, so the first
//! piece is subject only to the field and occupancy guards.

use crate::core::coord::Coord;
use crate::core::player::PlayerId;
use crate::core::snapshot::BoardSnapshot;

/// Is any of the eight squares around `at` occupied?
#[must_use]
pub fn has_neighbor(at: Coord, board: &BoardSnapshot) -> bool {
    at.neighbors().iter().any(|n| board.occupied(*n))
}

/// Is any of the eight squares around `at` occupied by `owner`'s piece?
#[must_use]
pub fn has_own_neighbor(at: Coord, board: &BoardSnapshot, owner: PlayerId) -> bool {
    at.neighbors()
        .iter()
        .any(|n| board.occupant(*n).is_some_and(|occ| occ.owner == owner))
}

/// Destination check for a move. `others` must exclude the mover; an empty
/// `others` skips the check.
#[must_use]
pub fn move_destination_connected(others: &BoardSnapshot, target: Coord) -> bool {
    others.is_empty() || has_neighbor(target, others)
}

/// Destination check for a placement: the target must touch one of
/// `owner`'s own pieces, skipped while `owner` has none on the board.
#[must_use]
pub fn place_destination_connected(board: &BoardSnapshot, owner: PlayerId, target: Coord) -> bool {
    let owner_present = board.iter().any(|(_, occ)| occ.owner == owner);
    !owner_present || has_own_neighbor(target, board, owner)
}

/// Removal-safety check. `remaining` must already exclude the removed
/// piece; every survivor must still have a neighbor. Vacuously safe when
/// nothing remains, and never satisfiable by a lone survivor.
#[must_use]
pub fn removal_keeps_neighbors(remaining: &BoardSnapshot) -> bool {
    remaining.positions().all(|at| has_neighbor(at, remaining))
}
