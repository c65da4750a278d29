//! The encirclement detector.
//!
//! A boss is surrounded when all four of its orthogonal neighbors are
//! blocked. A square blocks if any piece stands on it, whichever player
//! owns it. The field edge also blocks, but only once that axis' span has
//! reached the 4-square ceiling: while the field can still grow along an
//! axis, stepping outside the current bounding box merely stretches it,
//! so an off-box square on an unmaxed axis is an escape, not a wall.

use tracing::debug;

use crate::core::coord::{Coord, ORTHOGONAL_OFFSETS};
use crate::core::player::PlayerId;
use crate::core::snapshot::{BoardSnapshot, FIELD_MAX_SPAN};

/// Is a boss standing on `boss_at` fully blocked on `board`?
#[must_use]
pub fn is_surrounded(boss_at: Coord, board: &BoardSnapshot) -> bool {
    let Some(bounds) = board.bounding_box() else {
        return false;
    };

    for offset in ORTHOGONAL_OFFSETS {
        let cell = boss_at.offset(offset);
        if board.occupied(cell) {
            continue;
        }

        let axis_maxed = if offset.dx != 0 {
            bounds.width() >= FIELD_MAX_SPAN
        } else {
            bounds.height() >= FIELD_MAX_SPAN
        };
        if axis_maxed && !bounds.contains(cell) {
            // the maxed-out field edge stands in for a wall
            continue;
        }

        return false;
    }

    true
}

/// Is `player`'s boss surrounded on `board`?
///
/// False while the boss is not on the board: a boss in hand cannot be
/// encircled.
#[must_use]
pub fn boss_is_surrounded(board: &BoardSnapshot, player: PlayerId) -> bool {
    let Some(boss_at) = board.boss_of(player) else {
        return false;
    };

    let surrounded = is_surrounded(boss_at, board);
    if surrounded {
        debug!(%player, at = %boss_at, "boss is surrounded");
    }
    surrounded
}
