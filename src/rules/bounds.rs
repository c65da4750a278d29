//! The field-size guard.
//!
//! The grid is unbounded, but the pieces of a game must always fit inside
//! a 4×4 footprint. The guard is evaluated against the hypothetical board:
//! the positions of every piece except the one being relocated, plus the
//! candidate square. Move and Place use it identically.

use crate::core::coord::Coord;
use crate::core::snapshot::{BoardSnapshot, BoundingBox};

/// Would the board still fit the field if `candidate` were occupied?
///
/// `others` must already exclude the piece under relocation.
#[must_use]
pub fn fits_after(others: &BoardSnapshot, candidate: Coord) -> bool {
    let bounds = match others.bounding_box() {
        Some(bb) => bb.including(candidate),
        None => BoundingBox {
            min: candidate,
            max: candidate,
        },
    };
    bounds.fits_field()
}
