//! # dog-territory
//!
//! Rules engine for the Dog Territory Battle board game: two players, six
//! piece kinds each, an unbounded grid that the piece set may never
//! stretch past a 4×4 footprint, and a win by fully encircling the
//! opponent's boss.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: the crate performs no I/O. It consumes a game's
//!    plain state, validates one action, and either commits it or returns
//!    a typed rejection. Persistence, transport, auth, and rendering are
//!    the caller's business.
//!
//! 2. **Copy-on-write commits**: every action validates against a
//!    hypothetical board built from persistent snapshots. Nothing is
//!    written until every guard has passed, so a rejection never leaves
//!    partial state behind and there is no rollback code.
//!
//! 3. **Deterministic rejections**: which guard fires first is part of the
//!    contract. The same action against the same state always fails the
//!    same way.
//!
//! ## Modules
//!
//! - `core`: coordinates, players, pieces, the game aggregate, snapshots
//! - `rules`: the guards, turn state, orchestrated actions, enumeration
//! - `error`: the `ActionError` taxonomy
//! - `setup`: `GameBuilder` and the standard opening

pub mod core;
pub mod error;
pub mod rules;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{
    BoardSnapshot, BoundingBox, Coord, Delta, Game, Location, Movement, Occupant, Piece, PieceId,
    PieceKind, PlayerId, RawTarget, FIELD_MAX_SPAN,
};

pub use crate::error::ActionError;

pub use crate::rules::{ActionOutcome, TurnState};

pub use crate::setup::GameBuilder;
