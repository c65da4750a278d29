//! Core value types: coordinates, players, pieces, the game aggregate, and
//! derived board snapshots.
//!
//! Everything here is plain data. The rules that decide what may happen to
//! it live in `crate::rules`.

pub mod coord;
pub mod game;
pub mod piece;
pub mod player;
pub mod snapshot;

pub use coord::{Coord, Delta, RawTarget};
pub use game::Game;
pub use piece::{Location, Movement, Piece, PieceId, PieceKind};
pub use player::PlayerId;
pub use snapshot::{BoardSnapshot, BoundingBox, Occupant, FIELD_MAX_SPAN};
