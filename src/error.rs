//! Action rejection reasons.
//!
//! Every failure is a caller-input or game-state violation, never a
//! transient fault: the same action against the same state rejects the
//! same way, and nothing is retried. No rejection leaves a partial state
//! behind.

use thiserror::Error;

use crate::core::piece::PieceId;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The acting player is not the player to move, or the game is over.
    #[error("it is not your turn")]
    NotYourTurn,

    /// Target coordinates were missing or not usable integers.
    #[error("missing or invalid target coordinates")]
    InvalidCoordinates,

    /// The action would stretch the field beyond its 4×4 limit.
    #[error("the field may not exceed four squares in either direction")]
    FieldLimitExceeded,

    /// The piece's movement capability does not permit that delta.
    #[error("this piece cannot move that way")]
    IllegalMovement,

    /// Another piece already stands on the target square.
    #[error("that square is already occupied")]
    SquareOccupied,

    /// The destination has no neighboring piece, or the removal would
    /// leave another piece without one.
    #[error("no piece may stand apart from every other piece")]
    WouldIsolate,

    /// The action would leave the acting player's own boss surrounded.
    #[error("that would leave your own boss surrounded")]
    BossWouldBeSurrounded,

    /// The boss can never be returned to hand.
    #[error("the boss cannot be returned to hand")]
    CannotRemoveBoss,

    /// No piece with that id exists in this game.
    #[error("no piece {0} in this game")]
    UnknownPiece(PieceId),

    /// A move was requested for a piece that is still in hand.
    #[error("the piece is not on the board")]
    PieceNotOnBoard,

    /// A placement was requested for a piece that is already on the board.
    #[error("the piece is not in hand")]
    PieceNotInHand,
}
