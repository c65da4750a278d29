//! Turn sequencing and terminal state.
//!
//! A game is either waiting on one player's move or finished with a
//! winner. `Finished` is terminal: there is no transition out of it, and
//! the orchestrator rejects every action against a finished game at its
//! turn check.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Whose move it is, or who has won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting on this player's action.
    Turn(PlayerId),
    /// The game is over. Terminal.
    Finished { winner: PlayerId },
}

impl TurnState {
    /// The player to move, if the game is still running.
    #[must_use]
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            TurnState::Turn(player) => Some(player),
            TurnState::Finished { .. } => None,
        }
    }

    /// The winner, if the game is finished.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            TurnState::Turn(_) => None,
            TurnState::Finished { winner } => Some(winner),
        }
    }

    /// Is the game over?
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, TurnState::Finished { .. })
    }

    /// May `player` act right now?
    #[must_use]
    pub fn is_turn_of(self, player: PlayerId) -> bool {
        self.player() == Some(player)
    }
}
