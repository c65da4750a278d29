//! The three orchestrated actions: Move, Place, Remove.
//!
//! Each action runs its guards in a fixed order (so callers always see the
//! same rejection for the same board), builds the hypothetical board as a
//! copy-on-write snapshot, and commits only on full acceptance. There is
//! no rollback path because nothing is written before every guard has
//! passed; the one check that needs the action's result, the
//! self-encirclement test, runs against the discardable candidate.
//!
//! ## Guard order
//!
//! Move: turn, input, field size, movement shape, occupancy, adjacency,
//! self-encirclement. Place: the same minus the movement shape (a piece
//! arriving from hand has no origin delta), with adjacency restricted to
//! the acting player's own pieces. Remove: turn, boss check, removal
//! safety.
//!
//! A committed Move or Place then tests the opponent's boss and either
//! finishes the game or passes the turn. Remove never ends the game: a
//! departing piece cannot close a ring around either boss.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::coord::{Coord, RawTarget};
use crate::core::game::Game;
use crate::core::piece::{Location, Piece, PieceId};
use crate::core::player::PlayerId;
use crate::core::snapshot::{BoardSnapshot, Occupant};
use crate::error::ActionError;
use crate::rules::{adjacency, bounds, encirclement};
use crate::rules::turn::TurnState;

/// What a committed action produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The action stands and play passes to the other player.
    NextTurn {
        piece: Piece,
        current_turn: PlayerId,
    },
    /// The action stands and surrounded the opponent's boss.
    Win { piece: Piece, winner: PlayerId },
}

impl ActionOutcome {
    /// The acted-on piece in its new state.
    #[must_use]
    pub fn piece(&self) -> &Piece {
        match self {
            ActionOutcome::NextTurn { piece, .. } | ActionOutcome::Win { piece, .. } => piece,
        }
    }

    /// The winner, if the action ended the game.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            ActionOutcome::NextTurn { .. } => None,
            ActionOutcome::Win { winner, .. } => Some(*winner),
        }
    }
}

impl Game {
    /// Move an on-board piece to `target`.
    pub fn move_piece(
        &mut self,
        piece: PieceId,
        target: impl Into<RawTarget>,
    ) -> Result<ActionOutcome, ActionError> {
        let moving = *self.piece(piece).ok_or(ActionError::UnknownPiece(piece))?;
        let origin = moving.location.coord().ok_or(ActionError::PieceNotOnBoard)?;

        if !self.turn().is_turn_of(moving.owner) {
            return Err(ActionError::NotYourTurn);
        }
        let target = target.into().parse()?;

        let candidate = self.check_move_target(&moving, origin, target)?;
        Ok(self.commit(moving, Location::OnBoard(target), candidate))
    }

    /// Place an in-hand piece on `target`.
    pub fn place_piece(
        &mut self,
        piece: PieceId,
        target: impl Into<RawTarget>,
    ) -> Result<ActionOutcome, ActionError> {
        let placing = *self.piece(piece).ok_or(ActionError::UnknownPiece(piece))?;
        if !placing.location.is_in_hand() {
            return Err(ActionError::PieceNotInHand);
        }

        if !self.turn().is_turn_of(placing.owner) {
            return Err(ActionError::NotYourTurn);
        }
        let target = target.into().parse()?;

        let candidate = self.check_place_target(&placing, target)?;
        Ok(self.commit(placing, Location::OnBoard(target), candidate))
    }

    /// Return an on-board piece to its owner's hand.
    pub fn remove_piece(&mut self, piece: PieceId) -> Result<ActionOutcome, ActionError> {
        let removing = *self.piece(piece).ok_or(ActionError::UnknownPiece(piece))?;
        let at = removing.location.coord().ok_or(ActionError::PieceNotOnBoard)?;

        if !self.turn().is_turn_of(removing.owner) {
            return Err(ActionError::NotYourTurn);
        }
        if removing.is_boss() {
            return Err(ActionError::CannotRemoveBoss);
        }

        let remaining = self.snapshot().without(at);
        if !adjacency::removal_keeps_neighbors(&remaining) {
            return Err(ActionError::WouldIsolate);
        }

        self.set_location(removing.id, Location::InHand);
        let next = self.opponent(removing.owner);
        self.set_turn(TurnState::Turn(next));
        debug!(piece = %removing.id, "piece returned to hand");

        Ok(ActionOutcome::NextTurn {
            piece: Piece {
                location: Location::InHand,
                ..removing
            },
            current_turn: next,
        })
    }

    /// Guards for a move destination. Returns the candidate board with the
    /// mover already standing on `target`; nothing is committed.
    pub(crate) fn check_move_target(
        &self,
        moving: &Piece,
        origin: Coord,
        target: Coord,
    ) -> Result<BoardSnapshot, ActionError> {
        let others = self.snapshot().without(origin);

        if !bounds::fits_after(&others, target) {
            return Err(ActionError::FieldLimitExceeded);
        }
        if !moving.kind.movement().allows(origin.delta_to(target)) {
            return Err(ActionError::IllegalMovement);
        }
        if others.occupied(target) {
            return Err(ActionError::SquareOccupied);
        }
        if !adjacency::move_destination_connected(&others, target) {
            return Err(ActionError::WouldIsolate);
        }

        let candidate = others.with(target, Occupant::of(moving));
        if encirclement::boss_is_surrounded(&candidate, moving.owner) {
            return Err(ActionError::BossWouldBeSurrounded);
        }
        Ok(candidate)
    }

    /// Guards for a placement square. Returns the candidate board with the
    /// piece already standing on `target`; nothing is committed.
    pub(crate) fn check_place_target(
        &self,
        placing: &Piece,
        target: Coord,
    ) -> Result<BoardSnapshot, ActionError> {
        let board = self.snapshot();

        if !bounds::fits_after(&board, target) {
            return Err(ActionError::FieldLimitExceeded);
        }
        if board.occupied(target) {
            return Err(ActionError::SquareOccupied);
        }
        if !adjacency::place_destination_connected(&board, placing.owner, target) {
            return Err(ActionError::WouldIsolate);
        }

        let candidate = board.with(target, Occupant::of(placing));
        if encirclement::boss_is_surrounded(&candidate, placing.owner) {
            return Err(ActionError::BossWouldBeSurrounded);
        }
        Ok(candidate)
    }

    /// Commit an accepted Move or Place and resolve the win check against
    /// the opponent's boss.
    fn commit(&mut self, acted: Piece, location: Location, candidate: BoardSnapshot) -> ActionOutcome {
        self.set_location(acted.id, location);
        let updated = Piece { location, ..acted };

        let opponent = self.opponent(acted.owner);
        if encirclement::boss_is_surrounded(&candidate, opponent) {
            self.set_turn(TurnState::Finished { winner: acted.owner });
            debug!(winner = %acted.owner, "opponent's boss surrounded, game over");
            return ActionOutcome::Win {
                piece: updated,
                winner: acted.owner,
            };
        }

        self.set_turn(TurnState::Turn(opponent));
        debug!(piece = %acted.id, "action committed");
        ActionOutcome::NextTurn {
            piece: updated,
            current_turn: opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coord::Coord;
    use crate::core::piece::PieceKind;

    fn players() -> [PlayerId; 2] {
        [PlayerId::new(0), PlayerId::new(1)]
    }

    /// Two bosses side by side, everything else in hand.
    fn opening_game() -> Game {
        let [p0, p1] = players();
        let mut game = Game::new([p0, p1], p0);
        for (player, boss_at) in [(p0, Coord::new(1, 0)), (p1, Coord::new(1, 1))] {
            for kind in PieceKind::ALL {
                let location = if kind.is_boss() {
                    Location::OnBoard(boss_at)
                } else {
                    Location::InHand
                };
                game.add_piece(player, kind, location);
            }
        }
        game
    }

    fn piece_of(game: &Game, owner: PlayerId, kind: PieceKind) -> PieceId {
        game.pieces()
            .find(|p| p.owner == owner && p.kind == kind)
            .map(|p| p.id)
            .unwrap()
    }

    #[test]
    fn test_move_commits_and_passes_turn() {
        let [p0, p1] = players();
        let mut game = opening_game();
        let boss = piece_of(&game, p0, PieceKind::Boss);

        let outcome = game.move_piece(boss, (0, 0)).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::NextTurn {
                piece: *game.piece(boss).unwrap(),
                current_turn: p1,
            }
        );
        assert_eq!(game.piece(boss).unwrap().location, Location::OnBoard(Coord::new(0, 0)));
        assert_eq!(game.current_turn(), Some(p1));
    }

    #[test]
    fn test_move_out_of_turn() {
        let [_, p1] = players();
        let mut game = opening_game();
        let boss = piece_of(&game, p1, PieceKind::Boss);

        assert_eq!(game.move_piece(boss, (2, 1)), Err(ActionError::NotYourTurn));
    }

    #[test]
    fn test_move_unknown_piece() {
        let mut game = opening_game();
        let ghost = PieceId::new(999);

        assert_eq!(game.move_piece(ghost, (0, 0)), Err(ActionError::UnknownPiece(ghost)));
    }

    #[test]
    fn test_move_piece_in_hand() {
        let [p0, _] = players();
        let mut game = opening_game();
        let yaiba = piece_of(&game, p0, PieceKind::Yaiba);

        assert_eq!(game.move_piece(yaiba, (0, 0)), Err(ActionError::PieceNotOnBoard));
    }

    #[test]
    fn test_move_missing_coordinates() {
        let [p0, _] = players();
        let mut game = opening_game();
        let boss = piece_of(&game, p0, PieceKind::Boss);

        let outcome = game.move_piece(boss, RawTarget { x: Some(0), y: None });
        assert_eq!(outcome, Err(ActionError::InvalidCoordinates));
    }

    #[test]
    fn test_move_onto_occupied_square() {
        let [p0, _] = players();
        let mut game = opening_game();
        let boss = piece_of(&game, p0, PieceKind::Boss);

        assert_eq!(game.move_piece(boss, (1, 1)), Err(ActionError::SquareOccupied));
    }

    #[test]
    fn test_move_away_from_everyone() {
        let [p0, p1] = players();
        let mut game = Game::new([p0, p1], p0);
        let totsu = game.add_piece(p0, PieceKind::Totsu, Location::OnBoard(Coord::new(0, 0)));
        game.add_piece(p0, PieceKind::Boss, Location::OnBoard(Coord::new(1, 0)));
        game.add_piece(p1, PieceKind::Boss, Location::OnBoard(Coord::new(1, 1)));

        // a legal line delta into the field, but (0,3) touches nothing
        assert_eq!(game.move_piece(totsu, (0, 3)), Err(ActionError::WouldIsolate));
        assert_eq!(
            game.piece(totsu).unwrap().location,
            Location::OnBoard(Coord::new(0, 0))
        );
    }

    #[test]
    fn test_remove_passes_turn_without_win_check() {
        let [p0, p1] = players();
        let mut game = opening_game();
        let yaiba = piece_of(&game, p0, PieceKind::Yaiba);
        game.place_piece(yaiba, (0, 0)).unwrap();

        let aniki = piece_of(&game, p1, PieceKind::Aniki);
        game.place_piece(aniki, (0, 1)).unwrap();

        // bosses and the aniki keep each other adjacent once the yaiba leaves
        let outcome = game.remove_piece(yaiba).unwrap();

        assert_eq!(outcome.winner(), None);
        assert_eq!(game.piece(yaiba).unwrap().location, Location::InHand);
        assert_eq!(game.current_turn(), Some(p1));
    }

    #[test]
    fn test_remove_boss_rejected() {
        let [p0, _] = players();
        let mut game = opening_game();
        let boss = piece_of(&game, p0, PieceKind::Boss);

        assert_eq!(game.remove_piece(boss), Err(ActionError::CannotRemoveBoss));
        assert_eq!(game.piece(boss).unwrap().location, Location::OnBoard(Coord::new(1, 0)));
    }

    #[test]
    fn test_remove_in_hand_piece() {
        let [p0, _] = players();
        let mut game = opening_game();
        let yaiba = piece_of(&game, p0, PieceKind::Yaiba);

        assert_eq!(game.remove_piece(yaiba), Err(ActionError::PieceNotOnBoard));
    }

    #[test]
    fn test_place_already_on_board() {
        let [p0, _] = players();
        let mut game = opening_game();
        let boss = piece_of(&game, p0, PieceKind::Boss);

        assert_eq!(game.place_piece(boss, (2, 2)), Err(ActionError::PieceNotInHand));
    }

    #[test]
    fn test_place_must_touch_own_piece() {
        let [p0, _] = players();
        let mut game = opening_game();
        let yaiba = piece_of(&game, p0, PieceKind::Yaiba);

        // (2,2) touches only the opponent's boss at (1,1)
        assert_eq!(game.place_piece(yaiba, (2, 2)), Err(ActionError::WouldIsolate));
        // (2,1) touches own boss at (1,0)
        game.place_piece(yaiba, (2, 1)).unwrap();
    }

    #[test]
    fn test_finished_game_rejects_actions() {
        let [p0, p1] = players();
        let mut game = Game::new([p0, p1], p1);
        game.add_piece(p0, PieceKind::Boss, Location::OnBoard(Coord::new(1, 1)));
        game.add_piece(p1, PieceKind::Boss, Location::OnBoard(Coord::new(1, 0)));
        game.add_piece(p1, PieceKind::Yaiba, Location::OnBoard(Coord::new(0, 1)));
        game.add_piece(p1, PieceKind::Aniki, Location::OnBoard(Coord::new(1, 2)));
        let closer = game.add_piece(p1, PieceKind::Mamedeppo, Location::InHand);

        let outcome = game.place_piece(closer, (2, 1)).unwrap();
        assert_eq!(outcome.winner(), Some(p1));
        assert!(game.turn().is_finished());

        // nobody may act on a finished game
        let p1_boss = piece_of(&game, p1, PieceKind::Boss);
        assert_eq!(game.move_piece(p1_boss, (0, 0)), Err(ActionError::NotYourTurn));
        assert_eq!(game.remove_piece(closer), Err(ActionError::NotYourTurn));
    }
}
