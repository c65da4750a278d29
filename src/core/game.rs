//! The game aggregate: two players, a piece set, and the turn state.
//!
//! `Game` owns everything an action transacts over. Reads are free-form;
//! writes go through the three orchestrated actions in `rules::actions`,
//! which validate against a derived [`BoardSnapshot`] and commit only on
//! full acceptance.
//!
//! The aggregate is deliberately not `Serialize`: persistence stores the
//! plain pieces and turn state, and rebuilds a `Game` with
//! [`Game::new`] + [`Game::add_piece`].

use rustc_hash::FxHashMap;

use super::coord::Coord;
use super::piece::{Location, Piece, PieceId, PieceKind};
use super::player::PlayerId;
use super::snapshot::{BoardSnapshot, Occupant};
use crate::rules::turn::TurnState;

/// One game's full state.
#[derive(Clone, Debug)]
pub struct Game {
    players: [PlayerId; 2],
    turn: TurnState,
    pieces: FxHashMap<PieceId, Piece>,
    next_piece_id: u32,
}

impl Game {
    /// Create an empty game between two distinct players.
    #[must_use]
    pub fn new(players: [PlayerId; 2], starting_player: PlayerId) -> Self {
        assert!(players[0] != players[1], "Players must be distinct");
        assert!(
            players.contains(&starting_player),
            "Starting player must be one of the game's players"
        );

        Self {
            players,
            turn: TurnState::Turn(starting_player),
            pieces: FxHashMap::default(),
            next_piece_id: 0,
        }
    }

    /// The two players.
    #[must_use]
    pub fn players(&self) -> [PlayerId; 2] {
        self.players
    }

    /// The other player.
    #[must_use]
    pub fn opponent(&self, player: PlayerId) -> PlayerId {
        if player == self.players[0] {
            self.players[1]
        } else {
            self.players[0]
        }
    }

    /// The current turn state.
    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// The player to move, or `None` once the game is finished.
    #[must_use]
    pub fn current_turn(&self) -> Option<PlayerId> {
        self.turn.player()
    }

    /// The winner, if the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.turn.winner()
    }

    /// Register a piece. Used at setup and when a persistence layer
    /// rebuilds a stored game.
    ///
    /// Panics if the owner is not one of the game's players or an on-board
    /// location is already taken; stored state that trips these was
    /// corrupted before it got here.
    pub fn add_piece(&mut self, owner: PlayerId, kind: PieceKind, location: Location) -> PieceId {
        assert!(self.players.contains(&owner), "Owner must be one of the game's players");
        if let Location::OnBoard(at) = location {
            assert!(
                !self.pieces.values().any(|p| p.location == Location::OnBoard(at)),
                "Square {at} is already occupied"
            );
        }

        let id = PieceId::new(self.next_piece_id);
        self.next_piece_id += 1;
        self.pieces.insert(
            id,
            Piece {
                id,
                owner,
                kind,
                location,
            },
        );
        id
    }

    /// Look up a piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Iterate over all pieces of the game, on board and in hand.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Derive the occupancy snapshot of all on-board pieces.
    ///
    /// Recomputed per operation; never cached across operations.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.pieces
            .values()
            .filter_map(|p| p.location.coord().map(|at| (at, Occupant::of(p))))
            .collect()
    }

    /// The board square of `player`'s boss, if it is on the board.
    #[must_use]
    pub fn boss_square(&self, player: PlayerId) -> Option<Coord> {
        self.pieces
            .values()
            .find(|p| p.owner == player && p.is_boss())
            .and_then(|p| p.location.coord())
    }

    pub(crate) fn set_location(&mut self, id: PieceId, location: Location) {
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.location = location;
        }
    }

    pub(crate) fn set_turn(&mut self, turn: TurnState) {
        self.turn = turn;
    }
}
