//! Game setup.
//!
//! The standard opening gives each player the full six-kind roster with
//! the two bosses already on the board, side by side, and everything else
//! in hand. `GameBuilder` exposes that layout with a few knobs; call
//! configuration methods to customize, or use [`Game::standard`] for the
//! defaults.

use crate::core::coord::Coord;
use crate::core::game::Game;
use crate::core::piece::{Location, PieceKind};
use crate::core::player::PlayerId;

/// Builder for a fresh game.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    players: [PlayerId; 2],
    starting_player: PlayerId,
    boss_squares: [Coord; 2],
}

impl Default for GameBuilder {
    fn default() -> Self {
        let players = [PlayerId::new(0), PlayerId::new(1)];
        Self {
            players,
            starting_player: players[0],
            boss_squares: [Coord::new(1, 0), Coord::new(1, 1)],
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use caller-supplied player identities (e.g. persistence row ids).
    #[must_use]
    pub fn players(mut self, players: [PlayerId; 2]) -> Self {
        assert!(players[0] != players[1], "Players must be distinct");
        self.players = players;
        self.starting_player = players[0];
        self
    }

    /// Which player moves first.
    #[must_use]
    pub fn starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }

    /// Where the two bosses start. The squares must be distinct and
    /// touching, so that no piece opens the game isolated.
    #[must_use]
    pub fn boss_squares(mut self, first: Coord, second: Coord) -> Self {
        assert!(first != second, "Boss squares must be distinct");
        assert!(
            first.neighbors().contains(&second),
            "Boss squares must touch each other"
        );
        self.boss_squares = [first, second];
        self
    }

    /// Build the opening position.
    #[must_use]
    pub fn build(self) -> Game {
        let mut game = Game::new(self.players, self.starting_player);

        for (player, boss_at) in self.players.into_iter().zip(self.boss_squares) {
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
}

impl Game {
    /// The standard opening between players 0 and 1.
    #[must_use]
    pub fn standard() -> Game {
        GameBuilder::new().build()
    }
}
