//! Legal-candidate enumeration.
//!
//! Answers "where may this piece go" for a UI or an agent, using the very
//! same guards the actions run, so enumeration can never disagree with
//! validation. Whose turn it is does not enter into it: callers ask about
//! either side's pieces (the turn check belongs to the action itself).
//!
//! Ranged movement is enumerated by walking each ray until the field
//! guard fails; past that point every further square on the ray stretches
//! the box even more, so the walk can stop. Occupied squares along a ray
//! reject individually but do not stop the walk, since ranged movement
//! ignores intervening pieces.

use std::collections::BTreeSet;

use crate::core::coord::{Coord, Delta, ORTHOGONAL_OFFSETS};
use crate::core::game::Game;
use crate::core::piece::PieceId;
use crate::core::snapshot::FIELD_MAX_SPAN;
use crate::error::ActionError;
use crate::rules::{adjacency, bounds};

impl Game {
    /// Every square the given on-board piece may legally move to.
    pub fn legal_moves(&self, piece: PieceId) -> Result<Vec<Coord>, ActionError> {
        let moving = *self.piece(piece).ok_or(ActionError::UnknownPiece(piece))?;
        let origin = moving.location.coord().ok_or(ActionError::PieceNotOnBoard)?;
        let movement = moving.kind.movement();

        let mut out = Vec::new();
        if movement.is_ranged() {
            let others = self.snapshot().without(origin);
            // a lone mover has no box to run into; cap its rays at the
            // field span instead
            let cap = if others.is_empty() { FIELD_MAX_SPAN } else { i64::MAX };

            for dir in ORTHOGONAL_OFFSETS {
                for step in 1i64.. {
                    if step > cap {
                        break;
                    }
                    let stride = Delta::new(dir.dx * step as i32, dir.dy * step as i32);
                    let target = origin.offset(stride);
                    if !bounds::fits_after(&others, target) {
                        break;
                    }
                    if self.check_move_target(&moving, origin, target).is_ok() {
                        out.push(target);
                    }
                }
            }
        } else {
            for delta in movement.step_deltas() {
                let target = origin.offset(delta);
                if self.check_move_target(&moving, origin, target).is_ok() {
                    out.push(target);
                }
            }
        }
        Ok(out)
    }

    /// Every square the given in-hand piece may legally be placed on.
    ///
    /// Placement must touch one of the owner's pieces, so the candidate
    /// space is the neighborhoods of those pieces; with none on the board
    /// the result is empty.
    pub fn legal_placements(&self, piece: PieceId) -> Result<Vec<Coord>, ActionError> {
        let placing = *self.piece(piece).ok_or(ActionError::UnknownPiece(piece))?;
        if !placing.location.is_in_hand() {
            return Err(ActionError::PieceNotInHand);
        }

        let board = self.snapshot();
        let mut candidates = BTreeSet::new();
        for (at, occ) in board.iter() {
            if occ.owner == placing.owner {
                candidates.extend(at.neighbors());
            }
        }

        Ok(candidates
            .into_iter()
            .filter(|&target| self.check_place_target(&placing, target).is_ok())
            .collect())
    }

    /// May the given piece be returned to hand? False for the boss, for
    /// pieces not on the board, and when a survivor would be stranded.
    #[must_use]
    pub fn can_remove(&self, piece: PieceId) -> bool {
        let Some(removing) = self.piece(piece) else {
            return false;
        };
        let Some(at) = removing.location.coord() else {
            return false;
        };
        if removing.is_boss() {
            return false;
        }
        adjacency::removal_keeps_neighbors(&self.snapshot().without(at))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::coord::Coord;
    use crate::core::piece::{Location, PieceKind};
    use crate::core::player::PlayerId;
    use crate::core::game::Game;
    use crate::error::ActionError;

    fn sorted(mut squares: Vec<Coord>) -> Vec<Coord> {
        squares.sort();
        squares
    }

    /// p0 boss (1,0), p1 boss (1,1), rest configurable.
    fn two_bosses() -> (Game, [PlayerId; 2]) {
        let players = [PlayerId::new(0), PlayerId::new(1)];
        let mut game = Game::new(players, players[0]);
        game.add_piece(players[0], PieceKind::Boss, Location::OnBoard(Coord::new(1, 0)));
        game.add_piece(players[1], PieceKind::Boss, Location::OnBoard(Coord::new(1, 1)));
        (game, players)
    }

    #[test]
    fn test_boss_moves_in_opening() {
        let (game, [p0, _]) = two_bosses();
        let boss = game.pieces().find(|p| p.owner == p0).unwrap().id;

        let moves = sorted(game.legal_moves(boss).unwrap());

        // of the eight single steps, only the squares still touching the
        // other boss survive, and its own square is occupied
        assert_eq!(
            moves,
            sorted(vec![
                Coord::new(0, 0),
                Coord::new(2, 0),
                Coord::new(0, 1),
                Coord::new(2, 1),
            ])
        );
    }

    #[test]
    fn test_ranged_ray_jumps_over_pieces() {
        let (mut game, [p0, _]) = two_bosses();
        let totsu = game.add_piece(p0, PieceKind::Totsu, Location::OnBoard(Coord::new(0, 0)));

        let moves = sorted(game.legal_moves(totsu).unwrap());

        // (2,0) is reachable by passing over the boss on (1,0); squares
        // further out on every ray either isolate or burst the field
        assert_eq!(
            moves,
            sorted(vec![
                Coord::new(0, -1),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(2, 0),
            ])
        );
    }

    #[test]
    fn test_placements_ring_own_pieces() {
        let (mut game, [p0, _]) = two_bosses();
        let yaiba = game.add_piece(p0, PieceKind::Yaiba, Location::InHand);

        let squares = game.legal_placements(yaiba).unwrap();

        // all eight neighbors of the own boss except the occupied (1,1)
        assert_eq!(squares.len(), 7);
        assert!(!squares.contains(&Coord::new(1, 1)));
        assert!(squares.contains(&Coord::new(0, -1)));
        assert!(squares.contains(&Coord::new(2, 1)));
    }

    #[test]
    fn test_placements_empty_without_own_pieces() {
        let players = [PlayerId::new(0), PlayerId::new(1)];
        let mut game = Game::new(players, players[0]);
        game.add_piece(players[1], PieceKind::Boss, Location::OnBoard(Coord::new(0, 0)));
        game.add_piece(players[1], PieceKind::Aniki, Location::OnBoard(Coord::new(0, 1)));
        let yaiba = game.add_piece(players[0], PieceKind::Yaiba, Location::InHand);

        assert_eq!(game.legal_placements(yaiba).unwrap(), Vec::new());
    }

    #[test]
    fn test_legal_moves_requires_board_piece() {
        let (mut game, [p0, _]) = two_bosses();
        let yaiba = game.add_piece(p0, PieceKind::Yaiba, Location::InHand);

        assert_eq!(game.legal_moves(yaiba), Err(ActionError::PieceNotOnBoard));
    }

    #[test]
    fn test_can_remove() {
        let (mut game, [p0, p1]) = two_bosses();
        let boss = game.pieces().find(|p| p.owner == p0).unwrap().id;
        let hajike = game.add_piece(p1, PieceKind::Hajike, Location::OnBoard(Coord::new(1, 2)));
        let in_hand = game.add_piece(p0, PieceKind::Aniki, Location::InHand);

        assert!(!game.can_remove(boss));
        assert!(game.can_remove(hajike));
        assert!(!game.can_remove(in_hand));
    }

    #[test]
    fn test_can_remove_refuses_to_strand() {
        // a line of three: pulling out the middle strands both ends
        let players = [PlayerId::new(0), PlayerId::new(1)];
        let mut game = Game::new(players, players[0]);
        game.add_piece(players[0], PieceKind::Yaiba, Location::OnBoard(Coord::new(0, 0)));
        let middle = game.add_piece(players[0], PieceKind::Aniki, Location::OnBoard(Coord::new(0, 1)));
        game.add_piece(players[1], PieceKind::Yaiba, Location::OnBoard(Coord::new(0, 2)));

        assert!(!game.can_remove(middle));
    }
}
