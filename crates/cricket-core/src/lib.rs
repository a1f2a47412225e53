//! Rule engine for cricket darts.
//!
//! Players close 15 through 20 and the bullseye by landing three hits on each,
//! and score on a closed number while any opponent still has it open.

pub mod game;
pub mod player;
pub mod scoring;
pub mod status;
pub mod target;

pub use game::{CricketGame, HitOutcome};
pub use player::{MAX_PLAYERS, PlayerId, TargetHits};
pub use status::{GameStatus, PlayerStatus};
pub use target::{Target, UnknownTarget};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::game::CricketGame;
    use crate::player::PlayerId;
    use crate::scoring::CLOSE_HITS;
    use crate::target::Target;

    /// Bring `player` up to exactly three hits on `target`, if not already there.
    pub fn close_target(game: &mut CricketGame, player: PlayerId, target: Target) {
        let have = game.hits(player).map_or(0, |h| h.get(target));
        if have < CLOSE_HITS {
            game.apply_hit(player, target, CLOSE_HITS - have);
        }
    }

    /// Close every target for `player`.
    pub fn close_all(game: &mut CricketGame, player: PlayerId) {
        for t in Target::ALL {
            close_target(game, player, t);
        }
    }

    /// A game where every listed player has already closed `target`.
    pub fn game_with_closed(num_players: u8, closers: &[PlayerId], target: Target) -> CricketGame {
        let mut game = CricketGame::new(num_players);
        for &p in closers {
            close_target(&mut game, p, target);
        }
        game
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn close_all_closes_every_target() {
        let mut game = CricketGame::new(2);
        close_all(&mut game, 1);
        for t in Target::ALL {
            assert!(game.is_closed(1, t));
            assert!(!game.is_closed(2, t));
        }
        let face_total: u32 = Target::ALL.iter().map(|t| t.value()).sum();
        assert_eq!(game.score(1), face_total);
    }

    #[test]
    fn close_target_is_idempotent() {
        let mut game = game_with_closed(2, &[1], Target::Sixteen);
        close_target(&mut game, 1, Target::Sixteen);
        assert_eq!(game.hits(1).unwrap().get(Target::Sixteen), 3);
        assert_eq!(game.score(1), 16);
    }
}
