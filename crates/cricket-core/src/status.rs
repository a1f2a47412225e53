use serde::Serialize;

use crate::player::{PlayerId, TargetHits};
use crate::target::Target;

/// Snapshot of one player's standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStatus {
    pub player: PlayerId,
    pub score: u32,
    /// Counts ordered like [`Target::ALL`].
    pub hits: TargetHits,
}

impl PlayerStatus {
    pub fn is_closed(&self, target: Target) -> bool {
        self.hits.is_closed(target)
    }
}

/// Snapshot of the whole table, in player order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStatus {
    pub players: Vec<PlayerStatus>,
}

impl GameStatus {
    pub fn player(&self, player: PlayerId) -> Option<&PlayerStatus> {
        self.players.iter().find(|p| p.player == player)
    }

    /// Highest score on the board and every player holding it.
    pub fn leaders(&self) -> (u32, Vec<PlayerId>) {
        let top = self.players.iter().map(|p| p.score).max().unwrap_or(0);
        let ids = self
            .players
            .iter()
            .filter(|p| p.score == top)
            .map(|p| p.player)
            .collect();
        (top, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_with_scores(scores: &[u32]) -> GameStatus {
        GameStatus {
            players: scores
                .iter()
                .enumerate()
                .map(|(i, &score)| PlayerStatus {
                    player: i as PlayerId + 1,
                    score,
                    hits: TargetHits::default(),
                })
                .collect(),
        }
    }

    #[test]
    fn leaders_single_winner() {
        let status = status_with_scores(&[20, 60, 15]);
        assert_eq!(status.leaders(), (60, vec![2]));
    }

    #[test]
    fn leaders_reports_ties() {
        let status = status_with_scores(&[40, 10, 40]);
        assert_eq!(status.leaders(), (40, vec![1, 3]));
    }

    #[test]
    fn player_lookup() {
        let status = status_with_scores(&[0, 5]);
        assert_eq!(status.player(2).map(|p| p.score), Some(5));
        assert!(status.player(3).is_none());
    }

    #[test]
    fn json_shape() {
        let status = status_with_scores(&[20]);
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "players": [{ "player": 1, "score": 20, "hits": [0, 0, 0, 0, 0, 0, 0] }]
            })
        );
    }
}
