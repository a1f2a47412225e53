use crate::player::{MAX_PLAYERS, PlayerId, PlayerRecord, TargetHits};
use crate::scoring::{self, calculate_points};
use crate::status::{GameStatus, PlayerStatus};
use crate::target::Target;

/// What a single recorded hit did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitOutcome {
    pub player: PlayerId,
    pub target: Target,
    /// Player's count on `target` after the hit.
    pub hits: u32,
    /// This hit moved the count from open to closed.
    pub closed_now: bool,
    /// Points added to the player's score by this call.
    pub points: u32,
}

/// Scoreboard for one game of cricket.
///
/// Owns every player's hit counts and score. Mutated only through
/// [`CricketGame::record_hit`] / [`CricketGame::apply_hit`].
#[derive(Debug, Clone)]
pub struct CricketGame {
    players: Vec<PlayerRecord>,
}

impl CricketGame {
    /// Start a game for `num_players`, clamped to `1..=MAX_PLAYERS`.
    pub fn new(num_players: u8) -> Self {
        let count = num_players.clamp(1, MAX_PLAYERS);
        if count != num_players {
            tracing::warn!(
                requested = num_players,
                using = count,
                "Player count out of range, clamped"
            );
        }
        Self {
            players: vec![PlayerRecord::default(); count as usize],
        }
    }

    pub fn num_players(&self) -> u8 {
        self.players.len() as u8
    }

    /// Player ids in seat order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        1..=self.num_players()
    }

    fn record(&self, player: PlayerId) -> Option<&PlayerRecord> {
        (player as usize)
            .checked_sub(1)
            .and_then(|i| self.players.get(i))
    }

    /// Record `hits` darts by `player` on the segment worth `target_value`.
    ///
    /// Returns `false` without touching the board when the player or the
    /// target is unknown.
    pub fn record_hit(&mut self, player: PlayerId, target_value: u32, hits: u32) -> bool {
        let Ok(target) = Target::try_from(target_value) else {
            tracing::debug!(player, target = target_value, "Ignoring hit on unknown target");
            return false;
        };
        self.apply_hit(player, target, hits).is_some()
    }

    /// Single-dart form of [`CricketGame::record_hit`].
    pub fn record_hit_once(&mut self, player: PlayerId, target_value: u32) -> bool {
        self.record_hit(player, target_value, 1)
    }

    /// Typed form of [`CricketGame::record_hit`]; `None` for an unknown player.
    pub fn apply_hit(&mut self, player: PlayerId, target: Target, hits: u32) -> Option<HitOutcome> {
        let Some(idx) = (player as usize)
            .checked_sub(1)
            .filter(|&i| i < self.players.len())
        else {
            tracing::debug!(player, %target, "Ignoring hit for unknown player");
            return None;
        };

        let before = self.players[idx].hits.get(target);
        let count = self.players[idx].hits.add(target, hits);
        let closed_now = !scoring::is_closed(before) && scoring::is_closed(count);

        let any_opponent_open = self
            .players
            .iter()
            .enumerate()
            .any(|(i, p)| i != idx && !p.hits.is_closed(target));
        let points = calculate_points(count, target, any_opponent_open);

        let record = &mut self.players[idx];
        record.score = record.score.saturating_add(points);

        tracing::debug!(player, %target, hits, count, "Hit recorded");
        if closed_now {
            tracing::info!(player, %target, "Number closed");
        }
        if points > 0 {
            tracing::info!(player, %target, points, score = record.score, "Points scored");
        }

        Some(HitOutcome {
            player,
            target,
            hits: count,
            closed_now,
            points,
        })
    }

    /// Current score, 0 for an unknown player.
    pub fn score(&self, player: PlayerId) -> u32 {
        self.record(player).map_or(0, |r| r.score)
    }

    /// Hit counts, `None` for an unknown player.
    pub fn hits(&self, player: PlayerId) -> Option<&TargetHits> {
        self.record(player).map(|r| &r.hits)
    }

    /// Whether `player` has three or more hits on `target`.
    pub fn is_closed(&self, player: PlayerId, target: Target) -> bool {
        self.record(player).is_some_and(|r| r.hits.is_closed(target))
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            players: self
                .players()
                .zip(&self.players)
                .map(|(player, r)| PlayerStatus {
                    player,
                    score: r.score,
                    hits: r.hits,
                })
                .collect(),
        }
    }
}
