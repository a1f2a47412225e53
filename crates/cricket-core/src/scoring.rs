use crate::target::Target;

/// Hits needed to close a number.
pub const CLOSE_HITS: u32 = 3;

/// Whether a hit count closes a number.
pub fn is_closed(hits: u32) -> bool {
    hits >= CLOSE_HITS
}

/// Points awarded to a player after their hit count on `target` reaches `hits`.
///
/// Scoring rules:
/// - Target still open for the player: 0
/// - Every opponent has closed the target: 0
/// - Otherwise: `(hits - 2) * target value`
///
/// The whole count above two is paid out on every qualifying call, not only
/// the hits added since the last payout. Recording a closed number one dart at
/// a time therefore pays earlier extra hits again.
pub fn calculate_points(hits: u32, target: Target, any_opponent_open: bool) -> u32 {
    if !is_closed(hits) || !any_opponent_open {
        return 0;
    }
    (hits - (CLOSE_HITS - 1)).saturating_mul(target.value())
}
