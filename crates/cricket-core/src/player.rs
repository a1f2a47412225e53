use serde::Serialize;

use crate::scoring;
use crate::target::{TARGET_COUNT, Target};

/// 1-based player number as shown at the oche.
pub type PlayerId = u8;

/// Largest table the scorekeeper supports.
pub const MAX_PLAYERS: u8 = 10;

/// Hit counts for one player, one slot per target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TargetHits([u32; TARGET_COUNT]);

impl TargetHits {
    pub fn get(&self, target: Target) -> u32 {
        self.0[target.index()]
    }

    /// Adds `hits` to `target` and returns the new count.
    pub fn add(&mut self, target: Target, hits: u32) -> u32 {
        let slot = &mut self.0[target.index()];
        *slot = slot.saturating_add(hits);
        *slot
    }

    pub fn is_closed(&self, target: Target) -> bool {
        scoring::is_closed(self.get(target))
    }

    /// `(target, count)` pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Target, u32)> + '_ {
        Target::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    pub fn as_array(&self) -> &[u32; TARGET_COUNT] {
        &self.0
    }
}

/// Per-player record kept by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PlayerRecord {
    pub score: u32,
    pub hits: TargetHits,
}
