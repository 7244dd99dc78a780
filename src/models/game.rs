//! Match record: one decided game between two players.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Outcome of a single match. Immutable once recorded; the match table is
/// append-only (cleared only in bulk).
///
/// Nothing guards against `winner_id == loser_id`; a self-match is accepted
/// and counts as both a win and a loss for that player.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

impl MatchRecord {
    pub fn new(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self { winner_id, loser_id }
    }
}
