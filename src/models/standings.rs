//! Derived views: standings and next-round pairings.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One row of the standings: a player's aggregated win/loss record.
/// Computed fresh from the player and match data, never stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub id: PlayerId,
    pub name: String,
    /// Matches this player won.
    pub wins: u32,
    /// Matches this player played (wins + losses).
    pub matches: u32,
}

/// An assignment of two adjacent-ranked players to play each other next round.
/// Transient: one batch per pairing call, not persisted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub id_1: PlayerId,
    pub name_1: String,
    pub id_2: PlayerId,
    pub name_2: String,
}
