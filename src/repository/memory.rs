//! In-memory repository implementation.

use crate::models::{MatchRecord, Player, PlayerId, StandingRecord, TournamentError};
use crate::repository::Repository;

/// Vec-backed repository. Ids are sequential starting at 1, mirroring a
/// relational store's auto-assigned keys; clearing players does not reset the
/// counter, so ids are never reused within one repository's lifetime.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    next_id: PlayerId,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

impl Repository for MemoryRepository {
    fn clear_matches(&mut self) -> Result<(), TournamentError> {
        self.matches.clear();
        Ok(())
    }

    fn clear_players(&mut self) -> Result<(), TournamentError> {
        self.players.clear();
        Ok(())
    }

    fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.players.len())
    }

    fn add_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        self.next_id += 1;
        let id = self.next_id;
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    /// Rejects unknown ids, as a relational store's foreign keys would.
    /// `winner_id == loser_id` is accepted: the self-match gap is deliberate.
    fn add_match(
        &mut self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<(), TournamentError> {
        if !self.has_player(winner_id) {
            return Err(TournamentError::PlayerNotFound(winner_id));
        }
        if !self.has_player(loser_id) {
            return Err(TournamentError::PlayerNotFound(loser_id));
        }
        self.matches.push(MatchRecord::new(winner_id, loser_id));
        Ok(())
    }

    /// The aggregation a SQL-backed store would express as a grouped join:
    /// count wins and losses per player, emit rows in registration order.
    fn fetch_standings_raw(&self) -> Result<Vec<StandingRecord>, TournamentError> {
        let records = self
            .players
            .iter()
            .map(|p| {
                let wins = self.matches.iter().filter(|m| m.winner_id == p.id).count() as u32;
                let losses = self.matches.iter().filter(|m| m.loser_id == p.id).count() as u32;
                StandingRecord {
                    id: p.id,
                    name: p.name.clone(),
                    wins,
                    matches: wins + losses,
                }
            })
            .collect();
        Ok(records)
    }
}
