//! Record repository: the persistence collaborator the core is built against.

mod memory;

pub use memory::MemoryRepository;

use crate::models::{PlayerId, StandingRecord, TournamentError};

/// Storage contract for players and matches.
///
/// The core is stateless and takes an implementation as an injected dependency;
/// lifecycle (opening, transactions, closing) belongs entirely to the embedding
/// application. Every method is one logical step: no partial results, no rollback.
/// Implementations backed by fallible stores surface their failures through
/// `TournamentError`; the core passes them through without validation or retry.
pub trait Repository {
    /// Delete all match records.
    fn clear_matches(&mut self) -> Result<(), TournamentError>;

    /// Delete all player records.
    fn clear_players(&mut self) -> Result<(), TournamentError>;

    /// Number of registered players.
    fn count_players(&self) -> Result<usize, TournamentError>;

    /// Register a player; the repository assigns and returns the id.
    fn add_player(&mut self, name: &str) -> Result<PlayerId, TournamentError>;

    /// Record one match outcome. Ids are not validated by callers; a
    /// constraint-violating id is the implementation's to reject.
    fn add_match(&mut self, winner_id: PlayerId, loser_id: PlayerId)
        -> Result<(), TournamentError>;

    /// One `(id, name, wins, matches)` row per player, in registration order,
    /// including players who have not played yet. Unsorted: ranking is the
    /// standings engine's job.
    fn fetch_standings_raw(&self) -> Result<Vec<StandingRecord>, TournamentError>;
}
