//! Error type shared by the core and the repository boundary.

use crate::models::player::PlayerId;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Pairing generation needs at least 2 registered players.
    InsufficientPlayers,
    /// A match referenced a player id the repository does not know
    /// (the in-memory analog of a foreign key violation).
    PlayerNotFound(PlayerId),
    /// Repository-level failure (connectivity, constraint machinery).
    /// Propagates unchanged through the core.
    Storage(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientPlayers => {
                write!(f, "Need at least 2 players to generate pairings")
            }
            TournamentError::PlayerNotFound(id) => write!(f, "No player with id {}", id),
            TournamentError::Storage(msg) => write!(f, "Repository failure: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}
