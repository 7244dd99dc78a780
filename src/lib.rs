//! Swiss tournament web app: library with models, repository, and business logic.

pub mod logic;
pub mod models;
pub mod repository;

pub use logic::{compute_standings, generate_pairings};
pub use models::{MatchRecord, Pairing, Player, PlayerId, StandingRecord, TournamentError};
pub use repository::{MemoryRepository, Repository};
