//! Data structures for the Swiss tournament: players, match records, derived views.

mod error;
mod game;
mod player;
mod standings;

pub use error::TournamentError;
pub use game::MatchRecord;
pub use player::{Player, PlayerId};
pub use standings::{Pairing, StandingRecord};
