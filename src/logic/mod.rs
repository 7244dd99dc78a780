//! Tournament business logic: standings computation and pairing generation.

mod pairing;
mod standings;

pub use pairing::generate_pairings;
pub use standings::compute_standings;
