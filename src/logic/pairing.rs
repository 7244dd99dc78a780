//! Pairing generator: adjacent-ranked pairs for the next round.

use crate::logic::standings::compute_standings;
use crate::models::{Pairing, TournamentError};
use crate::repository::Repository;

/// Pairings for the next round: rank 1 vs rank 2, rank 3 vs rank 4, and so on.
///
/// Since standings are sorted by win count, pairing consecutive rows matches
/// each player with an equal-or-nearly-equal record, which is the Swiss
/// requirement. With an even count every player appears exactly once; with an
/// odd count the trailing lowest-ranked player is silently dropped from the
/// result (no bye is assigned).
///
/// Fails with `InsufficientPlayers` when fewer than 2 players are registered.
pub fn generate_pairings(repo: &impl Repository) -> Result<Vec<Pairing>, TournamentError> {
    let ranked: Vec<_> = compute_standings(repo)?
        .into_iter()
        .map(|r| (r.id, r.name))
        .collect();

    if ranked.len() < 2 {
        return Err(TournamentError::InsufficientPlayers);
    }

    let pairings = ranked
        .chunks_exact(2)
        .map(|pair| Pairing {
            id_1: pair[0].0,
            name_1: pair[0].1.clone(),
            id_2: pair[1].0,
            name_2: pair[1].1.clone(),
        })
        .collect();

    Ok(pairings)
}
