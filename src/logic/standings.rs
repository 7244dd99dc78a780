//! Standings engine: rank players by win count.

use crate::models::{StandingRecord, TournamentError};
use crate::repository::Repository;

/// Current standings, sorted descending by wins.
///
/// Every registered player appears, including those with no matches yet
/// (wins = 0, matches = 0). Players with equal wins are not further
/// distinguished: the sort is stable, so ties keep registration order.
/// Read-only; an empty player set yields an empty vec.
pub fn compute_standings(repo: &impl Repository) -> Result<Vec<StandingRecord>, TournamentError> {
    let mut records = repo.fetch_standings_raw()?;
    records.sort_by(|a, b| b.wins.cmp(&a.wins));
    Ok(records)
}
