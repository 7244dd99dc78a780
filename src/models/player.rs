//! Player data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the repository on registration
/// (the in-memory analog of a `SERIAL` primary key).
pub type PlayerId = i64;

/// A registered player. Never mutated after registration; removed only by
/// the bulk clear operation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a player with a repository-assigned id and the registered name.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
