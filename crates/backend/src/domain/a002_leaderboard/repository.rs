use anyhow::Result;
use contracts::domain::a002_leaderboard::LeaderboardEntry;

use crate::shared::data::mock_store::{self, SharedStore};

pub fn list_all(store: &SharedStore) -> Result<Vec<LeaderboardEntry>> {
    Ok(mock_store::read(store)?.leaderboard.clone())
}
