use anyhow::Result;
use contracts::domain::a002_leaderboard::{LeaderboardEntry, LeaderboardPeriod};

use super::repository;
use crate::shared::data::mock_store::SharedStore;

/// Order entries by the period's points (descending, ties by name) and
/// renumber ranks from 1.
pub fn rank(mut entries: Vec<LeaderboardEntry>, period: LeaderboardPeriod) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| {
        b.points_for(period)
            .cmp(&a.points_for(period))
            .then_with(|| a.name.cmp(&b.name))
    });
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }
    entries
}

pub fn get_leaderboard(store: &SharedStore, period: LeaderboardPeriod) -> Result<Vec<LeaderboardEntry>> {
    Ok(rank(repository::list_all(store)?, period))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::mock_store::MockStore;
    use std::sync::RwLock;

    fn entry(name: &str, total: u32, weekly: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            id: name.to_lowercase(),
            name: name.to_string(),
            avatar: String::new(),
            rank: 0,
            total_points: total,
            weekly_points: weekly,
            monthly_points: 0,
            badges: Vec::new(),
        }
    }

    #[test]
    fn reranks_per_period() {
        let entries = vec![entry("Asha", 100, 5), entry("Bala", 80, 30), entry("Chitra", 90, 30)];

        let total = rank(entries.clone(), LeaderboardPeriod::Total);
        let names: Vec<_> = total.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Chitra", "Bala"]);
        assert_eq!(total.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2, 3]);

        let weekly = rank(entries, LeaderboardPeriod::Weekly);
        let names: Vec<_> = weekly.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bala", "Chitra", "Asha"]);
    }

    #[test]
    fn seeded_leaderboard_is_ranked() {
        let store = RwLock::new(MockStore::seeded());
        let board = get_leaderboard(&store, LeaderboardPeriod::Monthly).unwrap();
        assert_eq!(board[0].name, "Rajesh Kumar");
        assert_eq!(board[0].rank, 1);
    }
}
