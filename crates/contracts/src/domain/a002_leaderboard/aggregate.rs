use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub rank: u32,
    #[serde(rename = "totalPoints")]
    pub total_points: u32,
    #[serde(rename = "weeklyPoints")]
    pub weekly_points: u32,
    #[serde(rename = "monthlyPoints")]
    pub monthly_points: u32,
    #[serde(default)]
    pub badges: Vec<String>,
}

impl LeaderboardEntry {
    pub fn points_for(&self, period: LeaderboardPeriod) -> u32 {
        match period {
            LeaderboardPeriod::Weekly => self.weekly_points,
            LeaderboardPeriod::Monthly => self.monthly_points,
            LeaderboardPeriod::Total => self.total_points,
        }
    }
}

/// Период, по которому ранжируется таблица лидеров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardPeriod {
    Weekly,
    Monthly,
    #[default]
    Total,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub period: LeaderboardPeriod,
}
