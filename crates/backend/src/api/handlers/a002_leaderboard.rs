use axum::{extract::Query, http::StatusCode, Json};
use contracts::domain::a002_leaderboard::{LeaderboardEntry, LeaderboardQuery};

use crate::domain::a002_leaderboard;
use crate::shared::data::mock_store::get_store;

/// GET /api/leaderboard?period=weekly|monthly|total
pub async fn get_leaderboard(
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, StatusCode> {
    match a002_leaderboard::service::get_leaderboard(get_store(), query.period) {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to build leaderboard: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
