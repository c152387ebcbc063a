use axum::{http::StatusCode, Json};
use contracts::dashboards::d100_admin_overview::AdminOverview;

use crate::dashboards::d100_admin_overview;
use crate::shared::data::mock_store::get_store;

/// GET /api/dashboards/admin_overview
pub async fn get_admin_overview() -> Result<Json<AdminOverview>, StatusCode> {
    d100_admin_overview::service::get_admin_overview(get_store())
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to build admin overview: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
