use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::system;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .merge(system::api::routes::configure_system_routes())
        // ========================================
        // LEARNING MODULES
        // ========================================
        .route(
            "/api/learning_modules",
            get(handlers::a001_learning_module::list_all),
        )
        .route(
            "/api/learning_modules/:id",
            get(handlers::a001_learning_module::get_by_id),
        )
        .route(
            "/api/lessons/:id",
            get(handlers::a001_learning_module::get_lesson),
        )
        .route(
            "/api/lessons/:id/progress",
            post(handlers::a001_learning_module::update_progress),
        )
        .route(
            "/api/lessons/:id/assignment",
            post(handlers::a001_learning_module::submit_assignment),
        )
        // Leaderboard
        .route(
            "/api/leaderboard",
            get(handlers::a002_leaderboard::get_leaderboard),
        )
        // Dashboards
        .route(
            "/api/dashboards/admin_overview",
            get(handlers::d100_admin_overview::get_admin_overview),
        )
        // UseCase u101: Import users from CSV
        .route(
            "/api/u101/import/start",
            post(handlers::usecases::u101_start_import),
        )
        .route(
            "/api/u101/import/upload",
            post(handlers::usecases::u101_upload_import),
        )
        .route(
            "/api/u101/import/validate",
            post(handlers::usecases::u101_validate_import),
        )
        .route(
            "/api/u101/import/:session_id/progress",
            get(handlers::usecases::u101_get_progress),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_do_not_conflict() {
        // axum panics on overlapping routes while building the router
        let _router = configure_routes();
    }
}
