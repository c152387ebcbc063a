use axum::{routing::get, Router};

use super::handlers;

/// Конфигурация системных роутов приложения
pub fn configure_system_routes() -> Router {
    Router::new()
        // ========================================
        // HEALTH CHECK
        // ========================================
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM USERS MANAGEMENT
        // ========================================
        .route(
            "/api/system/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route("/api/system/users/export", get(handlers::users::export_csv))
        .route(
            "/api/system/users/export/template",
            get(handlers::users::export_template),
        )
        .route(
            "/api/system/users/:id",
            get(handlers::users::get_by_id)
                .put(handlers::users::update)
                .delete(handlers::users::delete),
        )
}
