use axum::{
    extract::{Json, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Local;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::shared::data::mock_store::get_store;
use crate::system::users::{csv_export, service};

/// CSV download with an attachment file name
fn csv_attachment(file_name: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response()
}

/// List all users
pub async fn list() -> Result<Json<Vec<User>>, StatusCode> {
    let users = service::list_all(get_store()).map_err(|e| {
        tracing::error!("Failed to list users: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(users))
}

/// Get user by ID
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<User>, StatusCode> {
    let user = service::get_by_id(get_store(), &id)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(user))
}

/// Create user
pub async fn create(Json(dto): Json<CreateUserDto>) -> Result<Json<serde_json::Value>, StatusCode> {
    let user_id = service::create(get_store(), dto).map_err(|e| {
        tracing::error!("Failed to create user: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    Ok(Json(serde_json::json!({"id": user_id})))
}

/// Update user
pub async fn update(
    Path(id): Path<String>,
    Json(mut dto): Json<UpdateUserDto>,
) -> Result<StatusCode, StatusCode> {
    // Ensure ID matches
    dto.id = id;

    let updated = service::update(get_store(), dto).map_err(|e| {
        tracing::error!("Failed to update user: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    if updated {
        Ok(StatusCode::OK)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

/// Delete user
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, StatusCode> {
    let deleted = service::delete(get_store(), &id).map_err(|e| {
        tracing::error!("Failed to delete user: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if deleted {
        Ok(StatusCode::OK)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

/// Download all users as `users_export_<date>.csv`
pub async fn export_csv() -> Result<Response, StatusCode> {
    let users = service::list_all(get_store()).map_err(|e| {
        tracing::error!("Failed to load users for export: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let body = csv_export::export_users_csv(&users).map_err(|e| {
        tracing::error!("Failed to serialize users export: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::info!("Exported {} users", users.len());
    let file_name = csv_export::export_file_name(Local::now().date_naive());
    Ok(csv_attachment(&file_name, body))
}

/// Download the sample import template
pub async fn export_template() -> Result<Response, StatusCode> {
    let body = csv_export::export_template_csv().map_err(|e| {
        tracing::error!("Failed to build import template: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(csv_attachment(csv_export::TEMPLATE_FILE_NAME, body))
}
