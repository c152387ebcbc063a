use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_learning_module::{
    LearningModule, Lesson, SubmitAssignmentDto, UpdateLessonProgressDto,
};

use crate::domain::a001_learning_module;
use crate::shared::data::mock_store::get_store;

/// GET /api/learning_modules
pub async fn list_all() -> Result<Json<Vec<LearningModule>>, StatusCode> {
    match a001_learning_module::service::list_all(get_store()) {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list learning modules: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/learning_modules/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<LearningModule>, StatusCode> {
    match a001_learning_module::service::get_by_id(get_store(), &id) {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/lessons/:id
pub async fn get_lesson(Path(id): Path<String>) -> Result<Json<Lesson>, StatusCode> {
    match a001_learning_module::service::get_lesson(get_store(), &id) {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/lessons/:id/progress
pub async fn update_progress(
    Path(id): Path<String>,
    Json(dto): Json<UpdateLessonProgressDto>,
) -> Result<Json<Lesson>, StatusCode> {
    match a001_learning_module::service::update_lesson_progress(get_store(), &id, dto) {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update lesson {} progress: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/lessons/:id/assignment
pub async fn submit_assignment(
    Path(id): Path<String>,
    Json(dto): Json<SubmitAssignmentDto>,
) -> Result<Json<Lesson>, StatusCode> {
    match a001_learning_module::service::submit_assignment(get_store(), &id, dto) {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to submit assignment for lesson {}: {}", id, e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
