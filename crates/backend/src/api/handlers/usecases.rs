use axum::{
    extract::{Multipart, Path},
    http::StatusCode,
    Json,
};
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u101_import_users::{
    ImportOutcome, ImportProgress, ImportRequest, ImportResponse, ImportStartStatus,
};
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::shared::config;
use crate::usecases::u101_import_users::{import_users_csv, ImportExecutor, ProgressTracker};

// ============================================================================
// UseCase u101: Import users from CSV
// ============================================================================

static IMPORT_USERS_EXECUTOR: Lazy<Arc<ImportExecutor>> = Lazy::new(|| {
    let settings = &config::get().import;
    let tracker = Arc::new(ProgressTracker::new());
    Arc::new(ImportExecutor::new(
        tracker,
        settings.max_rows,
        settings.session_ttl_hours,
    ))
});

fn rejected(message: String) -> (StatusCode, Json<ImportResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ImportResponse {
            session_id: String::new(),
            status: ImportStartStatus::Failed,
            message,
        }),
    )
}

async fn start(
    request: ImportRequest,
) -> Result<Json<ImportResponse>, (StatusCode, Json<ImportResponse>)> {
    match IMPORT_USERS_EXECUTOR.start_import(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to start users import: {}", e);
            Err(rejected(e.to_string()))
        }
    }
}

/// POST /api/u101/import/start
pub async fn u101_start_import(
    Json(request): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, (StatusCode, Json<ImportResponse>)> {
    start(request).await
}

/// Текст загрузки должен быть валидным UTF-8, подмена символов не допускается.
fn decode_upload(bytes: &[u8]) -> Result<String, String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| format!("Uploaded file is not valid UTF-8 (byte {})", e.utf8_error().valid_up_to()))
}

/// POST /api/u101/import/upload (multipart, поле `file`)
pub async fn u101_upload_import(
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, (StatusCode, Json<ImportResponse>)> {
    let bad_upload = |message: String| {
        tracing::error!("Failed to read users import upload: {}", message);
        rejected(message)
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| bad_upload(e.to_string()))?;
        let content = decode_upload(&bytes).map_err(bad_upload)?;
        return start(ImportRequest { file_name, content }).await;
    }

    Err(bad_upload("Multipart field 'file' is missing".to_string()))
}

/// POST /api/u101/import/validate
pub async fn u101_validate_import(
    Json(request): Json<ImportRequest>,
) -> Result<Json<ImportOutcome>, (StatusCode, Json<UseCaseError>)> {
    import_users_csv(&request.content)
        .map(Json)
        .map_err(|e| {
            tracing::error!("Users import validation rejected the file: {}", e);
            (StatusCode::BAD_REQUEST, Json(UseCaseError::from(e)))
        })
}

/// GET /api/u101/import/:session_id/progress
pub async fn u101_get_progress(
    Path(session_id): Path<String>,
) -> Result<Json<ImportProgress>, StatusCode> {
    match IMPORT_USERS_EXECUTOR.get_progress(&session_id) {
        Some(progress) => Ok(Json(progress)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content: &str) -> ImportRequest {
        ImportRequest {
            file_name: Some("users.csv".into()),
            content: content.into(),
        }
    }

    #[tokio::test]
    async fn validate_reports_file_errors_as_bad_request() {
        let (status, Json(error)) = u101_validate_import(Json(request("   \n")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "File is empty");
    }

    #[tokio::test]
    async fn validate_returns_outcome() {
        let Json(outcome) = u101_validate_import(Json(request(
            "name,email,role\nA,a@b.co,learner\nB,not-an-email,coach\n",
        )))
        .await
        .unwrap();
        assert_eq!(outcome.success_count, 1);
        assert_eq!(outcome.errors.len(), 1);
    }

    #[tokio::test]
    async fn start_then_poll_progress() {
        let Json(response) = u101_start_import(Json(request("name,email,role\nA,a@b.co,admin\n")))
            .await
            .unwrap();
        assert_eq!(response.status, ImportStartStatus::Started);

        let Json(progress) = u101_get_progress(Path(response.session_id)).await.unwrap();
        assert_eq!(progress.total, 1);
    }

    #[tokio::test]
    async fn start_rejects_missing_columns() {
        let (status, Json(response)) = u101_start_import(Json(request("name,email\nA,a@b.co\n")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.status, ImportStartStatus::Failed);
        assert_eq!(response.message, "Missing required columns: role");
    }

    #[test]
    fn upload_must_be_utf8() {
        let text = "name,email,role\nJosé,j@b.co,learner";
        assert_eq!(decode_upload(text.as_bytes()).unwrap(), text);

        let mut latin1 = b"name,email,role\nJos".to_vec();
        latin1.push(0xE9);
        let err = decode_upload(&latin1).unwrap_err();
        assert_eq!(err, "Uploaded file is not valid UTF-8 (byte 19)");
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let result = u101_get_progress(Path("missing".to_string())).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }
}
