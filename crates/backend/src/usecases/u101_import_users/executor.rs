use super::errors::ImportError;
use super::progress_tracker::ProgressTracker;
use super::validation::{missing_columns, normalize_header, validate_record};
use crate::shared::config;
use crate::shared::csv_table::{read_table, Record};
use contracts::usecases::u101_import_users::{
    ImportOutcome, ImportProgress, ImportRequest, ImportResponse, ImportStartStatus, ImportStatus,
};
use std::sync::Arc;
use uuid::Uuid;

/// File that passed the file-level checks, ready for row validation
#[derive(Debug, Clone)]
pub struct PreparedImport {
    pub records: Vec<Record>,
}

/// Parse the upload and run the file-level checks (empty file, header, size).
pub fn prepare_import(content: &str, max_rows: usize) -> Result<PreparedImport, ImportError> {
    let table = read_table(content).ok_or(ImportError::EmptyFile)?;

    let columns: Vec<String> = table.headers.iter().map(|h| normalize_header(h)).collect();
    let missing = missing_columns(&columns);
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing));
    }

    if table.rows.len() > max_rows {
        return Err(ImportError::TooManyRows {
            rows: table.rows.len(),
            limit: max_rows,
        });
    }

    let records = table.records(&columns);
    Ok(PreparedImport { records })
}

/// One row's verdict as the outcome and the tracker record it
fn check_record(record: &Record) -> Result<(), String> {
    validate_record(record)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

fn tally(outcome: &mut ImportOutcome, result: Result<(), String>) {
    match result {
        Ok(()) => outcome.success_count += 1,
        Err(message) => outcome.errors.push(message),
    }
}

/// Validate every prepared row, in file order
pub fn validate_records(prepared: &PreparedImport) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for record in &prepared.records {
        tally(&mut outcome, check_record(record));
    }
    outcome
}

/// Validate a whole file in one go, under the configured row limit.
/// Nothing is persisted.
pub fn import_users_csv(content: &str) -> Result<ImportOutcome, ImportError> {
    let prepared = prepare_import(content, config::get().import.max_rows)?;
    Ok(validate_records(&prepared))
}

/// Executor для UseCase импорта пользователей из CSV
#[derive(Clone)]
pub struct ImportExecutor {
    progress_tracker: Arc<ProgressTracker>,
    max_rows: usize,
    session_ttl_hours: i64,
}

impl ImportExecutor {
    pub fn new(progress_tracker: Arc<ProgressTracker>, max_rows: usize, session_ttl_hours: i64) -> Self {
        Self {
            progress_tracker,
            max_rows,
            session_ttl_hours,
        }
    }

    /// Run file-level checks now, then validate rows in a background task.
    /// File-level errors are returned directly and no session is created.
    pub async fn start_import(&self, request: ImportRequest) -> Result<ImportResponse, ImportError> {
        let file_name = request.file_name.clone();
        tracing::info!(
            "Starting users import (file: {})",
            file_name.as_deref().unwrap_or("<unnamed>")
        );

        let removed = self.progress_tracker.cleanup_old_sessions(self.session_ttl_hours);
        if removed > 0 {
            tracing::debug!("Dropped {} stale import sessions", removed);
        }

        let prepared = prepare_import(&request.content, self.max_rows)
            .inspect_err(|e| tracing::warn!("Users import rejected: {}", e))?;

        let session_id = Uuid::new_v4().to_string();
        let total = prepared.records.len();
        self.progress_tracker
            .create_session(session_id.clone(), file_name, total);

        let self_clone = self.clone();
        let session_id_clone = session_id.clone();
        tokio::spawn(async move {
            self_clone.run_import(&session_id_clone, prepared).await;
        });

        Ok(ImportResponse {
            session_id,
            status: ImportStartStatus::Started,
            message: format!("Import started for {} rows", total),
        })
    }

    /// Validate rows one by one, yielding between rows so progress polls see intermediate state
    pub async fn run_import(&self, session_id: &str, prepared: PreparedImport) -> ImportOutcome {
        let start = std::time::Instant::now();
        let mut outcome = ImportOutcome::default();

        for record in &prepared.records {
            let result = check_record(record);
            if let Err(message) = &result {
                tracing::debug!("{}", message);
            }
            self.progress_tracker.record_row(session_id, result.clone());
            tally(&mut outcome, result);
            tokio::task::yield_now().await;
        }

        let status = if outcome.is_clean() {
            ImportStatus::Completed
        } else {
            ImportStatus::CompletedWithErrors
        };
        self.progress_tracker.complete_session(session_id, status);

        tracing::info!(
            "Users import {} finished in {}ms: {} succeeded, {} rejected",
            session_id,
            start.elapsed().as_millis(),
            outcome.success_count,
            outcome.rejected_count()
        );

        outcome
    }

    /// Получить текущий прогресс импорта
    pub fn get_progress(&self, session_id: &str) -> Option<ImportProgress> {
        self.progress_tracker.get_progress(session_id)
    }
}
