use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ImportOutcome;

/// Текущий прогресс импорта (для real-time мониторинга)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportProgress {
    pub session_id: String,
    pub file_name: Option<String>,
    pub status: ImportStatus,

    /// Количество строк данных (без заголовка)
    pub total: usize,
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,

    /// Ошибки по строкам, в порядке строк файла
    pub errors: Vec<String>,

    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ImportProgress {
    pub fn new(session_id: String, file_name: Option<String>, total: usize) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            file_name,
            status: ImportStatus::Running,
            total,
            processed: 0,
            succeeded: 0,
            failed: 0,
            errors: Vec::new(),
            started_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    pub fn outcome(&self) -> ImportOutcome {
        ImportOutcome {
            success_count: self.succeeded,
            errors: self.errors.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    Running,
    Completed,
    CompletedWithErrors,
}
