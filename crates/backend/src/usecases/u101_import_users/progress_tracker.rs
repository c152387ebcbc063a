use chrono::Utc;
use contracts::usecases::u101_import_users::progress::{ImportProgress, ImportStatus};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Трекер прогресса импорта (in-memory, для real-time мониторинга)
#[derive(Clone, Default)]
pub struct ProgressTracker {
    sessions: Arc<RwLock<HashMap<String, ImportProgress>>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicked writer leaves counters consistent, so poisoning is ignored
    fn sessions_read(&self) -> RwLockReadGuard<'_, HashMap<String, ImportProgress>> {
        self.sessions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn sessions_write(&self) -> RwLockWriteGuard<'_, HashMap<String, ImportProgress>> {
        self.sessions.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Создать новую сессию импорта
    pub fn create_session(&self, session_id: String, file_name: Option<String>, total: usize) {
        let mut sessions = self.sessions_write();
        sessions.insert(
            session_id.clone(),
            ImportProgress::new(session_id, file_name, total),
        );
    }

    /// Получить текущий прогресс сессии
    pub fn get_progress(&self, session_id: &str) -> Option<ImportProgress> {
        self.sessions_read().get(session_id).cloned()
    }

    /// Record one processed row: `Err` carries the user-facing rejection text
    pub fn record_row(&self, session_id: &str, result: Result<(), String>) {
        let mut sessions = self.sessions_write();
        if let Some(progress) = sessions.get_mut(session_id) {
            progress.processed += 1;
            match result {
                Ok(()) => progress.succeeded += 1,
                Err(message) => {
                    progress.failed += 1;
                    progress.errors.push(message);
                }
            }
            progress.updated_at = Utc::now();
        }
    }

    /// Завершить сессию импорта
    pub fn complete_session(&self, session_id: &str, status: ImportStatus) {
        let mut sessions = self.sessions_write();
        if let Some(progress) = sessions.get_mut(session_id) {
            let now = Utc::now();
            progress.status = status;
            progress.updated_at = now;
            progress.completed_at = Some(now);
        }
    }

    /// Удалить старые сессии (для очистки памяти)
    pub fn cleanup_old_sessions(&self, max_age_hours: i64) -> usize {
        let mut sessions = self.sessions_write();
        let before = sessions.len();
        let now = Utc::now();
        sessions.retain(|_, progress| match progress.completed_at {
            Some(completed_at) => (now - completed_at).num_hours() < max_age_hours,
            None => true, // активные сессии не трогаем
        });
        before - sessions.len()
    }

    #[cfg(test)]
    pub fn session_count(&self) -> usize {
        self.sessions_read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_rows_and_completes() {
        let tracker = ProgressTracker::new();
        tracker.create_session("s1".into(), Some("users.csv".into()), 2);
        tracker.record_row("s1", Ok(()));
        tracker.record_row("s1", Err("Row 3: name is required".into()));
        tracker.complete_session("s1", ImportStatus::CompletedWithErrors);

        let progress = tracker.get_progress("s1").unwrap();
        assert_eq!(progress.processed, 2);
        assert_eq!(progress.succeeded, 1);
        assert_eq!(progress.failed, 1);
        assert_eq!(progress.errors, vec!["Row 3: name is required".to_string()]);
        assert_eq!(progress.status, ImportStatus::CompletedWithErrors);
        assert!(progress.completed_at.is_some());
    }

    #[test]
    fn unknown_session_is_ignored() {
        let tracker = ProgressTracker::new();
        tracker.record_row("missing", Ok(()));
        assert!(tracker.get_progress("missing").is_none());
    }

    #[test]
    fn cleanup_keeps_running_sessions() {
        let tracker = ProgressTracker::new();
        tracker.create_session("running".into(), None, 5);
        tracker.create_session("done".into(), None, 0);
        tracker.complete_session("done", ImportStatus::Completed);

        // max age 0 hours drops every completed session
        let removed = tracker.cleanup_old_sessions(0);
        assert_eq!(removed, 1);
        assert!(tracker.get_progress("running").is_some());
        assert!(tracker.get_progress("done").is_none());
    }
}
