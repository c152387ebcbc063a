use serde::{Deserialize, Serialize};

/// Сводка для вкладки Overview панели администратора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub total_users: usize,
    pub active_users: usize,
    pub active_modules: usize,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    /// Rounded percentage of completed lessons across all modules
    pub completion_rate: u32,
    /// Rounded mean of user progress
    pub average_progress: u32,
    pub modules: Vec<ModuleCompletion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleCompletion {
    pub module_id: String,
    pub title: String,
    pub completed_lessons: u32,
    pub total_lessons: u32,
    pub completion_percent: u32,
}
