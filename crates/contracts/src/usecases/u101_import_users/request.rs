use serde::{Deserialize, Serialize};

/// Запрос на импорт пользователей из CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Имя загруженного файла (только для логов и прогресса)
    #[serde(default)]
    pub file_name: Option<String>,

    /// Содержимое файла целиком
    pub content: String,
}
