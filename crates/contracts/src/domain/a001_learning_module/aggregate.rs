use serde::{Deserialize, Serialize};

/// Учебный модуль (курс) с уроками
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    /// Icon name understood by the client
    pub icon: String,
    pub description: String,
    pub lessons: Vec<Lesson>,
    #[serde(rename = "totalLessons")]
    pub total_lessons: u32,
    #[serde(rename = "completedLessons")]
    pub completed_lessons: u32,
}

impl LearningModule {
    /// Completion as a fraction of planned lessons, 0.0 when nothing is planned
    pub fn completion_ratio(&self) -> f64 {
        if self.total_lessons == 0 {
            return 0.0;
        }
        self.completed_lessons as f64 / self.total_lessons as f64
    }

    /// Rounded completion percentage (0..=100)
    pub fn completion_percent(&self) -> u32 {
        (self.completion_ratio() * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    #[serde(rename = "moduleId")]
    pub module_id: String,
    pub title: String,
    pub date: String,
    pub progress: u8,
    pub assignment: Assignment,
    #[serde(rename = "videoUrl", default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub quiz: Option<Quiz>,
    /// Duration in minutes
    pub duration: u32,
}

impl Lesson {
    pub fn is_completed(&self) -> bool {
        self.progress >= 100
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub status: AssignmentStatus,
    #[serde(default)]
    pub submission: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
}

impl Assignment {
    pub fn not_started() -> Self {
        Self {
            status: AssignmentStatus::NotStarted,
            submission: None,
            feedback: None,
            score: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    NotStarted,
    Submitted,
    Reviewed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
}

/// Тело запроса на обновление прогресса урока
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLessonProgressDto {
    pub progress: u8,
}

/// Тело запроса на сдачу задания
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAssignmentDto {
    pub submission: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_status_uses_kebab_case() {
        let json = serde_json::to_string(&AssignmentStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not-started\"");
    }

    #[test]
    fn completion_percent_handles_empty_module() {
        let module = LearningModule {
            id: "1".into(),
            title: "Empty".into(),
            icon: "Brain".into(),
            description: String::new(),
            lessons: Vec::new(),
            total_lessons: 0,
            completed_lessons: 0,
        };
        assert_eq!(module.completion_percent(), 0);
    }
}
