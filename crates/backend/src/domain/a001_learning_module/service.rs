use anyhow::Result;
use contracts::domain::a001_learning_module::{
    AssignmentStatus, LearningModule, Lesson, SubmitAssignmentDto, UpdateLessonProgressDto,
};

use super::repository;
use crate::shared::data::mock_store::SharedStore;

pub fn list_all(store: &SharedStore) -> Result<Vec<LearningModule>> {
    repository::list_all(store)
}

pub fn get_by_id(store: &SharedStore, id: &str) -> Result<Option<LearningModule>> {
    repository::get_by_id(store, id)
}

pub fn get_lesson(store: &SharedStore, lesson_id: &str) -> Result<Option<Lesson>> {
    repository::get_lesson(store, lesson_id)
}

/// Set lesson progress (clamped to 100). When the lesson crosses the
/// completion line the module's completed counter moves with it.
pub fn update_lesson_progress(
    store: &SharedStore,
    lesson_id: &str,
    dto: UpdateLessonProgressDto,
) -> Result<Option<Lesson>> {
    let progress = dto.progress.min(100);

    repository::modify_lesson(store, lesson_id, |module, index| {
        let was_completed = module.lessons[index].is_completed();
        module.lessons[index].progress = progress;
        let is_completed = module.lessons[index].is_completed();

        match (was_completed, is_completed) {
            (false, true) => {
                module.completed_lessons = (module.completed_lessons + 1).min(module.total_lessons);
            }
            (true, false) => {
                module.completed_lessons = module.completed_lessons.saturating_sub(1);
            }
            _ => {}
        }

        tracing::debug!(
            "Lesson {} progress set to {} (module {}: {}/{})",
            lesson_id,
            progress,
            module.id,
            module.completed_lessons,
            module.total_lessons
        );
        module.lessons[index].clone()
    })
}

/// Submit assignment text for a lesson. A reviewed assignment goes back to
/// submitted and loses its score and feedback.
pub fn submit_assignment(
    store: &SharedStore,
    lesson_id: &str,
    dto: SubmitAssignmentDto,
) -> Result<Option<Lesson>> {
    let submission = dto.submission.trim().to_string();
    if submission.is_empty() {
        return Err(anyhow::anyhow!("Submission cannot be empty"));
    }

    repository::modify_lesson(store, lesson_id, |module, index| {
        let assignment = &mut module.lessons[index].assignment;
        assignment.status = AssignmentStatus::Submitted;
        assignment.submission = Some(submission);
        assignment.score = None;
        assignment.feedback = None;
        module.lessons[index].clone()
    })
}
