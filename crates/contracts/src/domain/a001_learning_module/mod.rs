pub mod aggregate;

pub use aggregate::{
    Assignment, AssignmentStatus, LearningModule, Lesson, Quiz, QuizQuestion, SubmitAssignmentDto,
    UpdateLessonProgressDto,
};
