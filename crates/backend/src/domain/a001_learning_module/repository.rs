use anyhow::Result;
use contracts::domain::a001_learning_module::{LearningModule, Lesson};

use crate::shared::data::mock_store::{self, SharedStore};

pub fn list_all(store: &SharedStore) -> Result<Vec<LearningModule>> {
    Ok(mock_store::read(store)?.modules.clone())
}

pub fn get_by_id(store: &SharedStore, id: &str) -> Result<Option<LearningModule>> {
    Ok(mock_store::read(store)?
        .modules
        .iter()
        .find(|m| m.id == id)
        .cloned())
}

pub fn get_lesson(store: &SharedStore, lesson_id: &str) -> Result<Option<Lesson>> {
    Ok(mock_store::read(store)?
        .modules
        .iter()
        .flat_map(|m| m.lessons.iter())
        .find(|l| l.id == lesson_id)
        .cloned())
}

/// Apply `f` to the lesson and its module under one write lock.
/// Returns None when the lesson does not exist.
pub fn modify_lesson<T>(
    store: &SharedStore,
    lesson_id: &str,
    f: impl FnOnce(&mut LearningModule, usize) -> T,
) -> Result<Option<T>> {
    let mut guard = mock_store::write(store)?;
    for module in guard.modules.iter_mut() {
        if let Some(index) = module.lessons.iter().position(|l| l.id == lesson_id) {
            return Ok(Some(f(module, index)));
        }
    }
    Ok(None)
}
