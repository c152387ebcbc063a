use anyhow::Result;
use contracts::system::users::User;

use crate::shared::data::mock_store::{self, SharedStore};

/// List all users in store order
pub fn list_all(store: &SharedStore) -> Result<Vec<User>> {
    Ok(mock_store::read(store)?.users.clone())
}

/// Get user by ID
pub fn get_by_id(store: &SharedStore, id: &str) -> Result<Option<User>> {
    Ok(mock_store::read(store)?
        .users
        .iter()
        .find(|u| u.id == id)
        .cloned())
}

/// Get user by email (case-insensitive)
pub fn get_by_email(store: &SharedStore, email: &str) -> Result<Option<User>> {
    Ok(mock_store::read(store)?
        .users
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email))
        .cloned())
}

pub fn insert(store: &SharedStore, user: User) -> Result<()> {
    mock_store::write(store)?.users.push(user);
    Ok(())
}

/// Replace the user with the same id. Returns false if there is none.
pub fn update(store: &SharedStore, user: User) -> Result<bool> {
    let mut guard = mock_store::write(store)?;
    match guard.users.iter_mut().find(|u| u.id == user.id) {
        Some(existing) => {
            *existing = user;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Delete user by ID
pub fn delete(store: &SharedStore, id: &str) -> Result<bool> {
    let mut guard = mock_store::write(store)?;
    let before = guard.users.len();
    guard.users.retain(|u| u.id != id);
    Ok(guard.users.len() != before)
}
