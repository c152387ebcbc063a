use anyhow::Result;
use chrono::Local;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use super::repository;
use crate::shared::data::mock_store::SharedStore;
use crate::shared::validation::is_valid_email;

fn validate_fields(name: &str, email: &str, progress: u8) -> Result<()> {
    if name.trim().is_empty() {
        return Err(anyhow::anyhow!("Name cannot be empty"));
    }
    if !is_valid_email(email.trim()) {
        return Err(anyhow::anyhow!("Invalid email format"));
    }
    if progress > 100 {
        return Err(anyhow::anyhow!("Progress must be between 0 and 100"));
    }
    Ok(())
}

fn normalize_company(company: Option<String>) -> Option<String> {
    company
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// Create a new user
pub fn create(store: &SharedStore, dto: CreateUserDto) -> Result<String> {
    validate_fields(&dto.name, &dto.email, dto.progress)?;

    // Check if email already exists
    if repository::get_by_email(store, dto.email.trim())?.is_some() {
        return Err(anyhow::anyhow!("Email already exists"));
    }

    let user_id = uuid::Uuid::new_v4().to_string();
    let user = User {
        id: user_id.clone(),
        name: dto.name.trim().to_string(),
        email: dto.email.trim().to_string(),
        role: dto.role,
        status: dto.status,
        progress: dto.progress,
        join_date: dto.join_date.unwrap_or_else(|| Local::now().date_naive()),
        company: normalize_company(dto.company),
    };

    repository::insert(store, user)?;
    tracing::info!("User {} created", user_id);

    Ok(user_id)
}

/// Update user. Returns false when the id is unknown.
pub fn update(store: &SharedStore, dto: UpdateUserDto) -> Result<bool> {
    let Some(mut user) = repository::get_by_id(store, &dto.id)? else {
        return Ok(false);
    };

    validate_fields(&dto.name, &dto.email, dto.progress)?;

    if let Some(other) = repository::get_by_email(store, dto.email.trim())? {
        if other.id != user.id {
            return Err(anyhow::anyhow!("Email already exists"));
        }
    }

    user.name = dto.name.trim().to_string();
    user.email = dto.email.trim().to_string();
    user.role = dto.role;
    user.status = dto.status;
    user.progress = dto.progress;
    user.company = normalize_company(dto.company);

    repository::update(store, user)
}

/// Delete user
pub fn delete(store: &SharedStore, id: &str) -> Result<bool> {
    repository::delete(store, id)
}

/// Get user by ID
pub fn get_by_id(store: &SharedStore, id: &str) -> Result<Option<User>> {
    repository::get_by_id(store, id)
}

/// List all users
pub fn list_all(store: &SharedStore) -> Result<Vec<User>> {
    repository::list_all(store)
}
