use contracts::usecases::common::{UseCaseError, UseCaseMetadata};
use contracts::usecases::u101_import_users::ImportUsers;
use thiserror::Error;

/// File-level problems. Any of these aborts the import before a row is looked at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("File is empty")]
    EmptyFile,

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("File has {rows} data rows, the limit is {limit}")]
    TooManyRows { rows: usize, limit: usize },
}

/// Per-row rejection. Collected into the outcome, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowValidationError {
    #[error("Row {row}: name is required")]
    MissingName { row: usize },

    #[error("Row {row}: invalid email '{email}'")]
    InvalidEmail { row: usize, email: String },

    #[error("Row {row}: invalid role '{role}' (expected learner, coach or admin)")]
    InvalidRole { row: usize, role: String },

    #[error("Row {row}: invalid status '{status}' (expected active or inactive)")]
    InvalidStatus { row: usize, status: String },

    #[error("Row {row}: progress must be a whole number from 0 to 100, got '{progress}'")]
    InvalidProgress { row: usize, progress: String },

    #[error("Row {row}: invalid join date '{join_date}' (expected YYYY-MM-DD)")]
    InvalidJoinDate { row: usize, join_date: String },
}

impl From<ImportError> for UseCaseError {
    fn from(err: ImportError) -> Self {
        UseCaseError::validation(err.to_string()).with_details(ImportUsers::full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_names() {
        let err = ImportError::MissingColumns(vec!["email".into(), "role".into()]);
        assert_eq!(err.to_string(), "Missing required columns: email, role");
    }

    #[test]
    fn converts_to_validation_use_case_error() {
        let err: UseCaseError = ImportError::EmptyFile.into();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.message, "File is empty");
        assert_eq!(err.details.as_deref(), Some("u101_import_users"));
    }

    #[test]
    fn row_errors_start_with_row_number() {
        let err = RowValidationError::InvalidEmail {
            row: 3,
            email: "not-an-email".into(),
        };
        assert!(err.to_string().starts_with("Row 3: "));
    }
}
