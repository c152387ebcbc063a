use chrono::NaiveDate;
use contracts::system::users::{CreateUserDto, Role, UserStatus};

use super::errors::RowValidationError;
use crate::shared::csv_table::Record;
use crate::shared::validation::is_valid_email;

pub const REQUIRED_COLUMNS: [&str; 3] = ["name", "email", "role"];

/// Lowercase + trim a header cell and fold the historical aliases
/// (`Progress (%)`, `Join Date`) onto the canonical column names.
pub fn normalize_header(header: &str) -> String {
    let lowered = header.trim().trim_matches('"').trim().to_lowercase();
    match lowered.as_str() {
        "progress (%)" | "progress %" => "progress".to_string(),
        "join date" | "joindate" | "join_date" => "join_date".to_string(),
        _ => lowered,
    }
}

/// Required columns absent from the (normalized) header, in canonical order
pub fn missing_columns(columns: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .map(|required| required.to_string())
        .collect()
}

/// Check one row. The first failing rule is reported; a passing row is
/// returned as a ready-to-create user with defaults applied.
pub fn validate_record(record: &Record) -> Result<CreateUserDto, RowValidationError> {
    let row = record.row;

    let name = record.get("name");
    if name.is_empty() {
        return Err(RowValidationError::MissingName { row });
    }

    let email = record.get("email");
    if !is_valid_email(email) {
        return Err(RowValidationError::InvalidEmail {
            row,
            email: email.to_string(),
        });
    }

    let role_cell = record.get("role");
    let role: Role = role_cell
        .parse()
        .map_err(|_| RowValidationError::InvalidRole {
            row,
            role: role_cell.to_string(),
        })?;

    let status = match record.get("status") {
        "" => UserStatus::default(),
        value => value
            .parse::<UserStatus>()
            .map_err(|_| RowValidationError::InvalidStatus {
                row,
                status: value.to_string(),
            })?,
    };

    let progress = match record.get("progress") {
        "" => 0,
        value => value
            .parse::<u8>()
            .ok()
            .filter(|p| *p <= 100)
            .ok_or_else(|| RowValidationError::InvalidProgress {
                row,
                progress: value.to_string(),
            })?,
    };

    let join_date = match record.get("join_date") {
        "" => None,
        value => Some(NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
            RowValidationError::InvalidJoinDate {
                row,
                join_date: value.to_string(),
            }
        })?),
    };

    let company = Some(record.get("company"))
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ok(CreateUserDto {
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        progress,
        join_date,
        company,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(row: usize, pairs: &[(&str, &str)]) -> Record {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Record::new(row, values)
    }

    #[test]
    fn normalizes_aliases() {
        assert_eq!(normalize_header(" Name "), "name");
        assert_eq!(normalize_header("\"EMAIL\""), "email");
        assert_eq!(normalize_header("Progress (%)"), "progress");
        assert_eq!(normalize_header("Join Date"), "join_date");
        assert_eq!(normalize_header("Company"), "company");
    }

    #[test]
    fn reports_missing_columns_in_order() {
        let columns = vec!["email".to_string(), "name".to_string()];
        assert_eq!(missing_columns(&columns), vec!["role".to_string()]);

        let columns = vec!["company".to_string()];
        assert_eq!(missing_columns(&columns), vec!["name", "email", "role"]);
    }

    #[test]
    fn accepts_minimal_row_with_defaults() {
        let rec = record(2, &[("name", "Asha"), ("email", "asha@corp.in"), ("role", "Coach")]);
        let dto = validate_record(&rec).unwrap();
        assert_eq!(dto.role, Role::Coach);
        assert_eq!(dto.status, UserStatus::Active);
        assert_eq!(dto.progress, 0);
        assert_eq!(dto.join_date, None);
        assert_eq!(dto.company, None);
    }

    #[test]
    fn first_failing_rule_wins() {
        let rec = record(4, &[("name", ""), ("email", "bad"), ("role", "superuser")]);
        assert_eq!(
            validate_record(&rec),
            Err(RowValidationError::MissingName { row: 4 })
        );
    }

    #[test]
    fn rejects_unknown_role() {
        let rec = record(2, &[("name", "A"), ("email", "a@b.co"), ("role", "superuser")]);
        assert!(matches!(
            validate_record(&rec),
            Err(RowValidationError::InvalidRole { row: 2, .. })
        ));
    }

    #[test]
    fn rejects_malformed_optional_fields() {
        let base = [("name", "A"), ("email", "a@b.co"), ("role", "learner")];

        let mut pairs = base.to_vec();
        pairs.push(("progress", "150"));
        assert!(matches!(
            validate_record(&record(2, &pairs)),
            Err(RowValidationError::InvalidProgress { .. })
        ));

        let mut pairs = base.to_vec();
        pairs.push(("status", "sleeping"));
        assert!(matches!(
            validate_record(&record(2, &pairs)),
            Err(RowValidationError::InvalidStatus { .. })
        ));

        let mut pairs = base.to_vec();
        pairs.push(("join_date", "15/01/2024"));
        assert!(matches!(
            validate_record(&record(2, &pairs)),
            Err(RowValidationError::InvalidJoinDate { .. })
        ));
    }

    #[test]
    fn parses_optional_fields() {
        let rec = record(
            2,
            &[
                ("name", "Meera Patel"),
                ("email", "meera@foodprocessing.in"),
                ("role", "learner"),
                ("status", "Inactive"),
                ("progress", "80"),
                ("join_date", "2024-01-05"),
                ("company", "Food Processing"),
            ],
        );
        let dto = validate_record(&rec).unwrap();
        assert_eq!(dto.status, UserStatus::Inactive);
        assert_eq!(dto.progress, 80);
        assert_eq!(dto.join_date, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(dto.company.as_deref(), Some("Food Processing"));
    }
}
