use anyhow::Result;
use chrono::NaiveDate;
use contracts::system::users::{Role, User, UserStatus};

use crate::shared::csv_table::write_table;

/// Canonical column order of the users file
pub const EXPORT_COLUMNS: [&str; 7] = [
    "name",
    "email",
    "role",
    "status",
    "progress",
    "join_date",
    "company",
];

pub const TEMPLATE_FILE_NAME: &str = "users_import_template.csv";

fn user_row(user: &User) -> Vec<String> {
    vec![
        user.name.clone(),
        user.email.clone(),
        user.role.to_string(),
        user.status.to_string(),
        user.progress.to_string(),
        user.join_date.format("%Y-%m-%d").to_string(),
        user.company.clone().unwrap_or_default(),
    ]
}

/// Serialize users in the canonical column order
pub fn export_users_csv(users: &[User]) -> Result<String> {
    write_table(&EXPORT_COLUMNS, users.iter().map(user_row))
}

/// `users_export_2024-01-15.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("users_export_{}.csv", date.format("%Y-%m-%d"))
}

/// Header plus one sample row, same serialization as the export
pub fn export_template_csv() -> Result<String> {
    let sample = User {
        id: String::new(),
        name: "Priya Sharma".to_string(),
        email: "priya@example.com".to_string(),
        role: Role::Learner,
        status: UserStatus::Active,
        progress: 0,
        join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        company: Some("Example Corp".to_string()),
    };
    write_table(&EXPORT_COLUMNS, [user_row(&sample)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use crate::usecases::u101_import_users::import_users_csv;

    #[test]
    fn every_field_is_quoted() {
        let users = seed::users();
        let csv = export_users_csv(&users[..1]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("\"name\",\"email\",\"role\",\"status\",\"progress\",\"join_date\",\"company\"")
        );
        assert_eq!(
            lines.next(),
            Some("\"Rajesh Kumar\",\"rajesh@innovatetech.in\",\"learner\",\"active\",\"65\",\"2024-01-15\",\"InnovateTech\"")
        );
        assert_eq!(lines.next(), None);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn export_then_import_round_trips() {
        let mut users = seed::users();
        users[0].company = Some("Acme, \"Ltd\"".to_string());
        let csv = export_users_csv(&users).unwrap();

        let outcome = import_users_csv(&csv).unwrap();
        assert_eq!(outcome.success_count, users.len());
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn quote_only_values_survive_round_trip() {
        let mut users = seed::users();
        users.truncate(1);
        users[0].name = "\"\"".to_string();
        users[0].company = Some("\"Acme\"".to_string());
        let csv = export_users_csv(&users).unwrap();
        assert!(csv.contains("\"\"\"\"\"\",\""));

        let outcome = import_users_csv(&csv).unwrap();
        assert_eq!(outcome.success_count, 1);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn empty_export_is_header_only() {
        let csv = export_users_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn file_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "users_export_2024-03-07.csv");
        assert_eq!(TEMPLATE_FILE_NAME, "users_import_template.csv");
    }

    #[test]
    fn template_is_importable() {
        let template = export_template_csv().unwrap();
        assert_eq!(template.lines().count(), 2);
        let outcome = import_users_csv(&template).unwrap();
        assert_eq!(outcome.success_count, 1);
    }
}
