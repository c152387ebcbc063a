pub mod outcome;
pub mod progress;
pub mod request;
pub mod response;

pub use outcome::ImportOutcome;
pub use progress::{ImportProgress, ImportStatus};
pub use request::ImportRequest;
pub use response::{ImportResponse, ImportStartStatus};

use crate::usecases::common::UseCaseMetadata;

pub struct ImportUsers;

impl UseCaseMetadata for ImportUsers {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "import_users"
    }

    fn display_name() -> &'static str {
        "Import users from CSV"
    }

    fn description() -> &'static str {
        "Parse an uploaded CSV file and validate every user row (name, email, role)"
    }
}
