pub mod errors;
pub mod executor;
pub mod progress_tracker;
pub mod validation;

pub use executor::{import_users_csv, ImportExecutor};
pub use progress_tracker::ProgressTracker;
