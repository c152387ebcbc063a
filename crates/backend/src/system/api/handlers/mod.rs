// User management handlers (CRUD + CSV export)
pub mod users;
