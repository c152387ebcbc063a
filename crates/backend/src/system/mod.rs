pub mod api;
pub mod middleware;
pub mod tracing;
pub mod users;
