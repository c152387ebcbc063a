// Aggregates (a001-a002)
pub mod a001_learning_module;
pub mod a002_leaderboard;
