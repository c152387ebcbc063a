pub mod a001_learning_module;
pub mod a002_leaderboard;
