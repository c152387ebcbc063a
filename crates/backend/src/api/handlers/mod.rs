pub mod a001_learning_module;
pub mod a002_leaderboard;
pub mod d100_admin_overview;
pub mod usecases;
