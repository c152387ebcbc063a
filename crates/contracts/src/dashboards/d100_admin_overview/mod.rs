pub mod dto;

pub use dto::{AdminOverview, ModuleCompletion};
