pub mod api;
pub mod cli;
pub mod commands;
pub mod logging;
pub mod models;
mod context;

pub use context::AppContext;
