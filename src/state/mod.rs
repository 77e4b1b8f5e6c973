//! Application state module

mod app_state;
pub mod forms;
pub mod models;

pub use app_state::*;
