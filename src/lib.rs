// Library interface for passfetch
pub mod api;
pub mod clipboard;
pub mod commands;
pub mod env;
pub mod error;
pub mod logging;
pub mod password;
pub mod settings;
pub mod tui;

// Re-export commonly used items
pub use error::{PassfetchError, Result};
