pub use std::env::*;
use std::{path::PathBuf, sync::LazyLock};

pub const BASE_URL: &str = "BASE_URL";
pub const API_KEY: &str = "API_KEY";
pub const PASSFETCH_LOG_FILE: &str = "PASSFETCH_LOG_FILE";

/// Disables `.env` loading when set to a truthy value
pub const PASSFETCH_NO_DOTENV: &str = "PASSFETCH_NO_DOTENV";

pub static PASSFETCH_CACHE_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("passfetch")
});

/// Where the TUI writes its log when no log file is configured
pub fn default_log_file() -> PathBuf {
    PASSFETCH_CACHE_DIR.join("passfetch.log")
}

/// Load `.env` from the working directory into the process environment.
///
/// Variables that are already set are left alone. Must run before the CLI
/// is parsed so that clap's `env` fallbacks see the values.
pub fn load_dotenv() -> Option<PathBuf> {
    if var(PASSFETCH_NO_DOTENV).is_ok_and(|v| is_truthy(&v)) {
        return None;
    }
    dotenvy::dotenv().ok()
}

fn is_truthy(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy("yes"));
        assert!(is_truthy("on"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy(""));
    }

    #[test]
    fn test_default_log_file_location() {
        let path = default_log_file();
        assert!(path.ends_with("passfetch/passfetch.log"));
    }
}
