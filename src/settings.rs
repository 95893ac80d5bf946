// Settings for passfetch
//
// Resolved once at startup from (lowest to highest precedence):
// 1. Defaults
// 2. `.env` file in the working directory
// 3. Environment variables
// 4. CLI flags
//
// The resulting `Settings` value is handed to everything that needs it;
// nothing reads the environment after this point.

use std::fmt;
use std::time::Duration;

use crate::commands::Cli;
use crate::password::RequestedLength;

#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Password generation endpoint, used verbatim as the URL prefix
    pub base_url: String,
    /// Sent as the `X-Api-Key` header
    pub api_key: String,
    /// Length requested on startup
    pub length: RequestedLength,
    /// Optional request timeout. None means wait for as long as it takes.
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        let base_url = cli.base_url.clone().unwrap_or_else(|| {
            tracing::warn!("BASE_URL is not set; requests will fail");
            String::new()
        });
        let api_key = cli.api_key.clone().unwrap_or_else(|| {
            tracing::warn!("API_KEY is not set; sending an empty X-Api-Key header");
            String::new()
        });

        Self {
            base_url,
            api_key,
            length: cli.length,
            timeout: cli.timeout_secs.map(Duration::from_secs),
        }
    }

    /// Build the request URL for `length`
    pub fn request_url(&self, length: RequestedLength) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}length={}", self.base_url, separator, length)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "******" })
            .field("length", &self.length)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn settings(base_url: &str) -> Settings {
        Settings {
            base_url: base_url.to_string(),
            api_key: "secret-key".to_string(),
            length: RequestedLength::DEFAULT,
            timeout: None,
        }
    }

    #[test]
    fn test_request_url_appends_length() {
        let s = settings("https://api.example.com/v1/passwordgenerator");
        let len = RequestedLength::new(24).unwrap();
        assert_eq!(
            s.request_url(len),
            "https://api.example.com/v1/passwordgenerator?length=24"
        );
    }

    #[test]
    fn test_request_url_with_existing_query() {
        let s = settings("https://api.example.com/gen?format=json");
        let len = RequestedLength::new(8).unwrap();
        assert_eq!(s.request_url(len), "https://api.example.com/gen?format=json&length=8");
    }

    #[test]
    fn test_request_url_with_empty_base() {
        let s = settings("");
        assert_eq!(s.request_url(RequestedLength::DEFAULT), "?length=16");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let s = settings("https://api.example.com");
        let debug = format!("{:?}", s);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("******"));
    }

    #[test]
    fn test_flags_fill_settings() {
        let cli = Cli::try_parse_from([
            "passfetch",
            "--base-url",
            "https://flag.example.com",
            "--api-key",
            "flag-key",
            "--length",
            "32",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        let s = Settings::from_cli(&cli);
        assert_eq!(s.base_url, "https://flag.example.com");
        assert_eq!(s.api_key, "flag-key");
        assert_eq!(s.length.get(), 32);
        assert_eq!(s.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_missing_values_become_empty() {
        let mut cli = Cli::try_parse_from(["passfetch"]).unwrap();
        cli.base_url = None;
        cli.api_key = None;

        let s = Settings::from_cli(&cli);
        assert_eq!(s.base_url, "");
        assert_eq!(s.api_key, "");
        assert_eq!(s.length, RequestedLength::DEFAULT);
        assert_eq!(s.timeout, None);
    }

    #[test]
    fn test_environment_fallbacks() {
        use clap::CommandFactory;
        use std::ffi::OsStr;

        let cmd = Cli::command();
        let env_of = |id: &str| {
            cmd.get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(OsStr::to_os_string)
        };
        assert_eq!(env_of("base_url").as_deref(), Some(OsStr::new("BASE_URL")));
        assert_eq!(env_of("api_key").as_deref(), Some(OsStr::new("API_KEY")));
    }

    #[test]
    fn test_zero_length_is_rejected() {
        assert!(Cli::try_parse_from(["passfetch", "--length", "0"]).is_err());
    }
}
