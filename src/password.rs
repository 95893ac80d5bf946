//! Password request and response types

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PassfetchError, Result};

/// Length requested from the password API. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestedLength(u32);

impl RequestedLength {
    pub const DEFAULT: RequestedLength = RequestedLength(16);
    pub const MIN: RequestedLength = RequestedLength(1);

    pub fn new(value: u32) -> Option<Self> {
        (value >= Self::MIN.0).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Step by `delta`, clamping at the minimum
    pub fn step(self, delta: i64) -> Self {
        let next = (i64::from(self.0) + delta).clamp(i64::from(Self::MIN.0), i64::from(u32::MAX));
        Self(next as u32)
    }
}

impl Default for RequestedLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for RequestedLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestedLength {
    type Err = PassfetchError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PassfetchError::InvalidLength {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        // u32::from_str accepts a leading '+', the field does not
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(invalid)
    }
}

/// Body returned by the password API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PasswordResult {
    pub random_password: String,
}

impl PasswordResult {
    /// Decode a response body. Missing or mistyped fields are errors.
    pub fn decode(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_lengths() {
        assert_eq!("1".parse::<RequestedLength>().unwrap().get(), 1);
        assert_eq!("16".parse::<RequestedLength>().unwrap().get(), 16);
        assert_eq!(" 128 ".parse::<RequestedLength>().unwrap().get(), 128);
    }

    #[test]
    fn test_parse_rejects_invalid_lengths() {
        for input in ["", "0", "-3", "+4", "abc", "1.5", "99999999999"] {
            let err = input.parse::<RequestedLength>().unwrap_err();
            assert!(
                matches!(err, PassfetchError::InvalidLength { .. }),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_step_clamps_at_minimum() {
        let len = RequestedLength::new(2).unwrap();
        assert_eq!(len.step(-1).get(), 1);
        assert_eq!(len.step(-10).get(), 1);
        assert_eq!(len.step(3).get(), 5);
    }

    #[test]
    fn test_decode_password_body() {
        let result = PasswordResult::decode(r#"{"random_password":"abc123"}"#).unwrap();
        assert_eq!(result.random_password, "abc123");
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let result =
            PasswordResult::decode(r#"{"random_password":"xyz","length":3}"#).unwrap();
        assert_eq!(result.random_password, "xyz");
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(PasswordResult::decode(r#"{"password":"abc"}"#).is_err());
        assert!(PasswordResult::decode(r#"{"random_password":42}"#).is_err());
        assert!(PasswordResult::decode("not json").is_err());
    }
}
