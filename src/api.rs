//! Password API client

use async_trait::async_trait;

use crate::error::{PassfetchError, Result};
use crate::password::{PasswordResult, RequestedLength};
use crate::settings::Settings;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Something that can hand out generated passwords
#[async_trait]
pub trait PasswordSource: Send + Sync {
    /// Request one password of the given length. Exactly one request per
    /// call, no retries.
    async fn fetch(&self, length: RequestedLength) -> Result<PasswordResult>;
}

pub struct ApiClient {
    client: reqwest::Client,
    settings: Settings,
}

impl ApiClient {
    pub fn new(settings: Settings) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PassfetchError::Client(e.to_string()))?;
        Ok(Self::with_client(settings, client))
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(settings: Settings, client: reqwest::Client) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl PasswordSource for ApiClient {
    async fn fetch(&self, length: RequestedLength) -> Result<PasswordResult> {
        let url = self.settings.request_url(length);

        tracing::debug!("Requesting password of length {} from: {}", length, url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.settings.api_key)
            .send()
            .await
            .map_err(|e| PassfetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Password API returned HTTP {}", status);
            return Err(PassfetchError::Request {
                status: status.as_u16(),
                status_text: status_text(&response),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PassfetchError::Network(e.to_string()))?;

        let result = PasswordResult::decode(&body)?;
        tracing::debug!(
            "Received password ({} chars)",
            result.random_password.chars().count()
        );
        Ok(result)
    }
}

/// Reason phrase as sent by the server. hyper only keeps the phrase when it
/// differs from the registered one, so fall back to that.
fn status_text(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
        .or_else(|| response.status().canonical_reason().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone)]
    pub enum FakeOutcome {
        Password(String),
        Status(u16, &'static str),
        Network(String),
        Panic,
    }

    /// In-memory password source that records every request
    pub struct FakeSource {
        outcome: Mutex<FakeOutcome>,
        calls: Mutex<Vec<RequestedLength>>,
    }

    impl FakeSource {
        pub fn new(outcome: FakeOutcome) -> Self {
            Self {
                outcome: Mutex::new(outcome),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn password(password: &str) -> Self {
            Self::new(FakeOutcome::Password(password.to_string()))
        }

        pub fn set_outcome(&self, outcome: FakeOutcome) {
            *self.outcome.lock().unwrap() = outcome;
        }

        pub fn calls(&self) -> Vec<RequestedLength> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PasswordSource for FakeSource {
        async fn fetch(&self, length: RequestedLength) -> Result<PasswordResult> {
            self.calls.lock().unwrap().push(length);
            let outcome = self.outcome.lock().unwrap().clone();
            match outcome {
                FakeOutcome::Password(random_password) => Ok(PasswordResult { random_password }),
                FakeOutcome::Status(status, text) => Err(PassfetchError::Request {
                    status,
                    status_text: text.to_string(),
                }),
                FakeOutcome::Network(message) => Err(PassfetchError::Network(message)),
                FakeOutcome::Panic => panic!("password source blew up"),
            }
        }
    }
}
