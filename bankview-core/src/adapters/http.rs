//! Account API HTTP client
//!
//! Talks to the accounts endpoint:
//! `GET {base_url}/users/{userId}/accounts` returning
//! `{ "accounts": [ { "id", "main", "balance" } ] }`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::domain::result::{Error as DomainError, Result as DomainResult};
use crate::ports::{AccountClient, RawResponse};
use crate::wire::AccountsWire;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-api-key";

/// HTTP implementation of [`AccountClient`]
#[derive(Debug)]
pub struct HttpAccountClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpAccountClient {
    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, config.api_key.as_deref(), config.timeout)
    }

    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> Result<Self> {
        if let Some(key) = api_key {
            if key.is_empty() {
                anyhow::bail!("API key cannot be empty");
            }
        }

        if timeout.is_zero() {
            anyhow::bail!("Request timeout must be greater than zero");
        }

        let trimmed = base_url.trim_end_matches('/');
        let base_url =
            Url::parse(trimmed).with_context(|| format!("Invalid API base URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API base URL cannot carry a path: {}", base_url);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.map(str::to_string),
            timeout,
        })
    }

    /// `{base}/users/{user_id}/accounts`, with `user_id` encoded as one segment
    fn accounts_url(&self, user_id: &str) -> DomainResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::config(format!("Invalid API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["users", user_id, "accounts"]);
        Ok(url)
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            DomainError::network(format!(
                "Connection timed out after {} seconds",
                self.timeout.as_secs()
            ))
        } else if error.is_connect() {
            DomainError::network(format!("Unable to connect to {}", self.base_url))
        } else {
            DomainError::network(format!("Account request failed: {}", error))
        }
    }
}

#[async_trait]
impl AccountClient for HttpAccountClient {
    async fn get_user_account(&self, user_id: &str) -> DomainResult<RawResponse> {
        let url = self.accounts_url(user_id)?;

        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "account request answered");

        // Only successful replies carry a body
        let body = if status.is_success() {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| self.map_request_error(e))?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                None
            } else {
                Some(AccountsWire::from_slice(&bytes)?)
            }
        } else {
            None
        };

        Ok(RawResponse::new(Some(status.as_u16()), body))
    }
}
