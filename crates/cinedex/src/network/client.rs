//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::blocking::Client` that centralizes
//! User-Agent, timeouts, and bearer authentication.

use crate::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};
use crate::error::{AppError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a new client with default cinedex settings
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Create a client that sends `Authorization: Bearer <token>` on every request
    pub fn with_bearer(token: &str) -> Result<Self> {
        Self::build(Some(token))
    }

    fn build(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                AppError::Config("API token contains invalid header characters".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .build()?;
        Ok(Self { inner })
    }

    /// GET a URL and deserialize the JSON response
    ///
    /// Non-2xx responses become `AppError::Api` with the response body as
    /// the message.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.request_json(self.inner.get(url))
    }

    /// GET a URL with query parameters and deserialize the JSON response
    pub fn get_json_query<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        self.request_json(self.inner.get(url).query(params))
    }

    fn request_json<T: DeserializeOwned>(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<T> {
        let resp = request.send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                message: resp.text().unwrap_or_default(),
            });
        }
        Ok(resp.json::<T>()?)
    }
}
