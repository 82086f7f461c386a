//! HTTP client for the HireWave registration endpoint

use super::error::{extract_error_message, SubmitError};
use super::traits::RegistrationApi;
use crate::state::FormData;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Path of the registration endpoint, relative to the API base URL
const REGISTER_PATH: &str = "/auth/register";

/// Body of a successful registration. `data` is accepted but not used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Client for the HireWave backend
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (e.g. `http://127.0.0.1:5000/api`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("hirewave-register/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), REGISTER_PATH)
    }
}

#[async_trait]
impl RegistrationApi for ApiClient {
    async fn register(&self, form: &FormData) -> Result<RegisterResponse, SubmitError> {
        let url = self.register_url();
        tracing::info!(%url, email = %form.email, "submitting registration");

        let response = self.http.post(&url).json(form).send().await?;
        let status = response.status();
        // A body we cannot read is treated like an empty one
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let parsed = if body.trim().is_empty() {
            RegisterResponse::default()
        } else {
            serde_json::from_str(&body).unwrap_or_else(|e| {
                tracing::debug!("ignoring unparseable registration response: {e}");
                RegisterResponse::default()
            })
        };
        tracing::debug!(%status, has_data = parsed.data.is_some(), "registration accepted");
        Ok(parsed)
    }
}
