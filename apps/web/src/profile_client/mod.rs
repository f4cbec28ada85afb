//! Profile client: the page's only way to reach the portfolio API.
//!
//! One request, no retries, no timeout. Failures are returned to the caller
//! as `FetchError`; deciding what to do with them is the renderer's job.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::profile::Profile;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error body the API sends alongside a 500.
#[derive(Debug, Deserialize)]
struct ServerError {
    message: String,
}

#[derive(Clone)]
pub struct ProfileClient {
    client: Client,
    url: String,
}

impl ProfileClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_profile(&self) -> Result<Profile, FetchError> {
        debug!("Fetching profile from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ServerError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let profile: Profile = serde_json::from_str(&body)?;

        debug!(
            "Fetched profile: skills={}, projects={}",
            profile.skills.len(),
            profile.projects.len()
        );
        Ok(profile)
    }
}
