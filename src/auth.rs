//! IBM IAM credential provider
//!
//! Exchanges a long-lived API key for a short-lived bearer token. The token is
//! fetched fresh for every generation call and held only in memory.

use crate::errors::{AdvisorError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// IBM Cloud identity token endpoint
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Fixed OAuth grant type for API-key exchange
const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Request timeout for the token exchange
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// IAM token exchange client
#[derive(Debug, Clone)]
pub struct IamClient {
    client: Client,
    token_url: String,
}

impl IamClient {
    /// Create a client against the production IAM endpoint
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_IAM_URL)
    }

    /// Create a client against a custom token endpoint (used by tests)
    pub fn with_endpoint(token_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AdvisorError::Http)?;

        Ok(Self {
            client,
            token_url: token_url.into(),
        })
    }

    /// Exchange an API key for a bearer token.
    ///
    /// Any non-200 status, or a 200 body without an `access_token` field, is an
    /// `AdvisorError::Auth` carrying the response body for diagnostics. The
    /// caller treats that as terminal for the current request; there is no retry.
    pub async fn get_token(&self, api_key: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.token_url)
            .form(&[("apikey", api_key), ("grant_type", GRANT_TYPE)])
            .send()
            .await
            .map_err(AdvisorError::Http)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.as_u16() != 200 {
            return Err(AdvisorError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|_| AdvisorError::Auth {
                status: status.as_u16(),
                body: body.clone(),
            })?;

        Ok(token.access_token)
    }

    /// Token endpoint URL this client posts to
    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

/// Successful IAM response; fields beyond the token are ignored
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}
