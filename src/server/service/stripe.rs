//! Minimal Stripe Connect API client.
//!
//! Covers the three calls the onboarding flow needs: creating an Express
//! account, retrieving its verification state, and minting a fresh
//! onboarding link. Requests are form-encoded with bearer auth, matching
//! Stripe's v1 API.

use serde::Deserialize;

use crate::server::error::AppError;

/// A connected account's verification state, as returned by Stripe.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeAccount {
    pub id: String,
    #[serde(default)]
    pub charges_enabled: bool,
    #[serde(default)]
    pub details_submitted: bool,
    #[serde(default)]
    pub requirements: StripeRequirements,
}

/// Outstanding verification requirements on a connected account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StripeRequirements {
    #[serde(default)]
    pub currently_due: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AccountLink {
    url: String,
}

/// HTTP client for the Stripe Connect endpoints the platform uses.
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    api_url: String,
}

impl StripeClient {
    /// Creates a new StripeClient instance.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `secret_key` - Stripe secret API key
    /// - `api_url` - Stripe API base URL (overridable for tests)
    ///
    /// # Returns
    /// - `StripeClient` - New client instance
    pub fn new(http: reqwest::Client, secret_key: &str, api_url: &str) -> Self {
        Self {
            http,
            secret_key: secret_key.to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a new Express connected account.
    ///
    /// # Returns
    /// - `Ok(StripeAccount)` - The created account
    /// - `Err(AppError)` - Transport failure or Stripe rejection
    pub async fn create_express_account(&self) -> Result<StripeAccount, AppError> {
        let response = self
            .http
            .post(format!("{}/accounts", self.api_url))
            .bearer_auth(&self.secret_key)
            .form(&[("type", "express")])
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Retrieves a connected account's current verification state.
    ///
    /// # Arguments
    /// - `account_id` - The connected account id
    ///
    /// # Returns
    /// - `Ok(StripeAccount)` - The account as Stripe sees it now
    /// - `Err(AppError)` - Transport failure or Stripe rejection
    pub async fn retrieve_account(&self, account_id: &str) -> Result<StripeAccount, AppError> {
        let response = self
            .http
            .get(format!("{}/accounts/{}", self.api_url, account_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Mints a single-use onboarding link for a connected account.
    ///
    /// # Arguments
    /// - `account_id` - The connected account id
    /// - `refresh_url` - Where Stripe sends the agent if the link expires
    /// - `return_url` - Where Stripe sends the agent after onboarding
    ///
    /// # Returns
    /// - `Ok(String)` - The onboarding URL
    /// - `Err(AppError)` - Transport failure or Stripe rejection
    pub async fn create_account_link(
        &self,
        account_id: &str,
        refresh_url: &str,
        return_url: &str,
    ) -> Result<String, AppError> {
        let response = self
            .http
            .post(format!("{}/account_links", self.api_url))
            .bearer_auth(&self.secret_key)
            .form(&[
                ("account", account_id),
                ("refresh_url", refresh_url),
                ("return_url", return_url),
                ("type", "account_onboarding"),
            ])
            .send()
            .await?;

        let link: AccountLink = Self::parse(response).await?;
        Ok(link.url)
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::InternalError(format!(
                "Stripe API returned {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}
