//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for issuing and verifying JWTs
//! - Mailer for outbound transactional email
//! - Stripe client for Connect onboarding and payment lookups
//! - Application URL for generating links

use sea_orm::DatabaseConnection;

use super::config::Config;
use super::error::AppError;
use super::service::{mail::Mailer, stripe::StripeClient, token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds small owned secrets
/// - `Mailer` wraps an async SMTP transport with an internal pool
/// - `StripeClient` wraps a `reqwest::Client` which uses an `Arc` internally
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Token service for issuing and verifying access and refresh tokens.
    pub tokens: TokenService,

    /// Mailer for sending OTP and notification emails over SMTP.
    pub mailer: Mailer,

    /// Stripe API client for Connect account onboarding and payments.
    pub stripe: StripeClient,

    /// Application base URL for generating links.
    ///
    /// Used to construct full URLs for Stripe onboarding redirects and
    /// email links.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client used for Stripe API requests
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `Ok(AppState)` - Initialized application state ready for use
    /// - `Err(AppError)` - The SMTP relay hostname is invalid
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        config: Config,
    ) -> Result<Self, AppError> {
        Ok(Self {
            db,
            tokens: TokenService::new(
                &config.jwt_access_secret,
                &config.jwt_refresh_secret,
                config.access_token_ttl_secs,
                config.refresh_token_ttl_secs,
            ),
            mailer: Mailer::new(
                &config.smtp_host,
                &config.smtp_username,
                &config.smtp_password,
                &config.mail_from,
            )?,
            stripe: StripeClient::new(
                http_client,
                &config.stripe_secret_key,
                &config.stripe_api_url,
            ),
            app_url: config.app_url,
        })
    }
}
