use crate::server::error::{config::ConfigError, AppError};

const STRIPE_API_URL: &str = "https://api.stripe.com/v1";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60 * 24;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 60 * 60 * 24 * 30;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    /// Public base URL of the frontend, used in onboarding redirects and
    /// email links.
    pub app_url: String,

    pub jwt_access_secret: String,
    pub jwt_refresh_secret: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,

    pub smtp_host: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub mail_from: String,

    pub stripe_secret_key: String,
    pub stripe_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            app_url: std::env::var("APP_URL")
                .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?,
            jwt_access_secret: std::env::var("JWT_ACCESS_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_ACCESS_SECRET".to_string()))?,
            jwt_refresh_secret: std::env::var("JWT_REFRESH_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_REFRESH_SECRET".to_string()))?,
            access_token_ttl_secs: std::env::var("ACCESS_TOKEN_TTL_SECS")
                .ok()
                .and_then(|ttl| ttl.parse().ok())
                .unwrap_or(DEFAULT_ACCESS_TOKEN_TTL_SECS),
            refresh_token_ttl_secs: std::env::var("REFRESH_TOKEN_TTL_SECS")
                .ok()
                .and_then(|ttl| ttl.parse().ok())
                .unwrap_or(DEFAULT_REFRESH_TOKEN_TTL_SECS),
            smtp_host: std::env::var("SMTP_HOST")
                .map_err(|_| ConfigError::MissingEnvVar("SMTP_HOST".to_string()))?,
            smtp_username: std::env::var("SMTP_USERNAME")
                .map_err(|_| ConfigError::MissingEnvVar("SMTP_USERNAME".to_string()))?,
            smtp_password: std::env::var("SMTP_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("SMTP_PASSWORD".to_string()))?,
            mail_from: std::env::var("MAIL_FROM")
                .map_err(|_| ConfigError::MissingEnvVar("MAIL_FROM".to_string()))?,
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("STRIPE_SECRET_KEY".to_string()))?,
            stripe_api_url: STRIPE_API_URL.to_string(),
        })
    }
}
