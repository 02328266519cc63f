use thiserror::Error;

/// Environment configuration errors raised by `Config::from_env`.
///
/// Only genuinely required settings (database, secrets, SMTP, Stripe) produce
/// errors; optional values such as the port or token lifetimes fall back to
/// defaults instead. See `.env.example` for the full variable list.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
