use crate::server::{config::Config, error::AppError};

/// Opens the database pool and brings the schema up to date.
///
/// All pending migrations run before the connection is handed to the router,
/// so no handler ever sees a partially migrated schema. Query logging is
/// disabled; request-level tracing covers the interesting spans.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected pool with migrations applied
/// - `Err(AppError)` - Connection or migration failure
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the shared HTTP client for external API requests.
///
/// Redirects are disabled so that calls to external APIs (Stripe) cannot be
/// silently routed elsewhere.
///
/// # Returns
/// - `reqwest::Client` - Configured HTTP client
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}
