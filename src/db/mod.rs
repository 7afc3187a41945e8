use crate::config::DatabaseConfig;
use log::info;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Builds the connection pool. Foreign keys are switched on for every
/// connection so that deleting a department or role cascades to its children.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

    // An in-memory database lives only as long as its connection.
    if config.is_in_memory() {
        pool_options = pool_options
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    pool_options.connect_with(options).await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = create_pool(&DatabaseConfig::in_memory())
        .await
        .expect("connect in-memory sqlite");
    run_migrations(&pool).await.expect("run migrations");
    pool
}
