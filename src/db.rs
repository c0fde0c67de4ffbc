use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;

/// Startup liveness probe: open a pool, run a trivial query, close it.
///
/// The service holds no live database connection during normal operation;
/// a failure here is fatal and the process exits non-zero.
pub async fn check_connection(database_url: &str) -> Result<(), AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    pool.close().await;

    Ok(())
}
