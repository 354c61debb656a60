pub mod history;

use crate::configuration::DatabaseSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::str::FromStr;
use std::time::Duration;

/// Unit of work bound to a single request.
///
/// Commit explicitly on success. Dropping an uncommitted session rolls it
/// back and hands the connection back to the pool, so every exit path of a
/// handler (error, early return, cancelled future) releases it.
pub type Session = Transaction<'static, Sqlite>;

pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, sqlx::Error> {
    let connect_options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_with(connect_options)
        .await
}

#[tracing::instrument(name = "Open database session.", skip(pool))]
pub async fn begin(pool: &SqlitePool) -> Result<Session, sqlx::Error> {
    pool.begin().await.map_err(|err| {
        tracing::error!("Failed to open session: {:?}", err);
        err
    })
}

/// Create the tables the service needs. Safe to run on every start.
pub async fn initialize_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut session = begin(pool).await?;
    history::create_table(&mut session).await?;
    session.commit().await
}
