use crate::models;
use sqlx::SqliteConnection;
use tracing::Instrument;

/// Result of removing a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

pub async fn create_table(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    let query_span = tracing::info_span!("Ensure history table exists.");
    async {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_name TEXT NOT NULL,
                product_description TEXT NOT NULL,
                generated_content TEXT NOT NULL,
                created_at DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            )
            "#,
        )
        .execute(&mut *conn)
        .await?;

        sqlx::query(
            r#"CREATE INDEX IF NOT EXISTS ix_history_product_name ON history (product_name)"#,
        )
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
    .instrument(query_span)
    .await
}

pub async fn insert(
    conn: &mut SqliteConnection,
    history: models::NewHistory,
) -> Result<models::History, sqlx::Error> {
    let query_span = tracing::info_span!("Saving generated content into the database.");
    sqlx::query_as::<_, models::History>(
        r#"
        INSERT INTO history (product_name, product_description, generated_content)
        VALUES (?, ?, ?)
        RETURNING id, product_name, product_description, generated_content, created_at
        "#,
    )
    .bind(history.product_name)
    .bind(history.product_description)
    .bind(history.generated_content)
    .fetch_one(conn)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert history: {:?}", err);
        err
    })
}

pub async fn fetch(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<models::History>, sqlx::Error> {
    tracing::info!("Fetch history {}", id);
    sqlx::query_as::<_, models::History>(
        r#"
        SELECT id, product_name, product_description, generated_content, created_at
        FROM history
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch history, error: {:?}", err);
        err
    })
}

/// Every row, most recent first
pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<models::History>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch history, newest first.");
    sqlx::query_as::<_, models::History>(
        r#"
        SELECT id, product_name, product_description, generated_content, created_at
        FROM history
        ORDER BY id DESC
        "#,
    )
    .fetch_all(conn)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch history, error: {:?}", err);
        err
    })
}

pub async fn delete_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<DeleteOutcome, sqlx::Error> {
    let query_span = tracing::info_span!("Delete history item.", id);
    sqlx::query(r#"DELETE FROM history WHERE id = ?"#)
        .bind(id)
        .execute(conn)
        .instrument(query_span)
        .await
        .map(|result| match result.rows_affected() {
            0 => DeleteOutcome::NotFound,
            _ => DeleteOutcome::Deleted,
        })
        .map_err(|err| {
            tracing::error!("Failed to delete history {}: {:?}", id, err);
            err
        })
}

/// Removes every row and returns how many were removed. Runs on the caller's
/// session, so nothing is visible to others until it commits.
pub async fn delete_all(conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let query_span = tracing::info_span!("Clear history.");
    sqlx::query(r#"DELETE FROM history"#)
        .execute(conn)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to clear history: {:?}", err);
            err
        })
}
