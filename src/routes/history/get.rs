use crate::db;
use crate::errors::ApiError;
use actix_web::{get, web, HttpResponse, Result};
use sqlx::SqlitePool;

/// GET /history
/// Every stored generation, newest first. No pagination.
#[tracing::instrument(name = "List history.", skip(pool))]
#[get("")]
pub async fn list(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let mut session = db::begin(pool.get_ref())
        .await
        .map_err(ApiError::persistence("Could not fetch history"))?;

    let items = db::history::list_all(&mut session)
        .await
        .map_err(ApiError::persistence("Could not fetch history"))?;

    session
        .commit()
        .await
        .map_err(ApiError::persistence("Could not fetch history"))?;

    Ok(HttpResponse::Ok().json(items))
}
