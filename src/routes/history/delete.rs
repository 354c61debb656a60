use crate::db;
use crate::db::history::DeleteOutcome;
use crate::errors::ApiError;
use crate::helpers::MessageResponse;
use actix_web::{delete, web, HttpResponse, Result};
use sqlx::SqlitePool;

/// DELETE /history/{item_id}
#[tracing::instrument(name = "Delete history item.", skip(pool))]
#[delete("/{item_id}")]
pub async fn item(
    path: web::Path<(i64,)>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let (item_id,) = path.into_inner();

    let mut session = db::begin(pool.get_ref())
        .await
        .map_err(ApiError::persistence("Could not delete history item"))?;

    let outcome = db::history::delete_by_id(&mut session, item_id)
        .await
        .map_err(ApiError::persistence("Could not delete history item"))?;

    if outcome == DeleteOutcome::NotFound {
        // dropping the session rolls it back
        return Err(ApiError::NotFound("History item not found".to_string()));
    }

    session
        .commit()
        .await
        .map_err(ApiError::persistence("Could not delete history item"))?;

    tracing::info!("History item {} deleted", item_id);
    Ok(MessageResponse::ok("History item deleted successfully"))
}

/// DELETE /history
/// Removes every row in one transaction; a failure leaves all rows in place.
#[tracing::instrument(name = "Clear history.", skip(pool))]
#[delete("")]
pub async fn clear(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    const CONTEXT: &str = "An error occurred while clearing history";

    let mut session = db::begin(pool.get_ref())
        .await
        .map_err(ApiError::persistence(CONTEXT))?;

    let deleted = db::history::delete_all(&mut session)
        .await
        .map_err(ApiError::persistence(CONTEXT))?;

    session
        .commit()
        .await
        .map_err(ApiError::persistence(CONTEXT))?;

    tracing::info!("Cleared {} history items", deleted);
    Ok(MessageResponse::ok(format!(
        "Successfully deleted {} history items.",
        deleted
    )))
}
