use crate::connectors::ContentGenerator;
use crate::db;
use crate::errors::ApiError;
use crate::forms;
use actix_web::{post, web, HttpResponse, Result};
use serde_valid::Validate;
use sqlx::SqlitePool;
use std::sync::Arc;

/// POST /generate-content
/// Asks the provider for marketing copy and records it in the history.
/// Nothing is written when generation fails.
#[tracing::instrument(
    name = "Generate content.",
    skip(form, generator, pool),
    fields(product_name = %form.product_name)
)]
#[post("/generate-content")]
pub async fn item(
    form: web::Json<forms::ProductRequest>,
    generator: web::Data<Arc<dyn ContentGenerator>>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = form.validate() {
        let errors = forms::describe_errors(&errors);
        tracing::debug!("Invalid data received {:?}", &errors);
        return Err(ApiError::Validation(errors));
    }
    let form = form.into_inner();

    let generated_text = generator
        .generate(&form.product_name, &form.product_description)
        .await?;

    // no connection is held while the provider call is in flight
    let mut session = db::begin(pool.get_ref())
        .await
        .map_err(ApiError::persistence("Error generating content"))?;

    let history = db::history::insert(&mut session, form.into_history(generated_text))
        .await
        .map_err(ApiError::persistence("Error generating content"))?;

    session
        .commit()
        .await
        .map_err(ApiError::persistence("Error generating content"))?;

    tracing::info!("Saved {}", history);

    Ok(HttpResponse::Ok().json(forms::MarketingText {
        marketing_text: history.generated_content,
    }))
}
