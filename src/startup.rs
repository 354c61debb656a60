use crate::configuration::{CorsSettings, Settings};
use crate::connectors::ContentGenerator;
use crate::errors::ApiError;
use crate::health::HealthChecker;
use crate::helpers::ErrorResponse;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpResponse, HttpServer};
use sqlx::SqlitePool;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pool: SqlitePool,
    generator: web::Data<Arc<dyn ContentGenerator>>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let health_checker = Arc::new(HealthChecker::new(
        pool.clone(),
        generator.get_ref().clone(),
    ));
    let health_checker = web::Data::new(health_checker);

    let pool = web::Data::new(pool);
    let cors_settings = settings.cors;

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let api_error = match err {
            error::JsonPayloadError::Deserialize(err) => ApiError::Validation(format!(
                "Invalid request body at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            )),
            error::JsonPayloadError::ContentType => ApiError::Validation(
                "Expected a request body with content type application/json".to_string(),
            ),
            err @ (error::JsonPayloadError::OverflowKnownLength { .. }
            | error::JsonPayloadError::Overflow { .. }) => ApiError::Validation(err.to_string()),
            err => ApiError::Unexpected(anyhow::anyhow!("Failed to read request body: {}", err)),
        };
        api_error.into()
    });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        ApiError::Validation(format!("Invalid path parameter: {}", err)).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors(&cors_settings))
            .service(routes::index)
            .service(web::scope("/health_check").service(routes::health_check))
            .service(routes::content::item)
            .service(
                web::scope("/history")
                    .service(routes::history::list)
                    .service(routes::history::clear)
                    .service(routes::history::item),
            )
            .default_service(web::to(not_found))
            .app_data(json_config.clone())
            .app_data(path_config.clone())
            .app_data(pool.clone())
            .app_data(generator.clone())
            .app_data(health_checker.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Allow-listed origins only; any method and header from those origins
fn cors(settings: &CorsSettings) -> Cors {
    settings
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| {
            cors.allowed_origin(origin.trim_end_matches('/'))
        })
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

async fn not_found() -> HttpResponse {
    ErrorResponse::not_found("Not Found")
}
