use copywriter::configuration::get_configuration;
use copywriter::connectors;
use copywriter::db;
use copywriter::startup::run;
use copywriter::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("copywriter".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(database_url = %settings.database.url, "Connecting to SQLite");

    let pool = db::connect(&settings.database)
        .await
        .expect("Failed to connect to database.");
    db::initialize_schema(&pool)
        .await
        .expect("Failed to initialize database schema.");

    let generator = connectors::init_content_generator(&settings.generator);

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)
        .unwrap_or_else(|err| panic!("failed to bind to {}: {}", address, err));

    run(listener, pool, generator, settings).await?.await
}
