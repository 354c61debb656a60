#![allow(dead_code)]

use actix_web::web;
use copywriter::configuration::Settings;
use copywriter::connectors::{ContentGenerator, MockContentGenerator};
use copywriter::db;
use copywriter::telemetry::{get_subscriber, init_subscriber};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::{Arc, Once};

pub const STUB_COPY: &str =
    "HEADLINE\nBody.\n- 🔥 Feature\n- 🔥 Feature\n- 🔥 Feature\nBuy now!";

static TRACING: Once = Once::new();

// cargo t -- --nocapture with TEST_LOG=1 to see the server logs
fn init_tracing() {
    TRACING.call_once(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::stdout));
        } else {
            init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink));
        }
    });
}

pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub generator: Arc<MockContentGenerator>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn generate(&self, product_name: &str, product_description: &str) -> reqwest::Response {
        self.client
            .post(&format!("{}/generate-content", &self.address))
            .json(&serde_json::json!({
                "product_name": product_name,
                "product_description": product_description,
            }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn history(&self) -> Vec<serde_json::Value> {
        let response = self
            .client
            .get(&format!("{}/history", &self.address))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(200, response.status().as_u16());

        response.json().await.expect("History is not a JSON array")
    }

    pub async fn delete_item(&self, item_id: &str) -> reqwest::Response {
        self.client
            .delete(&format!("{}/history/{}", &self.address, item_id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn clear_history(&self) -> reqwest::Response {
        self.client
            .delete(&format!("{}/history", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn row_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM history")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count history rows")
    }
}

/// Fresh in-memory database with the schema applied. The single pooled
/// connection is never recycled, otherwise the database would vanish.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    db::initialize_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    pool
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_generator(MockContentGenerator::responding(STUB_COPY)).await
}

// we have to run server in another task
pub async fn spawn_app_with_generator(generator: MockContentGenerator) -> TestApp {
    init_tracing();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let pool = test_pool().await;
    let generator = Arc::new(generator);
    let injected: Arc<dyn ContentGenerator> = generator.clone();

    let server = copywriter::startup::run(
        listener,
        pool.clone(),
        web::Data::new(injected),
        Settings::default(),
    )
    .await
    .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    TestApp {
        address,
        pool,
        generator,
        client: reqwest::Client::new(),
    }
}
