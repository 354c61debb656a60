use super::models::{ComponentHealth, HealthCheckResponse};
use crate::connectors::ContentGenerator;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);
const SLOW_RESPONSE_THRESHOLD_MS: u64 = 1000;

pub struct HealthChecker {
    pool: SqlitePool,
    generator: Arc<dyn ContentGenerator>,
    start_time: Instant,
}

impl HealthChecker {
    pub fn new(pool: SqlitePool, generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            pool,
            generator,
            start_time: Instant::now(),
        }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let uptime = self.start_time.elapsed().as_secs();
        let mut response = HealthCheckResponse::new(version, uptime);

        let db_health = timeout(CHECK_TIMEOUT, self.check_database())
            .await
            .unwrap_or_else(|_| ComponentHealth::unhealthy("Timeout".to_string()));

        response.add_component("database", db_health);
        response.add_component("generator", self.check_generator());

        response
    }

    #[tracing::instrument(name = "Check database health", skip(self))]
    async fn check_database(&self) -> ComponentHealth {
        let start = Instant::now();

        match sqlx::query("SELECT 1 FROM history LIMIT 1")
            .fetch_optional(&self.pool)
            .await
        {
            Ok(_) => {
                let elapsed = start.elapsed().as_millis() as u64;
                if elapsed > SLOW_RESPONSE_THRESHOLD_MS {
                    ComponentHealth::degraded(
                        "Database responding slowly".to_string(),
                        Some(elapsed),
                    )
                } else {
                    ComponentHealth::healthy(Some(elapsed))
                }
            }
            Err(e) => {
                tracing::error!("Database health check failed: {:?}", e);
                ComponentHealth::unhealthy(format!("Database error: {}", e))
            }
        }
    }

    /// Reports configuration only, the provider is not called
    fn check_generator(&self) -> ComponentHealth {
        match self.generator.provider() {
            "mock" => ComponentHealth::degraded(
                "Content generator not configured".to_string(),
                None,
            ),
            _ => ComponentHealth::healthy(None),
        }
    }
}
