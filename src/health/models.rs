use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: ComponentStatus,
    pub message: Option<String>,
    pub response_time_ms: Option<u64>,
    pub last_checked: DateTime<Utc>,
}

impl ComponentHealth {
    fn with_status(
        status: ComponentStatus,
        message: Option<String>,
        response_time_ms: Option<u64>,
    ) -> Self {
        Self {
            status,
            message,
            response_time_ms,
            last_checked: Utc::now(),
        }
    }

    pub fn healthy(response_time_ms: Option<u64>) -> Self {
        Self::with_status(ComponentStatus::Healthy, None, response_time_ms)
    }

    pub fn degraded(message: String, response_time_ms: Option<u64>) -> Self {
        Self::with_status(ComponentStatus::Degraded, Some(message), response_time_ms)
    }

    pub fn unhealthy(error: String) -> Self {
        Self::with_status(ComponentStatus::Unhealthy, Some(error), None)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: ComponentStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: HashMap<String, ComponentHealth>,
}

impl HealthCheckResponse {
    pub fn new(version: String, uptime_seconds: u64) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            timestamp: Utc::now(),
            version,
            uptime_seconds,
            components: HashMap::new(),
        }
    }

    /// Overall status is the worst status of any component
    pub fn add_component(&mut self, name: &str, health: ComponentHealth) {
        match health.status {
            ComponentStatus::Unhealthy => self.status = ComponentStatus::Unhealthy,
            ComponentStatus::Degraded if self.status == ComponentStatus::Healthy => {
                self.status = ComponentStatus::Degraded
            }
            _ => {}
        }
        self.components.insert(name.to_string(), health);
    }

    pub fn is_unhealthy(&self) -> bool {
        self.status == ComponentStatus::Unhealthy
    }
}
