//! `GET /health` body.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// The store is the only dependency, so it is the only check.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreCheck,
}

#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub status: StoreStatus,
    pub message: String,
}

impl HealthResponse {
    /// Derives the overall status from the store check.
    pub fn from_store(store: StoreCheck) -> Self {
        let status = match store.status {
            StoreStatus::Ok => ServiceStatus::Healthy,
            StoreStatus::Error => ServiceStatus::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { store },
        }
    }
}
