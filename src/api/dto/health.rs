//! Health report returned by `GET /health`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: CheckStatus,
}

/// Outcome of probing one dependency.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl HealthResponse {
    /// Builds the report from the result of pinging the store.
    pub fn from_store(store_reachable: bool) -> Self {
        let store = if store_reachable {
            CheckStatus {
                status: "ok",
                message: None,
            }
        } else {
            CheckStatus {
                status: "error",
                message: Some("Store unreachable"),
            }
        };

        Self {
            status: if store_reachable { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { store },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.store.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_store_omits_message() {
        let json = serde_json::to_value(HealthResponse::from_store(true)).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["checks"]["store"]["status"], "ok");
        assert!(json["checks"]["store"].get("message").is_none());
    }

    #[test]
    fn test_unreachable_store_is_degraded() {
        let response = HealthResponse::from_store(false);

        assert!(!response.is_healthy());
        assert_eq!(response.status, "degraded");
        assert_eq!(response.checks.store.message, Some("Store unreachable"));
    }
}
