use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::{endpoint, send_json};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResp {
    pub api: String,
    // "connected", "not configured" or "error: <reason>" from the bucket probe
    pub storage: String,
    pub timestamp: String,
}

impl HealthResp {
    pub fn is_healthy(&self) -> bool {
        self.api == "healthy" && self.storage == "connected"
    }
}

pub async fn get_health() -> anyhow::Result<HealthResp> {
    send_json(Request::get(&endpoint("/health"))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_must_be_healthy_too() {
        let mut health: HealthResp = serde_json::from_str(
            r#"{"api": "healthy", "storage": "connected", "timestamp": "2024-05-01T09:30:00"}"#,
        )
        .unwrap();
        assert!(health.is_healthy());

        health.storage = String::from("not configured");
        assert!(!health.is_healthy());
    }
}
