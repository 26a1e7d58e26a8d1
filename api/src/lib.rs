use constcat::concat;
use gloo_net::http::{RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};

pub mod health;
pub mod labeling;
pub mod recording;
pub mod search;
pub mod upload;

// every backend route hangs off of this prefix, and the webapp is served
// from the same origin so relative urls are enough
pub const API_ROOT: &str = "/api";
pub const API_VERSION: &str = "v1";
pub const API_BASE: &str = concat!(API_ROOT, "/", API_VERSION);

pub(crate) fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

// the backend reports failures as {"detail": "..."}, but a proxy in front
// of it may hand back plain text or html instead
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

pub(crate) fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => format!("{status}: {}", err.detail),
        Err(_) if body.trim().is_empty() => format!("{status}: empty response"),
        Err(_) => format!("{status}: {}", body.trim()),
    }
}

pub(crate) async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> anyhow::Result<T> {
    read_json(req.send().await?).await
}

// for requests that carry a body, which gloo builds into a Request up front
pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> anyhow::Result<T> {
    tracing::debug!({ url = %resp.url(), status = resp.status() }, "api response");

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        let status = resp.status();
        Err(anyhow::Error::msg(error_message(status, &resp.text().await?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_versioned() {
        assert_eq!(API_BASE, "/api/v1");
        assert_eq!(endpoint("/recordings/7"), "/api/v1/recordings/7");
    }

    #[test]
    fn error_message_prefers_detail() {
        assert_eq!(
            error_message(404, r#"{"detail": "Recording not found"}"#),
            "404: Recording not found"
        );
        assert_eq!(error_message(502, "Bad Gateway\n"), "502: Bad Gateway");
        assert_eq!(error_message(500, "  "), "500: empty response");
    }
}
