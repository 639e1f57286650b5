/// HTTP client for the static JSON documents behind the portfolio page.
///
/// Every request carries `Cache-Control: no-store` so a load always sees the
/// origin's current content, never a cached copy. Failures are not retried;
/// the caller decides what to substitute.
use std::time::Duration;

use reqwest::header::CACHE_CONTROL;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::LoadError;

#[derive(Clone, Debug)]
pub struct DocumentClientConfig {
    /// Origin the document paths are resolved against, e.g.
    /// "https://example.github.io/portfolio".
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct DocumentClient {
    base_url: String,
    http: reqwest::Client,
}

impl DocumentClient {
    pub fn new(config: DocumentClientConfig) -> Result<Self, LoadError> {
        let http = reqwest::Client::builder()
            .user_agent("folio/folio-page")
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a JSON document at `path` (relative to the base URL) and decode
    /// it into `T`.
    ///
    /// A non-success status or a body that does not decode is a `LoadError`;
    /// the three failure kinds (transport, status, decode) are never retried.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, "fetching document");

        let resp = self
            .http
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status { url, status });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| LoadError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: &str) -> DocumentClient {
        DocumentClient::new(DocumentClientConfig {
            base_url: uri.to_string(),
            timeout: Duration::from_secs(5),
        })
        .expect("client builds")
    }

    #[test]
    fn trailing_slash_in_base_url_is_trimmed() {
        let c = client("http://localhost:9/");
        assert_eq!(c.base_url(), "http://localhost:9");
    }

    #[tokio::test]
    async fn decodes_a_json_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/assets/data/projects.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"title": "Alpha"}])),
            )
            .mount(&server)
            .await;

        let items: Vec<serde_json::Value> = client(&server.uri())
            .get_json("assets/data/projects.json")
            .await
            .expect("load succeeds");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Alpha");
    }

    #[tokio::test]
    async fn bypasses_caches_on_every_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc.json"))
            .and(header("cache-control", "no-store"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let items: Vec<serde_json::Value> = client(&server.uri())
            .get_json("doc.json")
            .await
            .expect("load succeeds");
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_load_error() {
        // Unmatched requests get a 404 from the mock server.
        let server = MockServer::start().await;
        let err = client(&server.uri())
            .get_json::<Vec<serde_json::Value>>("missing.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Status { .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json {"))
            .mount(&server)
            .await;

        let err = client(&server.uri())
            .get_json::<Vec<serde_json::Value>>("doc.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }
}
