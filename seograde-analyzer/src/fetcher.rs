use crate::error::{AnalyzeError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const USER_AGENT: &str = concat!(
    "Seograde/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/trapdoorsec/seograde)"
);

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything the checks need to know about a fetched page. Built once per
/// request, dropped when the analysis is done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResult {
    pub status_code: u16,
    pub html_body: String,
    pub elapsed_time_ms: u64,
    pub byte_size: usize,
    pub final_url: String,
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout / 2)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Issue a single GET and time it from send to body fully read.
    ///
    /// Timeouts, connection failures, and non-2xx responses all come back as
    /// errors; callers fold them into an error-tagged report. No retries.
    pub async fn fetch(&self, url: &str) -> Result<FetchResult> {
        debug!("Fetching {}", url);

        let start = Instant::now();
        let response = self.client.get(url).send().await?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();

        if !response.status().is_success() {
            warn!("{} returned status {}", url, status_code);
            return Err(AnalyzeError::BadStatus(status_code));
        }

        let html_body = response.text().await?;
        let elapsed_time_ms = start.elapsed().as_millis() as u64;
        let byte_size = html_body.len();

        debug!(
            "Fetched {} ({} bytes in {}ms)",
            final_url, byte_size, elapsed_time_ms
        );

        Ok(FetchResult {
            status_code,
            html_body,
            elapsed_time_ms,
            byte_size,
            final_url,
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        let body = "<html><head><title>Hello</title></head><body>Hi</body></html>";

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_bytes(body.as_bytes()),
            )
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::new();
        let result = fetcher.fetch(&mock_server.uri()).await.unwrap();

        assert_eq!(result.status_code, 200);
        assert_eq!(result.html_body, body);
        assert_eq!(result.byte_size, body.len());
        assert!(result.final_url.starts_with(&mock_server.uri()));
    }

    #[tokio::test]
    async fn test_fetch_non_2xx_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::new();
        let err = fetcher.fetch(&mock_server.uri()).await.unwrap_err();

        assert!(matches!(err, AnalyzeError::BadStatus(404)));
    }

    #[tokio::test]
    async fn test_fetch_connection_failure_is_an_error() {
        // Nothing listens on port 1; the connect fails well inside the timeout.
        let fetcher = Fetcher::with_timeout(Duration::from_secs(2));
        let err = fetcher.fetch("http://127.0.0.1:1/").await.unwrap_err();

        assert!(matches!(err, AnalyzeError::HttpError(_)));
    }

    #[tokio::test]
    async fn test_fetch_measures_elapsed_time() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(b"<html></html>")
                    .set_delay(Duration::from_millis(50)),
            )
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::new();
        let result = fetcher.fetch(&mock_server.uri()).await.unwrap();

        assert!(result.elapsed_time_ms >= 50);
    }
}
