// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared HTTP client wrapping reqwest.
//!
//! One GET per call: no retries, no backoff. A non-200 status is returned
//! as a normal response and left for the caller to judge.

use crate::catalog::{REQUEST_TIMEOUT, USER_AGENT};
use crate::error::FetchError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Response from an HTTP GET request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Original requested URL.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Only an exact 200 counts as a usable page.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// HTTP client shared by every prober in a scan.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Client with the fixed browser user-agent and the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| FetchError::Transport {
                url: String::new(),
                source,
            })?;

        Ok(Self { client })
    }

    /// Perform a single GET request.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let r = self.client.get(url).send().await.map_err(transport)?;
        let status = r.status().as_u16();
        let final_url = r.url().to_string();
        let body = r.text().await.map_err(transport)?;

        debug!(url, final_url = %final_url, status, bytes = body.len(), "fetched");

        Ok(HttpResponse {
            url: url.to_string(),
            status,
            body,
        })
    }

    /// GET `url` and decode a 200 response body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let resp = self.get(url).await?;
        if !resp.is_ok() {
            return Err(FetchError::Status {
                url: resp.url,
                status: resp.status,
            });
        }
        serde_json::from_str(&resp.body).map_err(|source| FetchError::Decode {
            url: resp.url,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_http_client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_response_is_ok_only_for_200() {
        let mut resp = HttpResponse {
            url: "https://example.com".to_string(),
            status: 200,
            body: String::new(),
        };
        assert!(resp.is_ok());
        resp.status = 204;
        assert!(!resp.is_ok());
    }

    #[tokio::test]
    async fn test_get_sends_browser_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let resp = client.get(&format!("{}/page", server.uri())).await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, "hello");

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        let ua = received[0].headers.get("user-agent").unwrap();
        assert_eq!(ua.to_str().unwrap(), USER_AGENT);
    }

    #[tokio::test]
    async fn test_get_json_rejects_non_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let err = client
            .get_json::<serde_json::Value>(&format!("{}/api", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_get_json_reports_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let err = client
            .get_json::<serde_json::Value>(&format!("{}/api", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = HttpClient::with_timeout(Duration::from_secs(2)).unwrap();
        let err = client.get("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
