// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Source reachability check.

use crate::acquisition::http_client::HttpClient;
use crate::catalog::SourceCatalog;
use anyhow::{Context, Result};

/// Result of probing one source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reachability {
    /// Answered with 200.
    Ok(u16),
    /// Answered with some other status.
    Status(u16),
    /// No HTTP answer at all.
    Failed(String),
}

impl Reachability {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

/// GET every catalog URL once, in scan order.
pub async fn check_sources(
    client: &HttpClient,
    catalog: &SourceCatalog,
) -> Vec<(String, Reachability)> {
    let mut results = Vec::new();
    for url in catalog.all_urls() {
        let state = match client.get(url).await {
            Ok(resp) if resp.is_ok() => Reachability::Ok(resp.status),
            Ok(resp) => Reachability::Status(resp.status),
            Err(e) => Reachability::Failed(e.to_string()),
        };
        results.push((url.to_string(), state));
    }
    results
}

pub async fn run(catalog: &SourceCatalog) -> Result<()> {
    println!("Discount Scout Doctor");
    println!("=====================");
    println!();

    let client = HttpClient::new().context("failed to build HTTP client")?;
    let results = check_sources(&client, catalog).await;

    for (url, state) in &results {
        match state {
            Reachability::Ok(status) => println!("[OK] {status} {url}"),
            Reachability::Status(status) => println!("[!!] {status} {url}"),
            Reachability::Failed(reason) => println!("[!!] {url}: {reason}"),
        }
    }

    let reachable = results.iter().filter(|(_, s)| s.is_ok()).count();
    println!();
    println!("Status: {reachable}/{} sources reachable", results.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_check_sources_classifies_each_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cart"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let catalog = SourceCatalog::zerotracegpt().rooted_at(&server.uri());
        let client = HttpClient::new().unwrap();
        let results = check_sources(&client, &catalog).await;

        assert_eq!(results.len(), 9);
        let (last_url, last_state) = results.last().unwrap();
        assert!(last_url.ends_with("/cart"));
        assert_eq!(*last_state, Reachability::Ok(200));
        assert!(results[..8]
            .iter()
            .all(|(_, s)| *s == Reachability::Status(404)));
    }
}
