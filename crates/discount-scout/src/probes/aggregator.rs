// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Coupon aggregator prober.

use super::ProbeOutcome;
use crate::acquisition::http_client::HttpClient;
use crate::acquisition::pattern_engine::strict_tokens_in_html;
use crate::candidate::{Candidate, CandidateKind};
use crate::catalog::SourceCatalog;
use crate::error::FetchError;
use tracing::warn;

/// Fetch each aggregator page in turn and keep every strict token as a
/// `potential` candidate sourced to that page's URL.
///
/// A failing page is reported and skipped; later pages are still fetched.
pub async fn run(client: &HttpClient, catalog: &SourceCatalog) -> ProbeOutcome {
    println!("🔍 Scraping coupon sites...");
    let mut outcome = ProbeOutcome::default();

    for site in &catalog.aggregators {
        println!("  🔍 Checking {site}");
        match client.get(site).await {
            Ok(resp) if resp.is_ok() => {
                for code in strict_tokens_in_html(&resp.body) {
                    println!("    💰 Found potential code: {code}");
                    outcome
                        .candidates
                        .push(Candidate::new(code, site.as_str(), CandidateKind::Potential));
                }
            }
            Ok(resp) => {
                warn!(url = %site, status = resp.status, "aggregator page not usable");
                outcome.record_failure(&FetchError::Status {
                    url: site.clone(),
                    status: resp.status,
                });
            }
            Err(e) => {
                println!("    ❌ Error checking {site}: {e}");
                outcome.record_failure(&e);
            }
        }
    }

    outcome
}
