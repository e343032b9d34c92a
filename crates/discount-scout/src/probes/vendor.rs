// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Vendor-site prober.
//!
//! Prints discount-looking text from the vendor's homepage and pricing page.
//! Nothing found here becomes a candidate.

use super::ProbeOutcome;
use crate::acquisition::http_client::HttpClient;
use crate::acquisition::pattern_engine::{find_keyword_lines, has_discount_input};
use crate::catalog::SourceCatalog;
use crate::error::FetchError;
use tracing::{debug, warn};

pub async fn run(client: &HttpClient, catalog: &SourceCatalog) -> ProbeOutcome {
    println!("🔍 Scraping {} official site...", catalog.product);
    let mut outcome = ProbeOutcome::default();

    match client.get(&catalog.vendor_home).await {
        Ok(resp) if resp.is_ok() => {
            for line in find_keyword_lines(&resp.body) {
                println!("  📝 Found discount text: {line}");
            }
            if has_discount_input(&resp.body) {
                println!("  ✅ Found discount input field on main site");
            } else {
                println!("  ➖ No discount input field on main site");
            }
        }
        Ok(resp) => {
            warn!(url = %resp.url, status = resp.status, "vendor homepage not usable");
            outcome.record_failure(&FetchError::Status {
                url: resp.url,
                status: resp.status,
            });
        }
        Err(e) => {
            println!("  ❌ Error scraping main site: {e}");
            warn!(error = %e, "vendor homepage fetch failed");
            outcome.record_failure(&e);
        }
    }

    // Pricing page failures stay off the console.
    match client.get(&catalog.vendor_pricing).await {
        Ok(resp) if resp.is_ok() => {
            for line in find_keyword_lines(&resp.body) {
                println!("  📝 Found pricing discount text: {line}");
            }
        }
        Ok(resp) => {
            debug!(url = %resp.url, status = resp.status, "pricing page not usable");
            outcome.record_failure(&FetchError::Status {
                url: resp.url,
                status: resp.status,
            });
        }
        Err(e) => {
            debug!(error = %e, "pricing page fetch failed");
            outcome.record_failure(&e);
        }
    }

    outcome
}
