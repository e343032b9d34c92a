// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Static guess list and cart reachability check.
//!
//! The cart request only confirms the page answers. No code is submitted.

use super::ProbeOutcome;
use crate::acquisition::http_client::HttpClient;
use crate::candidate::{Candidate, CandidateKind};
use crate::catalog::{SourceCatalog, COMMON_PATTERNS_SOURCE};
use crate::error::FetchError;
use tracing::warn;

/// The built-in guesses as `test` candidates.
pub fn common_candidates(catalog: &SourceCatalog) -> Vec<Candidate> {
    catalog
        .common_codes
        .iter()
        .map(|code| Candidate::new(code.as_str(), COMMON_PATTERNS_SOURCE, CandidateKind::Test))
        .collect()
}

/// Append the guess list, then check the cart page.
///
/// `prior` is how many candidates earlier stages found; it only feeds the
/// progress line.
pub async fn run(client: &HttpClient, catalog: &SourceCatalog, prior: usize) -> ProbeOutcome {
    println!("🧪 Testing discount codes...");
    let mut outcome = ProbeOutcome {
        candidates: common_candidates(catalog),
        failures: Vec::new(),
    };

    println!(
        "  🧪 Testing {} discount codes...",
        prior + outcome.candidates.len()
    );

    match client.get(&catalog.cart_url).await {
        Ok(resp) if resp.is_ok() => {
            println!("  ✅ Cart page accessible - codes can be tested manually");
        }
        Ok(resp) => {
            println!("  ❌ Cart page not accessible");
            warn!(url = %resp.url, status = resp.status, "cart page not usable");
            outcome.record_failure(&FetchError::Status {
                url: resp.url,
                status: resp.status,
            });
        }
        Err(e) => {
            println!("  ❌ Error accessing cart: {e}");
            outcome.record_failure(&e);
        }
    }

    outcome
}
