// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Runs every stage in order and collects the results.

use crate::acquisition::http_client::HttpClient;
use crate::candidate::Candidate;
use crate::catalog::SourceCatalog;
use crate::error::SourceFailure;
use crate::probes::{aggregator, common_codes, discussion, vendor, ProbeOutcome};
use chrono::{DateTime, Utc};
use tracing::info;

/// Everything one scan produced.
#[derive(Debug)]
pub struct ScanOutcome {
    /// All candidates in stage order.
    pub candidates: Vec<Candidate>,
    /// Sources that errored. Not shown in the report.
    pub failures: Vec<SourceFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Run vendor, aggregator, discussion, then common-code stages.
///
/// Cannot fail: every source error is absorbed by its stage.
pub async fn run_scan(client: &HttpClient, catalog: &SourceCatalog) -> ScanOutcome {
    let started_at = Utc::now();
    let mut all = ProbeOutcome::default();

    all.extend(vendor::run(client, catalog).await);
    all.extend(aggregator::run(client, catalog).await);
    all.extend(discussion::run(client, catalog).await);
    let prior = all.candidates.len();
    all.extend(common_codes::run(client, catalog, prior).await);

    let finished_at = Utc::now();
    info!(
        candidates = all.candidates.len(),
        failed_sources = all.failures.len(),
        elapsed_ms = (finished_at - started_at).num_milliseconds(),
        "scan finished"
    );

    ScanOutcome {
        candidates: all.candidates,
        failures: all.failures,
        started_at,
        finished_at,
    }
}
