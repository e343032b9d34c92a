// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Default command: run every stage and print the report.

use crate::acquisition::http_client::HttpClient;
use crate::catalog::SourceCatalog;
use crate::report::render_report;
use crate::scan::run_scan;
use anyhow::{Context, Result};

pub async fn run(catalog: &SourceCatalog) -> Result<()> {
    println!("🚀 {} Discount Code Scraper", catalog.product);
    println!("{}", "=".repeat(40));

    let client = HttpClient::new().context("failed to build HTTP client")?;
    let outcome = run_scan(&client, catalog).await;

    print!("{}", render_report(&outcome.candidates, catalog));

    let elapsed = (outcome.finished_at - outcome.started_at).num_milliseconds() as f64 / 1000.0;
    println!();
    println!("✅ Scraping complete! ({elapsed:.1}s)");
    Ok(())
}
