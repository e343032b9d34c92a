// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Discussion-platform prober.
//!
//! Queries the search API once and mines the top posts for code-like
//! tokens. Matching here is looser than on aggregator pages: any
//! `[A-Z0-9]{4,20}` substring counts, with no word-boundary or length
//! check beyond the pattern itself.

use super::ProbeOutcome;
use crate::acquisition::http_client::HttpClient;
use crate::acquisition::pattern_engine::loose_tokens;
use crate::candidate::{Candidate, CandidateKind};
use crate::catalog::{SourceCatalog, DISCUSSION_POST_LIMIT, SOURCE_TITLE_CHARS};
use crate::error::FetchError;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Search response envelope: `{ "data": { "children": [ { "data": {..} } ] } }`.
///
/// Children stay as raw JSON so one odd entry cannot sink the whole
/// listing; only the first few are looked at.
#[derive(Debug, Default, Deserialize)]
pub struct SearchListing {
    #[serde(default)]
    pub data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Value>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub selftext: String,
}

impl Post {
    /// Read a post out of one listing child.
    ///
    /// `None` when the child has no `data` object. Missing or non-string
    /// `title`/`selftext` read as empty.
    pub fn from_child(child: &Value) -> Option<Self> {
        let data = child.get("data")?.as_object()?;
        let text = |key: &str| {
            data.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Some(Self {
            title: text("title"),
            selftext: text("selftext"),
        })
    }

    /// Label used as the candidate source: `Reddit: <title prefix>...`.
    pub fn source_label(&self) -> String {
        let prefix: String = self.title.chars().take(SOURCE_TITLE_CHARS).collect();
        format!("Reddit: {prefix}...")
    }

    /// Every loose token in the title followed by the body.
    pub fn codes(&self) -> Vec<String> {
        loose_tokens(&format!("{} {}", self.title, self.selftext))
    }
}

/// Turn the first few posts of a listing into `reddit` candidates.
///
/// Children without a `data` object still count toward the limit and are
/// skipped.
pub fn candidates_from_listing(listing: &SearchListing) -> Vec<Candidate> {
    let mut found = Vec::new();
    for (i, child) in listing
        .data
        .children
        .iter()
        .take(DISCUSSION_POST_LIMIT)
        .enumerate()
    {
        let Some(post) = Post::from_child(child) else {
            debug!(index = i, "skipping listing child without post data");
            continue;
        };
        let source = post.source_label();
        found.extend(
            post.codes()
                .into_iter()
                .map(|code| Candidate::new(code, source.clone(), CandidateKind::Reddit)),
        );
    }
    found
}

/// Console line for a failed search, if the failure is shown at all.
///
/// A non-200 answer only goes to the log; transport and decode errors are
/// printed inline.
pub fn console_error_line(err: &FetchError) -> Option<String> {
    match err {
        FetchError::Status { .. } => None,
        other => Some(format!("  ❌ Error scraping Reddit: {other}")),
    }
}

pub async fn run(client: &HttpClient, catalog: &SourceCatalog) -> ProbeOutcome {
    println!("🔍 Scraping Reddit for discount codes...");
    let mut outcome = ProbeOutcome::default();

    match client.get_json::<SearchListing>(&catalog.search_api).await {
        Ok(listing) => {
            for candidate in candidates_from_listing(&listing) {
                println!("  💰 Found Reddit code: {}", candidate.code);
                outcome.candidates.push(candidate);
            }
        }
        Err(e) => {
            if let Some(line) = console_error_line(&e) {
                println!("{line}");
            }
            warn!(error = %e, "discussion search failed");
            outcome.record_failure(&e);
        }
    }

    outcome
}
