// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! The fixed set of sources and guesses a scan works through.
//!
//! Targets are hard-coded: the CLI only ever uses
//! [`SourceCatalog::zerotracegpt`]. [`SourceCatalog::rooted_at`] moves the
//! same catalog onto another origin so a whole run can be pointed at a local
//! mock server.

use std::time::Duration;

/// Browser-like identification sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                              AppleWebKit/537.36 (KHTML, like Gecko) \
                              Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout. There are no retries.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Only the first few discussion results are inspected.
pub const DISCUSSION_POST_LIMIT: usize = 5;

/// Post titles are cut to this many characters in source labels.
pub const SOURCE_TITLE_CHARS: usize = 50;

/// Source label for the static guess list.
pub const COMMON_PATTERNS_SOURCE: &str = "common_patterns";

const COMMON_CODES: [&str; 19] = [
    "WELCOME10",
    "WELCOME20",
    "NEWUSER",
    "FIRSTTIME",
    "SAVE10",
    "SAVE20",
    "SAVE30",
    "DISCOUNT10",
    "PROMO10",
    "PROMO20",
    "STUDENT",
    "EDUCATION",
    "BETA",
    "EARLY",
    "LAUNCH",
    "SUMMER2024",
    "FALL2024",
    "WINTER2024",
    "SPRING2024",
];

/// Every URL and literal a scan consults.
#[derive(Debug, Clone)]
pub struct SourceCatalog {
    /// Display name of the product, used in banners.
    pub product: String,
    /// Vendor homepage.
    pub vendor_home: String,
    /// Vendor pricing page.
    pub vendor_pricing: String,
    /// Third-party coupon aggregator pages, in probe order.
    pub aggregators: Vec<String>,
    /// Discussion-platform search API returning JSON.
    pub search_api: String,
    /// Cart page used for the reachability check.
    pub cart_url: String,
    /// Commonly guessed codes appended to every run.
    pub common_codes: Vec<String>,
}

impl SourceCatalog {
    /// The built-in ZeroTraceGPT target.
    pub fn zerotracegpt() -> Self {
        let vendor = "https://zerotracegpt.com";
        Self {
            product: "ZeroTraceGPT".to_string(),
            vendor_home: vendor.to_string(),
            vendor_pricing: format!("{vendor}/pricing"),
            aggregators: vec![
                "https://www.retailmenot.com/view/zerotracegpt.com".to_string(),
                "https://www.coupons.com/store/zerotracegpt/".to_string(),
                "https://www.groupon.com/coupons/stores/zerotracegpt".to_string(),
                "https://www.honey.com/zerotracegpt".to_string(),
                "https://www.dealspotr.com/promo-codes/zerotracegpt.com".to_string(),
            ],
            search_api: search_url("https://www.reddit.com", "zerotracegpt"),
            cart_url: format!("{vendor}/cart"),
            common_codes: COMMON_CODES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Same catalog with every URL moved onto `base` (scheme, host, port).
    ///
    /// Paths and query strings are kept, and aggregator paths are prefixed
    /// with their original host so the five pages stay distinct.
    pub fn rooted_at(&self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            product: self.product.clone(),
            vendor_home: rebase(base, &self.vendor_home, false),
            vendor_pricing: rebase(base, &self.vendor_pricing, false),
            aggregators: self
                .aggregators
                .iter()
                .map(|u| rebase(base, u, true))
                .collect(),
            search_api: rebase(base, &self.search_api, false),
            cart_url: rebase(base, &self.cart_url, false),
            common_codes: self.common_codes.clone(),
        }
    }

    /// Every URL a full scan touches, in request order.
    pub fn all_urls(&self) -> Vec<&str> {
        let mut urls = vec![self.vendor_home.as_str(), self.vendor_pricing.as_str()];
        urls.extend(self.aggregators.iter().map(String::as_str));
        urls.push(self.search_api.as_str());
        urls.push(self.cart_url.as_str());
        urls
    }
}

/// Build the search API URL for `<slug> discount code`.
fn search_url(origin: &str, slug: &str) -> String {
    let endpoint = format!("{origin}/search.json");
    let query = format!("{slug} discount code");
    match url::Url::parse_with_params(
        &endpoint,
        &[("q", query.as_str()), ("sort", "relevance"), ("t", "all")],
    ) {
        Ok(u) => u.to_string(),
        Err(_) => endpoint,
    }
}

fn rebase(base: &str, original: &str, keep_host: bool) -> String {
    let Ok(parsed) = url::Url::parse(original) else {
        return format!("{base}/{}", original.trim_start_matches('/'));
    };
    let mut out = String::from(base);
    if keep_host {
        if let Some(host) = parsed.host_str() {
            out.push('/');
            out.push_str(host);
        }
    }
    out.push_str(parsed.path());
    if let Some(q) = parsed.query() {
        out.push('?');
        out.push_str(q);
    }
    out
}
