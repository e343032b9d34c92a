// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for source fetching.

/// Everything that can go wrong while fetching a single source.
///
/// None of these are fatal to a scan: probers catch them per request,
/// report them inline, and move on to the next source.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }
}

/// A source that failed during a scan, kept for logging and tests.
///
/// The printed report never mentions these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    /// URL that was being fetched.
    pub url: String,
    /// Display form of the underlying error.
    pub reason: String,
}

impl From<&FetchError> for SourceFailure {
    fn from(err: &FetchError) -> Self {
        Self {
            url: err.url().to_string(),
            reason: err.to_string(),
        }
    }
}
