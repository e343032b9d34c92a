// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! The four scan stages.
//!
//! Each stage takes the shared client and the catalog, prints its own
//! progress lines, and hands back what it found. Nothing is accumulated in
//! shared state; the orchestrator concatenates stage results in order.

pub mod aggregator;
pub mod common_codes;
pub mod discussion;
pub mod vendor;

use crate::candidate::Candidate;
use crate::error::{FetchError, SourceFailure};

/// What one stage produced.
#[derive(Debug, Default)]
pub struct ProbeOutcome {
    /// Candidate records in discovery order.
    pub candidates: Vec<Candidate>,
    /// Sources that errored during the stage.
    pub failures: Vec<SourceFailure>,
}

impl ProbeOutcome {
    pub(crate) fn record_failure(&mut self, err: &FetchError) {
        self.failures.push(SourceFailure::from(err));
    }

    /// Append another stage's results after this one's.
    pub fn extend(&mut self, other: ProbeOutcome) {
        self.candidates.extend(other.candidates);
        self.failures.extend(other.failures);
    }
}
