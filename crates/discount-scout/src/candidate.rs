// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Candidate code records produced by the probers.

/// How a candidate code was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// Token scraped from a coupon aggregator page.
    Potential,
    /// Token pulled from a discussion-platform post.
    Reddit,
    /// Guess from the built-in list of common codes.
    Test,
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Potential => write!(f, "potential"),
            Self::Reddit => write!(f, "reddit"),
            Self::Test => write!(f, "test"),
        }
    }
}

/// A speculative discount code and where it was seen.
///
/// Never validated and never deduplicated; the same code may appear many
/// times from the same or different sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The code string exactly as extracted.
    pub code: String,
    /// Page URL, `Reddit: <title>...`, or `common_patterns`.
    pub source: String,
    /// Classification of how the code was obtained.
    pub kind: CandidateKind,
}

impl Candidate {
    pub fn new(code: impl Into<String>, source: impl Into<String>, kind: CandidateKind) -> Self {
        Self {
            code: code.into(),
            source: source.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(CandidateKind::Potential.to_string(), "potential");
        assert_eq!(CandidateKind::Reddit.to_string(), "reddit");
        assert_eq!(CandidateKind::Test.to_string(), "test");
    }

    #[test]
    fn test_new_keeps_fields() {
        let c = Candidate::new("SAVE10", "common_patterns", CandidateKind::Test);
        assert_eq!(c.code, "SAVE10");
        assert_eq!(c.source, "common_patterns");
        assert_eq!(c.kind, CandidateKind::Test);
    }
}
