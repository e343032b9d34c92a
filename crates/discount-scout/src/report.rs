// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Human-readable report over the candidates of one scan.

use crate::candidate::Candidate;
use crate::catalog::SourceCatalog;
use std::collections::HashMap;
use std::fmt::Write;

/// Candidates grouped by source, groups in first-seen order.
pub fn group_by_source(candidates: &[Candidate]) -> Vec<(&str, Vec<&Candidate>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Candidate>)> = Vec::new();

    for c in candidates {
        let slot = *index.entry(c.source.as_str()).or_insert_with(|| {
            groups.push((c.source.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(c);
    }

    groups
}

/// Render the final report.
///
/// An empty candidate list gets the generic suggestions block instead of the
/// grouped listing. Both variants end with the manual-testing instructions.
pub fn render_report(candidates: &[Candidate], catalog: &SourceCatalog) -> String {
    let rule = "=".repeat(50);
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "🎯 {} DISCOUNT CODE REPORT",
        catalog.product.to_uppercase()
    );
    let _ = writeln!(out, "{rule}");

    if candidates.is_empty() {
        let _ = writeln!(out, "❌ No discount codes found");
        let _ = writeln!(out);
        let _ = writeln!(out, "💡 Suggestions:");
        let _ = writeln!(
            out,
            "  - Check {}'s official website for current promotions",
            catalog.product
        );
        let _ = writeln!(out, "  - Sign up for their newsletter");
        let _ = writeln!(out, "  - Follow them on social media");
        let _ = writeln!(out, "  - Check back in a few days for new promotions");
        let _ = writeln!(out);
    } else {
        let _ = writeln!(
            out,
            "💰 Found {} potential discount codes:",
            candidates.len()
        );
        let _ = writeln!(out);

        for (source, group) in group_by_source(candidates) {
            let _ = writeln!(out, "📂 {source}:");
            for c in group {
                let _ = writeln!(out, "  🎫 {} ({})", c.code, c.kind);
            }
            let _ = writeln!(out);
        }
    }

    let _ = writeln!(out, "🧪 To test these codes:");
    let _ = writeln!(out, "  1. Go to {}", catalog.cart_url);
    let _ = writeln!(out, "  2. Add a product to cart");
    let _ = writeln!(out, "  3. Look for discount/promo code field");
    let _ = writeln!(out, "  4. Try each code above");
    let _ = writeln!(out);
    let _ = writeln!(out, "💡 Pro tip: Try codes in this order:");
    let _ = writeln!(out, "  1. WELCOME10, WELCOME20");
    let _ = writeln!(out, "  2. NEWUSER, FIRSTTIME");
    let _ = writeln!(out, "  3. SAVE10, SAVE20, SAVE30");
    let _ = writeln!(out, "  4. Any codes found from Reddit/social media");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateKind;

    #[test]
    fn test_same_source_shares_one_group() {
        let cs = vec![
            Candidate::new("AAAA1", "https://a.example", CandidateKind::Potential),
            Candidate::new("BETA", "common_patterns", CandidateKind::Test),
            Candidate::new("AAAA2", "https://a.example", CandidateKind::Potential),
        ];
        let groups = group_by_source(&cs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "https://a.example");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "common_patterns");

        let report = render_report(&cs, &SourceCatalog::zerotracegpt());
        assert_eq!(report.matches("📂 https://a.example:").count(), 1);
        assert!(report.contains("  🎫 AAAA1 (potential)\n  🎫 AAAA2 (potential)\n"));
        assert!(report.contains("💰 Found 3 potential discount codes:"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let cs = vec![
            Candidate::new("SAVE10", "common_patterns", CandidateKind::Test),
            Candidate::new("SAVE10", "common_patterns", CandidateKind::Test),
        ];
        let report = render_report(&cs, &SourceCatalog::zerotracegpt());
        assert_eq!(report.matches("🎫 SAVE10 (test)").count(), 2);
    }

    #[test]
    fn test_empty_report_shows_suggestions() {
        let report = render_report(&[], &SourceCatalog::zerotracegpt());
        assert!(report.contains("🎯 ZEROTRACEGPT DISCOUNT CODE REPORT"));
        assert!(report.contains("❌ No discount codes found"));
        assert!(report.contains("💡 Suggestions:"));
        assert!(report.contains("Sign up for their newsletter"));
        assert!(!report.contains("potential discount codes"));
        assert!(report.contains("1. Go to https://zerotracegpt.com/cart"));
    }

    #[test]
    fn test_report_always_ends_with_pro_tips() {
        let cs = vec![Candidate::new("BETA", "common_patterns", CandidateKind::Test)];
        let report = render_report(&cs, &SourceCatalog::zerotracegpt());
        assert!(report.trim_end().ends_with("4. Any codes found from Reddit/social media"));
        assert!(!report.contains("Suggestions"));
    }
}
