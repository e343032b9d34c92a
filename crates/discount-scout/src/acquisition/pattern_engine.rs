// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Regex extraction over raw HTML text nodes and free text.
//!
//! Everything here is deliberately noisy. Token extraction is a broad
//! heuristic: any uppercase run of the right length is a candidate, so
//! product names, years, and SKUs come through alongside real codes.
//!
//! All entry points are synchronous because `scraper::Html` is `!Send`;
//! callers parse after the await point and drop the document before the
//! next one.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Shortest token kept as a candidate code.
pub const MIN_TOKEN_LEN: usize = 4;
/// Longest token kept as a candidate code.
pub const MAX_TOKEN_LEN: usize = 20;

// ── Compiled patterns ────────────────────────────────────────────────────────

fn discount_keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)discount|promo|code|coupon|save|off|%").expect("valid regex")
    })
}

fn placeholder_keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)discount|promo|code|coupon").expect("valid regex"))
}

/// Maximal alphanumeric runs, any case.
fn alnum_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9]+").expect("valid regex"))
}

fn strict_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z0-9]+$").expect("valid regex"))
}

/// Case-sensitive, unanchored. Long runs are chopped into 20-char pieces.
fn loose_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Z0-9]{4,20}").expect("valid regex"))
}

// ── HTML text ────────────────────────────────────────────────────────────────

/// Every non-empty text node in the document, trimmed, in document order.
pub fn text_nodes(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Text nodes mentioning a discount keyword, longer than five characters.
pub fn find_keyword_lines(html: &str) -> Vec<String> {
    let re = discount_keyword_re();
    text_nodes(html)
        .into_iter()
        .filter(|t| re.is_match(t) && t.chars().count() > 5)
        .collect()
}

/// Whether any `<input>` has a placeholder that looks like a code field.
pub fn has_discount_input(html: &str) -> bool {
    let document = Html::parse_document(html);
    let Ok(sel) = Selector::parse("input[placeholder]") else {
        return false;
    };
    let re = placeholder_keyword_re();
    document
        .select(&sel)
        .filter_map(|el| el.value().attr("placeholder"))
        .any(|p| re.is_match(p))
}

// ── Token extraction ─────────────────────────────────────────────────────────

/// Strict tokens from one piece of text.
///
/// Splits the text into maximal alphanumeric runs and keeps only runs of
/// 4–20 characters made entirely of uppercase letters and digits. A run
/// longer than 20 characters is dropped whole rather than truncated.
pub fn strict_tokens(text: &str) -> Vec<String> {
    let strict = strict_code_re();
    alnum_run_re()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|t| (MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&t.len()))
        .filter(|t| strict.is_match(t))
        .map(str::to_string)
        .collect()
}

/// Strict tokens from every text node of an HTML page, in document order.
pub fn strict_tokens_in_html(html: &str) -> Vec<String> {
    text_nodes(html)
        .iter()
        .flat_map(|t| strict_tokens(t))
        .collect()
}

/// Loose tokens: every non-overlapping `[A-Z0-9]{4,20}` match.
///
/// Unlike [`strict_tokens`] there is no boundary check, so `ABCDsave` yields
/// `ABCD` and a 30-character run yields a 20-character piece plus the rest.
pub fn loose_tokens(text: &str) -> Vec<String> {
    loose_code_re()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_token_from_sentence() {
        assert_eq!(strict_tokens("Save BIG with CODE123 today!"), vec!["CODE123"]);
    }

    #[test]
    fn test_strict_rejects_short() {
        assert!(strict_tokens("abc").is_empty());
        assert!(strict_tokens("ABC").is_empty());
    }

    #[test]
    fn test_strict_rejects_overlong_run() {
        assert!(strict_tokens("use THISISAVERYLONGCODESTRING12345 now").is_empty());
    }

    #[test]
    fn test_strict_rejects_mixed_case() {
        assert!(strict_tokens("Code123 save20").is_empty());
    }

    #[test]
    fn test_strict_keeps_digits_only_tokens() {
        assert_eq!(strict_tokens("Since 2024 we ship"), vec!["2024"]);
    }

    #[test]
    fn test_strict_tokens_in_html_walks_text_nodes() {
        let html = r#"<html><body>
            <div class="coupon"><span>SAVE2024X</span></div>
            <p>Use <b>WELCOME10</b> at checkout</p>
            <p>nothing here</p>
        </body></html>"#;
        assert_eq!(strict_tokens_in_html(html), vec!["SAVE2024X", "WELCOME10"]);
    }

    #[test]
    fn test_loose_tokens_have_no_boundary_check() {
        assert_eq!(loose_tokens("Use SAVE2024X for a discount"), vec!["SAVE2024X"]);
        assert_eq!(loose_tokens("ABCDsave"), vec!["ABCD"]);
        assert_eq!(
            loose_tokens("THISISAVERYLONGCODESTRING12345"),
            vec!["THISISAVERYLONGCODES", "TRING12345"]
        );
        assert!(loose_tokens("lowercase only").is_empty());
    }

    #[test]
    fn test_find_keyword_lines() {
        let html = r#"<html><body>
            <h1>Get 20% OFF today</h1>
            <p>Promo</p>
            <p>Enter your promo code at checkout</p>
            <p>About us</p>
        </body></html>"#;
        let lines = find_keyword_lines(html);
        assert_eq!(
            lines,
            vec!["Get 20% OFF today", "Enter your promo code at checkout"]
        );
    }

    #[test]
    fn test_has_discount_input() {
        assert!(has_discount_input(
            r#"<form><input type="text" placeholder="Enter Promo Code"></form>"#
        ));
        assert!(!has_discount_input(
            r#"<form><input type="email" placeholder="Email address"></form>"#
        ));
        assert!(!has_discount_input("<p>no inputs</p>"));
    }

    #[test]
    fn test_empty_html() {
        assert!(text_nodes("").is_empty());
        assert!(strict_tokens_in_html("").is_empty());
        assert!(find_keyword_lines("").is_empty());
    }
}
