//! Candidate normalization.
//!
//! Raw extracted substrings often carry filler ("was agreed at EUR 10m") or
//! are spurious fragments from parenthetical abbreviations ("N)"). This module
//! turns a raw candidate into a usable value or rejects it.

use regex::Regex;
use std::sync::LazyLock;

// Short alphanumeric-plus-closing-parenthesis fragments like "N)" or "C)".
static RE_STUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,3}\)$").expect("static pattern"));

// Free-text identifier markers: these candidates must not be truncated at a
// token boundary.
static RE_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(ISIN|Reuters|Bloomberg|Corp|Ltd|SE)\b").expect("static pattern")
});

static RE_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("static pattern"));

static RE_CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(EUR|USD|GBP|INR|JPY)\b").expect("static pattern"));

// Day-plus-month-word fragment, e.g. "12 March".
static RE_DATE_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}\s+[A-Za-z]+").expect("static pattern"));

static RE_TRAILING_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.;,]+$").expect("static pattern"));

// First useful token: currency symbol/code, number with optional scale word,
// percentage, or short date fragment. The value is kept from this token to the
// end of the candidate.
static RE_VALUE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\b(EUR|USD|GBP|INR|JPY|\$|€|£|₹)\b|\d{1,3}[,\d]*(?:\.\d+)?\s*(?:million|bn|billion|m|k)?|\d+%|\d{1,2}\s+[A-Za-z]+)",
    )
    .expect("static pattern")
});

/// Clean a raw candidate into a usable value, or reject it.
///
/// The `field_hint` is the canonical name of the field being resolved, when
/// known; "Underlying" candidates are passed through untouched since they are
/// free-text instrument descriptions.
#[must_use]
pub fn normalize_candidate(raw: &str, field_hint: Option<&str>) -> Option<String> {
    let mut candidate = raw.trim();
    // Defensive against pair-leakage: keep only the segment after the last tab.
    if candidate.contains('\t') {
        candidate = candidate.rsplit('\t').next().unwrap_or(candidate).trim();
    }

    if RE_STUB.is_match(candidate) {
        return None;
    }

    let keep_whole = field_hint.is_some_and(|hint| hint.eq_ignore_ascii_case("Underlying"))
        || RE_IDENTIFIER.is_match(candidate);
    if keep_whole {
        return Some(candidate.to_string());
    }

    if RE_DIGIT.is_match(candidate)
        || RE_CURRENCY.is_match(candidate)
        || candidate.contains('%')
        || RE_DATE_FRAGMENT.is_match(candidate)
    {
        let stripped = RE_TRAILING_PUNCT.replace(candidate, "");
        let stripped = stripped.trim();
        if let Some(m) = RE_VALUE_TOKEN.find(stripped) {
            return Some(stripped[m.start()..].trim().to_string());
        }
        return Some(stripped.to_string());
    }

    if candidate.chars().count() <= 3 {
        return None;
    }

    Some(candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filler_words_dropped_before_currency() {
        assert_eq!(
            normalize_candidate("was agreed at EUR 10,000,000", None),
            Some("EUR 10,000,000".to_string())
        );
    }

    #[test]
    fn test_stub_rejected_regardless_of_hint() {
        assert_eq!(normalize_candidate("N)", None), None);
        assert_eq!(normalize_candidate("C)", Some("Coupon")), None);
        assert_eq!(normalize_candidate("N)", Some("Underlying")), None);
    }

    #[test]
    fn test_underlying_hint_keeps_whole_string() {
        assert_eq!(
            normalize_candidate("shares of a mid cap issuer listed in 2010", Some("Underlying")),
            Some("shares of a mid cap issuer listed in 2010".to_string())
        );
    }

    #[test]
    fn test_identifier_tokens_keep_whole_string() {
        let raw = "Tesla Inc, ISIN US88160R1014";
        assert_eq!(normalize_candidate(raw, None), Some(raw.to_string()));
        let raw = "GLOBAL BANK SE";
        assert_eq!(normalize_candidate(raw, None), Some(raw.to_string()));
    }

    #[test]
    fn test_trailing_punctuation_stripped() {
        assert_eq!(
            normalize_candidate("rate is 5.25%;", None),
            Some("5.25%".to_string())
        );
    }

    #[test]
    fn test_date_fragment_starts_value() {
        assert_eq!(
            normalize_candidate("on 12 March 2030.", None),
            Some("12 March 2030".to_string())
        );
    }

    #[test]
    fn test_currency_token_starts_value() {
        assert_eq!(
            normalize_candidate("EUR settlement applies,", None),
            Some("EUR settlement applies".to_string())
        );
    }

    #[test]
    fn test_no_token_despite_trigger_returns_stripped() {
        // '%' triggers the numeric branch but no useful token matches.
        assert_eq!(normalize_candidate("% p.a.", None), Some("% p.a".to_string()));
    }

    #[test]
    fn test_short_text_rejected() {
        assert_eq!(normalize_candidate("ab", None), None);
        assert_eq!(normalize_candidate("  x ", None), None);
    }

    #[test]
    fn test_plain_text_passes_through_trimmed() {
        assert_eq!(
            normalize_candidate("  London business days  ", None),
            Some("London business days".to_string())
        );
    }

    #[test]
    fn test_tab_leakage_keeps_last_segment() {
        assert_eq!(
            normalize_candidate("Notional\tEUR 5 million", None),
            Some("EUR 5 million".to_string())
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(normalize_candidate("", None), None);
        assert_eq!(normalize_candidate("   ", None), None);
    }
}
