//! Field schema: canonical entity names, their keyword aliases, and the
//! compiled patterns the resolver matches against.
//!
//! The schema is static configuration: built once at process start, read-only
//! afterwards, safe for unsynchronized concurrent reads.

use regex::Regex;
use std::sync::LazyLock;

/// One target entity: a canonical name plus the label variants that identify
/// it in document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Canonical field name, used as the key in the extraction result.
    pub name: &'static str,
    /// Keyword aliases recognized as this field's label.
    pub keywords: &'static [&'static str],
}

/// The fixed schema, in result order. Counterparty is resolved by the party
/// detection phase and skipped by the generic per-field strategies.
pub const ENTITY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "Counterparty",
        keywords: &["Counterparty"],
    },
    FieldSpec {
        name: "Initial Valuation Date",
        keywords: &["Initial Valuation Date"],
    },
    FieldSpec {
        name: "Notional",
        keywords: &["Notional", "Notional Amount", "Notional Amount (N)", "Amount"],
    },
    FieldSpec {
        name: "Valuation Date",
        keywords: &["Valuation Date"],
    },
    FieldSpec {
        name: "Maturity",
        keywords: &[
            "Maturity",
            "Termination Date",
            "Expiry Date",
            "Tenor",
            "Duration",
        ],
    },
    FieldSpec {
        name: "Underlying",
        keywords: &["Underlying", "Instrument", "Asset"],
    },
    FieldSpec {
        name: "Coupon",
        keywords: &["Coupon", "Coupon (C)", "Interest Rate"],
    },
    FieldSpec {
        name: "Barrier",
        keywords: &["Barrier", "Barrier (B)"],
    },
    FieldSpec {
        name: "Calendar",
        keywords: &["Calendar", "Business Day", "Schedule"],
    },
];

/// Compiled per-alias patterns for the three line-level strategies.
#[derive(Debug)]
pub(crate) struct KeywordPatterns {
    /// `^<kw>\b` against the left cell of a tab pair.
    pub anchored: Vec<Regex>,
    /// `<kw>` + explicit separator (`:`, `-`, en-dash, tab) + remainder,
    /// searched anywhere in the line. A parenthesis is deliberately not a
    /// separator here.
    pub inline: Vec<Regex>,
    /// `^<kw>` followed by a separator, `(`, or end of line: a label-only
    /// line whose value is expected on the next non-empty line.
    pub label: Vec<Regex>,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("schema patterns are static")
}

/// Per-field compiled patterns, index-aligned with [`ENTITY_FIELDS`].
pub(crate) static FIELD_PATTERNS: LazyLock<Vec<KeywordPatterns>> = LazyLock::new(|| {
    ENTITY_FIELDS
        .iter()
        .map(|field| KeywordPatterns {
            anchored: field
                .keywords
                .iter()
                .map(|kw| compile(&format!(r"(?i)^\s*{}\b", regex::escape(kw))))
                .collect(),
            inline: field
                .keywords
                .iter()
                .map(|kw| compile(&format!(r"(?i){}\s*(?:[:\-–]|\t)\s*(.+)", regex::escape(kw))))
                .collect(),
            label: field
                .keywords
                .iter()
                .map(|kw| compile(&format!(r"(?i)^\s*{}\s*(?:[:\-–(\t]|$)", regex::escape(kw))))
                .collect(),
        })
        .collect()
});

/// Whole-document fallback patterns, one per field. Only consulted when the
/// line-level phases found nothing at all; first match's first capture group
/// wins.
pub(crate) static FALLBACK_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "Counterparty",
            compile(r"(?i)(?:Counterparty|Party A)\s*(?:\(|:)?\s*([A-Z][A-Z\s&]+)"),
        ),
        (
            "Initial Valuation Date",
            compile(r"(?i)Initial Valuation Date(?: of|:)?\s*([0-9]{1,2}\s+[A-Za-z]+\s+[0-9]{4})"),
        ),
        (
            "Notional",
            compile(
                r"(?i)Notional(?: amount)?(?: agreed)?(?: was|:)?\s*([A-Z]{3}\s*[0-9.,]+\s*(?:million|bn|billion|m|k)?)",
            ),
        ),
        (
            "Valuation Date",
            compile(r"(?i)Valuation Date(?: is|:)?\s*([0-9]{1,2}\s+[A-Za-z]+\s+[0-9]{4})"),
        ),
        (
            "Maturity",
            compile(
                r"(?i)(?:matures on|Maturity(?: Date)?(?: is|:)?\s*)([0-9]{1,2}\s+[A-Za-z]+\s+[0-9]{4})",
            ),
        ),
        (
            "Underlying",
            compile(r"(?i)Underlying\s+(?:is|:)\s*(.+?)(?:\.\s|$)"),
        ),
        ("Coupon", compile(r"(?i)Coupon(?: rate)?(?: is|:)?\s*([0-9.,]+%)")),
        ("Barrier", compile(r"(?i)Barrier(?: is|:)?\s*([0-9.,]+%)")),
        ("Calendar", compile(r"(?i)Calendar(?: is|:)?\s*([A-Z]+)")),
    ]
});
