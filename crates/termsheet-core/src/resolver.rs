//! Field resolution over the flattened line stream.
//!
//! Each schema field moves from unresolved to resolved (or stays absent) via a
//! layered strategy evaluated short-circuit: tabular pairing, then inline
//! separator, then label-plus-lookahead, with a whole-document regex fallback
//! that only fires when the line-level phases found nothing at all. Once a
//! field is resolved no later strategy may overwrite it.

use crate::line::{next_non_empty, Line};
use crate::normalize::normalize_candidate;
use crate::schema::{ENTITY_FIELDS, FALLBACK_PATTERNS, FIELD_PATTERNS};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Canonical field name → resolved value (or `None` when absent), in schema
/// order, plus the two debug party keys when a party was detected.
pub type EntityMap = IndexMap<String, Option<String>>;

/// Debug key carrying the raw detected "Party A" string.
pub const PARTY_A_KEY: &str = "_Party A";
/// Debug key carrying the raw detected "Party B" string.
pub const PARTY_B_KEY: &str = "_Party B";

const COUNTERPARTY: &str = "Counterparty";

static RE_PARTY_A: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Party\s*A\b").expect("static pattern"));
static RE_PARTY_B: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Party\s*B\b").expect("static pattern"));
static RE_COUNTERPARTY_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bCounterparty\s*[:\-]\s*(.+)").expect("static pattern"));

/// Resolve every schema field from the line sequence.
#[must_use]
pub fn resolve_entities(lines: &[Line]) -> EntityMap {
    let texts: Vec<String> = lines.iter().map(|l| l.as_text().into_owned()).collect();

    let mut entities: EntityMap = ENTITY_FIELDS
        .iter()
        .map(|field| (field.name.to_string(), None))
        .collect();

    // Phase 1: party detection, then the Counterparty preference chain.
    let (party_a, party_b) = detect_parties(&texts);
    if let Some(value) = party_a.clone().or_else(|| party_b.clone()) {
        entities.insert(COUNTERPARTY.to_string(), Some(value));
    } else {
        for text in &texts {
            if let Some(caps) = RE_COUNTERPARTY_INLINE.captures(text) {
                entities.insert(COUNTERPARTY.to_string(), Some(caps[1].trim().to_string()));
                break;
            }
        }
    }

    // Phase 2: remaining fields in schema order, lines top to bottom, first
    // successful strategy terminal per field.
    for (index, field) in ENTITY_FIELDS.iter().enumerate() {
        if field.name == COUNTERPARTY {
            continue;
        }
        if let Some(value) = resolve_field(index, &texts) {
            debug!("resolved {} -> {value:?}", field.name);
            entities.insert(field.name.to_string(), Some(value));
        }
    }

    // Phase 3: whole-document fallback, only when nothing at all was found.
    let anything_found = party_a.is_some()
        || party_b.is_some()
        || entities
            .values()
            .any(|v| v.as_deref().is_some_and(|s| !s.is_empty()));
    if !anything_found {
        debug!("no line-level matches, running whole-document fallback");
        let full_text = texts.join("\n");
        for (name, pattern) in FALLBACK_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(&full_text) {
                if let Some(slot) = entities.get_mut(*name) {
                    if slot.is_none() {
                        *slot = Some(caps[1].trim().to_string());
                    }
                }
            }
        }
    }

    // Final pass: tab-joined values flatten to single-space separated text.
    for value in entities.values_mut() {
        if let Some(v) = value {
            *v = v.replace('\t', " ").trim().to_string();
        }
    }

    // Debug slots keep the raw detected strings, appended after cleanup.
    if party_a.is_some() || party_b.is_some() {
        entities.insert(PARTY_A_KEY.to_string(), party_a);
        entities.insert(PARTY_B_KEY.to_string(), party_b);
    }

    entities
}

/// Scan for "Party A" / "Party B" labels. A tab pair supplies the value
/// directly; a label-only line takes the next non-empty line. The scan does
/// not short-circuit, so a later label line overwrites an earlier one.
fn detect_parties(texts: &[String]) -> (Option<String>, Option<String>) {
    let mut party_a = None;
    let mut party_b = None;

    for (i, text) in texts.iter().enumerate() {
        let parts: Vec<&str> = text.split('\t').map(str::trim).collect();
        let left = parts[0];

        if RE_PARTY_A.is_match(left) {
            if let Some(value) = party_value(&parts, texts, i) {
                party_a = Some(value);
            }
        }
        if RE_PARTY_B.is_match(left) {
            if let Some(value) = party_value(&parts, texts, i) {
                party_b = Some(value);
            }
        }
    }

    (party_a, party_b)
}

fn party_value(parts: &[&str], texts: &[String], index: usize) -> Option<String> {
    if parts.len() > 1 && !parts[1].is_empty() {
        return Some(parts[1].to_string());
    }
    next_non_empty(texts, index).map(|j| texts[j].trim().to_string())
}

/// Run the layered strategies for one field over all lines; the first
/// normalized candidate wins.
fn resolve_field(field_index: usize, texts: &[String]) -> Option<String> {
    let field = &ENTITY_FIELDS[field_index];
    let patterns = &FIELD_PATTERNS[field_index];

    'lines: for (i, text) in texts.iter().enumerate() {
        let parts: Vec<&str> = text.split('\t').map(str::trim).collect();

        // (a) tabular pairing: left cell is the label, right cell the value
        if parts.len() >= 2 {
            for anchored in &patterns.anchored {
                if anchored.is_match(parts[0]) {
                    if let Some(value) = normalize_candidate(parts[1], None) {
                        return Some(value);
                    }
                }
            }
        }

        // (b) inline separator anywhere in the line
        for inline in &patterns.inline {
            if let Some(caps) = inline.captures(text) {
                if let Some(value) = normalize_candidate(&caps[1], None) {
                    return Some(value);
                }
            }
        }

        // (c) label-only line: the value is expected on the next non-empty
        // line. A label match ends this line's scan for this field whether or
        // not the candidate normalizes.
        for label in &patterns.label {
            if label.is_match(text) {
                if let Some(j) = next_non_empty(texts, i) {
                    if let Some(value) = normalize_candidate(&texts[j], Some(field.name)) {
                        return Some(value);
                    }
                }
                continue 'lines;
            }
        }
    }

    None
}
