// src/domain/search.rs

use crate::domain::property::PropertyRecord;

/// Split a raw query into lowercase search terms.
///
/// Terms are delimited by any run of commas and/or whitespace; empty terms
/// are dropped, so a separators-only query produces no terms at all.
/// Duplicates and ordering are preserved.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Filter `records` down to those matching every term of `query`.
///
/// A record matches a term when the term occurs as a substring of at least
/// one of its (lowercased) field values; absent fields never match. An empty
/// query is the identity. Output order preserves input order.
pub fn filter_properties(records: &[PropertyRecord], query: &str) -> Vec<PropertyRecord> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| record_matches(record, &terms))
        .cloned()
        .collect()
}

fn record_matches(record: &PropertyRecord, terms: &[String]) -> bool {
    terms.iter().all(|term| {
        record.fields().any(|(key, value)| match value {
            Some(value) if key == "status" => status_matches(value, term),
            Some(value) => value.to_lowercase().contains(term.as_str()),
            None => false,
        })
    })
}

/// Status abbreviations users type in place of the full wording.
fn status_expansions(term: &str) -> Option<&'static [&'static str]> {
    match term {
        "uc" => Some(&["under construction", "uc"]),
        "rtmi" => Some(&["ready to move in", "rtmi"]),
        "np" => Some(&["nearing possession", "np"]),
        _ => None,
    }
}

/// The full wording a status code is searched under. `NP` deliberately
/// expands to "nearing possession" here while displaying as "New Project"
/// in the table.
fn status_search_text(code: &str) -> &str {
    match code {
        "rtmi" => "ready to move in",
        "uc" => "under construction",
        "np" => "nearing possession",
        other => other,
    }
}

/// A term matches the status field when the term, or any of its expanded
/// forms, is a substring of either the raw code or its full wording.
fn status_matches(value: &str, term: &str) -> bool {
    let code = value.to_lowercase();
    let full = status_search_text(&code);

    let hit = |form: &str| code.contains(form) || full.contains(form);
    match status_expansions(term) {
        Some(forms) => forms.iter().any(|form| hit(form)),
        None => hit(term),
    }
}
