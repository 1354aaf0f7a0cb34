//! Suggestions for unrecognised attribute names.
//!
//! Jaro-Winkler similarity against both short codes and long names.

use crate::attribute::AttributeEntry;
use crate::table::AttributeTable;
use std::cmp::Ordering;
use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a suggestion
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Known entries resembling an unrecognised code or long name, best first.
/// Returns nothing when `input` is already a known short code.
pub fn suggest<'a>(table: &'a AttributeTable, input: &str, limit: usize) -> Vec<&'a AttributeEntry> {
    if table.contains(input) {
        return Vec::new();
    }

    let needle = input.to_lowercase();
    let mut scored: Vec<(f64, &AttributeEntry)> = table
        .entries()
        .into_iter()
        .map(|entry| {
            let by_code = jaro_winkler(&needle, &entry.short_code.to_lowercase());
            let by_name = jaro_winkler(&needle, &entry.long_name.to_lowercase());
            (by_code.max(by_name), entry)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|(a_score, a), (b_score, b)| {
        b_score
            .partial_cmp(a_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.short_code.cmp(&b.short_code))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, entry)| entry)
        .collect()
}
