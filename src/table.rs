//! Attribute Name Table
//!
//! Short code lookups for the resource model. The built-in table is built
//! once on first access and shared read-only; overlays produce new tables.

use crate::attribute::{AttributeCategory, AttributeEntry};
use crate::builtin::BUILTIN_ATTRIBUTES;
use std::collections::HashMap;
use tracing::warn;

lazy_static::lazy_static! {
    /// Process-wide built-in table.
    pub static ref BUILTIN_TABLE: AttributeTable = AttributeTable::builtin();
}

/// Short code → entry mapping with a long name index for reverse lookups.
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    entries: HashMap<String, AttributeEntry>,
    by_long_name: HashMap<String, String>,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (short_code, long_name, category) in BUILTIN_ATTRIBUTES {
            table.insert(AttributeEntry::new(*short_code, *long_name, *category));
        }
        table
    }

    /// Copy of this table with `overlay` entries added. Overlay entries
    /// replace existing entries with the same short code.
    pub fn with_overlay(&self, overlay: impl IntoIterator<Item = AttributeEntry>) -> Self {
        let mut table = self.clone();
        for entry in overlay {
            if let Some(existing) = table.entries.get(&entry.short_code) {
                warn!(
                    "Overlay replaces '{}' ({} -> {})",
                    entry.short_code, existing.long_name, entry.long_name
                );
            }
            table.insert(entry);
        }
        table
    }

    fn insert(&mut self, entry: AttributeEntry) {
        let short_code = entry.short_code.clone();
        let long_name = entry.long_name.clone();
        self.by_long_name.insert(long_name.clone(), short_code.clone());
        let previous = self.entries.insert(short_code.clone(), entry);

        // The replaced long name may still belong to another entry.
        if let Some(previous) = previous.filter(|p| p.long_name != long_name) {
            if self.by_long_name.get(&previous.long_name) == Some(&short_code) {
                self.by_long_name.remove(&previous.long_name);
                let other = self
                    .entries
                    .values()
                    .filter(|e| e.long_name == previous.long_name)
                    .map(|e| e.short_code.as_str())
                    .min();
                if let Some(other) = other {
                    self.by_long_name
                        .insert(previous.long_name.clone(), other.to_string());
                }
            }
        }
    }

    /// Long name for `short_code` when `display_long_names` is set and the
    /// code is known; `short_code` unchanged otherwise.
    pub fn translate<'a>(&'a self, short_code: &'a str, display_long_names: bool) -> &'a str {
        if !display_long_names {
            return short_code;
        }
        match self.entries.get(short_code) {
            Some(entry) => entry.long_name.as_str(),
            None => short_code,
        }
    }

    /// Stored category, or `Custom` for unknown codes.
    pub fn classify(&self, short_code: &str) -> AttributeCategory {
        self.entries
            .get(short_code)
            .map(|entry| entry.category)
            .unwrap_or(AttributeCategory::Custom)
    }

    pub fn get(&self, short_code: &str) -> Option<&AttributeEntry> {
        self.entries.get(short_code)
    }

    pub fn contains(&self, short_code: &str) -> bool {
        self.entries.contains_key(short_code)
    }

    /// Reverse lookup. Exact, case-sensitive.
    pub fn short_code_for(&self, long_name: &str) -> Option<&str> {
        self.by_long_name.get(long_name).map(String::as_str)
    }

    /// All entries sorted by short code.
    pub fn entries(&self) -> Vec<&AttributeEntry> {
        let mut entries: Vec<&AttributeEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.short_code.cmp(&b.short_code));
        entries
    }

    pub fn entries_in(&self, category: AttributeCategory) -> Vec<&AttributeEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `AttributeTable::translate` against the built-in table.
pub fn translate(short_code: &str, display_long_names: bool) -> &str {
    BUILTIN_TABLE.translate(short_code, display_long_names)
}

/// `AttributeTable::classify` against the built-in table.
pub fn classify(short_code: &str) -> AttributeCategory {
    BUILTIN_TABLE.classify(short_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_short_codes_are_unique() {
        assert_eq!(BUILTIN_TABLE.len(), BUILTIN_ATTRIBUTES.len());
    }

    #[test]
    fn test_translate_known_and_unknown() {
        assert_eq!(translate("ri", true), "resourceID");
        assert_eq!(translate("ri", false), "ri");
        assert_eq!(translate("zzz", true), "zzz");
        assert_eq!(translate("zzz", false), "zzz");
    }

    #[test]
    fn test_lookups_are_case_sensitive() {
        assert_eq!(translate("RI", true), "RI");
        assert_eq!(classify("RI"), AttributeCategory::Custom);
        assert_eq!(BUILTIN_TABLE.short_code_for("ResourceID"), None);
    }

    #[test]
    fn test_classify_known_and_unknown() {
        assert_eq!(classify("ri"), AttributeCategory::Universal);
        assert_eq!(classify("et"), AttributeCategory::Common);
        assert_eq!(classify("cni"), AttributeCategory::Custom);
        assert_eq!(classify("rqi"), AttributeCategory::Unspecified);
        assert_eq!(classify("zzz"), AttributeCategory::Custom);
        assert_eq!(classify(""), AttributeCategory::Custom);
    }

    #[test]
    fn test_every_builtin_entry_round_trips() {
        for (short_code, long_name, category) in BUILTIN_ATTRIBUTES {
            assert_eq!(translate(short_code, true), *long_name);
            assert_eq!(classify(short_code), *category);
            assert_eq!(BUILTIN_TABLE.short_code_for(long_name), Some(*short_code));
        }
    }

    #[test]
    fn test_overlay_does_not_touch_builtin() {
        let overlay = vec![
            AttributeEntry::new("ri", "identifier", AttributeCategory::Common),
            AttributeEntry::new("acme", "acmeVendorField", AttributeCategory::Custom),
        ];
        let table = BUILTIN_TABLE.with_overlay(overlay);

        assert_eq!(table.translate("ri", true), "identifier");
        assert_eq!(table.classify("ri"), AttributeCategory::Common);
        assert_eq!(table.translate("acme", true), "acmeVendorField");
        assert_eq!(table.short_code_for("identifier"), Some("ri"));
        assert_eq!(table.short_code_for("resourceID"), None);
        assert_eq!(table.len(), BUILTIN_TABLE.len() + 1);

        assert_eq!(translate("ri", true), "resourceID");
        assert!(!BUILTIN_TABLE.contains("acme"));
    }

    #[test]
    fn test_replaced_long_name_points_back_to_remaining_entry() {
        let shadowed = BUILTIN_TABLE.with_overlay(vec![AttributeEntry::new(
            "x",
            "resourceID",
            AttributeCategory::Custom,
        )]);
        assert_eq!(shadowed.short_code_for("resourceID"), Some("x"));

        let table = shadowed.with_overlay(vec![AttributeEntry::new(
            "x",
            "other",
            AttributeCategory::Custom,
        )]);
        assert_eq!(table.translate("ri", true), "resourceID");
        assert_eq!(table.short_code_for("resourceID"), Some("ri"));
        assert_eq!(table.short_code_for("other"), Some("x"));
    }

    #[test]
    fn test_entries_in_category_are_sorted() {
        let universal: Vec<&str> = BUILTIN_TABLE
            .entries_in(AttributeCategory::Universal)
            .iter()
            .map(|e| e.short_code.as_str())
            .collect();
        assert_eq!(universal, vec!["ct", "lbl", "lt", "pi", "ri", "rn", "ty"]);
    }

    #[test]
    fn test_empty_table_passes_everything_through() {
        let table = AttributeTable::new();
        assert!(table.is_empty());
        assert_eq!(table.translate("ri", true), "ri");
        assert_eq!(table.classify("ri"), AttributeCategory::Custom);
    }
}
