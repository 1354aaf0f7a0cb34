//! Resource document key translation.
//!
//! Renders a oneM2M JSON representation with long attribute names the way
//! the resource tree's attribute panel shows it. Only keys change.

use crate::table::AttributeTable;
use serde_json::{Map, Value};

/// Translate every object key in `document`. Keys like `m2m:cnt` keep the
/// namespace prefix and translate the part after the first `:`. A key whose
/// translation is already used in the same object stays untranslated.
pub fn translate_document(table: &AttributeTable, document: &Value, display_long_names: bool) -> Value {
    match document {
        Value::Object(map) => {
            let mut translated = Map::with_capacity(map.len());
            for (key, value) in map {
                let mut name = translate_key(table, key, display_long_names);
                // Keep the short key rather than overwrite a sibling.
                if name != *key && (map.contains_key(&name) || translated.contains_key(&name)) {
                    name = key.clone();
                }
                translated.insert(name, translate_document(table, value, display_long_names));
            }
            Value::Object(translated)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| translate_document(table, item, display_long_names))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn translate_key(table: &AttributeTable, key: &str, display_long_names: bool) -> String {
    match key.split_once(':') {
        Some((prefix, name)) => {
            format!("{}:{}", prefix, table.translate(name, display_long_names))
        }
        None => table.translate(key, display_long_names).to_string(),
    }
}
