use m2m_names::{
    build_table, classify, translate, translate_document, AttributeCategory, ResolverError,
    BUILTIN_TABLE,
};
use serde_json::json;
use std::io::Write;

#[test]
fn test_documented_examples() {
    assert_eq!(translate("ri", true), "resourceID");
    assert_eq!(classify("ri"), AttributeCategory::Universal);
    assert_eq!(translate("zzz", true), "zzz");
    assert_eq!(classify("zzz"), AttributeCategory::Custom);
}

#[test]
fn test_known_codes_follow_table() {
    for entry in BUILTIN_TABLE.entries() {
        assert_eq!(translate(&entry.short_code, true), entry.long_name);
        assert_eq!(translate(&entry.short_code, false), entry.short_code);
        assert_eq!(classify(&entry.short_code), entry.category);
    }
}

#[test]
fn test_unknown_codes_fall_back() {
    for code in ["zzz", "", "Ri", "resourceID", "m2m:cnt", " ri"] {
        assert_eq!(translate(code, true), code);
        assert_eq!(translate(code, false), code);
        // unknown codes land in the custom bucket, not unspecified
        assert_eq!(classify(code), AttributeCategory::Custom);
    }
}

#[test]
fn test_every_category_is_populated() {
    for category in AttributeCategory::ALL {
        assert!(
            !BUILTIN_TABLE.entries_in(category).is_empty(),
            "no built-in entries for {}",
            category
        );
    }
}

#[test]
fn test_overlay_file_extends_table() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "attributes": [
            {{ "shortName": "acme", "longName": "acmeVendorField", "category": "common" }},
            {{ "shortName": "cni", "longName": "instanceCount" }}
        ] }}"#
    )
    .unwrap();

    let table = build_table(Some(file.path())).unwrap();
    assert_eq!(table.translate("acme", true), "acmeVendorField");
    assert_eq!(table.classify("acme"), AttributeCategory::Common);
    assert_eq!(table.translate("cni", true), "instanceCount");
    assert_eq!(table.short_code_for("instanceCount"), Some("cni"));

    // the process-wide table is unaffected
    assert_eq!(translate("cni", true), "currentNrOfInstances");
    assert_eq!(translate("acme", true), "acme");
}

#[test]
fn test_missing_overlay_file_fails() {
    let err = build_table(Some(std::path::Path::new("/nonexistent/m2m-overlay.json"))).unwrap_err();
    assert!(matches!(err, ResolverError::Io(_)));
}

#[test]
fn test_no_overlay_matches_builtin() {
    let table = build_table(None).unwrap();
    assert_eq!(table.len(), BUILTIN_TABLE.len());
}

#[test]
fn test_translate_content_instance_document() {
    let doc = json!({
        "m2m:cin": {
            "rn": "cin_0001",
            "ty": 4,
            "ri": "cin8837",
            "pi": "cnt4421",
            "ct": "20240101T120000,000000",
            "lt": "20240101T120000,000000",
            "st": 0,
            "cnf": "text/plain:0",
            "cs": 4,
            "con": "21.5"
        }
    });

    let out = translate_document(&BUILTIN_TABLE, &doc, true);
    let cin = &out["m2m:contentInstance"];
    assert_eq!(cin["resourceName"], "cin_0001");
    assert_eq!(cin["resourceType"], 4);
    assert_eq!(cin["parentID"], "cnt4421");
    assert_eq!(cin["stateTag"], 0);
    assert_eq!(cin["contentInfo"], "text/plain:0");
    assert_eq!(cin["content"], "21.5");
    assert!(cin.get("con").is_none());

    assert_eq!(translate_document(&BUILTIN_TABLE, &doc, false), doc);
}
