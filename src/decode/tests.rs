//! Tests for decoder module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_parse_envelope() {
    let page = PageEnvelope::parse(
        r#"{"data":[{"id":1},{"id":2}],"links":{"next":"https://api.example.com/items?page=2"}}"#,
    )
    .unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0]["id"], 1);
    assert_eq!(
        page.next_link().unwrap(),
        Some("https://api.example.com/items?page=2")
    );
}

#[test]
fn test_envelope_metadata_not_in_records() {
    let page = PageEnvelope::parse(
        r#"{"meta":{"total":1},"data":[{"id":"a","attributes":{"n":1}}],"links":{"self":"x"}}"#,
    )
    .unwrap();

    let records = page.into_records();
    assert_eq!(records.len(), 1);
    assert_eq!(
        serde_json::Value::Object(records[0].clone()),
        json!({"id": "a", "attributes": {"n": 1}})
    );
}

#[test]
fn test_next_link_absent_or_null() {
    let absent = PageEnvelope::parse(r#"{"data":[],"links":{}}"#).unwrap();
    assert_eq!(absent.next_link().unwrap(), None);

    let null = PageEnvelope::parse(r#"{"data":[],"links":{"next":null}}"#).unwrap();
    assert_eq!(null.next_link().unwrap(), None);
}

#[test]
fn test_next_link_object_form() {
    let page =
        PageEnvelope::parse(r#"{"data":[],"links":{"next":{"href":"https://x.test/p2"}}}"#)
            .unwrap();
    assert_eq!(page.next_link().unwrap(), Some("https://x.test/p2"));
}

#[test]
fn test_next_link_wrong_type() {
    let page = PageEnvelope::parse(r#"{"data":[],"links":{"next":42}}"#).unwrap();
    assert!(matches!(page.next_link(), Err(Error::Decode { .. })));
}

#[test]
fn test_other_links_not_inspected() {
    let page = PageEnvelope::parse(r#"{"data":[],"links":{"self":42,"next":null}}"#).unwrap();
    assert_eq!(page.next_link().unwrap(), None);
}

#[test]
fn test_heterogeneous_field_values() {
    let page = PageEnvelope::parse(
        r#"{"data":[{"s":"x","n":1.5,"b":true,"z":null,"o":{"k":[1,"two"]}}],"links":{}}"#,
    )
    .unwrap();

    let record = &page.data[0];
    assert!(record["s"].is_string());
    assert!(record["n"].is_f64());
    assert!(record["b"].is_boolean());
    assert!(record["z"].is_null());
    assert_eq!(record["o"]["k"], json!([1, "two"]));
}

#[test]
fn test_invalid_json() {
    let err = PageEnvelope::parse("{not json").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_missing_data_or_links() {
    assert!(PageEnvelope::parse(r#"{"links":{}}"#).is_err());
    assert!(PageEnvelope::parse(r#"{"data":[]}"#).is_err());
    assert!(PageEnvelope::parse(r#"{"data":null,"links":{}}"#).is_err());
}

#[test]
fn test_non_object_record() {
    assert!(PageEnvelope::parse(r#"{"data":[1,2],"links":{}}"#).is_err());
}

#[test]
fn test_decode_envelope_latin1() {
    let body = b"{\"data\":[{\"name\":\"Caf\xe9\"}],\"links\":{}}";
    let page = decode_envelope(body, "ISO-8859-1").unwrap();
    assert_eq!(page.data[0]["name"], "Café");
}

#[test]
fn test_decode_envelope_unknown_charset() {
    let err = decode_envelope(br#"{"data":[],"links":{}}"#, "klingon").unwrap_err();
    assert!(matches!(err, Error::UnsupportedEncoding { .. }));
}
