use std::time::Duration;

use nspd_core::{FetchError, LookupFailure, RawDocument, normalize};
use serde_json::json;

const CN: &str = "50:27:0030526:16";

fn doc(v: serde_json::Value) -> Result<RawDocument, FetchError> {
    Ok(RawDocument::new(v))
}

#[test]
fn every_fetch_failure_is_object_not_found() {
    let failures = [
        FetchError::timeout(Duration::from_secs(30)),
        FetchError::transport("dns error: failed to lookup address information"),
        FetchError::status(404),
        FetchError::status(500),
        FetchError::decode("expected value at line 1 column 1"),
    ];
    for cause in failures {
        let report = normalize(CN, Err(cause.clone()));
        assert_eq!(report.failure_reason(), Some(LookupFailure::ObjectNotFound));
        assert_eq!(report.cadastral_number, CN);
        assert_eq!(report.warnings, vec![cause]);
    }
}

#[test]
fn empty_lists_are_no_features() {
    for v in [
        json!({"features": []}),
        json!({"data": {"features": []}}),
        json!({"data": {"items": [1]}}),
        json!({"features": null}),
        json!({}),
        json!([]),
    ] {
        let report = normalize(CN, doc(v.clone()));
        assert_eq!(
            report.failure_reason(),
            Some(LookupFailure::NoFeatures),
            "document: {v}"
        );
        assert!(report.warnings.is_empty());
    }
}

#[test]
fn error_payload_is_object_not_found_with_cause() {
    let report = normalize(CN, doc(json!({"error": "Status code: 503"})));
    assert_eq!(report.failure_reason(), Some(LookupFailure::ObjectNotFound));
    assert_eq!(
        report.warnings,
        vec![FetchError::upstream("Status code: 503")]
    );
}

#[test]
fn top_level_features_shadow_nested_ones() {
    // An empty top-level list is authoritative even when data.features has entries.
    let v = json!({
        "features": [],
        "data": {"features": [{"properties": {"options": {"cad_num": CN}}}]}
    });
    let report = normalize(CN, doc(v));
    assert_eq!(report.failure_reason(), Some(LookupFailure::NoFeatures));
}

#[test]
fn error_outcome_serializes_like_the_public_contract() {
    let v = serde_json::to_value(normalize(CN, Err(FetchError::status(502)))).unwrap();
    assert_eq!(
        v,
        json!({"cadastral_number": CN, "status": "error", "message": "Object not found"})
    );
}

#[test]
fn success_when_first_feature_is_not_an_object() {
    let report = normalize(CN, doc(json!({"features": [null]})));
    assert!(report.is_success());
    let record = report.record().unwrap();
    assert_eq!(record.cadastral_number, "");
    assert_eq!(record.area, None);
    assert_eq!(report.geometry(), Some(&json!({})));
}
