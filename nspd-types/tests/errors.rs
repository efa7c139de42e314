use std::time::Duration;

use nspd_types::{FetchError, NspdError};

#[test]
fn status_error_reads_like_upstream_cause() {
    assert_eq!(FetchError::status(404).to_string(), "Status code: 404");
}

#[test]
fn timeout_helper_records_millis() {
    let e = FetchError::timeout(Duration::from_secs(30));
    assert_eq!(e, FetchError::Timeout { after_ms: 30_000 });
}

#[test]
fn transient_classification() {
    assert!(FetchError::timeout(Duration::from_millis(5)).is_transient());
    assert!(FetchError::transport("connection refused").is_transient());
    assert!(FetchError::status(503).is_transient());
    assert!(FetchError::status(429).is_transient());
    assert!(!FetchError::status(404).is_transient());
    assert!(!FetchError::decode("expected value at line 1 column 1").is_transient());
}

#[test]
fn fetch_error_converts_into_gateway_error() {
    let e: NspdError = FetchError::status(500).into();
    assert!(matches!(e, NspdError::Fetch(FetchError::Status { status: 500 })));
    assert_eq!(e.to_string(), "Status code: 500");
}
