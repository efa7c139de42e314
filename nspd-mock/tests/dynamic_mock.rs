use std::time::Duration;

use nspd_core::{FetchError, RawDocument};
use nspd_mock::{DynamicMockConnector, MockBehavior};
use serde_json::json;

#[tokio::test]
async fn test_mock_fetch_return() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let doc = RawDocument::new(json!({"features": [{"properties": {}}]}));
    controller
        .set_behavior("1:2:3:4", MockBehavior::Return(doc.clone()))
        .await;

    let got = mock.fetch("1:2:3:4").await.expect("fetch ok");
    assert_eq!(got, doc);
    assert_eq!(mock.name(), "P0");
}

#[tokio::test]
async fn test_mock_fetch_fail() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let err = FetchError::transport("boom");
    controller
        .set_behavior("1:2:3:4", MockBehavior::Fail(err.clone()))
        .await;

    let got = mock.fetch("1:2:3:4").await.expect_err("err");
    assert_eq!(got, err);
}

#[tokio::test]
async fn test_mock_unconfigured_number_is_404() {
    let (mock, _controller) = DynamicMockConnector::new_with_controller("P0");
    let got = mock.fetch("anything").await.expect_err("err");
    assert_eq!(got, FetchError::status(404));
}

#[tokio::test]
async fn test_mock_fallback_applies_to_unknown_numbers() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    controller
        .set_fallback(MockBehavior::Return(RawDocument::new(json!({"features": []}))))
        .await;
    controller
        .set_behavior("special", MockBehavior::Fail(FetchError::status(502)))
        .await;

    assert!(mock.fetch("whatever").await.is_ok());
    assert_eq!(
        mock.fetch("special").await.unwrap_err(),
        FetchError::status(502)
    );
}

#[tokio::test(start_paused = true)]
async fn test_mock_hang_never_resolves() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    controller.set_behavior("slow", MockBehavior::Hang).await;

    let res = tokio::time::timeout(Duration::from_secs(60), mock.fetch("slow")).await;
    assert!(res.is_err(), "hang should outlast the timeout");
}

#[tokio::test]
async fn test_mock_logs_and_clears_requests() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let _ = mock.fetch("a").await;
    let _ = mock.fetch("b").await;
    assert_eq!(controller.requests().await, vec!["a", "b"]);

    controller.clear_all_behaviors().await;
    assert!(controller.requests().await.is_empty());
}
