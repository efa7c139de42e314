use async_trait::async_trait;
use nspd_core::{FetchError, RawDocument, RegistryConnector, normalize};
use serde_json::json;

struct Echo;

#[async_trait]
impl RegistryConnector for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn fetch(&self, cadastral_number: &str) -> Result<RawDocument, FetchError> {
        if cadastral_number.is_empty() {
            return Err(FetchError::status(400));
        }
        Ok(RawDocument::new(json!({
            "data": {"features": [{"properties": {"options": {"cad_num": cadastral_number}}}]}
        })))
    }
}

#[tokio::test]
async fn default_key_and_vendor() {
    let c = Echo;
    assert_eq!(c.key().as_str(), "echo");
    assert_eq!(c.vendor(), "unknown");
}

#[tokio::test]
async fn connector_result_feeds_normalizer() {
    let c = Echo;
    let report = normalize("1:2:3:4", c.fetch("1:2:3:4").await);
    assert_eq!(report.record().unwrap().cadastral_number, "1:2:3:4");

    let report = normalize("", c.fetch("").await);
    assert_eq!(report.warnings, vec![FetchError::status(400)]);
}

#[test]
fn raw_document_decodes_or_reports_decode_error() {
    let ok = RawDocument::from_slice(br#"{"features": []}"#).unwrap();
    assert_eq!(ok.as_value(), &json!({"features": []}));

    let err = RawDocument::from_slice(b"<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}
