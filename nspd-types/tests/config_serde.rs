use std::time::Duration;

use nspd_types::{DEFAULT_BASE_URL, GatewayConfig, TlsVerification, UpstreamConfig};

#[test]
fn upstream_defaults_verify_tls() {
    let cfg = UpstreamConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.timeout, Duration::from_secs(30));
    assert_eq!(cfg.tls, TlsVerification::Enabled);
}

#[test]
fn upstream_config_roundtrip() {
    let cfg = UpstreamConfig {
        base_url: "http://127.0.0.1:8080".to_string(),
        timeout: Duration::from_millis(1500),
        tls: TlsVerification::Disabled,
    };

    let json = serde_json::to_string(&cfg).expect("serialize upstream config");
    let de: UpstreamConfig = serde_json::from_str(&json).expect("deserialize upstream config");

    assert_eq!(de, cfg);
}

#[test]
fn gateway_config_roundtrip() {
    let cfg = GatewayConfig {
        request_timeout: Duration::from_secs(5),
    };
    let json = serde_json::to_string(&cfg).expect("serialize gateway config");
    let de: GatewayConfig = serde_json::from_str(&json).expect("deserialize gateway config");
    assert_eq!(de.request_timeout.as_secs(), 5);
    assert_eq!(GatewayConfig::default().request_timeout.as_secs(), 30);
}
