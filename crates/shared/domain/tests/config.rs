use phub_domain::Hub;
use phub_domain::config::{ApiConfig, HubConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4710);
    assert!(server.ssl.is_none());

    let hub = HubConfig::default();
    assert_eq!(hub.default, Hub::Gnymble);
    assert!(!hub.development);
    assert!(hub.dev_override.is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "hub": { "default": "percytech", "development": true, "dev_override": "percymd" },
        "leads": { "forward_endpoint": "https://functions.example.com/contact" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.hub.default, Hub::PercyTech);
    assert_eq!(cfg.hub.dev_override, Some(Hub::PercyMd));
    assert_eq!(cfg.leads.forward_endpoint.as_deref(), Some("https://functions.example.com/contact"));
}

#[test]
fn unknown_hub_token_in_config_is_rejected() {
    let raw = json!({ "hub": { "default": "acme" } });
    assert!(serde_json::from_value::<ApiConfig>(raw).is_err());
}
