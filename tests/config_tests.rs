mod common;

use common::temp_files::{create_temp_json, create_temp_yaml};
use std::time::Duration;
use txroute::config::RouterConfig;
use txroute::router::{Router, TableKind};

#[test]
fn test_load_yaml_config() {
    let file = create_temp_yaml(
        r#"
landing_path: /dashboard
gate_timeout_ms: 2500
detail:
  mount: detail
list:
  mount: /list/
"#,
    );

    let config = RouterConfig::load(file.path()).unwrap();
    assert_eq!(config.landing_path, "/dashboard");
    assert_eq!(config.gate_timeout(), Duration::from_millis(2500));
    assert_eq!(config.slow_match_threshold_us, 1_000);

    let router = Router::new(&config).unwrap();
    assert_eq!(router.table(TableKind::TransactionList).mount(), "list");
    let resolution = router.resolve("/list/app1");
    assert_eq!(
        resolution.route_match().and_then(|m| m.redirect_target()),
        Some("/dashboard")
    );
}

#[test]
fn test_load_json_config() {
    let file = create_temp_json(r#"{ "gate_timeout_ms": 50 }"#);
    let config = RouterConfig::load(file.path()).unwrap();
    assert_eq!(config.gate_timeout_ms, 50);
    assert_eq!(config.detail.mount, "transactionDetail");
}

#[test]
fn test_invalid_config_reports_path() {
    let file = create_temp_yaml("landing_path: main\n");
    let err = RouterConfig::load(file.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("validating router config"), "{message}");
    assert!(message.contains("must be an absolute path"), "{message}");
}

#[test]
fn test_missing_file() {
    let err = RouterConfig::load("/nonexistent/txroute.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("reading router config"));
}

#[test]
fn test_unparseable_yaml() {
    let file = create_temp_yaml("gate_timeout_ms: [1, 2\n");
    let err = RouterConfig::load(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("parsing router config"));
}
