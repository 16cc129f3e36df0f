use serving_api::api::{InvocationLog, Stage};
use serving_api::setup_logging;
use tracing::Level;

#[test]
fn test_logging_setup() {
    // setup_logging installs a process-wide subscriber; a second call must not panic
    let result = std::panic::catch_unwind(|| {
        setup_logging(Level::INFO);
        setup_logging(Level::DEBUG);
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}

#[test]
fn test_tracing_log_records_without_panicking() {
    let log = setup_logging(Level::INFO);
    assert!(log.enabled());

    log.record(Stage::Event, r#"{"httpMethod":"GET"}"#);
    log.record(Stage::Response, r#"{"statusCode":200}"#);
}

#[test]
fn test_strict_level_disables_invocation_records() {
    let log = setup_logging(Level::ERROR);
    assert!(!log.enabled());
}
