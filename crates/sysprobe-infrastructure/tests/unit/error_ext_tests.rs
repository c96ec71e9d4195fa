//! Tests for the error context extension

use sysprobe_domain::Error;
use sysprobe_infrastructure::ErrorContext;

fn failing_io() -> std::io::Result<()> {
    Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))
}

#[test]
fn test_io_context() {
    match failing_io().io_context("Failed to open scratch dir") {
        Err(Error::Io { message, source }) => {
            assert_eq!(message, "Failed to open scratch dir: denied");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    match failing_io().config_context("Bad config") {
        Err(Error::Configuration { message, .. }) => assert!(message.starts_with("Bad config")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy_on_success() {
    let ok: std::io::Result<u8> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .expect("ok");
    assert_eq!(value, 7);
}
