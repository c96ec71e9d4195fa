//! Unit tests for domain error types

use sysprobe_domain::{BackendError, Error};

#[test]
fn test_backend_error_display_with_command() {
    let error = BackendError::for_command("get_read_delay", "permission denied");
    assert_eq!(
        error.to_string(),
        "Backend error in 'get_read_delay': permission denied"
    );
}

#[test]
fn test_backend_error_display_without_command() {
    let error = BackendError::new("worker closed");
    assert_eq!(error.to_string(), "Backend error: worker closed");
}

#[test]
fn test_backend_error_constructors_keep_single_category() {
    let dispatch = BackendError::dispatch("get_sys_info", "channel closed");
    let decode = BackendError::decode("get_sys_info", "missing field `os`");

    assert_eq!(dispatch.command.as_deref(), Some("get_sys_info"));
    assert!(dispatch.message.contains("dispatch failed"));
    assert!(decode.message.contains("malformed response"));
}

#[test]
fn test_with_command_does_not_overwrite() {
    let error = BackendError::for_command("get_4k_read_speed", "boom").with_command("other");
    assert_eq!(error.command.as_deref(), Some("get_4k_read_speed"));

    let error = BackendError::new("boom").with_command("get_write_delay");
    assert_eq!(error.command.as_deref(), Some("get_write_delay"));
}

#[test]
fn test_backend_error_converts_into_error() {
    let backend = BackendError::execution("get_4k_write_speed", "disk full");
    let error: Error = backend.clone().into();
    match error {
        Error::Backend(inner) => assert_eq!(inner, backend),
        _ => panic!("Expected Backend error"),
    }
}

#[test]
fn test_not_found_error() {
    let error = Error::not_found("/missing");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "/missing"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_config_error() {
    let error = Error::config("batch size cannot be 0");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "batch size cannot be 0");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_io_error_from_std() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: Error = io.into();
    assert!(error.to_string().contains("gone"));
}
