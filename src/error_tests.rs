//! Tests for SuggestError type

use super::*;

#[test]
fn test_network_error_display() {
    let error = SuggestError::Network("connection refused".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Network error"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn test_api_error_display() {
    let error = SuggestError::Api {
        code: 503,
        message: "Service Unavailable".to_string(),
    };
    assert_eq!(error.to_string(), "API error (503): Service Unavailable");
}

#[test]
fn test_parse_error_display() {
    let error = SuggestError::Parse("expected value at line 1".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Parse error"));
    assert!(msg.contains("expected value"));
}

#[test]
fn test_config_error_display() {
    let error = SuggestError::Config("unknown scope".to_string());
    assert!(error.to_string().contains("Invalid configuration"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = SuggestError::from(io_err);
    assert!(matches!(err, SuggestError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = SuggestError::Parse("bad".to_string());
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("Parse"));
}
