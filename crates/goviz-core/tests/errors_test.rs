//! Tests for the goviz error handling system.

use std::collections::HashSet;

use goviz_core::errors::error_code::{self, GovizErrorCode};
use goviz_core::errors::*;
use goviz_core::types::Diagnostic;

#[test]
fn test_all_errors_have_error_code() {
    let parse = ParseError::MissingSource;
    assert_eq!(parse.error_code(), error_code::INPUT_ERROR);

    let syntax = ParseError::Syntax {
        file: "input.go".into(),
        diagnostics: vec![Diagnostic::new(1, 1, "syntax error")],
    };
    assert_eq!(syntax.error_code(), error_code::PARSE_ERROR);

    let depth = TransduceError::DepthExceeded { limit: 4 };
    assert_eq!(depth.error_code(), error_code::DEPTH_EXCEEDED);

    let config = ConfigError::FileNotFound {
        path: "/tmp/goviz.toml".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let bridge = BridgeError::Serialization {
        message: "boom".into(),
    };
    assert_eq!(bridge.error_code(), error_code::SERIALIZATION_ERROR);
}

#[test]
fn test_from_conversions() {
    let bridge: BridgeError = ParseError::MissingSource.into();
    assert!(matches!(bridge, BridgeError::Parse(ParseError::MissingSource)));

    let bridge: BridgeError = TransduceError::DepthExceeded { limit: 2 }.into();
    assert!(matches!(bridge, BridgeError::Transduce(_)));

    let bridge: BridgeError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
    assert!(matches!(bridge, BridgeError::Serialization { .. }));
}

#[test]
fn test_bridge_codes_delegate() {
    let bridge: BridgeError = ParseError::DepthExceeded { limit: 8 }.into();
    assert_eq!(bridge.error_code(), error_code::DEPTH_EXCEEDED);
}

#[test]
fn test_parse_errors_render_verbatim_through_bridge() {
    let parse = ParseError::Syntax {
        file: "input.go".into(),
        diagnostics: vec![
            Diagnostic::new(1, 9, "syntax error: unexpected {"),
            Diagnostic::new(1, 12, "syntax error: missing }"),
        ],
    };
    let expected = "input.go:1:9: syntax error: unexpected { (and 1 more errors)";
    assert_eq!(parse.to_string(), expected);

    let bridge: BridgeError = parse.into();
    assert_eq!(bridge.to_string(), expected);
}

#[test]
fn test_missing_source_message() {
    assert_eq!(
        ParseError::MissingSource.to_string(),
        "Source code argument is required"
    );
}

#[test]
fn test_serialization_message_prefix() {
    let err = BridgeError::Serialization {
        message: "key must be a string".into(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to serialize AST: key must be a string"
    );
}

#[test]
fn test_napi_string_format() {
    let err = TransduceError::DepthExceeded { limit: 3 };
    assert_eq!(
        err.napi_string(),
        "[DEPTH_EXCEEDED] maximum nesting depth of 3 exceeded"
    );
}

#[test]
fn test_diagnostics_accessor() {
    let syntax = ParseError::Syntax {
        file: "input.go".into(),
        diagnostics: vec![Diagnostic::new(2, 3, "bad")],
    };
    assert_eq!(syntax.diagnostics().len(), 1);
    assert!(ParseError::MissingSource.diagnostics().is_empty());
}

#[test]
fn test_error_codes_are_distinct() {
    let codes: HashSet<&str> = [
        error_code::INPUT_ERROR,
        error_code::PARSE_ERROR,
        error_code::DEPTH_EXCEEDED,
        error_code::SERIALIZATION_ERROR,
        error_code::CONFIG_ERROR,
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 5);
}
