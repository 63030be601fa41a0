//! Entry contract: source text in, serialized visual tree or error text out.
//!
//! One call parses, lowers, transduces, and serializes a whole file. Results
//! are all-or-nothing: a failure at any stage yields only its message.

use std::time::Instant;

use goviz_core::errors::{BridgeError, ParseError};
use goviz_core::tracing::metrics;
use goviz_core::GovizConfig;
use serde::{Deserialize, Serialize};
use tracing::field::Empty;

use crate::engine::visual::{Transducer, VisualNode};
use crate::parsers::GoParser;

/// Result of one entry call: exactly one of `ast` or `error`.
///
/// Serializes as `{"ast": "<json text>"}` or `{"error": "<message>"}`. The
/// tree is carried as JSON text, so hosts parse it a second time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseOutput {
    Ast(String),
    Error(String),
}

impl ParseOutput {
    pub fn ast(&self) -> Option<&str> {
        match self {
            Self::Ast(json) => Some(json),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::Ast(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Parse with compiled defaults.
pub fn parse_go_code(source: Option<&str>) -> ParseOutput {
    parse_go_code_with(&GovizConfig::default(), source)
}

pub fn parse_go_code_with(config: &GovizConfig, source: Option<&str>) -> ParseOutput {
    match render(config, source) {
        Ok(json) => ParseOutput::Ast(json),
        Err(e) => ParseOutput::Error(e.to_string()),
    }
}

/// Parse and transduce, returning the typed tree.
pub fn parse_go_tree(config: &GovizConfig, source: Option<&str>) -> Result<VisualNode, BridgeError> {
    let span = entry_span(source);
    let _guard = span.enter();
    build_tree(config, source, &span)
}

fn render(config: &GovizConfig, source: Option<&str>) -> Result<String, BridgeError> {
    let span = entry_span(source);
    let _guard = span.enter();
    let tree = build_tree(config, source, &span)?;

    let start = Instant::now();
    let json = serde_json::to_string(&tree)?;
    span.record(metrics::SERIALIZATION_TIME_US, elapsed_us(start));
    Ok(json)
}

fn entry_span(source: Option<&str>) -> tracing::Span {
    let span = tracing::info_span!(
        "parse_go_code",
        source_bytes = Empty,
        parse_time_us = Empty,
        transduce_time_us = Empty,
        serialization_time_us = Empty,
        node_count = Empty,
        diagnostic_count = Empty,
    );
    span.record(metrics::SOURCE_BYTES, source.map_or(0, str::len));
    span
}

fn build_tree(
    config: &GovizConfig,
    source: Option<&str>,
    span: &tracing::Span,
) -> Result<VisualNode, BridgeError> {
    let source = source.ok_or(ParseError::MissingSource)?;

    let start = Instant::now();
    let file = GoParser::from_config(config).parse(source).inspect_err(|e| {
        span.record(metrics::DIAGNOSTIC_COUNT, e.diagnostics().len());
    })?;
    span.record(metrics::PARSE_TIME_US, elapsed_us(start));

    let start = Instant::now();
    let tree = Transducer::from_config(&config.transducer).transduce_file(&file)?;
    span.record(metrics::TRANSDUCE_TIME_US, elapsed_us(start));
    span.record(metrics::NODE_COUNT, tree.node_count());

    tracing::debug!("parsed and transduced source file");
    Ok(tree)
}

fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_is_an_input_error() {
        let out = parse_go_code(None);
        assert_eq!(out, ParseOutput::Error("Source code argument is required".into()));
    }

    #[test]
    fn output_wire_shape() {
        let ok = serde_json::to_value(ParseOutput::Ast("{}".into())).unwrap();
        assert_eq!(ok, serde_json::json!({"ast": "{}"}));
        let err = serde_json::to_value(ParseOutput::Error("boom".into())).unwrap();
        assert_eq!(err, serde_json::json!({"error": "boom"}));
    }

    #[test]
    fn accessors_are_exclusive() {
        let out = parse_go_code(Some("package main\n"));
        assert!(out.ast().is_some());
        assert!(out.error().is_none());
        assert!(!out.is_error());
    }
}
