//! Go parser adapter.

use std::cell::RefCell;
use std::time::Instant;

use goviz_core::config::{GovizConfig, ParserConfig};
use goviz_core::constants::{DEFAULT_FILE_NAME, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SOURCE_BYTES};
use goviz_core::errors::ParseError;
use goviz_core::types::Diagnostic;
use tree_sitter::{Parser, Tree};

use super::error_tolerant::collect_diagnostics;
use super::lower::Lowerer;
use crate::syntax::ast::File;

thread_local! {
    static PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

/// Parses one Go source file into the native syntax tree.
///
/// Fails closed: any syntax error rejects the whole input, carrying every
/// diagnostic tree-sitter's error recovery found.
#[derive(Debug, Clone)]
pub struct GoParser {
    file_name: String,
    max_source_bytes: u64,
    max_depth: usize,
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GoParser {
    pub fn new() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn from_config(config: &GovizConfig) -> Self {
        Self::from_parts(&config.parser, config.transducer.effective_max_depth())
    }

    fn from_parts(parser: &ParserConfig, max_depth: usize) -> Self {
        Self {
            file_name: parser.effective_file_name().to_string(),
            max_source_bytes: parser.effective_max_source_bytes(),
            max_depth,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn parse(&self, source: &str) -> Result<File, ParseError> {
        let size = source.len() as u64;
        if size > self.max_source_bytes {
            return Err(ParseError::SourceTooLarge {
                size,
                limit: self.max_source_bytes,
            });
        }

        let start = Instant::now();
        let tree = parse_tree(source)?;
        let root = tree.root_node();

        if root.has_error() {
            let mut diagnostics = collect_diagnostics(root, source.as_bytes());
            if diagnostics.is_empty() {
                diagnostics.push(Diagnostic::new(1, 1, "syntax error"));
            }
            tracing::warn!(
                diagnostics = diagnostics.len(),
                "rejecting source with syntax errors"
            );
            return Err(ParseError::Syntax {
                file: self.file_name.clone(),
                diagnostics,
            });
        }

        let file = Lowerer::new(source, &self.file_name, self.max_depth).file(root)?;
        tracing::trace!(
            elapsed_us = start.elapsed().as_micros() as u64,
            decls = file.decls.len(),
            "lowered source file"
        );
        Ok(file)
    }
}

fn parse_tree(source: &str) -> Result<Tree, ParseError> {
    PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            let mut parser = Parser::new();
            parser
                .set_language(&tree_sitter_go::LANGUAGE.into())
                .map_err(|e| ParseError::TreeSitter {
                    message: e.to_string(),
                })?;
            *slot = Some(parser);
        }
        let parser = slot.as_mut().ok_or_else(|| ParseError::TreeSitter {
            message: "parser unavailable".to_string(),
        })?;
        parser.parse(source, None).ok_or_else(|| ParseError::TreeSitter {
            message: "parse returned no tree".to_string(),
        })
    })
}
