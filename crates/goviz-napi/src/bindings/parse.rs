//! `parseGoCode` and its structured sibling.

use goviz_analysis::{parse_go_code_with, parse_go_tree, ParseOutput};
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::conversions::error_codes;
use crate::runtime;

/// Result of `parseGoCode`: exactly one field is set.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsParseResult {
    /// Visual tree as JSON text.
    pub ast: Option<String>,
    pub error: Option<String>,
}

impl From<ParseOutput> for JsParseResult {
    fn from(out: ParseOutput) -> Self {
        match out {
            ParseOutput::Ast(json) => Self {
                ast: Some(json),
                error: None,
            },
            ParseOutput::Error(message) => Self {
                ast: None,
                error: Some(message),
            },
        }
    }
}

/// Parse Go source into `{ ast }` or `{ error }`. Never throws.
#[napi(js_name = "parseGoCode")]
pub fn parse_go_code(source: Option<String>) -> JsParseResult {
    let config = runtime::config();
    parse_go_code_with(&config, source.as_deref()).into()
}

/// Parse Go source and return the visual tree as a JS object. Throws
/// `[CODE] message` on failure.
#[napi(js_name = "parseGoTree")]
pub fn parse_go_tree_value(source: Option<String>) -> napi::Result<serde_json::Value> {
    let config = runtime::config();
    let tree = parse_go_tree(&config, source.as_deref()).map_err(error_codes::to_napi_error)?;
    serde_json::to_value(&tree)
        .map_err(|e| error_codes::with_code(error_codes::SERIALIZATION_ERROR, e))
}
