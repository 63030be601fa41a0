//! Token-level enums carried by syntax nodes.

use serde::{Deserialize, Serialize};

/// Basic literal kinds, named like `go/token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

impl LitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Imag => "IMAG",
            Self::Char => "CHAR",
            Self::String => "STRING",
        }
    }

    /// Literal kind for a tree-sitter-go node kind.
    pub fn from_ts_kind(kind: &str) -> Option<Self> {
        match kind {
            "int_literal" => Some(Self::Int),
            "float_literal" => Some(Self::Float),
            "imaginary_literal" => Some(Self::Imag),
            "rune_literal" => Some(Self::Char),
            "raw_string_literal" | "interpreted_string_literal" => Some(Self::String),
            _ => None,
        }
    }
}

/// Keyword introducing a general declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKeyword {
    Import,
    Const,
    Var,
    Type,
}

impl DeclKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Const => "const",
            Self::Var => "var",
            Self::Type => "type",
        }
    }
}

/// Keyword of a branch statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKeyword {
    Break,
    Continue,
    Goto,
    Fallthrough,
}

impl BranchKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Goto => "goto",
            Self::Fallthrough => "fallthrough",
        }
    }
}

/// Channel direction. `chan<- T` sends, `<-chan T` receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChanDir {
    Send,
    Recv,
    #[default]
    Both,
}

impl ChanDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Recv => "recv",
            Self::Both => "both",
        }
    }
}
