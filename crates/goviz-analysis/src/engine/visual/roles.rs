//! Role labels: which field of its parent a visual node fills.

use serde::{Serialize, Serializer};

/// The parent field a child occupies, named after the `go/ast` field.
///
/// Elements of a list field carry their index (`Args[2]`) only when the list
/// holds more than one element; a lone element is labelled with the bare
/// field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Field(&'static str),
    Indexed(&'static str, usize),
}

impl Role {
    pub fn field(name: &'static str) -> Self {
        Self::Field(name)
    }

    pub fn indexed(name: &'static str, index: usize) -> Self {
        Self::Indexed(name, index)
    }

    /// Label for element `index` of a list field holding `len` elements.
    pub fn for_item(name: &'static str, index: usize, len: usize) -> Self {
        if len > 1 {
            Self::Indexed(name, index)
        } else {
            Self::Field(name)
        }
    }

    /// The field name, without any index.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Field(name) | Self::Indexed(name, _) => name,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Field(_) => None,
            Self::Indexed(_, i) => Some(*i),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Indexed(name, i) => write!(f, "{name}[{i}]"),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
