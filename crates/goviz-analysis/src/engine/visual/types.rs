//! Visual tree types: the renderer-facing projection of the syntax tree.

use goviz_core::Span;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::roles::Role;
use crate::stack::guarded;
use crate::syntax::{ChanDir, LitKind};

/// Display kind of a visual node, named after the `go/ast` node it shows.
///
/// `Absent` is the tag of the placeholder node and serializes as `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeTag {
    File,
    FuncDecl,
    GenDecl,
    ImportSpec,
    ValueSpec,
    TypeSpec,
    FieldList,
    Field,
    FuncType,
    BlockStmt,
    Ident,
    BasicLit,
    CompositeLit,
    FuncLit,
    ParenExpr,
    SelectorExpr,
    IndexExpr,
    SliceExpr,
    TypeAssertExpr,
    CallExpr,
    StarExpr,
    UnaryExpr,
    BinaryExpr,
    KeyValueExpr,
    Ellipsis,
    ArrayType,
    StructType,
    InterfaceType,
    MapType,
    ChanType,
    DeclStmt,
    ExprStmt,
    SendStmt,
    IncDecStmt,
    AssignStmt,
    GoStmt,
    DeferStmt,
    ReturnStmt,
    BranchStmt,
    IfStmt,
    SwitchStmt,
    TypeSwitchStmt,
    CaseClause,
    ForStmt,
    RangeStmt,
    LabeledStmt,
    Unknown,
    #[serde(rename = "")]
    Absent,
}

impl NodeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "File",
            Self::FuncDecl => "FuncDecl",
            Self::GenDecl => "GenDecl",
            Self::ImportSpec => "ImportSpec",
            Self::ValueSpec => "ValueSpec",
            Self::TypeSpec => "TypeSpec",
            Self::FieldList => "FieldList",
            Self::Field => "Field",
            Self::FuncType => "FuncType",
            Self::BlockStmt => "BlockStmt",
            Self::Ident => "Ident",
            Self::BasicLit => "BasicLit",
            Self::CompositeLit => "CompositeLit",
            Self::FuncLit => "FuncLit",
            Self::ParenExpr => "ParenExpr",
            Self::SelectorExpr => "SelectorExpr",
            Self::IndexExpr => "IndexExpr",
            Self::SliceExpr => "SliceExpr",
            Self::TypeAssertExpr => "TypeAssertExpr",
            Self::CallExpr => "CallExpr",
            Self::StarExpr => "StarExpr",
            Self::UnaryExpr => "UnaryExpr",
            Self::BinaryExpr => "BinaryExpr",
            Self::KeyValueExpr => "KeyValueExpr",
            Self::Ellipsis => "Ellipsis",
            Self::ArrayType => "ArrayType",
            Self::StructType => "StructType",
            Self::InterfaceType => "InterfaceType",
            Self::MapType => "MapType",
            Self::ChanType => "ChanType",
            Self::DeclStmt => "DeclStmt",
            Self::ExprStmt => "ExprStmt",
            Self::SendStmt => "SendStmt",
            Self::IncDecStmt => "IncDecStmt",
            Self::AssignStmt => "AssignStmt",
            Self::GoStmt => "GoStmt",
            Self::DeferStmt => "DeferStmt",
            Self::ReturnStmt => "ReturnStmt",
            Self::BranchStmt => "BranchStmt",
            Self::IfStmt => "IfStmt",
            Self::SwitchStmt => "SwitchStmt",
            Self::TypeSwitchStmt => "TypeSwitchStmt",
            Self::CaseClause => "CaseClause",
            Self::ForStmt => "ForStmt",
            Self::RangeStmt => "RangeStmt",
            Self::LabeledStmt => "LabeledStmt",
            Self::Unknown => "Unknown",
            Self::Absent => "",
        }
    }
}

impl std::fmt::Display for NodeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific facts shown next to a node. Each variant is one metadata
/// schema; the keys it emits are fixed per schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Metadata {
    #[default]
    Empty,
    /// `name`, omitted when `None`.
    Name { name: Option<String> },
    /// `names`, omitted when empty.
    Names { names: Vec<String> },
    /// `value` and `kind`.
    Literal { value: String, kind: LitKind },
    /// `tok`, omitted when `None`.
    Token { tok: Option<String> },
    /// `op`.
    Operator { op: String },
    /// `name` (omitted when `None`) and `path`.
    Import { name: Option<String>, path: String },
    /// `dir`.
    Channel { dir: ChanDir },
}

/// One metadata value: text or a list of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl<'a> MetaValue<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Text(s) => Some(*s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&'a [String]> {
        match self {
            Self::List(l) => Some(*l),
            Self::Text(_) => None,
        }
    }
}

impl Serialize for MetaValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::List(l) => l.serialize(serializer),
        }
    }
}

impl Metadata {
    /// Present entries in emission order.
    pub fn entries(&self) -> Vec<(&'static str, MetaValue<'_>)> {
        let mut out = Vec::with_capacity(2);
        match self {
            Self::Empty => {}
            Self::Name { name } => {
                if let Some(name) = name {
                    out.push(("name", MetaValue::Text(name)));
                }
            }
            Self::Names { names } => {
                if !names.is_empty() {
                    out.push(("names", MetaValue::List(names)));
                }
            }
            Self::Literal { value, kind } => {
                out.push(("value", MetaValue::Text(value)));
                out.push(("kind", MetaValue::Text(kind.as_str())));
            }
            Self::Token { tok } => {
                if let Some(tok) = tok {
                    out.push(("tok", MetaValue::Text(tok)));
                }
            }
            Self::Operator { op } => out.push(("op", MetaValue::Text(op))),
            Self::Import { name, path } => {
                if let Some(name) = name {
                    out.push(("name", MetaValue::Text(name)));
                }
                out.push(("path", MetaValue::Text(path)));
            }
            Self::Channel { dir } => out.push(("dir", MetaValue::Text(dir.as_str()))),
        }
        out
    }

    pub fn get(&self, key: &str) -> Option<MetaValue<'_>> {
        self.entries()
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A node of the visual tree.
///
/// Serializes with the wire keys `type`, `pos`, `end`, `children`,
/// `metadata`, and `fieldName`; `fieldName` is left out when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    pub tag: NodeTag,
    pub span: Span,
    pub children: Vec<VisualNode>,
    pub metadata: Metadata,
    pub role: Option<Role>,
}

impl Serialize for VisualNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        guarded(|| {
            let len = if self.role.is_some() { 6 } else { 5 };
            let mut map = serializer.serialize_map(Some(len))?;
            map.serialize_entry("type", &self.tag)?;
            map.serialize_entry("pos", &self.span.pos)?;
            map.serialize_entry("end", &self.span.end)?;
            map.serialize_entry("children", &self.children)?;
            map.serialize_entry("metadata", &self.metadata)?;
            if let Some(role) = &self.role {
                map.serialize_entry("fieldName", role)?;
            }
            map.end()
        })
    }
}

impl VisualNode {
    /// The node emitted for an absent input.
    pub fn placeholder() -> Self {
        Self {
            tag: NodeTag::Absent,
            span: Span::EMPTY,
            children: Vec::new(),
            metadata: Metadata::Empty,
            role: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.tag == NodeTag::Absent
    }

    /// First child carrying the given role label, e.g. `"Body"` or `"Args[1]"`.
    pub fn child(&self, role: &str) -> Option<&VisualNode> {
        self.children
            .iter()
            .find(|c| c.role.as_ref().is_some_and(|r| r.to_string() == role))
    }

    /// Children whose role belongs to the given field, in order.
    pub fn children_of<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a VisualNode> + 'a {
        self.children
            .iter()
            .filter(move |c| c.role.as_ref().is_some_and(|r| r.field_name() == field))
    }

    /// Pre-order walk over this node and all descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a VisualNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a VisualNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
