//! Node classification: syntax node kind to display tag.

use super::types::NodeTag;
use crate::syntax::SyntaxNode;

/// Display tag for a syntax node. Total: kinds without a dedicated tag
/// classify as [`NodeTag::Unknown`].
pub fn classify(node: SyntaxNode<'_>) -> NodeTag {
    match node {
        SyntaxNode::File(_) => NodeTag::File,
        SyntaxNode::FuncDecl(_) => NodeTag::FuncDecl,
        SyntaxNode::GenDecl(_) => NodeTag::GenDecl,
        SyntaxNode::ImportSpec(_) => NodeTag::ImportSpec,
        SyntaxNode::ValueSpec(_) => NodeTag::ValueSpec,
        SyntaxNode::TypeSpec(_) => NodeTag::TypeSpec,
        SyntaxNode::FieldList(_) => NodeTag::FieldList,
        SyntaxNode::Field(_) => NodeTag::Field,
        SyntaxNode::FuncType(_) => NodeTag::FuncType,
        SyntaxNode::BlockStmt(_) => NodeTag::BlockStmt,
        SyntaxNode::Ident(_) => NodeTag::Ident,
        SyntaxNode::BasicLit(_) => NodeTag::BasicLit,
        SyntaxNode::CompositeLit(_) => NodeTag::CompositeLit,
        SyntaxNode::FuncLit(_) => NodeTag::FuncLit,
        SyntaxNode::ParenExpr(_) => NodeTag::ParenExpr,
        SyntaxNode::SelectorExpr(_) => NodeTag::SelectorExpr,
        SyntaxNode::IndexExpr(_) => NodeTag::IndexExpr,
        SyntaxNode::SliceExpr(_) => NodeTag::SliceExpr,
        SyntaxNode::TypeAssertExpr(_) => NodeTag::TypeAssertExpr,
        SyntaxNode::CallExpr(_) => NodeTag::CallExpr,
        SyntaxNode::StarExpr(_) => NodeTag::StarExpr,
        SyntaxNode::UnaryExpr(_) => NodeTag::UnaryExpr,
        SyntaxNode::BinaryExpr(_) => NodeTag::BinaryExpr,
        SyntaxNode::KeyValueExpr(_) => NodeTag::KeyValueExpr,
        SyntaxNode::Ellipsis(_) => NodeTag::Ellipsis,
        SyntaxNode::ArrayType(_) => NodeTag::ArrayType,
        SyntaxNode::StructType(_) => NodeTag::StructType,
        SyntaxNode::InterfaceType(_) => NodeTag::InterfaceType,
        SyntaxNode::MapType(_) => NodeTag::MapType,
        SyntaxNode::ChanType(_) => NodeTag::ChanType,
        SyntaxNode::DeclStmt(_) => NodeTag::DeclStmt,
        SyntaxNode::ExprStmt(_) => NodeTag::ExprStmt,
        SyntaxNode::SendStmt(_) => NodeTag::SendStmt,
        SyntaxNode::IncDecStmt(_) => NodeTag::IncDecStmt,
        SyntaxNode::AssignStmt(_) => NodeTag::AssignStmt,
        SyntaxNode::GoStmt(_) => NodeTag::GoStmt,
        SyntaxNode::DeferStmt(_) => NodeTag::DeferStmt,
        SyntaxNode::ReturnStmt(_) => NodeTag::ReturnStmt,
        SyntaxNode::BranchStmt(_) => NodeTag::BranchStmt,
        SyntaxNode::IfStmt(_) => NodeTag::IfStmt,
        SyntaxNode::SwitchStmt(_) => NodeTag::SwitchStmt,
        SyntaxNode::TypeSwitchStmt(_) => NodeTag::TypeSwitchStmt,
        SyntaxNode::CaseClause(_) => NodeTag::CaseClause,
        SyntaxNode::ForStmt(_) => NodeTag::ForStmt,
        SyntaxNode::RangeStmt(_) => NodeTag::RangeStmt,
        SyntaxNode::LabeledStmt(_) => NodeTag::LabeledStmt,
        SyntaxNode::Unsupported(_) => NodeTag::Unknown,
    }
}
