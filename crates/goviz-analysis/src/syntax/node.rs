//! Borrowed, kind-tagged view over the owned syntax tree.

use goviz_core::Span;

use super::ast::*;

/// One variant per node kind, each borrowing the node it names.
///
/// Copyable and cheap to pass by value; the classifier and the transducer
/// both dispatch on it.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxNode<'a> {
    File(&'a File),
    FuncDecl(&'a FuncDecl),
    GenDecl(&'a GenDecl),
    ImportSpec(&'a ImportSpec),
    ValueSpec(&'a ValueSpec),
    TypeSpec(&'a TypeSpec),
    FieldList(&'a FieldList),
    Field(&'a Field),
    FuncType(&'a FuncType),
    BlockStmt(&'a BlockStmt),
    Ident(&'a Ident),
    BasicLit(&'a BasicLit),
    CompositeLit(&'a CompositeLit),
    FuncLit(&'a FuncLit),
    ParenExpr(&'a ParenExpr),
    SelectorExpr(&'a SelectorExpr),
    IndexExpr(&'a IndexExpr),
    SliceExpr(&'a SliceExpr),
    TypeAssertExpr(&'a TypeAssertExpr),
    CallExpr(&'a CallExpr),
    StarExpr(&'a StarExpr),
    UnaryExpr(&'a UnaryExpr),
    BinaryExpr(&'a BinaryExpr),
    KeyValueExpr(&'a KeyValueExpr),
    Ellipsis(&'a Ellipsis),
    ArrayType(&'a ArrayType),
    StructType(&'a StructType),
    InterfaceType(&'a InterfaceType),
    MapType(&'a MapType),
    ChanType(&'a ChanType),
    DeclStmt(&'a DeclStmt),
    ExprStmt(&'a ExprStmt),
    SendStmt(&'a SendStmt),
    IncDecStmt(&'a IncDecStmt),
    AssignStmt(&'a AssignStmt),
    GoStmt(&'a GoStmt),
    DeferStmt(&'a DeferStmt),
    ReturnStmt(&'a ReturnStmt),
    BranchStmt(&'a BranchStmt),
    IfStmt(&'a IfStmt),
    SwitchStmt(&'a SwitchStmt),
    TypeSwitchStmt(&'a TypeSwitchStmt),
    CaseClause(&'a CaseClause),
    ForStmt(&'a ForStmt),
    RangeStmt(&'a RangeStmt),
    LabeledStmt(&'a LabeledStmt),
    Unsupported(&'a Unsupported),
}

impl SyntaxNode<'_> {
    pub fn span(&self) -> Span {
        match self {
            Self::File(n) => n.span,
            Self::FuncDecl(n) => n.span,
            Self::GenDecl(n) => n.span,
            Self::ImportSpec(n) => n.span,
            Self::ValueSpec(n) => n.span,
            Self::TypeSpec(n) => n.span,
            Self::FieldList(n) => n.span,
            Self::Field(n) => n.span,
            Self::FuncType(n) => n.span,
            Self::BlockStmt(n) => n.span,
            Self::Ident(n) => n.span,
            Self::BasicLit(n) => n.span,
            Self::CompositeLit(n) => n.span,
            Self::FuncLit(n) => n.span,
            Self::ParenExpr(n) => n.span,
            Self::SelectorExpr(n) => n.span,
            Self::IndexExpr(n) => n.span,
            Self::SliceExpr(n) => n.span,
            Self::TypeAssertExpr(n) => n.span,
            Self::CallExpr(n) => n.span,
            Self::StarExpr(n) => n.span,
            Self::UnaryExpr(n) => n.span,
            Self::BinaryExpr(n) => n.span,
            Self::KeyValueExpr(n) => n.span,
            Self::Ellipsis(n) => n.span,
            Self::ArrayType(n) => n.span,
            Self::StructType(n) => n.span,
            Self::InterfaceType(n) => n.span,
            Self::MapType(n) => n.span,
            Self::ChanType(n) => n.span,
            Self::DeclStmt(n) => n.span,
            Self::ExprStmt(n) => n.span,
            Self::SendStmt(n) => n.span,
            Self::IncDecStmt(n) => n.span,
            Self::AssignStmt(n) => n.span,
            Self::GoStmt(n) => n.span,
            Self::DeferStmt(n) => n.span,
            Self::ReturnStmt(n) => n.span,
            Self::BranchStmt(n) => n.span,
            Self::IfStmt(n) => n.span,
            Self::SwitchStmt(n) => n.span,
            Self::TypeSwitchStmt(n) => n.span,
            Self::CaseClause(n) => n.span,
            Self::ForStmt(n) => n.span,
            Self::RangeStmt(n) => n.span,
            Self::LabeledStmt(n) => n.span,
            Self::Unsupported(n) => n.span,
        }
    }
}

macro_rules! impl_from_ref {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for SyntaxNode<'a> {
                fn from(node: &'a $ty) -> Self {
                    SyntaxNode::$ty(node)
                }
            }
        )*
    };
}

impl_from_ref!(
    File, FuncDecl, GenDecl, ImportSpec, ValueSpec, TypeSpec, FieldList, Field, FuncType,
    BlockStmt, Ident, BasicLit, CompositeLit, FuncLit, ParenExpr, SelectorExpr, IndexExpr,
    SliceExpr, TypeAssertExpr, CallExpr, StarExpr, UnaryExpr, BinaryExpr, KeyValueExpr, Ellipsis,
    ArrayType, StructType, InterfaceType, MapType, ChanType, DeclStmt, ExprStmt, SendStmt,
    IncDecStmt, AssignStmt, GoStmt, DeferStmt, ReturnStmt, BranchStmt, IfStmt, SwitchStmt,
    TypeSwitchStmt, CaseClause, ForStmt, RangeStmt, LabeledStmt, Unsupported,
);

impl<'a> From<&'a Decl> for SyntaxNode<'a> {
    fn from(decl: &'a Decl) -> Self {
        match decl {
            Decl::Func(d) => Self::FuncDecl(d),
            Decl::Gen(d) => Self::GenDecl(d),
            Decl::Bad(u) => Self::Unsupported(u),
        }
    }
}

impl<'a> From<&'a Spec> for SyntaxNode<'a> {
    fn from(spec: &'a Spec) -> Self {
        match spec {
            Spec::Import(s) => Self::ImportSpec(s),
            Spec::Value(s) => Self::ValueSpec(s),
            Spec::Type(s) => Self::TypeSpec(s),
        }
    }
}

impl<'a> From<&'a Expr> for SyntaxNode<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Ident(e) => Self::Ident(e),
            Expr::BasicLit(e) => Self::BasicLit(e),
            Expr::Composite(e) => Self::CompositeLit(e),
            Expr::FuncLit(e) => Self::FuncLit(e),
            Expr::Paren(e) => Self::ParenExpr(e),
            Expr::Selector(e) => Self::SelectorExpr(e),
            Expr::Index(e) => Self::IndexExpr(e),
            Expr::Slice(e) => Self::SliceExpr(e),
            Expr::TypeAssert(e) => Self::TypeAssertExpr(e),
            Expr::Call(e) => Self::CallExpr(e),
            Expr::Star(e) => Self::StarExpr(e),
            Expr::Unary(e) => Self::UnaryExpr(e),
            Expr::Binary(e) => Self::BinaryExpr(e),
            Expr::KeyValue(e) => Self::KeyValueExpr(e),
            Expr::Ellipsis(e) => Self::Ellipsis(e),
            Expr::ArrayType(e) => Self::ArrayType(e),
            Expr::StructType(e) => Self::StructType(e),
            Expr::FuncType(e) => Self::FuncType(e),
            Expr::InterfaceType(e) => Self::InterfaceType(e),
            Expr::MapType(e) => Self::MapType(e),
            Expr::ChanType(e) => Self::ChanType(e),
            Expr::Unsupported(e) => Self::Unsupported(e),
        }
    }
}

impl<'a> From<&'a Stmt> for SyntaxNode<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        match stmt {
            Stmt::Decl(s) => Self::DeclStmt(s),
            Stmt::Expr(s) => Self::ExprStmt(s),
            Stmt::Send(s) => Self::SendStmt(s),
            Stmt::IncDec(s) => Self::IncDecStmt(s),
            Stmt::Assign(s) => Self::AssignStmt(s),
            Stmt::Go(s) => Self::GoStmt(s),
            Stmt::Defer(s) => Self::DeferStmt(s),
            Stmt::Return(s) => Self::ReturnStmt(s),
            Stmt::Branch(s) => Self::BranchStmt(s),
            Stmt::Block(s) => Self::BlockStmt(s),
            Stmt::If(s) => Self::IfStmt(s),
            Stmt::Switch(s) => Self::SwitchStmt(s),
            Stmt::TypeSwitch(s) => Self::TypeSwitchStmt(s),
            Stmt::CaseClause(s) => Self::CaseClause(s),
            Stmt::For(s) => Self::ForStmt(s),
            Stmt::Range(s) => Self::RangeStmt(s),
            Stmt::Labeled(s) => Self::LabeledStmt(s),
            Stmt::Unsupported(s) => Self::Unsupported(s),
        }
    }
}
