//! Owned Go syntax tree.
//!
//! Node and field names follow `go/ast` so the visual tree can label roles
//! with the names Go programmers already know. Every node carries a [`Span`]
//! in 1-based byte offsets.

use goviz_core::Span;
use smallvec::SmallVec;

use super::token::{BranchKeyword, ChanDir, DeclKeyword, LitKind};

/// Identifier lists are almost always one or two names long.
pub type Names = SmallVec<[Ident; 2]>;

// ---- File and declarations ----

#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub span: Span,
    /// Package name. Absent when the source has no package clause.
    pub name: Option<Ident>,
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Func(Box<FuncDecl>),
    Gen(GenDecl),
    /// A top-level form that is not a declaration.
    Bad(Unsupported),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub span: Span,
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub ty: FuncType,
    pub body: Option<BlockStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    pub span: Span,
    pub tok: DeclKeyword,
    pub specs: Vec<Spec>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    pub span: Span,
    pub name: Option<Ident>,
    pub path: BasicLit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    pub span: Span,
    pub names: Names,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub span: Span,
    pub name: Ident,
    pub type_params: Option<FieldList>,
    pub ty: Expr,
}

// ---- Shared pieces ----

#[derive(Debug, Clone, PartialEq)]
pub struct FieldList {
    pub span: Span,
    pub list: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub span: Span,
    pub names: Names,
    pub ty: Expr,
    pub tag: Option<BasicLit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncType {
    pub span: Span,
    pub type_params: Option<FieldList>,
    pub params: FieldList,
    pub results: Option<FieldList>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub span: Span,
    pub list: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub span: Span,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    pub span: Span,
    pub kind: LitKind,
    /// Source text of the literal, quotes included.
    pub value: String,
}

/// A syntactic form the lowering does not model. `kind` is the tree-sitter
/// node kind, kept for diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub struct Unsupported {
    pub span: Span,
    pub kind: String,
}

// ---- Expressions and types ----

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Ident),
    BasicLit(BasicLit),
    Composite(Box<CompositeLit>),
    FuncLit(Box<FuncLit>),
    Paren(Box<ParenExpr>),
    Selector(Box<SelectorExpr>),
    Index(Box<IndexExpr>),
    Slice(Box<SliceExpr>),
    TypeAssert(Box<TypeAssertExpr>),
    Call(Box<CallExpr>),
    Star(Box<StarExpr>),
    Unary(Box<UnaryExpr>),
    Binary(Box<BinaryExpr>),
    KeyValue(Box<KeyValueExpr>),
    Ellipsis(Box<Ellipsis>),
    ArrayType(Box<ArrayType>),
    StructType(Box<StructType>),
    FuncType(Box<FuncType>),
    InterfaceType(Box<InterfaceType>),
    MapType(Box<MapType>),
    ChanType(Box<ChanType>),
    Unsupported(Unsupported),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeLit {
    pub span: Span,
    pub ty: Option<Expr>,
    pub elts: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncLit {
    pub span: Span,
    pub ty: FuncType,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr {
    pub span: Span,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorExpr {
    pub span: Span,
    pub x: Expr,
    pub sel: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub span: Span,
    pub x: Expr,
    pub index: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliceExpr {
    pub span: Span,
    pub x: Expr,
    pub low: Option<Expr>,
    pub high: Option<Expr>,
    pub max: Option<Expr>,
}

/// `x.(T)`, or `x.(type)` in a type switch guard where `ty` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAssertExpr {
    pub span: Span,
    pub x: Expr,
    pub ty: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub span: Span,
    pub fun: Expr,
    pub args: Vec<Expr>,
}

/// `*x`, as a dereference or a pointer type.
#[derive(Debug, Clone, PartialEq)]
pub struct StarExpr {
    pub span: Span,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub span: Span,
    pub op: String,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub span: Span,
    pub x: Expr,
    pub op: String,
    pub y: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueExpr {
    pub span: Span,
    pub key: Expr,
    pub value: Expr,
}

/// `...T` in a variadic parameter, or `...` as an array length.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsis {
    pub span: Span,
    pub elt: Option<Expr>,
}

/// `[N]T`, `[...]T`, or `[]T` when `len` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub span: Span,
    pub len: Option<Expr>,
    pub elt: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub span: Span,
    pub fields: FieldList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceType {
    pub span: Span,
    pub methods: FieldList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapType {
    pub span: Span,
    pub key: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChanType {
    pub span: Span,
    pub dir: ChanDir,
    pub value: Expr,
}

// ---- Statements ----

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Decl(DeclStmt),
    Expr(ExprStmt),
    Send(Box<SendStmt>),
    IncDec(Box<IncDecStmt>),
    Assign(Box<AssignStmt>),
    Go(Box<GoStmt>),
    Defer(Box<DeferStmt>),
    Return(ReturnStmt),
    Branch(BranchStmt),
    Block(BlockStmt),
    If(Box<IfStmt>),
    Switch(Box<SwitchStmt>),
    TypeSwitch(Box<TypeSwitchStmt>),
    CaseClause(CaseClause),
    For(Box<ForStmt>),
    Range(Box<RangeStmt>),
    Labeled(Box<LabeledStmt>),
    Unsupported(Unsupported),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclStmt {
    pub span: Span,
    pub decl: GenDecl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub span: Span,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendStmt {
    pub span: Span,
    pub chan: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncDecStmt {
    pub span: Span,
    pub x: Expr,
    /// `++` or `--`.
    pub tok: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub span: Span,
    pub lhs: Vec<Expr>,
    pub tok: String,
    pub rhs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoStmt {
    pub span: Span,
    pub call: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeferStmt {
    pub span: Span,
    pub call: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub span: Span,
    pub results: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchStmt {
    pub span: Span,
    pub tok: BranchKeyword,
    pub label: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub span: Span,
    pub init: Option<Stmt>,
    pub cond: Expr,
    pub body: BlockStmt,
    /// Either a `BlockStmt` or a nested `IfStmt`.
    pub els: Option<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub span: Span,
    pub init: Option<Stmt>,
    pub tag: Option<Expr>,
    /// Holds only `CaseClause` statements.
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSwitchStmt {
    pub span: Span,
    pub init: Option<Stmt>,
    /// `x := y.(type)` or `y.(type)`.
    pub assign: Stmt,
    pub body: BlockStmt,
}

/// `case a, b:` or `default:` (empty `list`).
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub span: Span,
    pub list: Vec<Expr>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub span: Span,
    pub init: Option<Stmt>,
    pub cond: Option<Expr>,
    pub post: Option<Stmt>,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeStmt {
    pub span: Span,
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    /// `=` or `:=`; `None` for `for range x`.
    pub tok: Option<String>,
    pub x: Expr,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStmt {
    pub span: Span,
    pub label: Ident,
    pub stmt: Option<Stmt>,
}

impl Expr {
    pub fn span(&self) -> Span {
        super::SyntaxNode::from(self).span()
    }
}

impl Stmt {
    pub fn span(&self) -> Span {
        super::SyntaxNode::from(self).span()
    }
}

impl Decl {
    pub fn span(&self) -> Span {
        super::SyntaxNode::from(self).span()
    }
}
