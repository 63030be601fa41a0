//! Tree transducer: syntax tree to visual tree.
//!
//! Recursive and structure-preserving. Each syntax node becomes one visual
//! node whose children are the node's syntactic sub-parts, in `go/ast` field
//! order, each labelled with the field it fills. Absent optional parts are
//! skipped; nothing is synthesized for them.

use goviz_core::config::TransducerConfig;
use goviz_core::constants::DEFAULT_MAX_DEPTH;
use goviz_core::errors::TransduceError;

use super::classifier::classify;
use super::roles::Role;
use super::types::{Metadata, VisualNode};
use crate::stack::guarded;
use crate::syntax::ast::{File, Names};
use crate::syntax::SyntaxNode;

#[derive(Debug, Clone, Copy)]
pub struct Transducer {
    max_depth: usize,
}

impl Default for Transducer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Transducer {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn from_config(config: &TransducerConfig) -> Self {
        Self::new(config.effective_max_depth())
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Project `node` into a visual node labelled with `role`.
    ///
    /// `None` yields the placeholder node. The only failure is nesting
    /// deeper than `max_depth`.
    pub fn transduce(
        &self,
        node: Option<SyntaxNode<'_>>,
        role: Option<Role>,
    ) -> Result<VisualNode, TransduceError> {
        match node {
            Some(node) => self.visit(node, role, 0),
            None => Ok(VisualNode::placeholder()),
        }
    }

    pub fn transduce_file(&self, file: &File) -> Result<VisualNode, TransduceError> {
        self.transduce(Some(SyntaxNode::File(file)), None)
    }

    fn visit(
        &self,
        node: SyntaxNode<'_>,
        role: Option<Role>,
        depth: usize,
    ) -> Result<VisualNode, TransduceError> {
        if depth >= self.max_depth {
            return Err(TransduceError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        let mut children = Children {
            transducer: self,
            depth: depth + 1,
            nodes: Vec::new(),
        };
        let metadata = guarded(|| children.decompose(node))?;
        Ok(VisualNode {
            tag: classify(node),
            span: node.span(),
            children: children.nodes,
            metadata,
            role,
        })
    }
}

/// Accumulates the children of one node being built.
struct Children<'t> {
    transducer: &'t Transducer,
    depth: usize,
    nodes: Vec<VisualNode>,
}

type Step = Result<(), TransduceError>;

impl Children<'_> {
    fn one<'a>(&mut self, field: &'static str, node: impl Into<SyntaxNode<'a>>) -> Step {
        let child = self
            .transducer
            .visit(node.into(), Some(Role::field(field)), self.depth)?;
        self.nodes.push(child);
        Ok(())
    }

    fn opt<'a, N: Into<SyntaxNode<'a>>>(&mut self, field: &'static str, node: Option<N>) -> Step {
        match node {
            Some(node) => self.one(field, node),
            None => Ok(()),
        }
    }

    fn list<'a, I>(&mut self, field: &'static str, items: I) -> Step
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: Into<SyntaxNode<'a>>,
    {
        let items = items.into_iter();
        let len = items.len();
        for (i, item) in items.enumerate() {
            let child = self.transducer.visit(
                item.into(),
                Some(Role::for_item(field, i, len)),
                self.depth,
            )?;
            self.nodes.push(child);
        }
        Ok(())
    }

    /// Push the children of `node` and return its metadata.
    fn decompose(&mut self, node: SyntaxNode<'_>) -> Result<Metadata, TransduceError> {
        use SyntaxNode as N;

        let metadata = match node {
            N::File(n) => {
                self.opt("Name", n.name.as_ref())?;
                self.list("Decls", &n.decls)?;
                Metadata::Name {
                    name: n.name.as_ref().map(|i| i.name.clone()),
                }
            }
            N::FuncDecl(n) => {
                self.opt("Recv", n.recv.as_ref())?;
                self.one("Name", &n.name)?;
                self.one("Type", &n.ty)?;
                self.opt("Body", n.body.as_ref())?;
                Metadata::Name {
                    name: Some(n.name.name.clone()),
                }
            }
            N::GenDecl(n) => {
                self.list("Specs", &n.specs)?;
                Metadata::Token {
                    tok: Some(n.tok.as_str().to_string()),
                }
            }
            N::ImportSpec(n) => {
                self.opt("Name", n.name.as_ref())?;
                self.one("Path", &n.path)?;
                Metadata::Import {
                    name: n.name.as_ref().map(|i| i.name.clone()),
                    path: n.path.value.clone(),
                }
            }
            N::ValueSpec(n) => {
                self.list("Names", &n.names)?;
                self.opt("Type", n.ty.as_ref())?;
                self.list("Values", &n.values)?;
                names_metadata(&n.names)
            }
            N::TypeSpec(n) => {
                self.one("Name", &n.name)?;
                self.opt("TypeParams", n.type_params.as_ref())?;
                self.one("Type", &n.ty)?;
                Metadata::Name {
                    name: Some(n.name.name.clone()),
                }
            }
            N::FieldList(n) => {
                self.list("List", &n.list)?;
                Metadata::Empty
            }
            N::Field(n) => {
                self.list("Names", &n.names)?;
                self.one("Type", &n.ty)?;
                self.opt("Tag", n.tag.as_ref())?;
                names_metadata(&n.names)
            }
            N::FuncType(n) => {
                self.opt("TypeParams", n.type_params.as_ref())?;
                self.one("Params", &n.params)?;
                self.opt("Results", n.results.as_ref())?;
                Metadata::Empty
            }
            N::BlockStmt(n) => {
                self.list("List", &n.list)?;
                Metadata::Empty
            }
            N::Ident(n) => Metadata::Name {
                name: Some(n.name.clone()),
            },
            N::BasicLit(n) => Metadata::Literal {
                value: n.value.clone(),
                kind: n.kind,
            },
            N::CompositeLit(n) => {
                self.opt("Type", n.ty.as_ref())?;
                self.list("Elts", &n.elts)?;
                Metadata::Empty
            }
            N::FuncLit(n) => {
                self.one("Type", &n.ty)?;
                self.one("Body", &n.body)?;
                Metadata::Empty
            }
            N::ParenExpr(n) => {
                self.one("X", &n.x)?;
                Metadata::Empty
            }
            N::SelectorExpr(n) => {
                self.one("X", &n.x)?;
                self.one("Sel", &n.sel)?;
                Metadata::Empty
            }
            N::IndexExpr(n) => {
                self.one("X", &n.x)?;
                self.one("Index", &n.index)?;
                Metadata::Empty
            }
            N::SliceExpr(n) => {
                self.one("X", &n.x)?;
                self.opt("Low", n.low.as_ref())?;
                self.opt("High", n.high.as_ref())?;
                self.opt("Max", n.max.as_ref())?;
                Metadata::Empty
            }
            N::TypeAssertExpr(n) => {
                self.one("X", &n.x)?;
                self.opt("Type", n.ty.as_ref())?;
                Metadata::Empty
            }
            N::CallExpr(n) => {
                self.one("Fun", &n.fun)?;
                self.list("Args", &n.args)?;
                Metadata::Empty
            }
            N::StarExpr(n) => {
                self.one("X", &n.x)?;
                Metadata::Empty
            }
            N::UnaryExpr(n) => {
                self.one("X", &n.x)?;
                Metadata::Operator { op: n.op.clone() }
            }
            N::BinaryExpr(n) => {
                self.one("X", &n.x)?;
                self.one("Y", &n.y)?;
                Metadata::Operator { op: n.op.clone() }
            }
            N::KeyValueExpr(n) => {
                self.one("Key", &n.key)?;
                self.one("Value", &n.value)?;
                Metadata::Empty
            }
            N::Ellipsis(n) => {
                self.opt("Elt", n.elt.as_ref())?;
                Metadata::Empty
            }
            N::ArrayType(n) => {
                self.opt("Len", n.len.as_ref())?;
                self.one("Elt", &n.elt)?;
                Metadata::Empty
            }
            N::StructType(n) => {
                self.one("Fields", &n.fields)?;
                Metadata::Empty
            }
            N::InterfaceType(n) => {
                self.one("Methods", &n.methods)?;
                Metadata::Empty
            }
            N::MapType(n) => {
                self.one("Key", &n.key)?;
                self.one("Value", &n.value)?;
                Metadata::Empty
            }
            N::ChanType(n) => {
                self.one("Value", &n.value)?;
                Metadata::Channel { dir: n.dir }
            }
            N::DeclStmt(n) => {
                self.one("Decl", &n.decl)?;
                Metadata::Empty
            }
            N::ExprStmt(n) => {
                self.one("X", &n.x)?;
                Metadata::Empty
            }
            N::SendStmt(n) => {
                self.one("Chan", &n.chan)?;
                self.one("Value", &n.value)?;
                Metadata::Empty
            }
            N::IncDecStmt(n) => {
                self.one("X", &n.x)?;
                Metadata::Token {
                    tok: Some(n.tok.to_string()),
                }
            }
            N::AssignStmt(n) => {
                self.list("Lhs", &n.lhs)?;
                self.list("Rhs", &n.rhs)?;
                Metadata::Token {
                    tok: Some(n.tok.clone()),
                }
            }
            N::GoStmt(n) => {
                self.one("Call", &n.call)?;
                Metadata::Empty
            }
            N::DeferStmt(n) => {
                self.one("Call", &n.call)?;
                Metadata::Empty
            }
            N::ReturnStmt(n) => {
                self.list("Results", &n.results)?;
                Metadata::Empty
            }
            N::BranchStmt(n) => {
                self.opt("Label", n.label.as_ref())?;
                Metadata::Token {
                    tok: Some(n.tok.as_str().to_string()),
                }
            }
            N::IfStmt(n) => {
                self.opt("Init", n.init.as_ref())?;
                self.one("Cond", &n.cond)?;
                self.one("Body", &n.body)?;
                self.opt("Else", n.els.as_ref())?;
                Metadata::Empty
            }
            N::SwitchStmt(n) => {
                self.opt("Init", n.init.as_ref())?;
                self.opt("Tag", n.tag.as_ref())?;
                self.one("Body", &n.body)?;
                Metadata::Empty
            }
            N::TypeSwitchStmt(n) => {
                self.opt("Init", n.init.as_ref())?;
                self.one("Assign", &n.assign)?;
                self.one("Body", &n.body)?;
                Metadata::Empty
            }
            N::CaseClause(n) => {
                self.list("List", &n.list)?;
                self.list("Body", &n.body)?;
                Metadata::Empty
            }
            N::ForStmt(n) => {
                self.opt("Init", n.init.as_ref())?;
                self.opt("Cond", n.cond.as_ref())?;
                self.opt("Post", n.post.as_ref())?;
                self.one("Body", &n.body)?;
                Metadata::Empty
            }
            N::RangeStmt(n) => {
                self.opt("Key", n.key.as_ref())?;
                self.opt("Value", n.value.as_ref())?;
                self.one("X", &n.x)?;
                self.one("Body", &n.body)?;
                Metadata::Token { tok: n.tok.clone() }
            }
            N::LabeledStmt(n) => {
                self.one("Label", &n.label)?;
                self.opt("Stmt", n.stmt.as_ref())?;
                Metadata::Empty
            }
            N::Unsupported(n) => {
                tracing::debug!(kind = %n.kind, "no decomposition for syntax kind");
                Metadata::Empty
            }
        };
        Ok(metadata)
    }
}

fn names_metadata(names: &Names) -> Metadata {
    Metadata::Names {
        names: names.iter().map(|n| n.name.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use goviz_core::Span;

    use super::*;
    use crate::engine::visual::types::NodeTag;
    use crate::syntax::ast::*;
    use crate::syntax::LitKind;

    fn ident(name: &str, pos: u32) -> Ident {
        Ident {
            span: Span::new(pos, pos + name.len() as u32),
            name: name.to_string(),
        }
    }

    fn call(args: usize) -> CallExpr {
        CallExpr {
            span: Span::new(1, 20),
            fun: Expr::Ident(ident("f", 1)),
            args: (0..args)
                .map(|i| Expr::Ident(ident("a", 3 + 2 * i as u32)))
                .collect(),
        }
    }

    #[test]
    fn absent_input_yields_placeholder() {
        let node = Transducer::default().transduce(None, None).unwrap();
        assert!(node.is_placeholder());
        assert_eq!(node.span, Span::EMPTY);
        assert!(node.children.is_empty() && node.metadata.is_empty());
        assert!(node.role.is_none());
    }

    #[test]
    fn role_is_assigned_by_caller() {
        let id = ident("x", 4);
        let node = Transducer::default()
            .transduce(Some(SyntaxNode::Ident(&id)), Some(Role::field("X")))
            .unwrap();
        assert_eq!(node.role, Some(Role::field("X")));
        assert_eq!(node.metadata.get("name").and_then(|v| v.as_str()), Some("x"));
    }

    #[test]
    fn single_argument_keeps_bare_role() {
        let c = call(1);
        let node = Transducer::default()
            .transduce(Some((&c).into()), None)
            .unwrap();
        let roles: Vec<_> = node.children.iter().map(|c| c.role.unwrap().to_string()).collect();
        assert_eq!(roles, ["Fun", "Args"]);
    }

    #[test]
    fn multiple_arguments_are_indexed() {
        let c = call(3);
        let node = Transducer::default()
            .transduce(Some((&c).into()), None)
            .unwrap();
        let roles: Vec<_> = node.children.iter().map(|c| c.role.unwrap().to_string()).collect();
        assert_eq!(roles, ["Fun", "Args[0]", "Args[1]", "Args[2]"]);
    }

    #[test]
    fn names_are_flattened_into_metadata_and_children() {
        let spec = ValueSpec {
            span: Span::new(5, 13),
            names: [ident("a", 5), ident("b", 8)].into_iter().collect(),
            ty: Some(Expr::Ident(ident("int", 10))),
            values: Vec::new(),
        };
        let node = Transducer::default()
            .transduce(Some((&spec).into()), None)
            .unwrap();
        let names = node.metadata.get("names").and_then(|v| v.as_list()).unwrap();
        assert_eq!(names, ["a", "b"]);
        let idents: Vec<_> = node
            .children
            .iter()
            .filter(|c| c.tag == NodeTag::Ident && c.role.is_some_and(|r| r.field_name() == "Names"))
            .map(|c| c.metadata.get("name").and_then(|v| v.as_str()).unwrap())
            .collect();
        assert_eq!(idents, ["a", "b"]);
    }

    #[test]
    fn absent_else_produces_no_child() {
        let stmt = IfStmt {
            span: Span::new(1, 20),
            init: None,
            cond: Expr::Ident(ident("ok", 4)),
            body: BlockStmt {
                span: Span::new(7, 20),
                list: Vec::new(),
            },
            els: None,
        };
        let node = Transducer::default()
            .transduce(Some((&stmt).into()), None)
            .unwrap();
        let roles: Vec<_> = node.children.iter().map(|c| c.role.unwrap().to_string()).collect();
        assert_eq!(roles, ["Cond", "Body"]);
        assert!(node.children.iter().all(|c| !c.is_placeholder()));
    }

    #[test]
    fn unsupported_kind_becomes_unknown_leaf() {
        let select = Stmt::Unsupported(Unsupported {
            span: Span::new(3, 30),
            kind: "select_statement".into(),
        });
        let node = Transducer::default()
            .transduce(Some((&select).into()), Some(Role::field("List")))
            .unwrap();
        assert_eq!(node.tag, NodeTag::Unknown);
        assert_eq!(node.span, Span::new(3, 30));
        assert!(node.children.is_empty() && node.metadata.is_empty());
    }

    #[test]
    fn literal_metadata() {
        let lit = BasicLit {
            span: Span::new(1, 6),
            kind: LitKind::String,
            value: "\"hi\"".into(),
        };
        let node = Transducer::default()
            .transduce(Some((&lit).into()), None)
            .unwrap();
        assert_eq!(node.metadata.get("kind").and_then(|v| v.as_str()), Some("STRING"));
        assert_eq!(node.metadata.get("value").and_then(|v| v.as_str()), Some("\"hi\""));
    }

    #[test]
    fn depth_limit_fails_closed() {
        let mut expr = Expr::Ident(ident("x", 10));
        for _ in 0..10 {
            expr = Expr::Paren(Box::new(ParenExpr {
                span: Span::new(1, 20),
                x: expr,
            }));
        }
        let shallow = Transducer::new(5);
        assert_eq!(
            shallow.transduce(Some((&expr).into()), None).unwrap_err(),
            TransduceError::DepthExceeded { limit: 5 }
        );
        // 10 parens plus the identifier.
        assert!(Transducer::new(11).transduce(Some((&expr).into()), None).is_ok());
        assert!(Transducer::new(10).transduce(Some((&expr).into()), None).is_err());
    }
}
