//! Statements and blocks.

use goviz_core::errors::ParseError;
use goviz_core::Span;
use tree_sitter::Node;

use super::{delimited_span, named_children, span_of, token, unfielded_children, Lowerer};
use crate::stack::guarded;
use crate::syntax::ast::*;
use crate::syntax::BranchKeyword;

impl<'s> Lowerer<'s> {
    pub(super) fn block(&mut self, node: Node) -> Result<BlockStmt, ParseError> {
        Ok(BlockStmt {
            span: span_of(node),
            list: self.statements(node)?,
        })
    }

    /// Statements directly under `node`, looking through `statement_list`.
    fn statements(&mut self, node: Node) -> Result<Vec<Stmt>, ParseError> {
        let mut list = Vec::new();
        for child in unfielded_children(node) {
            if child.kind() == "statement_list" {
                for stmt in named_children(child) {
                    list.push(self.stmt(stmt)?);
                }
            } else {
                list.push(self.stmt(child)?);
            }
        }
        Ok(list)
    }

    pub(super) fn stmt(&mut self, node: Node) -> Result<Stmt, ParseError> {
        self.enter()?;
        let lowered = guarded(|| self.stmt_kind(node));
        self.leave();
        lowered
    }

    fn opt_stmt(&mut self, node: Node, field: &str) -> Result<Option<Stmt>, ParseError> {
        node.child_by_field_name(field)
            .map(|n| self.stmt(n))
            .transpose()
    }

    fn stmt_kind(&mut self, node: Node) -> Result<Stmt, ParseError> {
        let span = span_of(node);

        Ok(match node.kind() {
            "expression_statement" => match named_children(node).into_iter().next() {
                Some(x) => Stmt::Expr(ExprStmt {
                    span,
                    x: self.expr(x)?,
                }),
                None => Stmt::Unsupported(self.unsupported(node)),
            },

            // Simple statements in `if`/`for`/`switch` headers come bare.
            kind if is_header_expression(kind) => Stmt::Expr(ExprStmt {
                span,
                x: self.expr(node)?,
            }),

            "send_statement" => Stmt::Send(Box::new(SendStmt {
                span,
                chan: self.expr(self.required(node, "channel")?)?,
                value: self.expr(self.required(node, "value")?)?,
            })),

            "inc_statement" | "dec_statement" => match named_children(node).into_iter().next() {
                Some(x) => Stmt::IncDec(Box::new(IncDecStmt {
                    span,
                    x: self.expr(x)?,
                    tok: if node.kind() == "inc_statement" { "++" } else { "--" },
                })),
                None => Stmt::Unsupported(self.unsupported(node)),
            },

            "assignment_statement" => Stmt::Assign(Box::new(AssignStmt {
                span,
                lhs: self.expr_list(self.required(node, "left")?)?,
                tok: self.text(self.required(node, "operator")?).to_string(),
                rhs: self.expr_list(self.required(node, "right")?)?,
            })),

            "short_var_declaration" => Stmt::Assign(Box::new(AssignStmt {
                span,
                lhs: self.expr_list(self.required(node, "left")?)?,
                tok: ":=".to_string(),
                rhs: self.expr_list(self.required(node, "right")?)?,
            })),

            "go_statement" | "defer_statement" => {
                let Some(call) = named_children(node).into_iter().next() else {
                    return Ok(Stmt::Unsupported(self.unsupported(node)));
                };
                let call = self.expr(call)?;
                if node.kind() == "go_statement" {
                    Stmt::Go(Box::new(GoStmt { span, call }))
                } else {
                    Stmt::Defer(Box::new(DeferStmt { span, call }))
                }
            }

            "return_statement" => {
                let results = match named_children(node).into_iter().next() {
                    Some(list) => self.expr_list(list)?,
                    None => Vec::new(),
                };
                Stmt::Return(ReturnStmt { span, results })
            }

            "break_statement" | "continue_statement" | "goto_statement" | "fallthrough_statement" => {
                let tok = match node.kind() {
                    "break_statement" => BranchKeyword::Break,
                    "continue_statement" => BranchKeyword::Continue,
                    "goto_statement" => BranchKeyword::Goto,
                    _ => BranchKeyword::Fallthrough,
                };
                let label = named_children(node)
                    .into_iter()
                    .find(|c| c.kind() == "label_name")
                    .map(|l| self.ident(l));
                Stmt::Branch(BranchStmt { span, tok, label })
            }

            "block" => Stmt::Block(self.block(node)?),

            "if_statement" => {
                let init = self.opt_stmt(node, "initializer")?;
                let cond = self.expr(self.required(node, "condition")?)?;
                let body = self.block(self.required(node, "consequence")?)?;
                let els = self.opt_stmt(node, "alternative")?;
                Stmt::If(Box::new(IfStmt {
                    span,
                    init,
                    cond,
                    body,
                    els,
                }))
            }

            "for_statement" => self.for_stmt(node)?,
            "expression_switch_statement" => self.switch_stmt(node)?,
            "type_switch_statement" => self.type_switch_stmt(node)?,

            "labeled_statement" => {
                let label = self.ident(self.required(node, "label")?);
                let stmt = match unfielded_children(node).into_iter().next() {
                    Some(s) => Some(self.stmt(s)?),
                    None => None,
                };
                Stmt::Labeled(Box::new(LabeledStmt { span, label, stmt }))
            }

            "const_declaration" | "var_declaration" | "type_declaration" => Stmt::Decl(DeclStmt {
                span,
                decl: self.gen_decl(node)?,
            }),

            _ => Stmt::Unsupported(self.unsupported(node)),
        })
    }

    fn for_stmt(&mut self, node: Node) -> Result<Stmt, ParseError> {
        let span = span_of(node);
        let body_node = self.required(node, "body")?;
        let header = named_children(node).into_iter().find(|c| *c != body_node);
        let body = self.block(body_node)?;

        let Some(header) = header else {
            return Ok(Stmt::For(Box::new(ForStmt {
                span,
                init: None,
                cond: None,
                post: None,
                body,
            })));
        };

        Ok(match header.kind() {
            "for_clause" => Stmt::For(Box::new(ForStmt {
                span,
                init: self.opt_stmt(header, "initializer")?,
                cond: header
                    .child_by_field_name("condition")
                    .map(|c| self.expr(c))
                    .transpose()?,
                post: self.opt_stmt(header, "update")?,
                body,
            })),
            "range_clause" => {
                let (key, value) = match header.child_by_field_name("left") {
                    Some(left) => {
                        let mut lhs = self.expr_list(left)?.into_iter();
                        (lhs.next(), lhs.next())
                    }
                    None => (None, None),
                };
                let tok = token(header, ":=")
                    .or_else(|| token(header, "="))
                    .map(|t| self.text(t).to_string());
                Stmt::Range(Box::new(RangeStmt {
                    span,
                    key,
                    value,
                    tok,
                    x: self.expr(self.required(header, "right")?)?,
                    body,
                }))
            }
            // `for cond { ... }`
            _ => Stmt::For(Box::new(ForStmt {
                span,
                init: None,
                cond: Some(self.expr(header)?),
                post: None,
                body,
            })),
        })
    }

    fn switch_stmt(&mut self, node: Node) -> Result<Stmt, ParseError> {
        let init = self.opt_stmt(node, "initializer")?;
        let tag = node
            .child_by_field_name("value")
            .map(|v| self.expr(v))
            .transpose()?;
        let body = self.case_body(node)?;
        Ok(Stmt::Switch(Box::new(SwitchStmt {
            span: span_of(node),
            init,
            tag,
            body,
        })))
    }

    fn type_switch_stmt(&mut self, node: Node) -> Result<Stmt, ParseError> {
        let init = self.opt_stmt(node, "initializer")?;
        let value = self.required(node, "value")?;
        let guard_end = type_guard_end(node).unwrap_or(span_of(value).end);

        let assert = Expr::TypeAssert(Box::new(TypeAssertExpr {
            span: Span::new(span_of(value).pos, guard_end),
            x: self.expr(value)?,
            ty: None,
        }));
        let assign = match node.child_by_field_name("alias") {
            Some(alias) => Stmt::Assign(Box::new(AssignStmt {
                span: Span::new(span_of(alias).pos, guard_end),
                lhs: self.expr_list(alias)?,
                tok: ":=".to_string(),
                rhs: vec![assert],
            })),
            None => Stmt::Expr(ExprStmt {
                span: assert.span(),
                x: assert,
            }),
        };

        let body = self.case_body(node)?;
        Ok(Stmt::TypeSwitch(Box::new(TypeSwitchStmt {
            span: span_of(node),
            init,
            assign,
            body,
        })))
    }

    /// The `{ case ... }` part of a switch, as a block of case clauses.
    fn case_body(&mut self, node: Node) -> Result<BlockStmt, ParseError> {
        let mut list = Vec::new();
        for case in named_children(node) {
            let exprs = match case.kind() {
                "expression_case" => match case.child_by_field_name("value") {
                    Some(v) => self.expr_list(v)?,
                    None => Vec::new(),
                },
                "type_case" => {
                    let mut cursor = case.walk();
                    let types: Vec<Node> = case.children_by_field_name("type", &mut cursor).collect();
                    types
                        .into_iter()
                        .map(|t| self.expr(t))
                        .collect::<Result<Vec<_>, _>>()?
                }
                "default_case" => Vec::new(),
                _ => continue,
            };
            self.enter()?;
            let body = guarded(|| self.statements(case));
            self.leave();
            list.push(Stmt::CaseClause(CaseClause {
                span: span_of(case),
                list: exprs,
                body: body?,
            }));
        }
        Ok(BlockStmt {
            span: delimited_span(node, "{", "}"),
            list,
        })
    }
}

/// Expression kinds that appear as simple statements without an
/// `expression_statement` wrapper, e.g. a `for` post statement `f()`.
fn is_header_expression(kind: &str) -> bool {
    matches!(
        kind,
        "call_expression"
            | "identifier"
            | "selector_expression"
            | "index_expression"
            | "unary_expression"
            | "binary_expression"
            | "parenthesized_expression"
            | "type_assertion_expression"
    )
}

/// End of the `.(type)` guard: the `)` following the `type` keyword.
fn type_guard_end(node: Node) -> Option<u32> {
    let count = node.child_count();
    let mut seen_type = false;
    for i in 0..count {
        let child = node.child(i)?;
        if child.is_named() {
            continue;
        }
        match child.kind() {
            "type" => seen_type = true,
            ")" if seen_type => return Some(span_of(child).end),
            _ => {}
        }
    }
    None
}
