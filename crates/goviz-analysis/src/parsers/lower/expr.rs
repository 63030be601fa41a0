//! Expressions and types. Go treats types as expressions, and so does the
//! lowering: both go through [`Lowerer::expr`].

use goviz_core::errors::ParseError;
use tree_sitter::Node;

use super::{named_children, span_of, token, Lowerer};
use crate::stack::guarded;
use crate::syntax::ast::*;
use crate::syntax::{ChanDir, LitKind};

impl<'s> Lowerer<'s> {
    pub(super) fn expr(&mut self, node: Node) -> Result<Expr, ParseError> {
        self.enter()?;
        let lowered = guarded(|| self.expr_kind(node));
        self.leave();
        lowered
    }

    /// An `expression_list`, or a lone expression standing in for one.
    pub(super) fn expr_list(&mut self, node: Node) -> Result<Vec<Expr>, ParseError> {
        if node.kind() != "expression_list" {
            return Ok(vec![self.expr(node)?]);
        }
        named_children(node)
            .into_iter()
            .map(|e| self.expr(e))
            .collect()
    }

    fn expr_kind(&mut self, node: Node) -> Result<Expr, ParseError> {
        let span = span_of(node);
        let kind = node.kind();

        if let Some(lit) = LitKind::from_ts_kind(kind) {
            return Ok(Expr::BasicLit(self.basic_lit(node, lit)));
        }

        Ok(match kind {
            "identifier" | "field_identifier" | "type_identifier" | "package_identifier"
            | "label_name" | "blank_identifier" | "true" | "false" | "nil" | "iota" => {
                Expr::Ident(self.ident(node))
            }

            "parenthesized_expression" | "parenthesized_type" => match first_named(node) {
                Some(inner) => Expr::Paren(Box::new(ParenExpr {
                    span,
                    x: self.expr(inner)?,
                })),
                None => Expr::Unsupported(self.unsupported(node)),
            },

            "call_expression" => {
                let fun = self.expr(self.required(node, "function")?)?;
                let mut args = Vec::new();
                if let Some(list) = node.child_by_field_name("arguments") {
                    for arg in named_children(list) {
                        // `f(xs...)`: the spread marker has no node of its own.
                        let arg = match arg.kind() {
                            "variadic_argument" => first_named(arg).unwrap_or(arg),
                            _ => arg,
                        };
                        args.push(self.expr(arg)?);
                    }
                }
                Expr::Call(Box::new(CallExpr { span, fun, args }))
            }

            "type_conversion_expression" => Expr::Call(Box::new(CallExpr {
                span,
                fun: self.expr(self.required(node, "type")?)?,
                args: vec![self.expr(self.required(node, "operand")?)?],
            })),

            "selector_expression" => Expr::Selector(Box::new(SelectorExpr {
                span,
                x: self.expr(self.required(node, "operand")?)?,
                sel: self.ident(self.required(node, "field")?),
            })),

            "qualified_type" => Expr::Selector(Box::new(SelectorExpr {
                span,
                x: Expr::Ident(self.ident(self.required(node, "package")?)),
                sel: self.ident(self.required(node, "name")?),
            })),

            "index_expression" => Expr::Index(Box::new(IndexExpr {
                span,
                x: self.expr(self.required(node, "operand")?)?,
                index: self.expr(self.required(node, "index")?)?,
            })),

            "slice_expression" => Expr::Slice(Box::new(SliceExpr {
                span,
                x: self.expr(self.required(node, "operand")?)?,
                low: self.opt_expr(node, "start")?,
                high: self.opt_expr(node, "end")?,
                max: self.opt_expr(node, "capacity")?,
            })),

            "type_assertion_expression" => Expr::TypeAssert(Box::new(TypeAssertExpr {
                span,
                x: self.expr(self.required(node, "operand")?)?,
                ty: self.opt_expr(node, "type")?,
            })),

            "unary_expression" => {
                let op = self.text(self.required(node, "operator")?);
                let x = self.expr(self.required(node, "operand")?)?;
                if op == "*" {
                    Expr::Star(Box::new(StarExpr { span, x }))
                } else {
                    Expr::Unary(Box::new(UnaryExpr {
                        span,
                        op: op.to_string(),
                        x,
                    }))
                }
            }

            "binary_expression" => Expr::Binary(Box::new(BinaryExpr {
                span,
                x: self.expr(self.required(node, "left")?)?,
                op: self.text(self.required(node, "operator")?).to_string(),
                y: self.expr(self.required(node, "right")?)?,
            })),

            "composite_literal" => {
                let ty = self.opt_expr(node, "type")?;
                let elts = match node.child_by_field_name("body") {
                    Some(body) => self.elements(body)?,
                    None => Vec::new(),
                };
                Expr::Composite(Box::new(CompositeLit { span, ty, elts }))
            }

            // Elided type inside an outer composite literal: `{1, 2}`.
            "literal_value" => Expr::Composite(Box::new(CompositeLit {
                span,
                ty: None,
                elts: self.elements(node)?,
            })),

            "literal_element" => match first_named(node) {
                Some(inner) => self.expr_kind(inner)?,
                None => Expr::Unsupported(self.unsupported(node)),
            },

            "keyed_element" => {
                let parts = named_children(node);
                let key = node.child_by_field_name("key").or_else(|| parts.first().copied());
                let value = node.child_by_field_name("value").or_else(|| parts.get(1).copied());
                match (key, value) {
                    (Some(k), Some(v)) => Expr::KeyValue(Box::new(KeyValueExpr {
                        span,
                        key: self.expr(k)?,
                        value: self.expr(v)?,
                    })),
                    _ => Expr::Unsupported(self.unsupported(node)),
                }
            }

            "func_literal" => Expr::FuncLit(Box::new(FuncLit {
                span,
                ty: self.signature(node, span.pos)?,
                body: self.block(self.required(node, "body")?)?,
            })),

            "pointer_type" => match first_named(node) {
                Some(inner) => Expr::Star(Box::new(StarExpr {
                    span,
                    x: self.expr(inner)?,
                })),
                None => Expr::Unsupported(self.unsupported(node)),
            },

            "array_type" => Expr::ArrayType(Box::new(ArrayType {
                span,
                len: Some(self.expr(self.required(node, "length")?)?),
                elt: self.expr(self.required(node, "element")?)?,
            })),

            "implicit_length_array_type" => {
                let dots = token(node, "...").map_or(span, span_of);
                Expr::ArrayType(Box::new(ArrayType {
                    span,
                    len: Some(Expr::Ellipsis(Box::new(Ellipsis {
                        span: dots,
                        elt: None,
                    }))),
                    elt: self.expr(self.required(node, "element")?)?,
                }))
            }

            "slice_type" => Expr::ArrayType(Box::new(ArrayType {
                span,
                len: None,
                elt: self.expr(self.required(node, "element")?)?,
            })),

            "struct_type" => Expr::StructType(Box::new(StructType {
                span,
                fields: self.struct_fields(node)?,
            })),

            "interface_type" => Expr::InterfaceType(Box::new(InterfaceType {
                span,
                methods: self.interface_methods(node)?,
            })),

            "map_type" => Expr::MapType(Box::new(MapType {
                span,
                key: self.expr(self.required(node, "key")?)?,
                value: self.expr(self.required(node, "value")?)?,
            })),

            "channel_type" => Expr::ChanType(Box::new(ChanType {
                span,
                dir: chan_dir(node),
                value: self.expr(self.required(node, "value")?)?,
            })),

            "function_type" => Expr::FuncType(Box::new(self.signature(node, span.pos)?)),

            _ => Expr::Unsupported(self.unsupported(node)),
        })
    }

    fn opt_expr(&mut self, node: Node, field: &str) -> Result<Option<Expr>, ParseError> {
        node.child_by_field_name(field)
            .map(|n| self.expr(n))
            .transpose()
    }

    /// Elements of a `literal_value`, braces excluded.
    fn elements(&mut self, body: Node) -> Result<Vec<Expr>, ParseError> {
        named_children(body)
            .into_iter()
            .map(|e| self.expr(e))
            .collect()
    }
}

fn first_named(node: Node) -> Option<Node> {
    named_children(node).into_iter().next()
}

/// `<-chan T` receives, `chan<- T` sends; the arrow's place decides.
fn chan_dir(node: Node) -> ChanDir {
    let Some(arrow) = token(node, "<-") else {
        return ChanDir::Both;
    };
    match token(node, "chan") {
        Some(chan) if chan.start_byte() < arrow.start_byte() => ChanDir::Send,
        _ => ChanDir::Recv,
    }
}
