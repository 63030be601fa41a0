//! Declarations, specs, and field lists.

use goviz_core::errors::ParseError;
use goviz_core::Span;
use tree_sitter::Node;

use super::{delimited_span, field_children, named_children, span_of, token, Lowerer};
use crate::syntax::ast::*;
use crate::syntax::{DeclKeyword, LitKind};

impl<'s> Lowerer<'s> {
    pub(super) fn top_level(&mut self, node: Node) -> Result<Decl, ParseError> {
        Ok(match node.kind() {
            "function_declaration" | "method_declaration" => {
                Decl::Func(Box::new(self.func_decl(node)?))
            }
            "import_declaration" | "const_declaration" | "var_declaration" | "type_declaration" => {
                Decl::Gen(self.gen_decl(node)?)
            }
            _ => Decl::Bad(self.unsupported(node)),
        })
    }

    fn func_decl(&mut self, node: Node) -> Result<FuncDecl, ParseError> {
        let recv = node
            .child_by_field_name("receiver")
            .map(|r| self.field_list(r))
            .transpose()?;
        let name = self.ident(self.required(node, "name")?);
        let ty = self.signature(node, span_of(node).pos)?;
        let body = node
            .child_by_field_name("body")
            .map(|b| self.block(b))
            .transpose()?;
        Ok(FuncDecl {
            span: span_of(node),
            recv,
            name,
            ty,
            body,
        })
    }

    /// Type parameters, parameters, and results of a function-like node, as
    /// a `FuncType` starting at `start` and ending after its last signature
    /// part. Only declarations carry type parameters.
    pub(super) fn signature(&mut self, node: Node, start: u32) -> Result<FuncType, ParseError> {
        let type_params = self.type_params(node)?;
        let params = self.field_list(self.required(node, "parameters")?)?;
        let results = node
            .child_by_field_name("result")
            .map(|r| self.results(r))
            .transpose()?;
        let end = results.as_ref().map_or(params.span.end, |r| r.span.end);
        Ok(FuncType {
            span: Span::new(start, end),
            type_params,
            params,
            results,
        })
    }

    /// The `[T any, K comparable]` list of a generic declaration, if any.
    fn type_params(&mut self, node: Node) -> Result<Option<FieldList>, ParseError> {
        let Some(list) = node.child_by_field_name("type_parameters") else {
            return Ok(None);
        };
        let mut fields = Vec::new();
        for decl in named_children(list) {
            if decl.kind() != "type_parameter_declaration" {
                continue;
            }
            let constraint = self.required(decl, "type")?;
            let ty = match constraint.kind() {
                "type_constraint" | "type_elem" => self.type_union(constraint)?,
                _ => self.expr(constraint)?,
            };
            fields.push(Field {
                span: span_of(decl),
                names: self.idents(field_children(decl, "name")),
                ty,
                tag: None,
            });
        }
        Ok(Some(FieldList {
            span: span_of(list),
            list: fields,
        }))
    }

    /// A result list: parenthesized like parameters, or a bare type.
    fn results(&mut self, node: Node) -> Result<FieldList, ParseError> {
        if node.kind() == "parameter_list" {
            return self.field_list(node);
        }
        let ty = self.expr(node)?;
        let span = ty.span();
        Ok(FieldList {
            span,
            list: vec![Field {
                span,
                names: Names::new(),
                ty,
                tag: None,
            }],
        })
    }

    /// A `parameter_list`.
    pub(super) fn field_list(&mut self, node: Node) -> Result<FieldList, ParseError> {
        let mut list = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                "parameter_declaration" => {
                    let ty = self.expr(self.required(child, "type")?)?;
                    list.push(Field {
                        span: span_of(child),
                        names: self.idents(field_children(child, "name")),
                        ty,
                        tag: None,
                    });
                }
                "variadic_parameter_declaration" => {
                    let elt = self.expr(self.required(child, "type")?)?;
                    let start = token(child, "...").map_or(span_of(child).pos, |t| span_of(t).pos);
                    let ellipsis = Ellipsis {
                        span: Span::new(start, elt.span().end),
                        elt: Some(elt),
                    };
                    list.push(Field {
                        span: span_of(child),
                        names: self.idents(field_children(child, "name")),
                        ty: Expr::Ellipsis(Box::new(ellipsis)),
                        tag: None,
                    });
                }
                _ => {}
            }
        }
        Ok(FieldList {
            span: span_of(node),
            list,
        })
    }

    /// Fields of a `struct_type`, spanning its braces.
    pub(super) fn struct_fields(&mut self, node: Node) -> Result<FieldList, ParseError> {
        let Some(decls) = named_children(node)
            .into_iter()
            .find(|c| c.kind() == "field_declaration_list")
        else {
            return Ok(FieldList {
                span: span_of(node),
                list: Vec::new(),
            });
        };

        let mut list = Vec::new();
        for field in named_children(decls) {
            if field.kind() != "field_declaration" {
                continue;
            }
            let names = self.idents(field_children(field, "name"));
            let mut ty = self.expr(self.required(field, "type")?)?;
            if names.is_empty() {
                // Embedded `*T`: the star is a bare token before the type.
                if let Some(star) = token(field, "*") {
                    ty = Expr::Star(Box::new(StarExpr {
                        span: Span::new(span_of(star).pos, ty.span().end),
                        x: ty,
                    }));
                }
            }
            let tag = field
                .child_by_field_name("tag")
                .map(|t| self.basic_lit(t, LitKind::String));
            list.push(Field {
                span: span_of(field),
                names,
                ty,
                tag,
            });
        }
        Ok(FieldList {
            span: span_of(decls),
            list,
        })
    }

    /// Elements of an `interface_type`: methods and embedded type sets.
    pub(super) fn interface_methods(&mut self, node: Node) -> Result<FieldList, ParseError> {
        let mut list = Vec::new();
        for elem in named_children(node) {
            let field = match elem.kind() {
                "method_elem" | "method_spec" => {
                    let name = self.ident(self.required(elem, "name")?);
                    let params = self.required(elem, "parameters")?;
                    let ty = self.signature(elem, span_of(params).pos)?;
                    Field {
                        span: span_of(elem),
                        names: std::iter::once(name).collect(),
                        ty: Expr::FuncType(Box::new(ty)),
                        tag: None,
                    }
                }
                "type_elem" | "constraint_elem" => Field {
                    span: span_of(elem),
                    names: Names::new(),
                    ty: self.type_union(elem)?,
                    tag: None,
                },
                _ => Field {
                    span: span_of(elem),
                    names: Names::new(),
                    ty: self.expr(elem)?,
                    tag: None,
                },
            };
            list.push(field);
        }
        Ok(FieldList {
            span: delimited_span(node, "{", "}"),
            list,
        })
    }

    /// `A | B | C` folds left into binary `|` expressions.
    fn type_union(&mut self, node: Node) -> Result<Expr, ParseError> {
        let mut terms = named_children(node).into_iter();
        let Some(first) = terms.next() else {
            return Ok(Expr::Unsupported(self.unsupported(node)));
        };
        let mut acc = self.expr(first)?;
        for term in terms {
            let y = self.expr(term)?;
            acc = Expr::Binary(Box::new(BinaryExpr {
                span: acc.span().cover(y.span()),
                x: acc,
                op: "|".to_string(),
                y,
            }));
        }
        Ok(acc)
    }

    pub(super) fn gen_decl(&mut self, node: Node) -> Result<GenDecl, ParseError> {
        let tok = match node.kind() {
            "import_declaration" => DeclKeyword::Import,
            "const_declaration" => DeclKeyword::Const,
            "var_declaration" => DeclKeyword::Var,
            _ => DeclKeyword::Type,
        };
        let mut specs = Vec::new();
        self.collect_specs(node, &mut specs)?;
        Ok(GenDecl {
            span: span_of(node),
            tok,
            specs,
        })
    }

    fn collect_specs(&mut self, node: Node, specs: &mut Vec<Spec>) -> Result<(), ParseError> {
        for child in named_children(node) {
            match child.kind() {
                "import_spec" => specs.push(Spec::Import(self.import_spec(child)?)),
                "const_spec" | "var_spec" => specs.push(Spec::Value(self.value_spec(child)?)),
                "type_spec" | "type_alias" => {
                    let name = self.ident(self.required(child, "name")?);
                    let type_params = self.type_params(child)?;
                    let ty = self.expr(self.required(child, "type")?)?;
                    specs.push(Spec::Type(TypeSpec {
                        span: span_of(child),
                        name,
                        type_params,
                        ty,
                    }))
                }
                "import_spec_list" | "var_spec_list" | "const_spec_list" => {
                    self.collect_specs(child, specs)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn import_spec(&mut self, node: Node) -> Result<ImportSpec, ParseError> {
        let path = self.required(node, "path")?;
        Ok(ImportSpec {
            span: span_of(node),
            name: node.child_by_field_name("name").map(|n| self.ident(n)),
            path: self.basic_lit(path, LitKind::String),
        })
    }

    fn value_spec(&mut self, node: Node) -> Result<ValueSpec, ParseError> {
        let ty = node
            .child_by_field_name("type")
            .map(|t| self.expr(t))
            .transpose()?;
        let values = match node.child_by_field_name("value") {
            Some(v) => self.expr_list(v)?,
            None => Vec::new(),
        };
        Ok(ValueSpec {
            span: span_of(node),
            names: self.idents(field_children(node, "name")),
            ty,
            values,
        })
    }
}
