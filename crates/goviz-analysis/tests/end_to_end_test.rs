//! End-to-end tests: Go source through the entry contract to visual JSON.

use std::path::Path;

use goviz_analysis::engine::visual::{NodeTag, VisualNode};
use goviz_analysis::{parse_go_code, parse_go_code_with, parse_go_tree, ParseOutput};
use goviz_core::config::TransducerConfig;
use goviz_core::constants::DEFAULT_MAX_DEPTH;
use goviz_core::errors::BridgeError;
use goviz_core::GovizConfig;

fn load_fixture() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/go/reference.go");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()))
}

fn tree_of(source: &str) -> VisualNode {
    parse_go_tree(&GovizConfig::default(), Some(source))
        .unwrap_or_else(|e| panic!("parse failed: {e}"))
}

fn json_of(source: &str) -> serde_json::Value {
    let out = parse_go_code(Some(source));
    let ast = out
        .ast()
        .unwrap_or_else(|| panic!("expected ast, got error: {:?}", out.error()));
    serde_json::from_str(ast).expect("ast is valid JSON")
}

fn with_max_depth(max_depth: usize) -> GovizConfig {
    GovizConfig {
        transducer: TransducerConfig {
            max_depth: Some(max_depth),
        },
        ..GovizConfig::default()
    }
}

/// `package p` with one var initialized by a left-nested `+` chain.
fn concat_chain(terms: usize) -> String {
    format!("package p\nvar s = {}\n", vec!["\"a\""; terms].join(" + "))
}

/// Number of nodes on the longest root-to-leaf path.
fn tree_depth(root: &VisualNode) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(root, 1)];
    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(node.children.iter().map(|c| (c, depth + 1)));
    }
    deepest
}

fn assert_spans_nested(node: &VisualNode) {
    for child in &node.children {
        if !child.is_placeholder() {
            assert!(
                node.span.pos <= child.span.pos && child.span.end <= node.span.end,
                "{} {:?} escapes parent {} {:?}",
                child.tag,
                child.span,
                node.tag,
                node.span
            );
        }
        assert_spans_nested(child);
    }
}

// ---- Entry contract ----

#[test]
fn e2e_01_single_function_file() {
    let tree = tree_of("package main\nfunc f(x int) int { return x }\n");
    assert_eq!(tree.tag, NodeTag::File);
    assert!(tree.role.is_none());
    assert_eq!(tree.metadata.get("name").and_then(|v| v.as_str()), Some("main"));

    let func = tree.child("Decls").expect("single decl is labelled Decls");
    assert_eq!(func.tag, NodeTag::FuncDecl);
    assert_eq!(func.metadata.get("name").and_then(|v| v.as_str()), Some("f"));

    let tags: Vec<NodeTag> = func.children.iter().map(|c| c.tag).collect();
    assert_eq!(tags, [NodeTag::Ident, NodeTag::FuncType, NodeTag::BlockStmt]);

    let body = func.child("Body").unwrap();
    let ret = body.child("List").unwrap();
    assert_eq!(ret.tag, NodeTag::ReturnStmt);
    assert_eq!(ret.child("Results").unwrap().tag, NodeTag::Ident);
}

#[test]
fn e2e_02_wire_keys() {
    let json = json_of("package main\nfunc f(x int) int { return x }\n");
    let obj = json.as_object().unwrap();
    assert_eq!(obj["type"], "File");
    assert!(obj.contains_key("pos"));
    assert!(obj.contains_key("end"));
    assert!(obj["children"].is_array());
    assert_eq!(obj["metadata"], serde_json::json!({"name": "main"}));
    assert!(!obj.contains_key("fieldName"), "root has no role");

    let decl = &obj["children"][1];
    assert_eq!(decl["type"], "FuncDecl");
    assert_eq!(decl["fieldName"], "Decls");
}

#[test]
fn e2e_03_indexed_roles_for_multiple_items() {
    let json = json_of("package p\nvar a, b = 1, 2\n");
    let spec = &json["children"][1]["children"][0];
    assert_eq!(spec["type"], "ValueSpec");
    let roles: Vec<&str> = spec["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["fieldName"].as_str().unwrap())
        .collect();
    assert_eq!(roles, ["Names[0]", "Names[1]", "Values[0]", "Values[1]"]);
    assert_eq!(spec["metadata"], serde_json::json!({"names": ["a", "b"]}));
}

#[test]
fn e2e_04_literal_and_operator_metadata() {
    let json = json_of("package p\nvar x = 1 + 2.5\n");
    let binary = &json["children"][1]["children"][0]["children"][1];
    assert_eq!(binary["type"], "BinaryExpr");
    assert_eq!(binary["metadata"], serde_json::json!({"op": "+"}));
    assert_eq!(
        binary["children"][1]["metadata"],
        serde_json::json!({"value": "2.5", "kind": "FLOAT"})
    );
}

#[test]
fn e2e_05_syntax_error_reports_location() {
    let out = parse_go_code(Some("func f( { "));
    let message = out.error().expect("syntax error");
    assert!(out.ast().is_none());
    assert!(message.starts_with("input.go:1:"), "got: {message}");
    assert!(message.contains("syntax error"), "got: {message}");
}

#[test]
fn e2e_06_missing_source() {
    assert_eq!(
        parse_go_code(None),
        ParseOutput::Error("Source code argument is required".to_string())
    );
}

#[test]
fn e2e_07_empty_source_is_an_empty_file() {
    let tree = tree_of("");
    assert_eq!(tree.tag, NodeTag::File);
    assert!(tree.children.is_empty());
}

#[test]
fn e2e_08_output_is_deterministic() {
    let source = load_fixture();
    let first = parse_go_code(Some(&source));
    let second = parse_go_code(Some(&source));
    assert!(!first.is_error());
    assert_eq!(first, second);
}

// ---- Limits ----

#[test]
fn e2e_10_nesting_depth_limit() {
    let source = format!("package p\nvar x = {}1{}\n", "(".repeat(40), ")".repeat(40));
    assert!(!parse_go_code(Some(&source)).is_error(), "default limit allows 40 levels");

    let out = parse_go_code_with(&with_max_depth(16), Some(&source));
    assert_eq!(out.error(), Some("maximum nesting depth of 16 exceeded"));
}

#[test]
fn e2e_13_long_chain_under_default_limit() {
    // File, GenDecl, ValueSpec, then one BinaryExpr per `+`, then the leaf.
    let source = concat_chain(DEFAULT_MAX_DEPTH - 3);
    let tree = tree_of(&source);
    assert_eq!(tree_depth(&tree), DEFAULT_MAX_DEPTH);

    let out = parse_go_code(Some(&source));
    let ast = out
        .ast()
        .unwrap_or_else(|| panic!("expected ast, got error: {:?}", out.error()));
    assert!(ast.starts_with(r#"{"type":"File""#));
    assert_eq!(ast.matches(r#""type":"BinaryExpr""#).count(), DEFAULT_MAX_DEPTH - 4);
}

#[test]
fn e2e_14_long_chain_at_default_limit_is_rejected() {
    let out = parse_go_code(Some(&concat_chain(DEFAULT_MAX_DEPTH - 2)));
    let expected = format!("maximum nesting depth of {DEFAULT_MAX_DEPTH} exceeded");
    assert_eq!(out.error(), Some(expected.as_str()));
}

#[test]
fn e2e_15_deep_blocks_under_default_limit() {
    // File, FuncDecl, then one BlockStmt per brace pair.
    let nested = |k: usize| format!("package p\nfunc f() {}{}\n", "{".repeat(k), "}".repeat(k));

    let tree = tree_of(&nested(DEFAULT_MAX_DEPTH - 2));
    assert_eq!(tree_depth(&tree), DEFAULT_MAX_DEPTH);

    let out = parse_go_code(Some(&nested(DEFAULT_MAX_DEPTH - 1)));
    assert_eq!(
        out.error(),
        Some(format!("maximum nesting depth of {DEFAULT_MAX_DEPTH} exceeded").as_str())
    );
}

#[test]
fn e2e_11_oversized_source() {
    let mut config = GovizConfig::default();
    config.parser.max_source_bytes = Some(16);
    let err = parse_go_tree(&config, Some("package main\nfunc f() {}\n")).unwrap_err();
    assert!(matches!(err, BridgeError::Parse(_)), "got {err:?}");
    assert!(err.to_string().contains("exceeding the limit of 16 bytes"));
}

#[test]
fn e2e_12_custom_file_name_in_diagnostics() {
    let mut config = GovizConfig::default();
    config.parser.file_name = Some("main.go".to_string());
    let out = parse_go_code_with(&config, Some("package main\nfunc {\n"));
    assert!(out.error().unwrap().starts_with("main.go:"));
}

// ---- Reference fixture ----

#[test]
fn e2e_20_fixture_parses() {
    let tree = tree_of(&load_fixture());
    assert_eq!(tree.metadata.get("name").and_then(|v| v.as_str()), Some("inventory"));
    // Name plus 19 top-level declarations.
    assert_eq!(tree.children.len(), 20);
    assert!(tree.node_count() > 300);
}

#[test]
fn e2e_21_fixture_spans_nest() {
    let source = load_fixture();
    let tree = tree_of(&source);
    assert_spans_nested(&tree);
    let limit = source.len() as u32 + 1;
    for node in tree.descendants() {
        assert!(node.span.pos <= node.span.end);
        assert!(node.span.end <= limit, "{} ends past the source", node.tag);
    }
}

#[test]
fn e2e_22_fixture_covers_node_kinds() {
    let tree = tree_of(&load_fixture());
    let seen: std::collections::HashSet<NodeTag> = tree.descendants().map(|n| n.tag).collect();
    for tag in [
        NodeTag::ImportSpec,
        NodeTag::ValueSpec,
        NodeTag::TypeSpec,
        NodeTag::StructType,
        NodeTag::InterfaceType,
        NodeTag::MapType,
        NodeTag::ChanType,
        NodeTag::ArrayType,
        NodeTag::Ellipsis,
        NodeTag::FuncLit,
        NodeTag::CompositeLit,
        NodeTag::KeyValueExpr,
        NodeTag::SliceExpr,
        NodeTag::IndexExpr,
        NodeTag::TypeAssertExpr,
        NodeTag::StarExpr,
        NodeTag::UnaryExpr,
        NodeTag::BinaryExpr,
        NodeTag::SendStmt,
        NodeTag::IncDecStmt,
        NodeTag::GoStmt,
        NodeTag::DeferStmt,
        NodeTag::BranchStmt,
        NodeTag::IfStmt,
        NodeTag::SwitchStmt,
        NodeTag::TypeSwitchStmt,
        NodeTag::CaseClause,
        NodeTag::ForStmt,
        NodeTag::RangeStmt,
        NodeTag::LabeledStmt,
        NodeTag::DeclStmt,
    ] {
        assert!(seen.contains(&tag), "fixture produced no {tag}");
    }
}

#[test]
fn e2e_23_method_receiver_and_results() {
    let tree = tree_of(&load_fixture());
    let add = tree
        .children_of("Decls")
        .find(|d| d.metadata.get("name").and_then(|v| v.as_str()) == Some("Add"))
        .expect("Add method");
    let recv = add.child("Recv").expect("receiver");
    assert_eq!(recv.tag, NodeTag::FieldList);
    assert_eq!(recv.child("List").unwrap().child("Type").unwrap().tag, NodeTag::StarExpr);

    let results = add.child("Type").unwrap().child("Results").unwrap();
    let names: Vec<_> = results
        .children
        .iter()
        .filter_map(|f| f.metadata.get("names").and_then(|v| v.as_list()))
        .collect();
    assert_eq!(names.len(), 2);
    assert_eq!(names[0], ["added"]);
}

#[test]
fn e2e_24_import_metadata() {
    let tree = tree_of(&load_fixture());
    let imports = tree.child("Decls[0]").unwrap();
    assert_eq!(imports.metadata.get("tok").and_then(|v| v.as_str()), Some("import"));
    let aliased = imports.child("Specs[2]").unwrap();
    assert_eq!(aliased.metadata.get("name").and_then(|v| v.as_str()), Some("str"));
    assert_eq!(
        aliased.metadata.get("path").and_then(|v| v.as_str()),
        Some("\"strings\"")
    );
}

// ---- Generics ----

#[test]
fn e2e_30_type_parameters_precede_params() {
    let tree = tree_of("package p\nfunc Map[T, U any](xs []T, f func(T) U) []U { return nil }\n");
    let func_type = tree.child("Decls").unwrap().child("Type").unwrap();
    let roles: Vec<String> = func_type
        .children
        .iter()
        .filter_map(|c| c.role.as_ref().map(ToString::to_string))
        .collect();
    assert_eq!(roles, ["TypeParams", "Params", "Results"]);

    let tparams = func_type.child("TypeParams").unwrap();
    assert_eq!(tparams.tag, NodeTag::FieldList);
    let field = tparams.child("List").unwrap();
    let names = field.metadata.get("names").and_then(|v| v.as_list()).unwrap();
    assert_eq!(names, ["T", "U"]);
    assert_eq!(field.child("Type").unwrap().metadata.get("name").and_then(|v| v.as_str()), Some("any"));
}

#[test]
fn e2e_31_generic_type_spec() {
    let json = json_of("package p\ntype Pair[K comparable, V any] struct {\n\tKey K\n\tVal V\n}\n");
    let spec = &json["children"][1]["children"][0];
    assert_eq!(spec["type"], "TypeSpec");
    let roles: Vec<&str> = spec["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["fieldName"].as_str().unwrap())
        .collect();
    assert_eq!(roles, ["Name", "TypeParams", "Type"]);
    assert_eq!(spec["children"][1]["children"].as_array().unwrap().len(), 2);
    assert_eq!(spec["children"][1]["children"][0]["fieldName"], "List[0]");
}
