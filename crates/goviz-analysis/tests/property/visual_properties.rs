use goviz_analysis::engine::visual::VisualNode;
use goviz_analysis::{parse_go_code, parse_go_tree};
use goviz_core::constants::DEFAULT_MAX_DEPTH;
use goviz_core::GovizConfig;
use proptest::prelude::*;
use rustc_hash::FxHashMap;

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9]{0,4}".prop_filter("keyword", |s| !is_keyword(s)),
        (0u32..1000).prop_map(|n| n.to_string()),
        Just("\"s\"".to_string()),
        Just("nil".to_string()),
    ]
}

fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "break" | "case" | "chan" | "const" | "continue" | "default" | "defer" | "else"
            | "fallthrough" | "for" | "func" | "go" | "goto" | "if" | "import" | "interface"
            | "map" | "package" | "range" | "return" | "select" | "struct" | "switch" | "type"
            | "var"
    )
}

fn expr() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "*", "==", "&&", "<"]), inner.clone())
                .prop_map(|(x, op, y)| format!("{x} {op} {y}")),
            inner.clone().prop_map(|x| format!("({x})")),
            inner.clone().prop_map(|x| format!("!{x}")),
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|args| format!("call({})", args.join(", "))),
            (inner.clone(), inner).prop_map(|(x, i)| format!("xs[{x}][{i}]")),
        ]
    })
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(expr(), 1..5).prop_map(|exprs| {
        let mut body = String::new();
        for (i, e) in exprs.iter().enumerate() {
            body.push_str(&format!("\tv{i} := {e}\n"));
            body.push_str(&format!("\tif v{i} != nil {{\n\t\treturn\n\t}}\n"));
        }
        format!("package gen\n\nfunc run(a, b int) {{\n{body}}}\n")
    })
}

/// A left-nested chain of additive operators, `terms` operands long.
fn additive_chain(terms: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec((prop::sample::select(vec!["+", "-"]), 0u32..100), terms).prop_map(|parts| {
        let mut chain = String::from("1");
        for (op, n) in parts.iter().skip(1) {
            chain.push_str(&format!(" {op} {n}"));
        }
        format!("package gen\nvar v = {chain}\n")
    })
}

fn check_roles(node: &VisualNode) -> Result<(), TestCaseError> {
    let mut groups: FxHashMap<&str, Vec<Option<usize>>> = FxHashMap::default();
    for child in &node.children {
        let role = child.role.as_ref();
        prop_assert!(role.is_some(), "{} child of {} has no role", child.tag, node.tag);
        if let Some(role) = role {
            groups.entry(role.field_name()).or_default().push(role.index());
        }
    }
    for (field, indices) in groups {
        if indices.len() == 1 {
            prop_assert_eq!(indices[0], None, "lone {} item must not be indexed", field);
        } else {
            let expected: Vec<Option<usize>> = (0..indices.len()).map(Some).collect();
            prop_assert_eq!(indices, expected, "items of {} must be indexed in order", field);
        }
    }
    for child in &node.children {
        check_roles(child)?;
    }
    Ok(())
}

fn check_nesting(node: &VisualNode) -> Result<(), TestCaseError> {
    for child in &node.children {
        prop_assert!(
            node.span.pos <= child.span.pos && child.span.end <= node.span.end,
            "{} {:?} escapes {} {:?}",
            child.tag,
            child.span,
            node.tag,
            node.span
        );
        check_nesting(child)?;
    }
    Ok(())
}

proptest! {
    #[test]
    fn generated_programs_parse(src in program()) {
        let out = parse_go_code(Some(&src));
        prop_assert!(!out.is_error(), "{:?} for:\n{}", out.error(), src);
    }

    #[test]
    fn output_is_deterministic(src in program()) {
        prop_assert_eq!(parse_go_code(Some(&src)), parse_go_code(Some(&src)));
    }

    #[test]
    fn roles_follow_item_count(src in program()) {
        let tree = parse_go_tree(&GovizConfig::default(), Some(&src)).unwrap();
        prop_assert!(tree.role.is_none());
        check_roles(&tree)?;
    }

    #[test]
    fn child_spans_nest_in_parent(src in program()) {
        let tree = parse_go_tree(&GovizConfig::default(), Some(&src)).unwrap();
        check_nesting(&tree)?;
        prop_assert!(tree.span.end as usize <= src.len() + 1);
    }

    #[test]
    fn arbitrary_text_yields_ast_or_error(src in "[ -~\n]{0,80}") {
        let out = parse_go_code(Some(&src));
        prop_assert!(out.ast().is_some() != out.error().is_some());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn long_chains_parse_under_default_limit(
        src in additive_chain(DEFAULT_MAX_DEPTH / 2..=DEFAULT_MAX_DEPTH - 3)
    ) {
        let out = parse_go_code(Some(&src));
        prop_assert!(!out.is_error(), "{:?}", out.error());
    }
}
