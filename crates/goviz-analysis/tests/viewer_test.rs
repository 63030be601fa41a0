//! Viewer helpers against trees produced by the full pipeline.

use goviz_analysis::engine::visual::{NodeTag, VisualNode};
use goviz_analysis::parse_go_tree;
use goviz_analysis::viewer::navigation::{
    build_node_map, collect_descendant_ids, first_child_node_id, next_visible, parent_node_id,
    previous_visible, visible_node_ids,
};
use goviz_analysis::viewer::{flatten_tree, PositionMapper};
use goviz_core::GovizConfig;
use rustc_hash::FxHashSet;

const SOURCE: &str = "package main\nfunc f(x int) int { return x }\n";

fn tree() -> VisualNode {
    parse_go_tree(&GovizConfig::default(), Some(SOURCE)).expect("source parses")
}

fn expanded(ids: &[&str]) -> FxHashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn hit_test_finds_parameter_ident() {
    let tree = tree();
    let mapper = PositionMapper::new(SOURCE);
    let offset = mapper.position_to_offset(2, 8).unwrap();
    assert_eq!(offset, 20);

    let hit = mapper.find_node_at_offset(&tree, offset as u32 + 1).unwrap();
    assert_eq!(hit.tag, NodeTag::Ident);
    assert_eq!(hit.metadata.get("name").and_then(|v| v.as_str()), Some("x"));
    assert_eq!(hit.role.map(|r| r.to_string()).as_deref(), Some("Names"));
}

#[test]
fn hit_test_inside_body() {
    let tree = tree();
    let mapper = PositionMapper::new(SOURCE);
    let hit = mapper.find_node_at_offset(&tree, 41).unwrap();
    assert_eq!(hit.tag, NodeTag::Ident);
    assert_eq!(hit.role.map(|r| r.to_string()).as_deref(), Some("Results"));

    let pos = mapper.offset_to_position(hit.span.pos as usize - 1);
    assert_eq!((pos.line, pos.column), (2, 28));
}

#[test]
fn hit_test_outside_file_span() {
    let tree = tree();
    let mapper = PositionMapper::new(SOURCE);
    assert!(mapper.find_node_at_offset(&tree, 200).is_none());
}

#[test]
fn navigation_over_parsed_tree() {
    let tree = tree();
    let flat = flatten_tree(&tree);
    assert_eq!(flat.len(), tree.node_count());

    let visible = visible_node_ids(&flat, &expanded(&["0"]));
    assert_eq!(visible, ["0", "0-0", "0-1"]);
    assert_eq!(next_visible("0-0", &visible), Some("0-1"));
    assert_eq!(previous_visible("0-0", &visible), Some("0"));

    let map = build_node_map(&flat);
    assert_eq!(map["0-1"].node.tag, NodeTag::FuncDecl);
    assert_eq!(first_child_node_id("0-1", &map, &expanded(&["0", "0-1"])), Some("0-1-0"));
    assert_eq!(parent_node_id("0-1-0"), Some("0-1"));

    let func_count = tree.children[1].node_count();
    assert_eq!(collect_descendant_ids("0-1", &map).len(), func_count);
}

#[test]
fn fully_expanded_tree_shows_every_node() {
    let tree = tree();
    let flat = flatten_tree(&tree);
    let all: FxHashSet<String> = flat.iter().map(|f| f.node_id.clone()).collect();
    assert_eq!(visible_node_ids(&flat, &all).len(), flat.len());
}
