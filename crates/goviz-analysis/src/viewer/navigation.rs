//! Keyboard navigation over a collapsible visual tree.
//!
//! The tree is flattened in pre-order. Node ids encode the path from the
//! root: `"0"` for the root, `"0-1"` for its second child, and so on. A node
//! with children that is not in the expanded set hides its whole subtree.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::engine::visual::VisualNode;
use crate::stack::guarded;

pub const ROOT_ID: &str = "0";

#[derive(Debug, Clone)]
pub struct FlatNode<'a> {
    pub node: &'a VisualNode,
    pub node_id: String,
    pub level: usize,
    pub parent_id: Option<String>,
    pub child_ids: Vec<String>,
}

pub type NodeMap<'f, 'a> = FxHashMap<&'f str, &'f FlatNode<'a>>;

pub fn flatten_tree(root: &VisualNode) -> Vec<FlatNode<'_>> {
    let mut out = Vec::new();
    flatten_into(root, ROOT_ID.to_string(), 0, None, &mut out);
    out
}

fn flatten_into<'a>(
    node: &'a VisualNode,
    node_id: String,
    level: usize,
    parent_id: Option<String>,
    out: &mut Vec<FlatNode<'a>>,
) {
    let child_ids: Vec<String> = (0..node.children.len())
        .map(|i| format!("{node_id}-{i}"))
        .collect();
    out.push(FlatNode {
        node,
        node_id: node_id.clone(),
        level,
        parent_id,
        child_ids: child_ids.clone(),
    });
    for (child, child_id) in node.children.iter().zip(child_ids) {
        guarded(|| flatten_into(child, child_id, level + 1, Some(node_id.clone()), out));
    }
}

pub fn build_node_map<'f, 'a>(nodes: &'f [FlatNode<'a>]) -> NodeMap<'f, 'a> {
    nodes.iter().map(|n| (n.node_id.as_str(), n)).collect()
}

/// Ids of the nodes a viewer shows, in display order.
pub fn visible_node_ids(flat: &[FlatNode<'_>], expanded: &FxHashSet<String>) -> Vec<String> {
    let mut visible = Vec::new();
    let mut hidden: FxHashSet<&str> = FxHashSet::default();

    for entry in flat {
        if let Some(parent) = entry.parent_id.as_deref() {
            if hidden.contains(parent) {
                hidden.insert(&entry.node_id);
                continue;
            }
        }
        visible.push(entry.node_id.clone());
        if !entry.child_ids.is_empty() && !expanded.contains(&entry.node_id) {
            hidden.insert(&entry.node_id);
        }
    }
    visible
}

pub fn previous_visible<'v>(current: &str, visible: &'v [String]) -> Option<&'v str> {
    let index = visible.iter().position(|id| id == current)?;
    index
        .checked_sub(1)
        .and_then(|i| visible.get(i))
        .map(String::as_str)
}

pub fn next_visible<'v>(current: &str, visible: &'v [String]) -> Option<&'v str> {
    let index = visible.iter().position(|id| id == current)?;
    visible.get(index + 1).map(String::as_str)
}

pub fn first_visible(visible: &[String]) -> Option<&str> {
    visible.first().map(String::as_str)
}

pub fn last_visible(visible: &[String]) -> Option<&str> {
    visible.last().map(String::as_str)
}

/// Parent id, read off the id itself. `None` for the root.
pub fn parent_node_id(node_id: &str) -> Option<&str> {
    node_id.rfind('-').map(|i| &node_id[..i])
}

/// First child of an expanded node with children.
pub fn first_child_node_id<'f>(
    node_id: &str,
    map: &NodeMap<'f, '_>,
    expanded: &FxHashSet<String>,
) -> Option<&'f str> {
    let entry = map.get(node_id)?;
    if !expanded.contains(node_id) {
        return None;
    }
    entry.child_ids.first().map(String::as_str)
}

/// The node and all of its descendants, in pre-order. Empty for an unknown id.
pub fn collect_descendant_ids(node_id: &str, map: &NodeMap<'_, '_>) -> Vec<String> {
    let mut out = Vec::new();
    collect_into(node_id, map, &mut out);
    out
}

fn collect_into(node_id: &str, map: &NodeMap<'_, '_>, out: &mut Vec<String>) {
    let Some(entry) = map.get(node_id) else {
        return;
    };
    out.push(node_id.to_string());
    for child in &entry.child_ids {
        guarded(|| collect_into(child, map, out));
    }
}
