//! 文件树数据模型
//!
//! The workspace tree is immutable data: every mutating helper returns a new
//! root sequence and only rebuilds the nodes on the path to the change.
//! Untouched subtrees stay shared through `Arc`, so `Arc::ptr_eq` is a valid
//! change check for consumers.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type WorkspaceTree = Vec<Arc<WorkspaceNode>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeBody {
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    Folder {
        #[serde(default)]
        children: WorkspaceTree,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceNode {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub body: NodeBody,
}

impl WorkspaceNode {
    pub fn file(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            body: NodeBody::File {
                language: None,
                content: None,
            },
        }
    }

    pub fn folder(
        id: impl Into<String>,
        name: impl Into<String>,
        children: impl IntoIterator<Item = WorkspaceNode>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            body: NodeBody::Folder {
                children: children.into_iter().map(Arc::new).collect(),
            },
        }
    }

    /// No-op on folders.
    pub fn with_language(mut self, value: impl Into<String>) -> Self {
        if let NodeBody::File { language, .. } = &mut self.body {
            *language = Some(value.into());
        }
        self
    }

    /// No-op on folders.
    pub fn with_content(mut self, value: impl Into<String>) -> Self {
        if let NodeBody::File { content, .. } = &mut self.body {
            *content = Some(value.into());
        }
        self
    }

    pub fn kind(&self) -> NodeKind {
        match self.body {
            NodeBody::File { .. } => NodeKind::File,
            NodeBody::Folder { .. } => NodeKind::Folder,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind() == NodeKind::Folder
    }

    pub fn language(&self) -> Option<&str> {
        match &self.body {
            NodeBody::File { language, .. } => language.as_deref(),
            NodeBody::Folder { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match &self.body {
            NodeBody::File { content, .. } => content.as_deref(),
            NodeBody::Folder { .. } => None,
        }
    }

    pub fn children(&self) -> &[Arc<WorkspaceNode>] {
        match &self.body {
            NodeBody::Folder { children } => children,
            NodeBody::File { .. } => &[],
        }
    }

    fn with_children(&self, children: WorkspaceTree) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            body: NodeBody::Folder { children },
        }
    }
}

/// Depth-first pre-order lookup. With duplicated ids the first hit wins.
pub fn find_node<'a>(nodes: &'a [Arc<WorkspaceNode>], id: &str) -> Option<&'a Arc<WorkspaceNode>> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Appends `node` to the root when `parent_id` is `None`, otherwise to the
/// children of the matching folder. A missing parent or a file parent leaves
/// the tree unchanged.
pub fn insert_child(
    nodes: &[Arc<WorkspaceNode>],
    parent_id: Option<&str>,
    node: WorkspaceNode,
) -> WorkspaceTree {
    let node = Arc::new(node);
    let Some(parent_id) = parent_id else {
        let mut next = nodes.to_vec();
        next.push(node);
        return next;
    };

    let outcome = rewrite_first(nodes, parent_id, &|parent: &WorkspaceNode| match &parent.body {
        NodeBody::Folder { children } => {
            let mut children = children.clone();
            children.push(Arc::clone(&node));
            Some(parent.with_children(children))
        }
        NodeBody::File { .. } => None,
    });

    match outcome {
        Rewrite::Changed(tree) => tree,
        Rewrite::Unchanged | Rewrite::NotFound => nodes.to_vec(),
    }
}

/// Replaces the content of the matching file. Folders and unknown ids are
/// left alone.
pub fn update_content(nodes: &[Arc<WorkspaceNode>], file_id: &str, content: &str) -> WorkspaceTree {
    let outcome = rewrite_first(nodes, file_id, &|target: &WorkspaceNode| match &target.body {
        NodeBody::File { language, .. } => Some(WorkspaceNode {
            id: target.id.clone(),
            name: target.name.clone(),
            body: NodeBody::File {
                language: language.clone(),
                content: Some(content.to_string()),
            },
        }),
        NodeBody::Folder { .. } => None,
    });

    match outcome {
        Rewrite::Changed(tree) => tree,
        Rewrite::Unchanged | Rewrite::NotFound => nodes.to_vec(),
    }
}

pub fn flatten_files(nodes: &[Arc<WorkspaceNode>]) -> Vec<Arc<WorkspaceNode>> {
    fn walk(nodes: &[Arc<WorkspaceNode>], out: &mut Vec<Arc<WorkspaceNode>>) {
        for node in nodes {
            if node.is_file() {
                out.push(Arc::clone(node));
            }
            walk(node.children(), out);
        }
    }

    let mut out = Vec::new();
    walk(nodes, &mut out);
    out
}

/// Copies every node, sharing nothing with the source.
pub fn deep_clone(nodes: &[Arc<WorkspaceNode>]) -> WorkspaceTree {
    nodes
        .iter()
        .map(|node| {
            let copy = match &node.body {
                NodeBody::Folder { children } => node.with_children(deep_clone(children)),
                NodeBody::File { .. } => WorkspaceNode::clone(node),
            };
            Arc::new(copy)
        })
        .collect()
}

/// Case-insensitive name filter used by the explorer search box. A blank
/// query keeps everything; otherwise the query is matched as typed, surrounding
/// spaces included. A folder is
/// kept when its own name matches or any descendant is kept, and its children
/// are narrowed to the kept descendants.
pub fn filter_tree(nodes: &[Arc<WorkspaceNode>], query: &str) -> WorkspaceTree {
    if query.trim().is_empty() {
        return nodes.to_vec();
    }
    filter_nodes(nodes, &query.to_lowercase())
}

fn filter_nodes(nodes: &[Arc<WorkspaceNode>], query_lc: &str) -> WorkspaceTree {
    nodes
        .iter()
        .filter_map(|node| {
            let name_matches = node.name.to_lowercase().contains(query_lc);
            match &node.body {
                NodeBody::Folder { children } => {
                    let kept = filter_nodes(children, query_lc);
                    (name_matches || !kept.is_empty()).then(|| Arc::new(node.with_children(kept)))
                }
                NodeBody::File { .. } => name_matches.then(|| Arc::clone(node)),
            }
        })
        .collect()
}

/// First id in `node` (or its subtree) that already exists in `tree` or
/// repeats inside the subtree itself.
pub fn duplicate_id<'a>(tree: &'a [Arc<WorkspaceNode>], node: &'a WorkspaceNode) -> Option<&'a str> {
    let mut seen = FxHashSet::default();
    collect_ids(tree, &mut seen);
    first_repeat(node, &mut seen)
}

fn collect_ids<'a>(nodes: &'a [Arc<WorkspaceNode>], seen: &mut FxHashSet<&'a str>) {
    for node in nodes {
        seen.insert(node.id.as_str());
        collect_ids(node.children(), seen);
    }
}

fn first_repeat<'a>(node: &'a WorkspaceNode, seen: &mut FxHashSet<&'a str>) -> Option<&'a str> {
    if !seen.insert(node.id.as_str()) {
        return Some(node.id.as_str());
    }
    node.children()
        .iter()
        .find_map(|child| first_repeat(child, seen))
}

/// True when both root sequences hold the same node allocations.
pub fn same_tree(a: &[Arc<WorkspaceNode>], b: &[Arc<WorkspaceNode>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Arc::ptr_eq(x, y))
}

enum Rewrite {
    NotFound,
    Unchanged,
    Changed(WorkspaceTree),
}

fn rewrite_first<F>(nodes: &[Arc<WorkspaceNode>], id: &str, edit: &F) -> Rewrite
where
    F: Fn(&WorkspaceNode) -> Option<WorkspaceNode>,
{
    for (idx, node) in nodes.iter().enumerate() {
        if node.id == id {
            return match edit(node) {
                Some(next) => Rewrite::Changed(splice(nodes, idx, Arc::new(next))),
                None => Rewrite::Unchanged,
            };
        }

        if let NodeBody::Folder { children } = &node.body {
            match rewrite_first(children, id, edit) {
                Rewrite::NotFound => {}
                Rewrite::Unchanged => return Rewrite::Unchanged,
                Rewrite::Changed(children) => {
                    let parent = Arc::new(node.with_children(children));
                    return Rewrite::Changed(splice(nodes, idx, parent));
                }
            }
        }
    }
    Rewrite::NotFound
}

fn splice(nodes: &[Arc<WorkspaceNode>], idx: usize, replacement: Arc<WorkspaceNode>) -> WorkspaceTree {
    let mut next = nodes.to_vec();
    next[idx] = replacement;
    next
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
