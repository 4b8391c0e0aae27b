//! Workspace file tree: an ordered forest of files and folders.
//!
//! A `FileTree` is never mutated in place. `insert`, `update_content` and
//! `remove` return a new tree that shares every untouched subtree with the
//! old one through `Arc`, so a no-op can be detected with [`FileTree::same_as`].

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::kernel::language::LanguageId;

/// Opaque node identity, stable for the lifetime of the node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(CompactString);

impl NodeId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Folder,
}

pub type NodeRef = Arc<Node>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub id: NodeId,
    pub name: CompactString,
    pub language: LanguageId,
    #[serde(default)]
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    pub id: NodeId,
    pub name: CompactString,
    #[serde(default)]
    pub children: Vec<NodeRef>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(FileNode),
    Folder(FolderNode),
}

impl Node {
    pub fn file(
        id: NodeId,
        name: impl Into<CompactString>,
        language: LanguageId,
        content: impl Into<String>,
    ) -> Self {
        Node::File(FileNode {
            id,
            name: name.into(),
            language,
            content: content.into(),
        })
    }

    pub fn folder(id: NodeId, name: impl Into<CompactString>) -> Self {
        Node::Folder(FolderNode {
            id,
            name: name.into(),
            children: Vec::new(),
        })
    }

    pub fn id(&self) -> &NodeId {
        match self {
            Node::File(file) => &file.id,
            Node::Folder(folder) => &folder.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Folder(folder) => &folder.name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Folder(_) => NodeKind::Folder,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }

    /// Children of a folder; files have none.
    pub fn children(&self) -> &[NodeRef] {
        match self {
            Node::File(_) => &[],
            Node::Folder(folder) => &folder.children,
        }
    }
}

fn with_children(folder: &FolderNode, children: Vec<NodeRef>) -> NodeRef {
    Arc::new(Node::Folder(FolderNode {
        id: folder.id.clone(),
        name: folder.name.clone(),
        children,
    }))
}

fn replace_at(nodes: &[NodeRef], ix: usize, node: NodeRef) -> Vec<NodeRef> {
    let mut next = nodes.to_vec();
    next[ix] = node;
    next
}

fn find_in<'a>(nodes: &'a [NodeRef], id: &NodeId) -> Option<&'a NodeRef> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), id) {
            return Some(found);
        }
    }
    None
}

// `None` means "unchanged" for the three rebuild helpers below.

fn insert_into(nodes: &[NodeRef], parent: &NodeId, new_node: &NodeRef) -> Option<Vec<NodeRef>> {
    for (ix, node) in nodes.iter().enumerate() {
        let Node::Folder(folder) = node.as_ref() else {
            if node.id() == parent {
                return None;
            }
            continue;
        };

        if &folder.id == parent {
            let mut children = folder.children.clone();
            children.push(new_node.clone());
            return Some(replace_at(nodes, ix, with_children(folder, children)));
        }
        if let Some(children) = insert_into(&folder.children, parent, new_node) {
            return Some(replace_at(nodes, ix, with_children(folder, children)));
        }
    }
    None
}

fn update_in(nodes: &[NodeRef], id: &NodeId, content: &str) -> Option<Vec<NodeRef>> {
    for (ix, node) in nodes.iter().enumerate() {
        match node.as_ref() {
            Node::File(file) if &file.id == id => {
                if file.content == content {
                    return None;
                }
                let updated = Node::File(FileNode {
                    content: content.to_string(),
                    ..file.clone()
                });
                return Some(replace_at(nodes, ix, Arc::new(updated)));
            }
            Node::File(_) => {}
            Node::Folder(folder) if &folder.id == id => return None,
            Node::Folder(folder) => {
                if let Some(children) = update_in(&folder.children, id, content) {
                    return Some(replace_at(nodes, ix, with_children(folder, children)));
                }
            }
        }
    }
    None
}

fn remove_from(nodes: &[NodeRef], id: &NodeId) -> Option<Vec<NodeRef>> {
    if let Some(ix) = nodes.iter().position(|node| node.id() == id) {
        let mut next = nodes.to_vec();
        next.remove(ix);
        return Some(next);
    }

    for (ix, node) in nodes.iter().enumerate() {
        if let Node::Folder(folder) = node.as_ref() {
            if let Some(children) = remove_from(&folder.children, id) {
                return Some(replace_at(nodes, ix, with_children(folder, children)));
            }
        }
    }
    None
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTree {
    roots: Vec<NodeRef>,
}

impl FileTree {
    pub fn new(roots: Vec<NodeRef>) -> Self {
        Self { roots }
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::new(nodes.into_iter().map(Arc::new).collect())
    }

    pub fn roots(&self) -> &[NodeRef] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of nodes in the whole forest.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when both trees share every top-level node by pointer.
    pub fn same_as(&self, other: &FileTree) -> bool {
        self.roots.len() == other.roots.len()
            && self
                .roots
                .iter()
                .zip(other.roots.iter())
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }

    /// Depth-first, pre-order lookup.
    pub fn find(&self, id: &NodeId) -> Option<&NodeRef> {
        find_in(&self.roots, id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    pub fn find_file(&self, id: &NodeId) -> Option<&FileNode> {
        self.find(id).and_then(|node| node.as_file())
    }

    /// First file in depth-first, pre-order.
    pub fn first_file(&self) -> Option<&NodeRef> {
        self.iter().find(|node| node.is_file())
    }

    /// Appends `node` at the top level (`parent == None`) or to the children of
    /// the folder `parent`. Unknown parents, file parents and ids that already
    /// exist in the tree leave the tree unchanged.
    #[must_use]
    pub fn insert(&self, parent: Option<&NodeId>, node: Node) -> FileTree {
        if self.contains(node.id()) {
            tracing::debug!(id = %node.id(), "insert skipped: id already in tree");
            return self.clone();
        }

        let node = Arc::new(node);
        match parent {
            None => {
                let mut roots = self.roots.clone();
                roots.push(node);
                FileTree::new(roots)
            }
            Some(parent) => match insert_into(&self.roots, parent, &node) {
                Some(roots) => FileTree::new(roots),
                None => {
                    tracing::debug!(parent = %parent, "insert skipped: parent is not a folder");
                    self.clone()
                }
            },
        }
    }

    /// Replaces the content of file `id`. Folders and missing ids are no-ops.
    #[must_use]
    pub fn update_content(&self, id: &NodeId, content: &str) -> FileTree {
        match update_in(&self.roots, id, content) {
            Some(roots) => FileTree::new(roots),
            None => self.clone(),
        }
    }

    /// Removes `id` and, for folders, its whole subtree. Missing ids are no-ops.
    #[must_use]
    pub fn remove(&self, id: &NodeId) -> FileTree {
        match remove_from(&self.roots, id) {
            Some(roots) => FileTree::new(roots),
            None => self.clone(),
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// First id that occurs more than once, if any.
    pub fn duplicate_id(&self) -> Option<&NodeId> {
        let mut seen = FxHashSet::default();
        self.iter()
            .map(|node| node.id())
            .find(|id| !seen.insert(*id))
    }
}

/// Depth-first, pre-order iterator over every node of a [`FileTree`].
pub struct Iter<'a> {
    stack: Vec<&'a NodeRef>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
