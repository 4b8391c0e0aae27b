//! Data models.

pub mod file_tree;

pub use file_tree::{FileNode, FileTree, FolderNode, Node, NodeId, NodeKind, NodeRef};
