//! Explorer panel state: expanded folders and the inline "new file/folder" input.
//!
//! The explorer never edits the tree itself. Committing the inline input yields
//! an [`ExplorerIntent`] that the store applies to the workspace.

use compact_str::CompactString;
use regex::Regex;
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::OnceLock;

use crate::kernel::language::LanguageId;
use crate::models::{FileTree, Node, NodeId, NodeKind, NodeRef};

pub const MAX_NAME_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    TooLong,
    InvalidCharacters,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::TooLong => write!(f, "Name must be less than 255 characters"),
            NameError::InvalidCharacters => write!(
                f,
                "Name can only contain letters, numbers, dots, hyphens, and underscores"
            ),
        }
    }
}

impl std::error::Error for NameError {}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9._-]+$").expect("valid name pattern"))
}

/// Checks a trimmed, non-empty file or folder name.
pub fn validate_node_name(name: &str) -> Result<(), NameError> {
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(NameError::TooLong);
    }
    if !name_pattern().is_match(name) {
        return Err(NameError::InvalidCharacters);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCreate {
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerIntent {
    CreateFile {
        parent: Option<NodeId>,
        name: CompactString,
        language: LanguageId,
    },
    CreateFolder {
        parent: Option<NodeId>,
        name: CompactString,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerRow {
    Node {
        id: NodeId,
        depth: u16,
        name: CompactString,
        kind: NodeKind,
        is_expanded: bool,
        is_selected: bool,
    },
    PendingInput {
        depth: u16,
        kind: NodeKind,
        input: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    expanded: FxHashSet<NodeId>,
    pending: Option<PendingCreate>,
}

impl ExplorerState {
    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.contains(id)
    }

    pub fn pending(&self) -> Option<&PendingCreate> {
        self.pending.as_ref()
    }

    pub fn toggle_folder(&mut self, tree: &FileTree, id: &NodeId) -> bool {
        if tree.find(id).map(|node| node.kind()) != Some(NodeKind::Folder) {
            return false;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
        true
    }

    /// Opens the inline input under `parent` (top level when `None`).
    pub fn start_create(
        &mut self,
        tree: &FileTree,
        parent: Option<NodeId>,
        kind: NodeKind,
    ) -> bool {
        if let Some(parent) = parent.as_ref() {
            if tree.find(parent).map(|node| node.kind()) != Some(NodeKind::Folder) {
                return false;
            }
            self.expanded.insert(parent.clone());
        }

        let next = PendingCreate {
            parent,
            kind,
            input: String::new(),
        };
        let changed = self.pending.as_ref() != Some(&next);
        self.pending = Some(next);
        changed
    }

    pub fn set_input(&mut self, input: String) -> bool {
        match self.pending.as_mut() {
            Some(pending) if pending.input != input => {
                pending.input = input;
                true
            }
            _ => false,
        }
    }

    pub fn cancel_create(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Turns the inline input into an intent. A blank input keeps the input
    /// open and yields nothing; an invalid name keeps it open and errors.
    pub fn commit_create(&mut self) -> Result<Option<ExplorerIntent>, NameError> {
        let Some(pending) = self.pending.as_ref() else {
            return Ok(None);
        };
        let name = pending.input.trim();
        if name.is_empty() {
            return Ok(None);
        }
        validate_node_name(name)?;

        let name = CompactString::from(name);
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };
        let intent = match pending.kind {
            NodeKind::File => ExplorerIntent::CreateFile {
                parent: pending.parent,
                language: LanguageId::for_file_name(&name),
                name,
            },
            NodeKind::Folder => ExplorerIntent::CreateFolder {
                parent: pending.parent,
                name,
            },
        };
        Ok(Some(intent))
    }

    /// Drops state that refers to nodes no longer in `tree`.
    pub fn prune(&mut self, tree: &FileTree) {
        self.expanded.retain(|id| tree.contains(id));
        let parent_gone = self
            .pending
            .as_ref()
            .and_then(|pending| pending.parent.as_ref())
            .is_some_and(|parent| !tree.contains(parent));
        if parent_gone {
            self.pending = None;
        }
    }

    /// Visible rows in display order. Collapsed folders hide their children;
    /// the inline input sits after the children of the folder it creates in.
    pub fn rows(&self, tree: &FileTree, selected: Option<&NodeId>) -> Vec<ExplorerRow> {
        let mut rows = Vec::new();
        self.push_rows(tree.roots(), 0, selected, &mut rows);
        if let Some(pending) = self.pending.as_ref().filter(|p| p.parent.is_none()) {
            rows.push(ExplorerRow::PendingInput {
                depth: 0,
                kind: pending.kind,
                input: pending.input.clone(),
            });
        }
        rows
    }

    fn push_rows(
        &self,
        nodes: &[NodeRef],
        depth: u16,
        selected: Option<&NodeId>,
        rows: &mut Vec<ExplorerRow>,
    ) {
        for node in nodes {
            let id = node.id();
            let is_expanded = self.expanded.contains(id);
            rows.push(ExplorerRow::Node {
                id: id.clone(),
                depth,
                name: CompactString::from(node.name()),
                kind: node.kind(),
                is_expanded,
                is_selected: selected == Some(id),
            });

            let Node::Folder(folder) = node.as_ref() else {
                continue;
            };
            if !is_expanded {
                continue;
            }
            self.push_rows(&folder.children, depth + 1, selected, rows);
            if let Some(pending) = self
                .pending
                .as_ref()
                .filter(|p| p.parent.as_ref() == Some(id))
            {
                rows.push(ExplorerRow::PendingInput {
                    depth: depth + 1,
                    kind: pending.kind,
                    input: pending.input.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/explorer.rs"]
mod tests;
