//! Whole-tree JSON snapshots handed to the persistence backend.

use std::fmt;

use crate::models::{FileTree, NodeId};

pub const MAX_SNAPSHOT_CHARS: usize = 100_000;
pub const MAX_TITLE_CHARS: usize = 100;

#[derive(Debug)]
pub enum SnapshotError {
    Json(serde_json::Error),
    TooLarge { chars: usize },
    EmptyTitle,
    TitleTooLong { chars: usize },
    DuplicateId(NodeId),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Json(e) => write!(f, "invalid workspace snapshot: {e}"),
            SnapshotError::TooLarge { chars } => write!(
                f,
                "Code must be less than 100,000 characters (got {chars})"
            ),
            SnapshotError::EmptyTitle => write!(f, "Project title is required"),
            SnapshotError::TitleTooLong { chars } => write!(
                f,
                "Project title must be less than 100 characters (got {chars})"
            ),
            SnapshotError::DuplicateId(id) => write!(f, "duplicate node id {id} in snapshot"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Json(e)
    }
}

pub fn encode_tree(tree: &FileTree) -> Result<String, SnapshotError> {
    let text = serde_json::to_string(tree)?;
    let chars = text.chars().count();
    if chars > MAX_SNAPSHOT_CHARS {
        return Err(SnapshotError::TooLarge { chars });
    }
    Ok(text)
}

pub fn decode_tree(text: &str) -> Result<FileTree, SnapshotError> {
    let tree: FileTree = serde_json::from_str(text)?;
    if let Some(id) = tree.duplicate_id() {
        return Err(SnapshotError::DuplicateId(id.clone()));
    }
    Ok(tree)
}

/// Trimmed title, 1..=100 characters.
pub fn normalize_title(title: &str) -> Result<String, SnapshotError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(SnapshotError::EmptyTitle);
    }
    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(SnapshotError::TitleTooLong { chars });
    }
    Ok(title.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/snapshot.rs"]
mod tests;
