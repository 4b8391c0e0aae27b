use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::kernel::language::LanguageId;

/// One saved workspace: the whole tree serialized into `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub user_id: CompactString,
    pub title: String,
    pub code: String,
    pub language: LanguageId,
}

pub trait SnapshotStore: Send + Sync {
    fn insert(&self, row: &SnapshotRow) -> Result<(), ServiceError>;
}
