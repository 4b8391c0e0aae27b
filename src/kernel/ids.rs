use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::{FileTree, NodeId};

/// Hands out fresh node ids from wall-clock milliseconds, bumped so that ids are
/// strictly increasing within a session and never collide with the tree.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u128,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, tree: &FileTree) -> NodeId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let mut candidate = now.max(self.last + 1);
        loop {
            let id = NodeId::new(candidate.to_string());
            if !tree.contains(&id) {
                self.last = candidate;
                return id;
            }
            candidate += 1;
        }
    }
}
