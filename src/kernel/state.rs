use compact_str::CompactString;

use crate::kernel::explorer::{ExplorerRow, ExplorerState};
use crate::kernel::ids::IdGenerator;
use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::Settings;
use crate::models::{FileNode, FileTree, Node, NodeId, NodeKind, NodeRef};

/// Id of the file every new session is seeded with.
pub const SEED_FILE_ID: &str = "1";

pub const RUNNING_PLACEHOLDER: &str = "Running code...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub user_id: CompactString,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    pub running: bool,
    pub output: String,
}

/// The file tree plus everything derived from it for one editor session:
/// open tabs, the selected file, explorer UI state and the run panel.
///
/// `selected` is always `None` or the id of a file in `tree`, and every id in
/// `open` exists in `tree`. Each mutating method restores both before it
/// returns.
#[derive(Debug, Clone)]
pub struct WorkspaceState {
    tree: FileTree,
    open: Vec<NodeId>,
    selected: Option<NodeId>,
    ids: IdGenerator,
    pub explorer: ExplorerState,
    pub run: RunState,
    pub user: Option<UserSession>,
    pub cursor: CursorPosition,
    pub default_language: LanguageId,
}

impl WorkspaceState {
    /// Fresh session holding a single seed file, opened and selected.
    pub fn new(settings: &Settings) -> Self {
        let seed = Node::file(
            NodeId::new(SEED_FILE_ID),
            settings.seed_file_name.as_str(),
            settings.seed_language(),
            settings.seed_content(),
        );
        let mut state = Self::empty(settings.default_language);
        state.tree = FileTree::from_nodes([seed]);
        state.select_file(&NodeId::new(SEED_FILE_ID));
        state
    }

    /// Session over a restored tree; the first file, if any, is opened.
    pub fn from_tree(tree: FileTree, settings: &Settings) -> Self {
        let mut state = Self::empty(settings.default_language);
        state.tree = tree;
        if let Some(first) = state.tree.first_file().map(|node| node.id().clone()) {
            state.select_file(&first);
        }
        state
    }

    fn empty(default_language: LanguageId) -> Self {
        Self {
            tree: FileTree::default(),
            open: Vec::new(),
            selected: None,
            ids: IdGenerator::new(),
            explorer: ExplorerState::default(),
            run: RunState::default(),
            user: None,
            cursor: CursorPosition::default(),
            default_language,
        }
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn open(&self) -> &[NodeId] {
        &self.open
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn selected_file(&self) -> Option<&FileNode> {
        self.selected.as_ref().and_then(|id| self.tree.find_file(id))
    }

    /// Open tabs resolved to their nodes, in tab order.
    pub fn open_files(&self) -> Vec<&NodeRef> {
        self.open
            .iter()
            .filter_map(|id| self.tree.find(id))
            .collect()
    }

    pub fn select_file(&mut self, id: &NodeId) -> bool {
        if self.tree.find_file(id).is_none() {
            tracing::debug!(id = %id, "select ignored: not a file in the tree");
            return false;
        }

        let mut changed = false;
        if !self.open.contains(id) {
            self.open.push(id.clone());
            changed = true;
        }
        if self.selected.as_ref() != Some(id) {
            self.selected = Some(id.clone());
            changed = true;
        }
        changed
    }

    /// Closes the tab for `id`. A selected file without a tab (left by the
    /// first-file fallback) is closed the same way.
    pub fn close_file(&mut self, id: &NodeId) -> bool {
        let was_open = match self.open.iter().position(|open| open == id) {
            Some(ix) => {
                self.open.remove(ix);
                true
            }
            None => false,
        };

        if self.selected.as_ref() != Some(id) {
            return was_open;
        }
        self.selected = self.open.last().cloned();
        true
    }

    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        let next = self.tree.remove(id);
        if next.same_as(&self.tree) {
            tracing::debug!(id = %id, "delete ignored: id not in tree");
            return false;
        }
        self.replace_tree(next);
        true
    }

    /// Creates a file and focuses it. Returns `None` when `parent` is not a folder.
    pub fn create_file(
        &mut self,
        parent: Option<&NodeId>,
        name: &str,
        language: LanguageId,
    ) -> Option<NodeId> {
        let id = self.ids.next_id(&self.tree);
        let next = self
            .tree
            .insert(parent, Node::file(id.clone(), name, language, String::new()));
        if next.same_as(&self.tree) {
            return None;
        }
        self.replace_tree(next);
        self.select_file(&id);
        tracing::debug!(id = %id, name, "file created");
        Some(id)
    }

    /// Creates a folder without touching tabs or selection.
    pub fn create_folder(&mut self, parent: Option<&NodeId>, name: &str) -> Option<NodeId> {
        let id = self.ids.next_id(&self.tree);
        let next = self.tree.insert(parent, Node::folder(id.clone(), name));
        if next.same_as(&self.tree) {
            return None;
        }
        self.replace_tree(next);
        tracing::debug!(id = %id, name, "folder created");
        Some(id)
    }

    pub fn update_content(&mut self, id: &NodeId, content: &str) -> bool {
        let next = self.tree.update_content(id, content);
        if next.same_as(&self.tree) {
            return false;
        }
        self.replace_tree(next);
        true
    }

    pub fn toggle_folder(&mut self, id: &NodeId) -> bool {
        self.explorer.toggle_folder(&self.tree, id)
    }

    pub fn start_create(&mut self, parent: Option<NodeId>, kind: NodeKind) -> bool {
        self.explorer.start_create(&self.tree, parent, kind)
    }

    pub fn explorer_rows(&self) -> Vec<ExplorerRow> {
        self.explorer.rows(&self.tree, self.selected.as_ref())
    }

    fn replace_tree(&mut self, tree: FileTree) {
        self.tree = tree;
        let tree = &self.tree;
        self.open.retain(|id| tree.contains(id));
        self.explorer.prune(tree);
        self.repair_selection();
    }

    // Fallback order: current selection, last open tab, first file in the tree.
    fn repair_selection(&mut self) {
        if self
            .selected
            .as_ref()
            .is_some_and(|id| self.tree.find_file(id).is_some())
        {
            return;
        }
        if self.selected.is_none() {
            return;
        }

        self.selected = self
            .open
            .last()
            .cloned()
            .or_else(|| self.tree.first_file().map(|node| node.id().clone()));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
