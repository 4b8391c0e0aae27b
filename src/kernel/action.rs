use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::{RunResponse, ServiceError};
use crate::kernel::state::UserSession;
use crate::models::{NodeId, NodeKind};

#[derive(Debug, Clone)]
pub enum Action {
    SelectFile(NodeId),
    CloseFile(NodeId),
    DeleteNode(NodeId),
    CreateFile {
        parent: Option<NodeId>,
        name: String,
        language: LanguageId,
    },
    CreateFolder {
        parent: Option<NodeId>,
        name: String,
    },
    UpdateContent {
        id: NodeId,
        content: String,
    },
    /// Change callback of the editor widget; applies to the selected file.
    EditorChanged(String),
    CursorMoved {
        line: u32,
        column: u32,
    },
    SignedIn(UserSession),
    SignedOut,
    RunSelected,
    RunFinished(Result<RunResponse, ServiceError>),
    SaveWorkspace {
        title: String,
    },
    SaveFinished(Result<(), ServiceError>),
    ExplorerToggleFolder(NodeId),
    ExplorerStartCreate {
        parent: Option<NodeId>,
        kind: NodeKind,
    },
    ExplorerInput(String),
    ExplorerCommit,
    ExplorerCancel,
}
