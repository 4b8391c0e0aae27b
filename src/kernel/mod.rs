//! Headless workspace core (state/action/effect).

pub mod action;
pub mod effect;
pub mod explorer;
pub mod ids;
pub mod language;
pub mod services;
pub mod snapshot;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::{Effect, Notification};
pub use explorer::{ExplorerIntent, ExplorerRow, ExplorerState, NameError, PendingCreate};
pub use language::LanguageId;
pub use state::{CursorPosition, RunState, UserSession, WorkspaceState};
pub use store::{DispatchResult, Store};
