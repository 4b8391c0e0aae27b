use super::effect::Notification;
use super::services::ports::{RunRequest, RunResponse, ServiceError, SnapshotRow};
use super::snapshot::{encode_tree, normalize_title};
use super::state::RUNNING_PLACEHOLDER;
use super::{Action, Effect, WorkspaceState};

mod explorer;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn notify(notification: Notification) -> Self {
        Self {
            effects: vec![Effect::Notify(notification)],
            state_changed: false,
        }
    }
}

pub struct Store {
    state: WorkspaceState,
}

impl Store {
    pub fn new(state: WorkspaceState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SelectFile(id) => DispatchResult::changed(self.state.select_file(&id)),
            Action::CloseFile(id) => DispatchResult::changed(self.state.close_file(&id)),
            Action::DeleteNode(id) => DispatchResult::changed(self.state.delete_node(&id)),
            Action::CreateFile {
                parent,
                name,
                language,
            } => DispatchResult::changed(
                self.state
                    .create_file(parent.as_ref(), &name, language)
                    .is_some(),
            ),
            Action::CreateFolder { parent, name } => DispatchResult::changed(
                self.state.create_folder(parent.as_ref(), &name).is_some(),
            ),
            Action::UpdateContent { id, content } => {
                DispatchResult::changed(self.state.update_content(&id, &content))
            }
            Action::EditorChanged(content) => {
                let Some(id) = self.state.selected().cloned() else {
                    return DispatchResult::changed(false);
                };
                DispatchResult::changed(self.state.update_content(&id, &content))
            }
            Action::CursorMoved { line, column } => {
                let prev = self.state.cursor;
                self.state.cursor.line = line;
                self.state.cursor.column = column;
                DispatchResult::changed(prev != self.state.cursor)
            }
            Action::SignedIn(user) => {
                let changed = self.state.user.as_ref() != Some(&user);
                tracing::info!(user_id = %user.user_id, "signed in");
                self.state.user = Some(user);
                DispatchResult::changed(changed)
            }
            Action::SignedOut => DispatchResult::changed(self.state.user.take().is_some()),
            Action::RunSelected => self.run_selected(),
            Action::RunFinished(result) => self.run_finished(result),
            Action::SaveWorkspace { title } => self.save_workspace(&title),
            Action::SaveFinished(result) => match result {
                Ok(()) => DispatchResult::notify(Notification::info(
                    "Code saved!",
                    "Your code has been saved successfully",
                )),
                Err(e) => {
                    tracing::warn!(error = %e, "workspace save failed");
                    DispatchResult::notify(Notification::error("Save failed", e.to_string()))
                }
            },
            Action::ExplorerToggleFolder(_)
            | Action::ExplorerStartCreate { .. }
            | Action::ExplorerInput(_)
            | Action::ExplorerCommit
            | Action::ExplorerCancel => self.reduce_explorer_action(action),
        }
    }

    fn run_selected(&mut self) -> DispatchResult {
        if self.state.run.running {
            return DispatchResult::changed(false);
        }
        if self.state.user.is_none() {
            return DispatchResult::notify(Notification::error(
                "Please sign in",
                "You need to be signed in to run code",
            ));
        }
        let Some(file) = self.state.selected_file() else {
            return DispatchResult::changed(false);
        };

        let request = RunRequest {
            code: file.content.clone(),
            language: file.language,
        };
        tracing::info!(id = %file.id, language = file.language.token(), "run requested");

        self.state.run.running = true;
        self.state.run.output = RUNNING_PLACEHOLDER.to_string();
        DispatchResult {
            effects: vec![Effect::RunCode(request)],
            state_changed: true,
        }
    }

    fn run_finished(&mut self, result: Result<RunResponse, ServiceError>) -> DispatchResult {
        self.state.run.running = false;
        match result {
            Ok(response) => {
                self.state.run.output = response.display_text().to_string();
                DispatchResult::changed(true)
            }
            Err(e) => {
                tracing::warn!(error = %e, "run failed");
                self.state.run.output = format!("Error: {e}");
                DispatchResult {
                    effects: vec![Effect::Notify(Notification::error(
                        "Execution failed",
                        e.to_string(),
                    ))],
                    state_changed: true,
                }
            }
        }
    }

    fn save_workspace(&mut self, title: &str) -> DispatchResult {
        let Some(user) = self.state.user.as_ref() else {
            return DispatchResult::notify(Notification::error(
                "Please sign in",
                "You need to be signed in to save code",
            ));
        };

        let row = normalize_title(title).and_then(|title| {
            let code = encode_tree(self.state.tree())?;
            Ok(SnapshotRow {
                user_id: user.user_id.clone(),
                title,
                code,
                language: self
                    .state
                    .selected_file()
                    .map(|file| file.language)
                    .unwrap_or(self.state.default_language),
            })
        });

        match row {
            Ok(row) => DispatchResult {
                effects: vec![Effect::SaveSnapshot(row)],
                state_changed: false,
            },
            Err(e) => {
                tracing::warn!(error = %e, "workspace save rejected");
                DispatchResult::notify(Notification::error("Save failed", e.to_string()))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
