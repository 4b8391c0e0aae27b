use crate::kernel::effect::Notification;
use crate::kernel::explorer::ExplorerIntent;
use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ExplorerToggleFolder(id) => {
                super::DispatchResult::changed(self.state.toggle_folder(&id))
            }
            Action::ExplorerStartCreate { parent, kind } => {
                super::DispatchResult::changed(self.state.start_create(parent, kind))
            }
            Action::ExplorerInput(input) => {
                super::DispatchResult::changed(self.state.explorer.set_input(input))
            }
            Action::ExplorerCancel => {
                super::DispatchResult::changed(self.state.explorer.cancel_create())
            }
            Action::ExplorerCommit => match self.state.explorer.commit_create() {
                Ok(None) => super::DispatchResult::changed(false),
                Ok(Some(ExplorerIntent::CreateFile {
                    parent,
                    name,
                    language,
                })) => {
                    let created = self.state.create_file(parent.as_ref(), &name, language);
                    if created.is_none() {
                        tracing::debug!(parent = ?parent, name = %name, "create file ignored: parent is gone");
                    }
                    super::DispatchResult::changed(true)
                }
                Ok(Some(ExplorerIntent::CreateFolder { parent, name })) => {
                    let created = self.state.create_folder(parent.as_ref(), &name);
                    if created.is_none() {
                        tracing::debug!(parent = ?parent, name = %name, "create folder ignored: parent is gone");
                    }
                    super::DispatchResult::changed(true)
                }
                Err(e) => super::DispatchResult::notify(Notification::error(
                    "Invalid name",
                    e.to_string(),
                )),
            },
            _ => super::DispatchResult::changed(false),
        }
    }
}
