use crate::kernel::services::ports::{RunResponse, ServiceError};
use crate::kernel::Action;

#[derive(Debug)]
pub enum AppMessage {
    RunFinished(Result<RunResponse, ServiceError>),
    SaveFinished(Result<(), ServiceError>),
}

impl From<AppMessage> for Action {
    fn from(message: AppMessage) -> Self {
        match message {
            AppMessage::RunFinished(result) => Action::RunFinished(result),
            AppMessage::SaveFinished(result) => Action::SaveFinished(result),
        }
    }
}
