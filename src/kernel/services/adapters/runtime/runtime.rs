use super::message::AppMessage;
use crate::kernel::services::ports::{
    CodeRunner, RunRequest, ServiceError, SnapshotRow, SnapshotStore,
};
use crate::kernel::Effect;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Runs `RunCode` / `SaveSnapshot` effects off the caller's thread. Results come
/// back as [`AppMessage`]s to be dispatched into the store.
pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    runner: Arc<dyn CodeRunner>,
    snapshots: Arc<dyn SnapshotStore>,
}

impl AsyncRuntime {
    pub fn new(
        tx: Sender<AppMessage>,
        runner: Arc<dyn CodeRunner>,
        snapshots: Arc<dyn SnapshotStore>,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            runner,
            snapshots,
        })
    }

    /// Starts the effect if it is asynchronous. Returns the effect back when it
    /// has to be handled by the caller (notifications).
    pub fn execute(&self, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::RunCode(request) => {
                self.run_code(request);
                None
            }
            Effect::SaveSnapshot(row) => {
                self.save_snapshot(row);
                None
            }
            other => Some(other),
        }
    }

    pub fn run_code(&self, request: RunRequest) {
        let tx = self.tx.clone();
        let runner = Arc::clone(&self.runner);
        self.runtime.spawn(async move {
            let result = tokio::task::spawn_blocking(move || runner.run(&request))
                .await
                .unwrap_or_else(|e| Err(ServiceError::Transport(e.to_string())));
            let _ = tx.send(AppMessage::RunFinished(result));
        });
    }

    pub fn save_snapshot(&self, row: SnapshotRow) {
        let tx = self.tx.clone();
        let snapshots = Arc::clone(&self.snapshots);
        self.runtime.spawn(async move {
            let result = tokio::task::spawn_blocking(move || snapshots.insert(&row))
                .await
                .unwrap_or_else(|e| Err(ServiceError::Transport(e.to_string())));
            let _ = tx.send(AppMessage::SaveFinished(result));
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime.rs"]
mod tests;
