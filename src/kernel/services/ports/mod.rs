//! Service ports: traits + data contracts.

pub mod error;
pub mod execution;
pub mod persistence;
pub mod settings;

pub use error::ServiceError;
pub use execution::{
    CodeRunner, RunRequest, RunResponse, SandboxSubmission, SandboxTransport, FALLBACK_SANDBOX_ID,
};
pub use persistence::{SnapshotRow, SnapshotStore};
pub use settings::Settings;
