use crate::kernel::services::ports::{
    CodeRunner, RunRequest, RunResponse, SandboxTransport, ServiceError,
};

/// [`CodeRunner`] that maps requests onto sandbox submissions.
pub struct SandboxRunner<T> {
    transport: T,
}

impl<T: SandboxTransport> SandboxRunner<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: SandboxTransport> CodeRunner for SandboxRunner<T> {
    fn run(&self, request: &RunRequest) -> Result<RunResponse, ServiceError> {
        let submission = request.submission();
        tracing::debug!(
            language = request.language.token(),
            language_id = submission.language_id,
            "submitting to sandbox"
        );
        self.transport.submit(&submission).inspect_err(|e| {
            tracing::warn!(error = %e, "sandbox submission failed");
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/sandbox.rs"]
mod tests;
