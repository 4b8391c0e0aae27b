use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::kernel::language::LanguageId;

/// Language id the sandbox uses when the requested language has none.
pub const FALLBACK_SANDBOX_ID: u32 = 71;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub code: String,
    pub language: LanguageId,
}

impl RunRequest {
    pub fn submission(&self) -> SandboxSubmission {
        SandboxSubmission {
            source_code: self.code.clone(),
            language_id: self.language.sandbox_id().unwrap_or(FALLBACK_SANDBOX_ID),
        }
    }
}

/// Body posted to the sandbox's submissions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxSubmission {
    pub source_code: String,
    pub language_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunResponse {
    /// Text for the output panel: output, else error, else a placeholder.
    pub fn display_text(&self) -> &str {
        [self.output.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .unwrap_or("No output")
    }
}

pub trait CodeRunner: Send + Sync {
    fn run(&self, request: &RunRequest) -> Result<RunResponse, ServiceError>;
}

/// Wire transport to the sandbox service. Implementations post one
/// submission and wait for its result.
pub trait SandboxTransport: Send + Sync {
    fn submit(&self, submission: &SandboxSubmission) -> Result<RunResponse, ServiceError>;
}
