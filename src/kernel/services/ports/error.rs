use std::fmt;

/// Failure reported by an external collaborator (sandbox, backend).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    Unauthenticated,
    Transport(String),
    Backend(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Unauthenticated => write!(f, "Authentication required"),
            ServiceError::Transport(msg) => write!(f, "{msg}"),
            ServiceError::Backend(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}
