//! bharat - workspace model for the multi-file code editor
//!
//! Module layout:
//! - models: the immutable file tree (files, folders, ids)
//! - kernel: session state, explorer state, actions/effects and the store
//! - kernel::services: collaborator ports (sandbox, backend, settings) and adapters

pub mod kernel;
pub mod models;
