//! Services layer (ports + adapters).
//!
//! - `ports`: contracts/types for the external collaborators (kernel-facing).
//! - `adapters`: OS/runtime specific implementations (IO/async).

pub mod adapters;
pub mod ports;
