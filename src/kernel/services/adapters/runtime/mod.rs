//! Async runtime adapter: executes boundary effects and sends messages back to the caller.

mod message;
mod runtime;

pub use message::AppMessage;
pub use runtime::AsyncRuntime;
