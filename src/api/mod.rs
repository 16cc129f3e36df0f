//! Invocation adapter and request translation

pub mod handler;
pub mod helpers;
pub mod log;
pub mod parsing;
pub mod translate;

// Re-export the main handler for convenience
pub use handler::{Adapter, handler};
pub use log::{InvocationLog, Stage, TracingLog};
