//! Where the adapter records the raw event and the shaped response.

use std::fmt;

use tracing::{Level, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Event,
    Response,
}

impl Stage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Event => "event",
            Stage::Response => "response",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for the two records written per invocation. `payload` is already
/// serialized JSON.
pub trait InvocationLog: Send + Sync {
    fn record(&self, stage: Stage, payload: &str);
}

/// Emits each record as an INFO event through `tracing`.
#[derive(Debug, Clone, Copy)]
pub struct TracingLog {
    level: Level,
}

impl TracingLog {
    /// `level` is the level the subscriber was installed with; records are
    /// always emitted at INFO and are dropped when the level is stricter.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.level >= Level::INFO
    }
}

impl Default for TracingLog {
    fn default() -> Self {
        Self::new(Level::INFO)
    }
}

impl InvocationLog for TracingLog {
    fn record(&self, stage: Stage, payload: &str) {
        if self.enabled() {
            info!(stage = %stage, "{}", payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_is_enabled_at_info_and_more_verbose() {
        assert!(TracingLog::new(Level::INFO).enabled());
        assert!(TracingLog::new(Level::DEBUG).enabled());
        assert!(!TracingLog::new(Level::WARN).enabled());
    }

    #[test]
    fn stage_names() {
        assert_eq!(Stage::Event.to_string(), "event");
        assert_eq!(Stage::Response.to_string(), "response");
    }
}
