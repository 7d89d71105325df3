// Tracing log adapter - Structured logging using tracing crate

use crate::ports::*;
use tracing::{debug, error, info, warn};

const COMPONENT: &str = "catalog";

/// Tracing log adapter
pub struct TracingLogAdapter {
    current_level: LogLevel,
}

impl TracingLogAdapter {
    /// Create new tracing log adapter
    pub fn new(current_level: LogLevel) -> Self {
        Self { current_level }
    }

    /// Check if log level should be logged
    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.current_level
    }
}

impl Default for TracingLogAdapter {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl LogPort for TracingLogAdapter {
    fn info(&self, message: &str) {
        if self.should_log(LogLevel::Info) {
            info!(component = COMPONENT, "{}", message);
        }
    }

    fn warn(&self, message: &str) {
        if self.should_log(LogLevel::Warn) {
            warn!(component = COMPONENT, "{}", message);
        }
    }

    fn error(&self, message: &str) {
        if self.should_log(LogLevel::Error) {
            error!(component = COMPONENT, "{}", message);
        }
    }

    fn debug(&self, message: &str) {
        if self.should_log(LogLevel::Debug) {
            debug!(component = COMPONENT, "{}", message);
        }
    }
}
