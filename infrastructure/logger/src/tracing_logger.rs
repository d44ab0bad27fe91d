use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] adapter forwarding every message to `tracing` under a fixed
/// target, so `RUST_LOG=planner=debug` selects planner output only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "planner", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "planner", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "planner", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "planner", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_usable_as_logger_port() {
        let logger: std::sync::Arc<dyn Logger> = std::sync::Arc::new(TracingLogger);

        logger.info("plan built");
        logger.debug("slot composed");
    }
}
