use std::sync::Arc;

use crate::{
    core::{batcher::Batcher, config::BatchConfig},
    error::ConfigError,
    loggers::{Logger, TracingLogger},
};

/// Builder for constructing a [`Batcher`] with a custom logger.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use batchvisor::{BatchConfig, Batcher, TracingLogger};
///
/// let batcher = Batcher::builder(BatchConfig { throttle: 4, ..BatchConfig::default() })
///     .with_logger(Arc::new(TracingLogger::new()))
///     .build()
///     .unwrap();
/// assert_eq!(batcher.config().throttle, 4);
/// ```
pub struct BatcherBuilder {
    cfg: BatchConfig,
    logger: Option<Arc<dyn Logger>>,
}

impl BatcherBuilder {
    /// Creates a new builder with the given default options.
    pub fn new(cfg: BatchConfig) -> Self {
        Self { cfg, logger: None }
    }

    /// Sets the logger receiving execution events.
    ///
    /// Defaults to [`TracingLogger`].
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Validates the options and returns the [`Batcher`].
    pub fn build(self) -> Result<Batcher, ConfigError> {
        self.cfg.validate()?;
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger::new()));
        Ok(Batcher::new_internal(self.cfg, logger))
    }
}
