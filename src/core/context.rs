use crate::config::Config;
use crate::core::models::ScheduleOwnership;
use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

/// Session-scoped container handed to the schedule editor. The original
/// client kept this kind of state in process-wide singletons tied to the
/// auth lifecycle; here it is an explicit value so independent sessions
/// (and tests) never share anything.
#[derive(Debug)]
pub struct SessionContext {
    pub config: Config,
    pub logger: Logger,
    pub ownership: ScheduleOwnership,
}

impl SessionContext {
    /// In-memory defaults, no config file. The common path for a client
    /// session that has nothing persisted locally.
    pub fn new(ownership: ScheduleOwnership) -> Self {
        Self::with_config(Config::default_values(), ownership)
    }

    pub fn load(
        config_path: PathBuf,
        logs_dir: PathBuf,
        ownership: ScheduleOwnership,
    ) -> Result<Self> {
        let config = Config::load_from(&config_path)?;
        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());
        Ok(Self {
            config,
            logger,
            ownership,
        })
    }

    pub fn with_config(config: Config, ownership: ScheduleOwnership) -> Self {
        let logger = Logger::new();
        logger.set_file_logging_enabled(config.file_logging_enabled());
        Self {
            config,
            logger,
            ownership,
        }
    }
}
