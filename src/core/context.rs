use crate::config::Config;
use crate::core::session::Session;

use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

/// Everything a command needs to run: config, the session store, the
/// logger, and the resolved filesystem locations.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub session: Session,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub exports_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub credentials_path: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(
        config_path: PathBuf,
        exports_dir: PathBuf,
        logs_dir: PathBuf,
        credentials_path: PathBuf,
    ) -> Result<Self> {
        let config = Config::load_or_init(&config_path)?;
        let session = Session::new();

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            session,
            logger,
            startup_displayed: false,
            config_path,
            exports_dir,
            logs_dir,
            credentials_path,
        })
    }
}
