use adapter::{Application, LegacyFileLogger, LoggerAdapter, ModernLogger};
use log::info;

use crate::{config::app::AppConfig, error::AppError};

pub fn run(config: &AppConfig) -> Result<(), AppError> {
    info!("--- Modern logger ---");
    Application::new(ModernLogger).run();

    info!("--- Adapted legacy logger ---");
    let legacy = LegacyFileLogger::new(config.legacy_log_file.clone());
    Application::new(LoggerAdapter::new(legacy)).run();
    Ok(())
}
