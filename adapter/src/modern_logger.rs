use log::{log, Level};

use crate::{severity::Severity, Logger};

pub const MODERN_TARGET: &str = "modern";

#[derive(Debug, Default, Clone, Copy)]
pub struct ModernLogger;

impl Logger for ModernLogger {
    fn log(&self, level: &str, message: &str) {
        log!(target: MODERN_TARGET, record_level(level), "[MODERN] [{}] {}", level, message);
    }
}

fn record_level(level: &str) -> Level {
    match level.parse::<Severity>() {
        Ok(Severity::Warning) => Level::Warn,
        Ok(Severity::Error) => Level::Error,
        Ok(Severity::Info) | Err(_) => Level::Info,
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use crate::Logger;

    use super::{record_level, ModernLogger};

    #[test]
    fn test_record_level() {
        assert_eq!(Level::Info, record_level("INFO"));
        assert_eq!(Level::Warn, record_level("warning"));
        assert_eq!(Level::Error, record_level("Error"));
        assert_eq!(Level::Info, record_level("NOTICE"));
    }

    #[test]
    fn test_log_without_backend() {
        ModernLogger.log("ERROR", "nobody listens");
    }
}
