mod application;
mod legacy_file_logger;
mod logger_adapter;
mod modern_logger;
mod severity;

pub use application::{Application, STARTUP_EVENTS};
pub use legacy_file_logger::LegacyFileLogger;
pub use logger_adapter::LoggerAdapter;
pub use modern_logger::ModernLogger;
pub use severity::Severity;

pub trait Logger {
    fn log(&self, level: &str, message: &str);
}

pub trait LegacyWriter {
    fn write_entry(&self, text: &str, severity: u8);
}
