use crate::{severity::Severity, LegacyWriter, Logger};

pub struct LoggerAdapter<W> {
    legacy: W,
}

impl<W: LegacyWriter> LoggerAdapter<W> {
    pub fn new(legacy: W) -> Self {
        LoggerAdapter { legacy }
    }

    pub fn into_inner(self) -> W {
        self.legacy
    }
}

impl<W: LegacyWriter> Logger for LoggerAdapter<W> {
    fn log(&self, level: &str, message: &str) {
        self.legacy
            .write_entry(message, Severity::from_level(level).code());
    }
}
