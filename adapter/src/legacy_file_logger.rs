use std::{
    cell::RefCell,
    io::{self, Stdout, Write},
};

use log::error;

use crate::{severity::Severity, LegacyWriter};

pub struct LegacyFileLogger<W: Write = Stdout> {
    filename: String,
    sink: RefCell<W>,
}

impl LegacyFileLogger<Stdout> {
    pub fn new(filename: impl Into<String>) -> Self {
        Self::with_sink(filename, io::stdout())
    }
}

impl<W: Write> LegacyFileLogger<W> {
    pub fn with_sink(filename: impl Into<String>, sink: W) -> Self {
        LegacyFileLogger {
            filename: filename.into(),
            sink: RefCell::new(sink),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn into_sink(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write> LegacyWriter for LegacyFileLogger<W> {
    fn write_entry(&self, text: &str, severity: u8) {
        let label = Severity::label_for_code(severity);
        let mut sink = self.sink.borrow_mut();
        if let Err(e) = writeln!(
            sink,
            "[LEGACY] {} - {} (file: {})",
            label, text, self.filename
        ) {
            error!("Legacy entry for {} was lost: {}", self.filename, e);
        }
    }
}
