use crate::Logger;

pub const STARTUP_EVENTS: [(&str, &str); 3] = [
    ("INFO", "Application démarrée"),
    ("WARNING", "Mémoire faible"),
    ("ERROR", "Connexion base de données échouée"),
];

pub struct Application<L> {
    logger: L,
}

impl<L: Logger> Application<L> {
    pub fn new(logger: L) -> Self {
        Application { logger }
    }

    pub fn run(&self) {
        for (level, message) in STARTUP_EVENTS {
            self.logger.log(level, message);
        }
    }

    pub fn into_logger(self) -> L {
        self.logger
    }
}

#[cfg(test)]
mod tests {
    use mockall::{mock, Sequence};

    use crate::{LegacyFileLogger, Logger, LoggerAdapter, ModernLogger};

    use super::{Application, STARTUP_EVENTS};

    mock! {
        TestLogger {}

        impl Logger for TestLogger {
            fn log(&self, level: &str, message: &str);
        }
    }

    fn expect_startup_events(logger: &mut MockTestLogger) {
        let mut seq = Sequence::new();
        for (expected_level, expected_message) in STARTUP_EVENTS {
            logger
                .expect_log()
                .withf(move |level: &str, message: &str| {
                    level == expected_level && message == expected_message
                })
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }
    }

    #[test]
    fn test_run_should_log_startup_events_in_order() {
        // Given
        let mut logger = MockTestLogger::new();
        expect_startup_events(&mut logger);
        let app = Application::new(logger);

        // When
        app.run();
    }

    #[test]
    fn test_run_should_not_depend_on_logger() {
        // Given
        let mut first = MockTestLogger::new();
        expect_startup_events(&mut first);
        let mut second = MockTestLogger::new();
        expect_startup_events(&mut second);

        // When
        Application::new(first).run();
        Application::new(second).run();
    }

    #[test]
    fn test_run_with_adapted_legacy_logger() {
        // Given
        let legacy = LegacyFileLogger::with_sink("app.log", Vec::new());
        let app = Application::new(LoggerAdapter::new(legacy));

        // When
        app.run();

        // Then
        let output = String::from_utf8(app.into_logger().into_inner().into_sink()).unwrap();
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(
            vec![
                "[LEGACY] INFO - Application démarrée (file: app.log)",
                "[LEGACY] WARNING - Mémoire faible (file: app.log)",
                "[LEGACY] ERROR - Connexion base de données échouée (file: app.log)",
            ],
            lines
        );
    }

    #[test]
    fn test_run_with_modern_logger() {
        Application::new(ModernLogger).run();
    }
}
