use env_logger::{Builder, Env};
use log::SetLoggerError;

// `RUST_LOG` wins over the configured level.
pub fn init(default_level: &str) -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_level)).try_init()
}
