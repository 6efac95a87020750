use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::{demos::Demo, error::AppError};

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    pub log_level: String,
    #[validate(length(min = 1))]
    pub demos: Vec<Demo>,
    #[validate(length(min = 1))]
    pub legacy_log_file: String,
    pub broadcast_message: String,
    pub sample_text: String,
    #[validate(range(min = 1))]
    pub sample_repeat: usize,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn sample_payload(&self) -> Vec<u8> {
        self.sample_text.repeat(self.sample_repeat).into_bytes()
    }
}
