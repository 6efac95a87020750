mod adapter;
mod factory;
mod observer;
mod strategy;

use log::info;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{config::app::AppConfig, error::AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Demo {
    Adapter,
    Factory,
    Observer,
    Strategy,
}

impl Demo {
    fn title(self) -> &'static str {
        match self {
            Demo::Adapter => "ADAPTER - logging",
            Demo::Factory => "FACTORY METHOD - notifications",
            Demo::Observer => "OBSERVER - news feed",
            Demo::Strategy => "STRATEGY - compression",
        }
    }
}

pub fn run(demo: Demo, config: &AppConfig) -> Result<(), AppError> {
    info!("========================================");
    info!("   PATTERN {}", demo.title());
    info!("========================================");
    match demo {
        Demo::Adapter => adapter::run(config),
        Demo::Factory => factory::run(config),
        Demo::Observer => observer::run(config),
        Demo::Strategy => strategy::run(config),
    }
}
