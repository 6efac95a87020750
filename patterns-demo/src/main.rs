use std::env;

use anyhow::Result;
use log::info;

use crate::{config::app::AppConfig, demos::Demo, error::AppError};

mod config;
mod demos;
mod error;

fn main() -> Result<()> {
    let app_config = AppConfig::new()?;
    crate::config::log::init(&app_config.log_level)?;

    // A demo name on the command line overrides the configured list.
    let selected = match env::args().nth(1) {
        Some(name) => vec![name
            .parse::<Demo>()
            .map_err(|_| AppError::UnknownDemo(name))?],
        None => app_config.demos.clone(),
    };

    for demo in selected {
        demos::run(demo, &app_config)?;
    }
    info!("End of demonstration");
    Ok(())
}
