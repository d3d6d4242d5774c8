mod animation;
mod app;
mod config;
mod solar_system;

use anyhow::Result;
use orrery_engine::logging::{init_logging, LoggingConfig};
use orrery_engine::window::Runtime;

use crate::app::OrreryApp;
use crate::config::DemoConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();
    log::info!(
        "starting orrery: \"{}\" {}x{}, {:?}",
        config.title,
        config.width,
        config.height,
        config.animation
    );

    let app = OrreryApp::new(&config);
    Runtime::run(config.runtime(), config.gpu(), app)
}
