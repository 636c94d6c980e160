mod components;
mod config;
mod error;
mod game;
mod model;
mod render;
mod state;
mod util;

use components::app::{App, AppProps};
use config::GameConfig;
use log::{Level, LevelFilter};

fn main() {
    console_error_panic_hook::set_once();

    let stored = config::load();
    let config = match &stored {
        Ok(Some(config)) => config.clone(),
        _ => GameConfig::default(),
    };
    let level = config.level().unwrap_or(Level::Info);
    let logger_ready = console_log::init_with_level(level).is_ok();
    if !logger_ready {
        log::set_max_level(LevelFilter::Info);
        log::warn!("console logger was already installed, keeping level info");
    }
    match stored {
        Ok(Some(_)) => log::info!("using stored config from `{}`", config::STORAGE_KEY),
        Ok(None) => {}
        Err(e) => log::warn!("ignoring stored config: {}", e),
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
