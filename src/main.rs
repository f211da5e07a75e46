use anyhow::Context;
use log::{info, warn};

mod call_timers;
mod commands;
mod components;
mod config;
mod history;
mod login;
mod notifications;
mod session_driver;
mod softphone;

use components::App;

fn main() {
    // Initialize logging
    env_logger::init();
    
    info!("Starting Vicidial Softphone");
    
    let config = match config::load_config().context("loading softphone config") {
        Ok(raw) => config::resolve(raw),
        Err(e) => {
            warn!("{:#}, using defaults", e);
            config::ResolvedConfig::default()
        }
    };
    info!("Call timing: {:?}", config.call_timing);
    
    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(App);
}
