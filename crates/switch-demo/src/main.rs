//! Sound switch demo
//!
//! Shows the switches declared in the config file and logs every change.
//!
//! ## Command line flags
//!
//! - `--config <path>`: Read switches from this file instead of the default
//! - `--write-default-config`: Write the default config to the config path and exit

mod app;
mod config;

use std::path::PathBuf;

use iced::{Size, Task};

use app::{DemoApp, Message};

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();
    let write_default = args.iter().any(|arg| arg == "--write-default-config");
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path);

    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("switch-demo starting up");

    if write_default {
        if let Err(e) = config::save_config(&config::DemoConfig::default(), &config_path) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        println!("Default config written to {}", config_path.display());
        return Ok(());
    }

    let demo_config = match config::load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config rejected: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    // Boot closure must be Fn; the config is only taken once
    let config_cell = std::cell::RefCell::new(Some(demo_config));

    iced::application(
        move || {
            let config = config_cell.borrow_mut().take().unwrap_or_default();
            match DemoApp::new(config) {
                Ok(app) => (app, Task::none()),
                Err(e) => {
                    log::error!("Failed to build switches: {:#}", e);
                    std::process::exit(1);
                }
            }
        },
        update,
        view,
    )
    .subscription(subscription)
    .title("Sound Switch")
    .window_size(Size::new(480.0, 320.0))
    .run()
}

/// Update function for iced
fn update(app: &mut DemoApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &DemoApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &DemoApp) -> iced::Subscription<Message> {
    app.subscription()
}
