//! Webcam demo: face boxes, hats and contours, warped by a random rotation, shown and recorded.

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use vision_demo::{
    app::{AppConfig, DemoApp},
    cli::Args,
    config::Config,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_level));

    info!("Vision Demo");

    let mut config = match &args.config {
        Some(config_path) => {
            info!("Loading configuration from: {}", config_path.display());
            Config::from_file(config_path).unwrap_or_else(|e| {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            })
        }
        None => Config::default(),
    };
    args.apply_to(&mut config);

    let app_config = AppConfig {
        config,
        source: args.frame_source(),
        classifier: args.classifier.clone(),
        max_frames: args.max_frames,
    };

    let mut app = DemoApp::new(app_config)?;
    app.run()?;

    Ok(())
}
