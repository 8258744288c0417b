//! Joystick demo
//!
//! Opens a window with virtual joysticks and logs every stick event.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use joystick_widget::config::DemoConfig;

mod app;

/// Virtual joystick demo window
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "joystick.yaml")]
    config: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Number of joysticks to show (overrides the config file)
    #[arg(long)]
    count: Option<usize>,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level)?;

    info!("Starting joystick demo...");
    info!("Configuration file: {}", args.config);

    let mut config = DemoConfig::load_or_default(&args.config)?;
    if let Some(count) = args.count {
        config = config.with_count(count);
        config.validate()?;
    }

    let joysticks = config.build_joysticks()?;
    info!("Created {} joystick(s)", joysticks.len());

    app::run(&config.window, joysticks)?;

    info!("Joystick demo closed");
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}
