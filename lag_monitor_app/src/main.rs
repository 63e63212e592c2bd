#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::style)]

use anyhow::Context;
use clap::Parser;
use lag_monitor_app::app_config::AppConfig;
use lag_monitor_app::cli::Cli;
use lag_monitor_app::shutdown::cancel_on_signal;
use lag_monitor_app::startup::run_until_stopped;
use tokio_util::sync::CancellationToken;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_owned());

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::build(&cli.config).context("While building app config")?;
    let groups = cli.groups_or(&config.groups);

    let cancellation_token = CancellationToken::new();
    tokio::spawn(cancel_on_signal(cancellation_token.clone()));

    run_until_stopped(config, groups, cancellation_token).await?;

    Ok(())
}
