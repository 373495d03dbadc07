use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleetview_cli::config::CliConfig;
use fleetview_cli::render::to_pretty_json;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleetview_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let config = CliConfig::from_env(std::env::args().nth(1))?;
    tracing::info!(
        snapshot = %config.snapshot_path.display(),
        client = %config.client,
        status = %config.status,
        "Loaded configuration"
    );

    // The only clock read in the program; everything downstream takes `now`.
    let now = config.now.unwrap_or_else(chrono::Utc::now);

    let response = fleetview_cli::run(&config, now)?;
    println!("{}", to_pretty_json(&response)?);

    Ok(())
}
