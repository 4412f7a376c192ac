use aimpur_api::cli::{self, Cli, Command};
use aimpur_api::config::AimpurConfig;
use aimpur_api::{create_app, tracing_setup};
use aimpur_calculator::Calculator;
use clap::Parser;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AimpurConfig::load_from(path)?,
        None => AimpurConfig::load()?,
    };

    match cli.command.unwrap_or(Command::Serve { host: None, port: None }) {
        Command::Serve { host, port } => start_server(config, host, port).await,
        Command::List => {
            print!("{}", cli::render_listing(&Calculator::new()));
            Ok(())
        }
        Command::Calc { name, inputs } => {
            let value = cli::run_calculation(&Calculator::new(), &name, &inputs)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
    }
}

async fn start_server(
    mut config: AimpurConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    tracing_setup::init_tracing(&config.logging)?;

    match &config.source {
        Some(path) => info!(path = %path.display(), "Loaded configuration"),
        None => warn!("No configuration file found, using defaults"),
    }

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let addr = config.server.bind_address();
    info!(
        %addr,
        environment = %config.environment.env_type,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Aimpur calculator service"
    );

    let app = create_app(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
