//! acton-styleguide server and maintenance CLI

#![forbid(unsafe_code)]

use std::{path::PathBuf, process::ExitCode};

use acton_styleguide::commands::{self, CommandOutput};
use acton_styleguide::prelude::*;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::{net::TcpListener, signal};

#[derive(Parser)]
#[command(name = "acton-styleguide")]
#[command(version)]
#[command(about = "Backend styleguide module with guarded demo content", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the styleguide module (default)
    Serve,
    /// Create a demo content set unless it exists already
    Create {
        /// `tca` or `frontend`
        kind: DemoContentKind,
    },
    /// Delete a demo content set
    Delete {
        /// `tca` or `frontend`
        kind: DemoContentKind,
    },
    /// Print the schema of the demo tables as JSON
    Schema {
        /// Only this table
        table: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = StyleguideConfig::load_optional(cli.config.as_ref())?;
    observability::init(&config.logging)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await.map(|()| ExitCode::SUCCESS),
        Commands::Create { kind } => {
            let state = connect(config).await?;
            print_output(&commands::create(&state, kind).await?)
        }
        Commands::Delete { kind } => {
            let state = connect(config).await?;
            print_output(&commands::delete(&state, kind).await?)
        }
        Commands::Schema { table } => {
            println!("{}", commands::schema_json(table.as_deref())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn connect(config: StyleguideConfig) -> Result<AppState> {
    let pool = records::connect(&config.database.url)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    records::migrate(&pool).await?;
    Ok(AppState::new(config, pool))
}

async fn serve(config: StyleguideConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let state = connect(config).await?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Styleguide listening");

    axum::serve(listener, handlers::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server has shut down gracefully");
    Ok(())
}

fn print_output(output: &CommandOutput) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(&output.notification)?);
    Ok(output.exit_code())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
