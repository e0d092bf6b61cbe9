//! Student Accounts console
//!
//! Headless frontend for the account list controller: reads commands from
//! stdin, prints the account table to stdout and notifications to stderr.
//!
//! Usage: `student-accounts [--config <path>]`

mod command;
mod console;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use student_accounts_app::adapters::InMemoryAccountsService;
use student_accounts_app::{AppConfig, AppStateBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs and notifications go to stderr, the table to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = match config_path_from_args()? {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::load_default().context("loading default config")?,
    };
    tracing::info!("Operating as user {}", config.user_id);

    let app = AppStateBuilder::new()
        .accounts_service(Arc::new(InMemoryAccountsService::new()))
        .config(config)
        .build()?;

    app.mount().await;
    println!("{}", command::HELP);
    console::run(&app).await
}

fn config_path_from_args() -> Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => Ok(None),
        Some("--config" | "-c") => match args.next() {
            Some(path) => Ok(Some(PathBuf::from(path))),
            None => bail!("--config requires a path"),
        },
        Some(other) => bail!("unexpected argument: {other}"),
    }
}
