//! Jinn CLI Application
//!
//! Interactive goal planning session plus non-interactive access to saved
//! processes.

mod args;
mod cli;
mod renderer;
mod repl;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jinn_core::{CommandGenerator, CommandGeneratorConfig, SessionBuilder};
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        generator,
        generator_args,
        timeout_secs,
        user,
        language,
        command,
    } = Args::parse();

    let mut builder = SessionBuilder::new()
        .with_database_path(database_file)
        .with_language(language);
    if let Some(binary) = generator {
        info!("Using generator {}", binary.display());
        let config = CommandGeneratorConfig::new(binary)
            .with_args(generator_args)
            .with_timeout(Duration::from_secs(timeout_secs));
        builder = builder.with_generator(Arc::new(CommandGenerator::new(config)));
    }

    let session = builder
        .build()
        .await
        .context("Failed to initialize session")?;
    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(session, renderer, user);

    info!("Jinn started");

    match command {
        Some(Commands::History { command }) => cli.handle_history_command(command).await,
        None => repl::run(&mut cli).await,
    }
}
