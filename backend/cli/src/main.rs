mod config;
mod config_cmd;
mod input;
mod render_cmd;
mod reply_cmd;
mod terminal_output;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use tracing::debug;

use venturemind_config::{LOG_LEVELS, ensure_valid};
use venturemind_logging::{LoggerOptions, init_logger};

#[derive(Debug, Parser)]
#[command(name = "venturemind")]
#[command(about = "VentureMind: render assistant replies and startup packs")]
#[command(version)]
struct Cli {
    /// Path to the config file (default: ~/.venturemind/config.yaml)
    #[arg(long, global = true, env = "VENTUREMIND_CONFIG")]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (overrides the config file)
    #[arg(
        long,
        global = true,
        ignore_case = true,
        value_parser = PossibleValuesParser::new(LOG_LEVELS)
    )]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render reply markdown to HTML
    Render {
        /// Markdown file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Print the classified lines as JSON instead of HTML
        #[arg(long)]
        lines: bool,
    },
    /// Print reply markdown as plain text for speech
    Speech {
        /// Markdown file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Render a chat API reply: chat bubble plus startup pack widgets
    Reply {
        /// Reply JSON file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Input is a stored history record instead of a live reply
        #[arg(long)]
        history: bool,
        /// Print the projected widgets as JSON
        #[arg(long)]
        json: bool,
        /// HTTP status the body was returned with
        #[arg(long)]
        status: Option<u16>,
    },
    /// Show the effective configuration
    Config {
        /// Print the validation report instead of the config
        #[arg(long)]
        validate: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = config::resolve_config_path(cli.config.as_deref());
    let settings = config::load(&config_path).await?;

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or_else(|| settings.log_level())
        .to_ascii_lowercase();
    let _log_guard = init_logger(&LoggerOptions {
        level,
        log_dir: config::log_dir(&settings),
        json: config::json_logs(&settings),
    })?;
    debug!(path = %config_path.display(), "Using config");

    if !matches!(cli.command, Commands::Config { .. }) {
        ensure_valid(&settings, &config_path)?;
    }

    match cli.command {
        Commands::Render { file, lines } => {
            let markdown = input::read_input(file.as_deref()).await?;
            render_cmd::render(&markdown, lines)?;
        }
        Commands::Speech { file } => {
            let markdown = input::read_input(file.as_deref()).await?;
            render_cmd::speech(&markdown)?;
        }
        Commands::Reply { file, history, json, status } => {
            let raw = input::read_input(file.as_deref()).await?;
            let options = reply_cmd::ReplyOptions {
                history,
                json,
                speak: settings.voice_enabled(),
                status,
            };
            reply_cmd::run(&raw, &options)?;
        }
        Commands::Config { validate } => {
            config_cmd::run(&settings, &config_path, validate)?;
        }
    }

    Ok(())
}
