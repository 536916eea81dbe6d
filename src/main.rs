//! siterec - Label site audio recordings by project and component
//!
//! Entry point for the siterec CLI application.

use anyhow::Result;
use clap::Parser;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use siterec::cli::{Cli, Commands};
use siterec::config::Settings;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui {
        dir: None,
        lang: None,
    });

    if let Commands::Completions { shell } = command {
        siterec::cli::completions::print(shell);
        return Ok(());
    }

    // Load configuration only for runtime commands.
    let mut settings = Settings::load()?;

    let level = if cli.verbose {
        "debug"
    } else {
        settings.general.log_level.as_str()
    };

    match command {
        Commands::Tui { dir, lang } => {
            // The TUI owns the terminal, so logs go to a file.
            init_logging(level, LogTarget::File(open_log_file(&settings)));
            if let Some(lang) = lang {
                settings.ui.language = lang;
            }
            let root = siterec::storage::default_root(&settings, dir)?;
            tracing::info!("Storage provider: {}", root.describe());
            siterec::tui::run(&settings, root)?;
        }
        command => {
            init_logging(level, LogTarget::Stderr);

            match command {
                Commands::Name { project, component } => {
                    siterec::cli::commands::print_name(&settings, &project, &component)?;
                }
                Commands::Dir { dir } => {
                    siterec::cli::commands::print_dir(&settings, dir)?;
                }
                Commands::Doctor { json } => {
                    siterec::cli::commands::run_doctor(&settings, json)?;
                }
                Commands::Config(config_cmd) => {
                    siterec::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Tui { .. } | Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}

enum LogTarget {
    Stderr,
    File(Option<File>),
}

fn open_log_file(settings: &Settings) -> Option<File> {
    let path = settings.log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Initialize logging; a missing log file silences output instead of
/// writing over the TUI.
fn init_logging(level: &str, target: LogTarget) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (stderr_layer, file_layer) = match target {
        LogTarget::Stderr => (
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogTarget::File(file) => (
            None,
            file.map(|file| {
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
            }),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}
