//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::Language;

/// siterec - Label site audio recordings by project and component
#[derive(Parser, Debug)]
#[command(name = "siterec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive recording form (default)
    Tui {
        /// Save recordings under this directory
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Interface language (en, zh)
        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Print the filename a recording started now would get
    Name {
        /// Project name
        #[arg(short, long, default_value = "")]
        project: String,

        /// Component name
        #[arg(short, long, default_value = "")]
        component: String,
    },

    /// Resolve and create the recordings directory
    Dir {
        /// Use this directory instead of the platform default
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Check the storage setup
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
