//! siterec - Label site audio recordings by project and component
//!
//! A single-screen recorder front-end: two labels, a toggle and a status line.

pub mod cli;
pub mod config;
pub mod naming;
pub mod recorder;
pub mod storage;
pub mod tui;

use thiserror::Error;

/// Main error type for siterec
#[derive(Error, Debug)]
pub enum SiterecError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SiterecError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "siterec";
