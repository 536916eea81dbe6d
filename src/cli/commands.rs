//! CLI command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::naming::FilenamePolicy;
use crate::storage::{self, StorageRoot};

/// Print the filename a recording started now would use
pub fn print_name(settings: &Settings, project: &str, component: &str) -> Result<()> {
    let policy = FilenamePolicy::from_settings(settings);
    println!("{}", policy.filename(project, component));
    Ok(())
}

/// Resolve, create and print the recordings directory
pub fn print_dir(settings: &Settings, dir: Option<PathBuf>) -> Result<()> {
    let root = storage::default_root(settings, dir)?;
    let path = ensure_root(root.as_ref())?;
    println!("{}", path.display());
    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    provider: String,
    recordings_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    language: String,
    checks: Vec<DoctorCheck>,
}

/// Run diagnostic checks on the storage setup.
pub fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("siterec doctor");
    println!("provider: {}", report.provider);
    if let Some(dir) = &report.recordings_dir {
        println!("recordings: {}", dir.display());
    }
    if let Some(path) = &report.config_path {
        println!("config: {}", path.display());
    }
    println!("language: {}", report.language);
    println!();

    for check in &report.checks {
        println!("{:<12} {:<8} {}", check.name, check.status, check.detail);
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> DoctorReport {
    let mut checks = Vec::new();
    let mut provider = "none".to_string();
    let mut recordings_dir = None;

    match storage::default_root(settings, None) {
        Ok(root) => {
            provider = root.describe().to_string();
            match ensure_root(root.as_ref()) {
                Ok(dir) => {
                    checks.push(DoctorCheck {
                        name: "directory",
                        status: "ok",
                        detail: "recordings directory exists".to_string(),
                    });
                    checks.push(match probe_writable(&dir) {
                        Ok(()) => DoctorCheck {
                            name: "writable",
                            status: "ok",
                            detail: "files can be created".to_string(),
                        },
                        Err(e) => DoctorCheck {
                            name: "writable",
                            status: "failed",
                            detail: format!("{:#}", e),
                        },
                    });
                    recordings_dir = Some(dir);
                }
                Err(e) => checks.push(DoctorCheck {
                    name: "directory",
                    status: "failed",
                    detail: format!("{:#}", e),
                }),
            }
        }
        Err(e) => checks.push(DoctorCheck {
            name: "storage",
            status: "failed",
            detail: e.to_string(),
        }),
    }

    let config_path = Settings::config_path().ok();
    checks.push(DoctorCheck {
        name: "config",
        status: if config_path.as_ref().is_some_and(|p| p.exists()) {
            "ok"
        } else {
            "default"
        },
        detail: "run `siterec config init` to write a config file".to_string(),
    });

    DoctorReport {
        provider,
        recordings_dir,
        config_path,
        language: settings.ui.language.to_string(),
        checks,
    }
}

// Helper functions

fn ensure_root(root: &dyn StorageRoot) -> Result<PathBuf> {
    storage::prepare_dir(root)
        .with_context(|| format!("Failed to prepare {} storage root", root.describe()))
}

fn probe_writable(dir: &Path) -> Result<()> {
    let probe = dir.join(".siterec-probe");
    std::fs::write(&probe, b"")
        .with_context(|| format!("Cannot write to {}", dir.display()))?;
    std::fs::remove_file(&probe)?;
    Ok(())
}
