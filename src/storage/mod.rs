//! Storage module for siterec
//!
//! Resolves where recordings are saved. The platform-specific choice sits
//! behind the [`StorageRoot`] trait so callers never branch on the platform.

mod root;

pub use root::{DesktopRoot, FixedRoot, MobileRoot, StorageRoot, RECORDINGS_SUBDIR};

use std::path::PathBuf;

use crate::config::Settings;
use crate::Result;

/// Pick the storage root for this platform
///
/// An explicit directory (flag first, then configuration) always wins.
pub fn default_root(settings: &Settings, dir: Option<PathBuf>) -> Result<Box<dyn StorageRoot>> {
    if let Some(dir) = dir.or_else(|| settings.general.recordings_dir.clone()) {
        return Ok(Box::new(FixedRoot::new(dir)));
    }

    platform_root(settings)
}

/// Resolve the root and create it if missing
pub fn prepare_dir(root: &dyn StorageRoot) -> Result<PathBuf> {
    let dir = root.resolve()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(target_os = "android")]
fn platform_root(settings: &Settings) -> Result<Box<dyn StorageRoot>> {
    let external = std::env::var_os("EXTERNAL_STORAGE").map(PathBuf::from);
    Ok(Box::new(MobileRoot::new(
        external,
        settings.general.data_dir.clone(),
    )))
}

#[cfg(not(target_os = "android"))]
fn platform_root(_settings: &Settings) -> Result<Box<dyn StorageRoot>> {
    let dirs = directories::UserDirs::new().ok_or_else(|| {
        crate::SiterecError::Storage("could not determine home directory".to_string())
    })?;
    Ok(Box::new(DesktopRoot::new(dirs.home_dir())))
}
