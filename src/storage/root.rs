//! Storage root providers

use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Subdirectory that holds recordings under a home or external-storage base
pub const RECORDINGS_SUBDIR: &str = "Recordings";

/// Resolves the directory recordings are saved into
///
/// Implementations may create directories while probing, but callers still
/// create the returned directory before using it.
pub trait StorageRoot: Debug {
    /// Resolve the recordings directory
    fn resolve(&self) -> io::Result<PathBuf>;

    /// Short provider name for diagnostics
    fn describe(&self) -> &'static str;
}

/// Desktop convention: `~/Recordings`
#[derive(Debug, Clone)]
pub struct DesktopRoot {
    home: PathBuf,
}

impl DesktopRoot {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }
}

impl StorageRoot for DesktopRoot {
    fn resolve(&self) -> io::Result<PathBuf> {
        Ok(self.home.join(RECORDINGS_SUBDIR))
    }

    fn describe(&self) -> &'static str {
        "desktop"
    }
}

/// Mobile convention: external storage `Recordings`, else app-private storage
#[derive(Debug, Clone)]
pub struct MobileRoot {
    external: Option<PathBuf>,
    app_private: PathBuf,
}

impl MobileRoot {
    pub fn new(external: Option<PathBuf>, app_private: impl Into<PathBuf>) -> Self {
        Self {
            external,
            app_private: app_private.into(),
        }
    }

    fn try_external(&self) -> io::Result<PathBuf> {
        let base = self.external.as_deref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "external storage is unavailable")
        })?;

        let dir = base.join(RECORDINGS_SUBDIR);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

impl StorageRoot for MobileRoot {
    fn resolve(&self) -> io::Result<PathBuf> {
        match self.try_external() {
            Ok(dir) => Ok(dir),
            Err(e) => {
                warn!(
                    "External storage not usable ({}), falling back to {}",
                    e,
                    self.app_private.display()
                );
                Ok(self.app_private.clone())
            }
        }
    }

    fn describe(&self) -> &'static str {
        "mobile"
    }
}

/// A directory chosen explicitly by configuration or flag
#[derive(Debug, Clone)]
pub struct FixedRoot {
    dir: PathBuf,
}

impl FixedRoot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl StorageRoot for FixedRoot {
    fn resolve(&self) -> io::Result<PathBuf> {
        Ok(self.dir.clone())
    }

    fn describe(&self) -> &'static str {
        "fixed"
    }
}
