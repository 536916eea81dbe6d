//! Recording state latch

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

use crate::storage::{self, StorageRoot};

/// Start/stop bookkeeping for one recording session at a time
///
/// Nothing is captured or written: a session is a target path and a start
/// time. After [`stop`](Self::stop) the path and start time are kept until
/// the next successful [`start`](Self::start).
#[derive(Debug)]
pub struct RecordingState {
    root: Box<dyn StorageRoot>,
    is_recording: bool,
    audio_file: Option<PathBuf>,
    start_time: Option<DateTime<Local>>,
}

impl RecordingState {
    pub fn new(root: Box<dyn StorageRoot>) -> Self {
        Self {
            root,
            is_recording: false,
            audio_file: None,
            start_time: None,
        }
    }

    /// Begin a session for `filename` under the storage root
    ///
    /// Returns `false` if the storage directory cannot be resolved or
    /// created; the state is left untouched in that case.
    pub fn start(&mut self, filename: &str) -> bool {
        self.start_at(filename, Local::now())
    }

    pub fn start_at(&mut self, filename: &str, now: DateTime<Local>) -> bool {
        let dir = match storage::prepare_dir(self.root.as_ref()) {
            Ok(dir) => dir,
            Err(e) => {
                error!("Failed to start recording: {}", e);
                return false;
            }
        };

        let full_path = dir.join(filename);
        info!("Recording started: {}", full_path.display());

        self.is_recording = true;
        self.start_time = Some(now);
        self.audio_file = Some(full_path);
        true
    }

    /// End the current session
    ///
    /// Returns the elapsed time, or `None` if no session is running.
    pub fn stop(&mut self) -> Option<Duration> {
        self.stop_at(Local::now())
    }

    pub fn stop_at(&mut self, now: DateTime<Local>) -> Option<Duration> {
        if !self.is_recording {
            return None;
        }

        let duration = self.elapsed_at(now);
        self.is_recording = false;

        info!(
            "Recording stopped: {}, duration: {:.2}s",
            self.audio_file
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            duration.as_secs_f64()
        );

        Some(duration)
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    /// Target path of the current or most recent session
    pub fn audio_file(&self) -> Option<&Path> {
        self.audio_file.as_deref()
    }

    /// Start time of the current or most recent session
    pub fn start_time(&self) -> Option<DateTime<Local>> {
        self.start_time
    }

    /// Time since start while recording, zero otherwise
    pub fn elapsed(&self) -> Duration {
        if self.is_recording {
            self.elapsed_at(Local::now())
        } else {
            Duration::ZERO
        }
    }

    // A clock that moved backwards yields zero.
    fn elapsed_at(&self, now: DateTime<Local>) -> Duration {
        self.start_time
            .and_then(|start| (now - start).to_std().ok())
            .unwrap_or(Duration::ZERO)
    }
}
