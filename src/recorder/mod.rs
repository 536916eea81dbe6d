//! Recording session bookkeeping
//!
//! No audio device is opened here. A session only tracks where the recording
//! would be saved and when it began.

mod state;

pub use state::RecordingState;
