//! Recording filename policy
//!
//! Turns a project/component pair into a filesystem-safe, timestamped name.

mod policy;

pub use policy::{
    clean_segment, FilenamePolicy, LabelError, SessionLabel, INVALID_CHARS, MAX_SEGMENT_LEN,
    TIMESTAMP_FORMAT,
};
