//! Filename generation from session labels

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::config::Settings;

/// Characters that are not allowed in a filename segment
pub const INVALID_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Maximum length of a single segment, in characters
pub const MAX_SEGMENT_LEN: usize = 50;

/// Extension used when none is configured
pub const DEFAULT_EXTENSION: &str = "wav";

/// Timestamp layout embedded in every filename
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Validation failure for a session label
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    #[error("project name is missing")]
    MissingProject,

    #[error("component name is missing")]
    MissingComponent,
}

/// A validated (project, component) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLabel {
    project: String,
    component: String,
}

impl SessionLabel {
    /// Trim both names and reject blanks, project first
    pub fn new(project: &str, component: &str) -> Result<Self, LabelError> {
        let project = project.trim();
        let component = component.trim();

        if project.is_empty() {
            return Err(LabelError::MissingProject);
        }
        if component.is_empty() {
            return Err(LabelError::MissingComponent);
        }

        Ok(Self {
            project: project.to_string(),
            component: component.to_string(),
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

/// Replace reserved characters, trim, and cap at [`MAX_SEGMENT_LEN`] characters
pub fn clean_segment(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect();

    replaced.trim().chars().take(MAX_SEGMENT_LEN).collect()
}

/// Builds `{project}_{component}_{YYYYMMDD_HHMMSS}.{ext}` names
#[derive(Debug, Clone)]
pub struct FilenamePolicy {
    project_placeholder: String,
    component_placeholder: String,
    extension: String,
}

impl Default for FilenamePolicy {
    fn default() -> Self {
        Self::new("project", "component", DEFAULT_EXTENSION)
    }
}

impl FilenamePolicy {
    pub fn new(project_placeholder: &str, component_placeholder: &str, extension: &str) -> Self {
        Self {
            project_placeholder: project_placeholder.to_string(),
            component_placeholder: component_placeholder.to_string(),
            extension: clean_extension(extension),
        }
    }

    /// Policy with the placeholders and extension from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.project_placeholder(),
            &settings.component_placeholder(),
            &settings.naming.extension,
        )
    }

    /// Filename for the given labels at the current local time
    pub fn filename(&self, project: &str, component: &str) -> String {
        self.filename_at(project, component, Local::now())
    }

    /// Filename for the given labels at a fixed time
    pub fn filename_at(&self, project: &str, component: &str, at: DateTime<Local>) -> String {
        let project = non_blank_or(project, &self.project_placeholder);
        let component = non_blank_or(component, &self.component_placeholder);

        format!(
            "{}_{}_{}.{}",
            clean_segment(project),
            clean_segment(component),
            at.format(TIMESTAMP_FORMAT),
            self.extension
        )
    }

    /// Filename for an already validated label
    pub fn for_label(&self, label: &SessionLabel) -> String {
        self.filename(label.project(), label.component())
    }

    /// Pattern shown to the user, e.g. `project_component_time.wav`
    pub fn pattern(&self, time_word: &str) -> String {
        format!(
            "{}_{}_{}.{}",
            self.project_placeholder, self.component_placeholder, time_word, self.extension
        )
    }
}

// Blank extensions fall back to `wav`; separators never reach the path.
fn clean_extension(raw: &str) -> String {
    let cleaned = clean_segment(raw.trim().trim_start_matches('.'));
    if cleaned.is_empty() {
        DEFAULT_EXTENSION.to_string()
    } else {
        cleaned
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn replaces_reserved_characters() {
        let policy = FilenamePolicy::default();
        let name = policy.filename_at("Bridge/1", "Beam:A", fixed_time());
        assert_eq!(name, "Bridge_1_Beam_A_20240309_140507.wav");
    }

    #[test]
    fn output_has_no_reserved_characters() {
        let policy = FilenamePolicy::default();
        let nasty = r#"a/b\c:d*e?f"g<h>i|j"#;
        let name = policy.filename_at(nasty, nasty, fixed_time());
        assert!(!name.contains(&INVALID_CHARS[..]), "{}", name);
        assert_eq!(clean_segment(nasty), "a_b_c_d_e_f_g_h_i_j");
    }

    #[test]
    fn long_segments_are_truncated_independently() {
        let policy = FilenamePolicy::default();
        let project = "p".repeat(80);
        let component = "c".repeat(51);
        let name = policy.filename_at(&project, &component, fixed_time());

        let expected = format!("{}_{}_20240309_140507.wav", "p".repeat(50), "c".repeat(50));
        assert_eq!(name, expected);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let cleaned = clean_segment(&"桥".repeat(60));
        assert_eq!(cleaned.chars().count(), MAX_SEGMENT_LEN);
    }

    #[test]
    fn trims_before_truncating() {
        let raw = format!("   {}   ", "x".repeat(50));
        assert_eq!(clean_segment(&raw), "x".repeat(50));
        assert_eq!(clean_segment("  Pier 3 "), "Pier 3");
    }

    #[test]
    fn blank_labels_use_placeholders() {
        let policy = FilenamePolicy::default();
        assert_eq!(
            policy.filename_at("", "  ", fixed_time()),
            "project_component_20240309_140507.wav"
        );

        let zh = FilenamePolicy::new("项目", "构件", ".wav");
        assert_eq!(
            zh.filename_at("", "", fixed_time()),
            "项目_构件_20240309_140507.wav"
        );
    }

    #[test]
    fn current_time_stamp_has_expected_shape() {
        let policy = FilenamePolicy::default();
        let name = policy.filename("", "");

        let stamp = name
            .strip_prefix("project_component_")
            .and_then(|rest| rest.strip_suffix(".wav"))
            .unwrap();
        assert_eq!(stamp.len(), 15);
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn label_validation_checks_project_first() {
        assert_eq!(SessionLabel::new(" ", ""), Err(LabelError::MissingProject));
        assert_eq!(
            SessionLabel::new("Bridge", "\t"),
            Err(LabelError::MissingComponent)
        );

        let label = SessionLabel::new(" Bridge ", " Beam ").unwrap();
        assert_eq!(label.project(), "Bridge");
        assert_eq!(label.component(), "Beam");
    }

    #[test]
    fn blank_extension_falls_back_to_wav() {
        for ext in ["", "   ", ".", " . "] {
            let policy = FilenamePolicy::new("project", "component", ext);
            assert_eq!(
                policy.filename_at("a", "b", fixed_time()),
                "a_b_20240309_140507.wav",
                "extension {:?}",
                ext
            );
        }
    }

    #[test]
    fn extension_cannot_introduce_path_separators() {
        let policy = FilenamePolicy::new("project", "component", "../x/y");
        let name = policy.filename_at("a", "b", fixed_time());

        assert_eq!(name, "a_b_20240309_140507._x_y");
        assert!(!name.contains(&INVALID_CHARS[..]));

        let policy = FilenamePolicy::new("project", "component", " .Flac ");
        assert_eq!(
            policy.filename_at("a", "b", fixed_time()),
            "a_b_20240309_140507.Flac"
        );
    }

    #[test]
    fn pattern_uses_placeholders() {
        let policy = FilenamePolicy::default();
        assert_eq!(policy.pattern("time"), "project_component_time.wav");
    }
}
