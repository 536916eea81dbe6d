//! Main TUI application state and logic

use crossterm::event::KeyCode;
use ratatui::prelude::*;
use std::time::Duration;
use tracing::debug;

use crate::config::Settings;
use crate::naming::{FilenamePolicy, LabelError, SessionLabel};
use crate::recorder::RecordingState;
use crate::storage::StorageRoot;
use crate::tui::screens::{Field, FormScreen, FormView};
use crate::tui::strings::Strings;
use crate::tui::widgets::HelpPopup;

/// Message shown on the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    MissingProject,
    MissingComponent,
    Recording,
    Saved { duration: Duration },
}

/// Main application state
pub struct App {
    strings: &'static Strings,
    policy: FilenamePolicy,
    pattern: String,
    recorder: RecordingState,
    form: FormScreen,
    status: Status,
    show_help: bool,
    quit: bool,
}

impl App {
    /// Create a new app instance
    pub fn new(settings: &Settings, root: Box<dyn StorageRoot>) -> Self {
        let strings = Strings::for_language(settings.ui.language);
        let policy = FilenamePolicy::from_settings(settings);
        let pattern = policy.pattern(strings.time_word);

        Self {
            strings,
            policy,
            pattern,
            recorder: RecordingState::new(root),
            form: FormScreen::new(),
            status: Status::Ready,
            show_help: false,
            quit: false,
        }
    }

    /// Draw the form and, if active, the help popup
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.size();

        let view = FormView {
            strings: self.strings,
            pattern: &self.pattern,
            recording: self.recorder.is_recording(),
            status: self.status_line(),
        };
        self.form.draw(frame, area, view);

        if self.show_help {
            HelpPopup::draw(frame, area, self.strings);
        }
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        debug!("Key: {:?} on {:?}", key, self.form.focus());

        match key {
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.previous_field(),
            KeyCode::F(1) => self.toggle_help(),
            KeyCode::F(5) => self.toggle_recording(),
            KeyCode::Enter => {
                if self.form.focus() == Field::Button {
                    self.toggle_recording();
                } else {
                    self.form.next_field();
                }
            }
            _ => self.form.handle_key(key),
        }
    }

    /// Start or stop depending on the current state
    pub fn toggle_recording(&mut self) {
        if self.recorder.is_recording() {
            if let Some(duration) = self.recorder.stop() {
                self.form.set_locked(false);
                self.status = Status::Saved { duration };
            }
            return;
        }

        let label = match SessionLabel::new(self.form.project(), self.form.component()) {
            Ok(label) => label,
            Err(LabelError::MissingProject) => {
                self.status = Status::MissingProject;
                return;
            }
            Err(LabelError::MissingComponent) => {
                self.status = Status::MissingComponent;
                return;
            }
        };

        let filename = self.policy.for_label(&label);
        if self.recorder.start(&filename) {
            self.form.set_locked(true);
            self.status = Status::Recording;
        }
    }

    /// Handle Esc: close the popup, otherwise quit
    pub fn handle_back(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else {
            self.request_quit();
        }
    }

    /// Quit, closing any running session first
    pub fn request_quit(&mut self) {
        if self.recorder.is_recording() {
            self.toggle_recording();
        }
        self.quit = true;
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn recorder(&self) -> &RecordingState {
        &self.recorder
    }

    pub fn form(&self) -> &FormScreen {
        &self.form
    }

    fn status_line(&self) -> Line<'static> {
        let strings = self.strings;
        match self.status {
            Status::Ready => Line::from(Span::styled(
                strings.ready,
                Style::default().fg(Color::Gray),
            )),
            Status::MissingProject => Line::from(Span::styled(
                strings.missing_project,
                Style::default().fg(Color::Red),
            )),
            Status::MissingComponent => Line::from(Span::styled(
                strings.missing_component,
                Style::default().fg(Color::Red),
            )),
            Status::Recording => Line::from(vec![
                Span::styled("● ", Style::default().fg(Color::Red)),
                Span::styled(strings.recording, Style::default().fg(Color::Red).bold()),
                Span::raw(" "),
                Span::styled(
                    format_elapsed(self.recorder.elapsed()),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Status::Saved { duration } => {
                let name = self
                    .recorder
                    .audio_file()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Line::from(vec![
                    Span::styled(strings.saved, Style::default().fg(Color::Green)),
                    Span::raw(format!(": {} ({})", name, format_elapsed(duration))),
                ])
            }
        }
    }
}

fn format_elapsed(duration: Duration) -> String {
    let secs = duration.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FixedRoot;
    use ratatui::backend::TestBackend;
    use std::path::Path;

    fn app_in(dir: &Path) -> App {
        App::new(&Settings::default(), Box::new(FixedRoot::new(dir)))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn fill_form(app: &mut App, project: &str, component: &str) {
        type_text(app, project);
        app.handle_key(KeyCode::Tab);
        type_text(app, component);
        app.handle_key(KeyCode::Tab);
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn missing_project_is_reported_first() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_in(tmp.path());

        app.handle_key(KeyCode::F(5));
        assert_eq!(app.status(), Status::MissingProject);
        assert!(!app.recorder().is_recording());
    }

    #[test]
    fn missing_component_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_in(tmp.path());
        type_text(&mut app, "Bridge");

        app.handle_key(KeyCode::F(5));
        assert_eq!(app.status(), Status::MissingComponent);
        assert!(!app.recorder().is_recording());
    }

    #[test]
    fn whitespace_only_names_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_in(tmp.path());
        fill_form(&mut app, "   ", "Beam");

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.status(), Status::MissingProject);
    }

    #[test]
    fn toggle_starts_and_stops() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_in(tmp.path());
        fill_form(&mut app, "Bridge/1", "Beam:A");
        assert_eq!(app.form().focus(), Field::Button);

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.status(), Status::Recording);
        assert!(app.form().is_locked());

        let name = app
            .recorder()
            .audio_file()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap();
        assert!(name.starts_with("Bridge_1_Beam_A_"), "{}", name);
        assert!(name.ends_with(".wav"));

        app.handle_key(KeyCode::Enter);
        assert!(matches!(app.status(), Status::Saved { .. }));
        assert!(!app.recorder().is_recording());
        assert!(!app.form().is_locked());
    }

    #[test]
    fn inputs_are_locked_while_recording() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_in(tmp.path());
        fill_form(&mut app, "Pier", "Cap");
        app.handle_key(KeyCode::F(5));

        app.handle_key(KeyCode::BackTab);
        type_text(&mut app, "zzz");
        assert_eq!(app.form().component(), "Cap");
    }

    #[test]
    fn storage_failure_keeps_form_editable() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let mut app = app_in(&blocker);
        fill_form(&mut app, "Pier", "Cap");

        app.handle_key(KeyCode::F(5));
        assert_eq!(app.status(), Status::Ready);
        assert!(!app.recorder().is_recording());
        assert!(!app.form().is_locked());
    }

    #[test]
    fn help_popup_swallows_next_key() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_in(tmp.path());

        app.handle_key(KeyCode::F(1));
        app.handle_key(KeyCode::Char('x'));
        assert!(app.form().project().is_empty());

        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.form().project(), "x");
    }

    #[test]
    fn quitting_while_recording_stops_the_session() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_in(tmp.path());
        fill_form(&mut app, "Pier", "Cap");
        app.handle_key(KeyCode::F(5));

        app.handle_back();
        assert!(app.should_quit());
        assert!(!app.recorder().is_recording());
    }

    #[test]
    fn button_label_follows_state() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_in(tmp.path());

        let idle = render(&app);
        assert!(idle.contains("Start recording"));
        assert!(idle.contains("File will be saved as: project_component_time.wav"));

        fill_form(&mut app, "Pier", "Cap");
        app.handle_key(KeyCode::F(5));
        let recording = render(&app);
        assert!(recording.contains("Stop recording"));
        assert!(recording.contains("Recording..."));
    }

    #[test]
    fn chinese_help_popup_and_bar_are_translated() {
        let tmp = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.ui.language = crate::config::Language::Zh;
        let mut app = App::new(&settings, Box::new(FixedRoot::new(tmp.path())));

        app.handle_key(KeyCode::F(1));
        // Wide glyphs leave a blank trailing cell, so compare without spaces.
        let screen: String = render(&app).chars().filter(|c| *c != ' ').collect();

        for expected in [
            "帮助",
            "表单快捷键",
            "下一项",
            "开始/停止录音",
            "退出程序",
            "按任意键关闭",
            "录音",
            "退出",
        ] {
            assert!(screen.contains(expected), "missing {}\n{}", expected, screen);
        }
        for english in [
            "FormShortcuts",
            "Nextfield",
            "Quitapplication",
            "Record",
            "Quit",
        ] {
            assert!(!screen.contains(english), "untranslated {}\n{}", english, screen);
        }
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(75)), "01:15");
        assert_eq!(format_elapsed(Duration::from_secs(3725)), "1:02:05");
    }
}
