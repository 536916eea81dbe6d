//! Form screen - project/component inputs, record button and status

use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::strings::Strings;

/// Focusable element on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Project,
    Component,
    Button,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Project => Self::Component,
            Self::Component => Self::Button,
            Self::Button => Self::Project,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Project => Self::Button,
            Self::Component => Self::Project,
            Self::Button => Self::Component,
        }
    }
}

/// What the status line and button show this frame
pub struct FormView<'a> {
    pub strings: &'a Strings,
    pub pattern: &'a str,
    pub recording: bool,
    pub status: Line<'a>,
}

/// Form screen state
pub struct FormScreen {
    project: String,
    component: String,
    focus: Field,
    locked: bool,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FormScreen {
    pub fn new() -> Self {
        Self {
            project: String::new(),
            component: String::new(),
            focus: Field::Project,
            locked: false,
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock or unlock the text inputs
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_field(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Edit the focused input; ignored while locked or on the button
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.locked {
            return;
        }

        let target = match self.focus {
            Field::Project => &mut self.project,
            Field::Component => &mut self.component,
            Field::Button => return,
        };

        match key {
            KeyCode::Char(c) => target.push(c),
            KeyCode::Backspace => {
                target.pop();
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, view: FormView<'_>) {
        let strings = view.strings;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Project
                Constraint::Length(3), // Component
                Constraint::Length(1), // Filename hint
                Constraint::Length(3), // Button
                Constraint::Length(3), // Status
                Constraint::Min(4),    // Usage
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        // Title
        let title = Paragraph::new(strings.title)
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        self.draw_input(
            frame,
            chunks[1],
            strings.project_label,
            strings.project_hint,
            &self.project,
            Field::Project,
        );
        self.draw_input(
            frame,
            chunks[2],
            strings.component_label,
            strings.component_hint,
            &self.component,
            Field::Component,
        );

        let hint = Paragraph::new(format!("{}{}", strings.save_as, view.pattern))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[3]);

        // Record button
        let (label, bg) = if view.recording {
            (strings.stop_button, Color::Green)
        } else {
            (strings.start_button, Color::Red)
        };
        let border = if self.focus == Field::Button {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(bg)
        };
        let button = Paragraph::new(label)
            .style(Style::default().fg(Color::White).bg(bg).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(button, chunks[4]);

        // Status
        let status = Paragraph::new(view.status)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(strings.status_title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(status, chunks[5]);

        // Usage
        let mut usage = vec![Line::from(Span::styled(
            strings.usage_title,
            Style::default().fg(Color::Gray).bold(),
        ))];
        usage.extend(
            strings
                .usage_steps
                .iter()
                .map(|step| Line::from(Span::styled(*step, Style::default().fg(Color::Gray)))),
        );
        let usage = Paragraph::new(usage).wrap(Wrap { trim: true });
        frame.render_widget(usage, chunks[6]);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(format!(" {}  ", strings.bar_next)),
            Span::styled(" F5 ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(format!(" {}  ", strings.bar_record)),
            Span::styled(" F1 ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(format!(" {}  ", strings.bar_help)),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(format!(" {}", strings.bar_quit)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[7]);
    }

    fn draw_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        hint: &str,
        value: &str,
        field: Field,
    ) {
        let focused = self.focus == field && !self.locked;

        let border_style = if self.locked {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let text = if value.is_empty() && !focused {
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
        } else if focused {
            Line::from(format!("{}█", value))
        } else {
            Line::from(value)
        };

        let text_style = if self.locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let input = Paragraph::new(text).style(text_style).block(
            Block::default()
                .title(format!(" {} ", label))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(input, area);
    }
}
