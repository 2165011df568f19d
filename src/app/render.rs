use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::dropdown::render_dropdown;
use super::layout::{FieldRegions, LayoutRegions};
use super::state::{App, StatusMessage};

const INPUT_HEIGHT: u16 = 3;

impl App {
    /// Render the UI
    ///
    /// Also records the screen regions used for mouse hit-testing.
    pub fn render(&mut self, frame: &mut Frame) {
        let mut constraints = vec![Constraint::Length(1)]; // Header
        constraints.extend(self.fields.iter().map(|_| Constraint::Length(INPUT_HEIGHT)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1)); // Status line
        let areas = Layout::vertical(constraints).split(frame.area());

        self.render_header(frame, areas[0]);

        let mut regions = LayoutRegions::default();
        for index in 0..self.fields.len() {
            let area = areas[index + 1];
            self.render_input_field(frame, index, area);
            regions.fields.push(FieldRegions {
                input: area,
                ..FieldRegions::default()
            });
        }

        self.render_status(frame, areas[areas.len() - 1]);

        // Dropdown last so it overlays the inputs below it
        let focused = self.focused;
        if let Some((dropdown, rows)) = render_dropdown(
            &self.fields[focused].widget,
            frame,
            regions.fields[focused].input,
            self.max_visible,
        ) {
            regions.fields[focused].dropdown = Some(dropdown);
            regions.fields[focused].rows = rows;
        }

        self.layout = regions;
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(
                " lawgg ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Tab: next field  ↑↓: move  Enter: select  Esc: close",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_input_field(&mut self, frame: &mut Frame, index: usize, area: Rect) {
        let border_color = if index == self.focused {
            Color::Cyan // Focused
        } else {
            Color::DarkGray // Unfocused
        };

        let field = &mut self.fields[index];
        let title = format!(" {} ", field.config.title());
        field.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        );
        // Only the focused field shows a cursor
        let cursor_style = if index == self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        field.textarea.set_cursor_style(cursor_style);

        frame.render_widget(&field.textarea, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(StatusMessage::Navigated { route, label }) => Line::from(vec![
                Span::styled(" → ", Style::default().fg(Color::Green)),
                Span::styled(route.clone(), Style::default().fg(Color::Green)),
                Span::raw("  "),
                Span::raw(label.clone()),
            ]),
            Some(StatusMessage::Filled { field, value }) => Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{}: {}", field, value)),
            ]),
            None => Line::from(Span::styled(
                " Ctrl+C: quit",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
