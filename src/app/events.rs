use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::state::App;
use crate::suggest::{KeyOutcome, WidgetKey};

/// Map a terminal key onto the widget's navigation keys
pub fn widget_key(key: &KeyEvent) -> WidgetKey {
    match key.code {
        KeyCode::Down => WidgetKey::Down,
        KeyCode::Up => WidgetKey::Up,
        KeyCode::Enter => WidgetKey::Enter,
        KeyCode::Esc => WidgetKey::Escape,
        _ => WidgetKey::Other,
    }
}

impl App {
    /// Dispatch a terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            Event::Paste(text) => {
                let single_line = text.replace(['\r', '\n'], " ");
                if self.focused_field_mut().textarea.insert_str(single_line) {
                    self.input_changed(now);
                }
            }
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next(now);
                return;
            }
            KeyCode::BackTab => {
                self.focus_previous(now);
                return;
            }
            _ => {}
        }

        let widget_key = widget_key(&key);
        if widget_key != WidgetKey::Other {
            match self.focused_field_mut().widget.on_key_down(widget_key) {
                KeyOutcome::Handled => {}
                KeyOutcome::Selected(_) => self.drain_selections(),
                KeyOutcome::Ignored => {
                    // Esc with nothing to dismiss leaves the app
                    if widget_key == WidgetKey::Escape {
                        self.should_quit = true;
                    }
                }
            }
            return;
        }

        // Inputs are single-line; ignore newline shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j'))
        {
            return;
        }

        if self.focused_field_mut().textarea.input(key) {
            self.input_changed(now);
        }
    }

    /// Forward the edited text to the focused widget
    fn input_changed(&mut self, now: Instant) {
        let field = &mut self.fields[self.focused];
        let text = field.text().to_string();
        field.widget.on_input(text, now);

        if !field.widget.has_pending_search() {
            self.worker.cancel(field.widget.field_id());
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Moved => self.handle_hover(mouse.column, mouse.row),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row, now)
            }
            _ => {}
        }
    }

    fn handle_hover(&mut self, column: u16, row: u16) {
        let under = self.layout.dropdown_row_at(column, row);
        if under == self.hovered {
            return;
        }
        if let Some((field, index)) = self.hovered.take() {
            self.fields[field].widget.on_hover_leave(index);
        }
        if let Some((field, index)) = under {
            self.fields[field].widget.on_hover(index);
        }
        self.hovered = under;
    }

    fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        // Every field whose input and dropdown were missed is dismissed
        for (index, field) in self.fields.iter_mut().enumerate() {
            let inside = self
                .layout
                .field(index)
                .is_some_and(|regions| regions.contains(column, row));
            if !inside {
                field.widget.on_outside_click();
            }
        }

        if let Some((field, index)) = self.layout.dropdown_row_at(column, row) {
            if self.fields[field].widget.on_click(index).is_some() {
                self.drain_selections();
            }
            return;
        }

        // Headers and borders of an open dropdown belong to its field
        let position = Position::new(column, row);
        if self
            .layout
            .fields
            .iter()
            .any(|regions| regions.dropdown.is_some_and(|d| d.contains(position)))
        {
            return;
        }

        if let Some(field) = self.layout.input_at(column, row) {
            self.focus_field(field, now);
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
