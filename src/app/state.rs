use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, TextArea};

use super::layout::LayoutRegions;
use crate::client::{SearchOutcome, SearchWorker};
use crate::config::{AutocompleteConfig, Config, FieldConfig};
use crate::suggest::{FieldBinding, Selection, SuggestionWidget};

/// Message shown in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Primary field selection opened a detail page
    Navigated { route: String, label: String },
    /// Non-primary field was filled from a suggestion
    Filled { field: String, value: String },
}

/// One searchable input bound to a suggestion widget
pub struct InputField {
    pub config: FieldConfig,
    pub textarea: TextArea<'static>,
    pub widget: SuggestionWidget,
}

impl InputField {
    pub fn new(config: FieldConfig, autocomplete: &AutocompleteConfig) -> Self {
        let mut binding = FieldBinding::new(config.id.clone(), config.scope);
        binding.primary = config.primary;

        Self {
            widget: SuggestionWidget::bind(binding, autocomplete),
            textarea: create_textarea(),
            config,
        }
    }

    /// Current text of the input
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Replace the input text with the widget's value
    pub fn sync_from_widget(&mut self) {
        if self.text() == self.widget.value() {
            return;
        }
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(self.widget.value());
    }
}

/// Creates a TextArea configured for single-line input.
fn create_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("검색어를 입력하세요");
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    textarea
}

/// Application state
pub struct App {
    pub fields: Vec<InputField>,
    /// Index of the field with keyboard focus
    pub focused: usize,
    pub worker: SearchWorker,
    pub status: Option<StatusMessage>,
    /// Last detail route opened from the primary field
    pub location: Option<String>,
    pub layout: LayoutRegions,
    /// Dropdown row under the pointer, as (field, suggestion index)
    pub hovered: Option<(usize, usize)>,
    pub max_visible: usize,
    pub should_quit: bool,
    selection_rx: Receiver<Selection>,
}

impl App {
    /// Create the app with one input per configured field
    pub fn new(config: &Config, worker: SearchWorker) -> Self {
        let (selection_tx, selection_rx) = mpsc::channel();

        let fields = config
            .fields
            .iter()
            .cloned()
            .map(|field_config| {
                let mut field = InputField::new(field_config, &config.autocomplete);
                let tx = selection_tx.clone();
                field.widget.add_listener(move |selection| {
                    let _ = tx.send(selection.clone());
                });
                field
            })
            .collect();

        Self {
            fields,
            focused: 0,
            worker,
            status: None,
            location: None,
            layout: LayoutRegions::default(),
            hovered: None,
            max_visible: config.autocomplete.max_visible.max(1),
            should_quit: false,
            selection_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focused_field(&self) -> &InputField {
        &self.fields[self.focused]
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        &mut self.fields[self.focused]
    }

    pub fn field_index(&self, field_id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.widget.field_id() == field_id)
    }

    /// Move keyboard focus to another field
    ///
    /// The previously focused field's dropdown is dismissed.
    pub fn focus_field(&mut self, index: usize, now: Instant) {
        if index >= self.fields.len() || index == self.focused {
            return;
        }
        self.fields[self.focused].widget.on_outside_click();
        self.focused = index;
        self.fields[index].widget.on_focus(now);
    }

    pub fn focus_next(&mut self, now: Instant) {
        let next = (self.focused + 1) % self.fields.len();
        self.focus_field(next, now);
    }

    pub fn focus_previous(&mut self, now: Instant) {
        let previous = if self.focused == 0 {
            self.fields.len() - 1
        } else {
            self.focused - 1
        };
        self.focus_field(previous, now);
    }

    /// Advance timers and deliver finished searches
    ///
    /// Called once per loop iteration before rendering.
    pub fn tick(&mut self, now: Instant) {
        for field in &mut self.fields {
            if let Some(request) = field.widget.poll(now)
                && !self.worker.submit(request)
            {
                log::warn!("[{}] search worker is gone", field.widget.field_id());
            }
        }

        while let Some(outcome) = self.worker.try_recv() {
            self.apply_outcome(outcome);
        }

        self.drain_selections();
    }

    fn apply_outcome(&mut self, outcome: SearchOutcome) {
        let Some(index) = self.field_index(&outcome.field_id) else {
            log::debug!("search outcome for unknown field {}", outcome.field_id);
            return;
        };
        let widget = &mut self.fields[index].widget;

        match outcome.result {
            Ok(results) => {
                widget.apply_results(outcome.request_id, results);
            }
            Err(error) => widget.apply_failure(outcome.request_id, &error),
        }
    }

    /// Handle notifications emitted by the widgets' listeners
    pub(crate) fn drain_selections(&mut self) {
        while let Ok(selection) = self.selection_rx.try_recv() {
            // Searches sent before the commit must not reopen the list
            self.worker.cancel(&selection.field_id);
            if let Some(index) = self.field_index(&selection.field_id) {
                self.fields[index].sync_from_widget();
            }

            self.status = Some(match selection.navigate_to {
                Some(route) => {
                    log::info!("navigating to {}", route);
                    self.location = Some(route.clone());
                    StatusMessage::Navigated {
                        route,
                        label: selection.item.display,
                    }
                }
                None => StatusMessage::Filled {
                    field: selection.field_id,
                    value: selection.item.name,
                },
            });
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
