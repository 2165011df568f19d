//! Suggestion widget state machine
//!
//! Framework-free state behind one bound input field: debounced search
//! dispatch, result acceptance, keyboard focus and selection commit. The
//! host UI forwards its events to the `on_*` methods and renders from the
//! accessors.

use std::fmt;
use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use super::focus::FocusState;
use super::group::GroupedResults;
use super::item::SuggestionItem;
use super::scope::SearchScope;
use crate::config::AutocompleteConfig;
use crate::error::SuggestError;

/// How a widget is attached to its host field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    /// Opaque identifier of the host input
    pub field_id: String,
    pub scope: SearchScope,
    /// Primary search field: selections navigate to the detail page
    pub primary: bool,
}

impl FieldBinding {
    pub fn new(field_id: impl Into<String>, scope: SearchScope) -> Self {
        Self {
            field_id: field_id.into(),
            scope,
            primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

/// A search ready to be sent to the lookup endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub field_id: String,
    /// Sequence number, increasing per widget
    pub request_id: u64,
    pub query: String,
    pub scope: SearchScope,
}

/// Outcome of committing a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub field_id: String,
    pub item: SuggestionItem,
    /// Detail route to open; only set for the primary field
    pub navigate_to: Option<String>,
}

/// Keys the widget reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKey {
    Down,
    Up,
    Enter,
    Escape,
    Other,
}

/// Result of `on_key_down`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key was consumed; host should suppress its default action
    Handled,
    /// Key is not for the widget
    Ignored,
    /// Enter committed the focused row
    Selected(Selection),
}

/// Observable widget state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub focus: FocusState,
    pub last_query: String,
    pub is_open: bool,
}

type Listener = Box<dyn FnMut(&Selection) + Send>;

pub struct SuggestionWidget {
    binding: FieldBinding,
    min_query_len: usize,
    value: String,
    state: WidgetState,
    debouncer: Debouncer,
    results: GroupedResults,
    /// Id of the most recently dispatched (or invalidated) request
    last_dispatched: u64,
    listeners: Vec<Listener>,
}

impl fmt::Debug for SuggestionWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionWidget")
            .field("binding", &self.binding)
            .field("value", &self.value)
            .field("state", &self.state)
            .field("results", &self.results.len())
            .field("last_dispatched", &self.last_dispatched)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SuggestionWidget {
    /// Bind a widget to a field using the autocomplete settings
    pub fn bind(binding: FieldBinding, config: &AutocompleteConfig) -> Self {
        Self {
            binding,
            min_query_len: config.min_query_len.max(1),
            value: String::new(),
            state: WidgetState::default(),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            results: GroupedResults::default(),
            last_dispatched: 0,
            listeners: Vec::new(),
        }
    }

    pub fn field_id(&self) -> &str {
        &self.binding.field_id
    }

    pub fn scope(&self) -> SearchScope {
        self.binding.scope
    }

    pub fn is_primary(&self) -> bool {
        self.binding.primary
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.state.focus.index()
    }

    pub fn results(&self) -> &GroupedResults {
        &self.results
    }

    pub fn focused_item(&self) -> Option<&SuggestionItem> {
        self.focus_index().and_then(|i| self.results.item(i))
    }

    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Register a selection listener
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&Selection) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Text of the field changed
    pub fn on_input(&mut self, value: impl Into<String>, now: Instant) {
        self.value = value.into();

        if self.meets_min_length() {
            self.debouncer.schedule(self.value.clone(), now);
        } else {
            self.debouncer.cancel();
            self.invalidate_in_flight();
            self.close();
        }
    }

    /// Field regained focus: refresh results for the existing text
    pub fn on_focus(&mut self, now: Instant) {
        if self.meets_min_length() {
            self.debouncer.schedule(self.value.clone(), now);
        }
    }

    /// Release a search once the debounce period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
        let query = self.debouncer.poll(now)?;

        self.last_dispatched = self.last_dispatched.wrapping_add(1);
        self.state.last_query = query.clone();
        log::debug!(
            "[{}] dispatching search #{} for {:?} ({})",
            self.binding.field_id,
            self.last_dispatched,
            query,
            self.binding.scope
        );

        Some(SearchRequest {
            field_id: self.binding.field_id.clone(),
            request_id: self.last_dispatched,
            query,
            scope: self.binding.scope,
        })
    }

    /// Install the results of a search
    ///
    /// Returns false when the response belongs to an outdated request.
    pub fn apply_results(&mut self, request_id: u64, results: GroupedResults) -> bool {
        if request_id != self.last_dispatched {
            log::debug!(
                "[{}] dropping stale response #{} (latest #{})",
                self.binding.field_id,
                request_id,
                self.last_dispatched
            );
            return false;
        }

        self.results = results;
        self.state.focus.clear();
        self.state.is_open = !self.results.is_empty();
        true
    }

    /// Record a failed search; the dropdown keeps whatever it was showing
    pub fn apply_failure(&mut self, request_id: u64, error: &SuggestError) {
        log::warn!(
            "[{}] autocomplete search #{} failed: {}",
            self.binding.field_id,
            request_id,
            error
        );
    }

    pub fn on_key_down(&mut self, key: WidgetKey) -> KeyOutcome {
        if !self.state.is_open {
            return KeyOutcome::Ignored;
        }

        let row_count = self.results.len();
        match key {
            WidgetKey::Down => {
                self.state.focus.next(row_count);
                KeyOutcome::Handled
            }
            WidgetKey::Up => {
                self.state.focus.previous(row_count);
                KeyOutcome::Handled
            }
            WidgetKey::Enter => match self.focus_index().and_then(|i| self.commit(i)) {
                Some(selection) => KeyOutcome::Selected(selection),
                None => KeyOutcome::Ignored,
            },
            WidgetKey::Escape => {
                self.close();
                KeyOutcome::Handled
            }
            WidgetKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Pointer entered a row
    pub fn on_hover(&mut self, index: usize) {
        if self.state.is_open && index < self.results.len() {
            self.state.focus.set(index);
        }
    }

    /// Pointer left a row; its highlight is dropped
    pub fn on_hover_leave(&mut self, index: usize) {
        if self.state.focus.index() == Some(index) {
            self.state.focus.clear();
        }
    }

    /// Pointer clicked a row
    pub fn on_click(&mut self, index: usize) -> Option<Selection> {
        if !self.state.is_open {
            return None;
        }
        self.commit(index)
    }

    /// Pointer interaction outside the field and its dropdown
    pub fn on_outside_click(&mut self) {
        self.close();
    }

    /// Fill the field with the row's name, close, and notify listeners
    pub fn commit(&mut self, index: usize) -> Option<Selection> {
        let item = self.results.item(index)?.clone();

        self.value = item.name.clone();
        self.debouncer.cancel();
        self.invalidate_in_flight();
        self.close();

        let navigate_to = self.binding.primary.then(|| item.detail_route());
        let selection = Selection {
            field_id: self.binding.field_id.clone(),
            item,
            navigate_to,
        };

        for listener in &mut self.listeners {
            listener(&selection);
        }

        Some(selection)
    }

    fn close(&mut self) {
        self.state.is_open = false;
    }

    fn meets_min_length(&self) -> bool {
        self.value.chars().count() >= self.min_query_len
    }

    /// Make every already-dispatched request stale
    fn invalidate_in_flight(&mut self) {
        self.last_dispatched = self.last_dispatched.wrapping_add(1);
    }
}

#[cfg(test)]
#[path = "widget_tests.rs"]
mod widget_tests;
