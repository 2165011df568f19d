//! Keyboard focus within the suggestion list
//!
//! Tracks which row is highlighted. `None` means no row is focused.

/// Focused row of the dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    index: Option<usize>,
}

impl FocusState {
    pub fn new() -> Self {
        Self { index: None }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Focus index with -1 standing for "no row"
    pub fn as_signed(&self) -> isize {
        self.index.map(|i| i as isize).unwrap_or(-1)
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Focus a specific row (mouse hover)
    pub fn set(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Move to the next row, wrapping to the first after the last
    pub fn next(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }

        self.index = match self.index {
            Some(current) => Some((current + 1) % row_count),
            None => Some(0),
        };
    }

    /// Move to the previous row, wrapping to the last before the first
    pub fn previous(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }

        self.index = match self.index {
            Some(0) | None => Some(row_count - 1),
            Some(current) => Some(current - 1),
        };
    }
}
