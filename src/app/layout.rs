//! Screen regions of the last rendered frame
//!
//! Rendering records where each input and dropdown row landed so mouse
//! events can be mapped back to fields and suggestion indices.

use ratatui::layout::{Position, Rect};

/// Where one field and its dropdown were drawn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRegions {
    pub input: Rect,
    pub dropdown: Option<Rect>,
    /// Screen row of each visible suggestion, with its flat index
    pub rows: Vec<(u16, usize)>,
}

impl FieldRegions {
    /// Whether a point is inside the input or its dropdown
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.input.contains(position) || self.dropdown.is_some_and(|d| d.contains(position))
    }

    /// Suggestion index under a point in the dropdown
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let dropdown = self.dropdown?;
        if !dropdown.contains(Position::new(column, row)) {
            return None;
        }
        self.rows
            .iter()
            .find(|(y, _)| *y == row)
            .map(|(_, index)| *index)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub fields: Vec<FieldRegions>,
}

impl LayoutRegions {
    pub fn field(&self, index: usize) -> Option<&FieldRegions> {
        self.fields.get(index)
    }

    /// Field whose input box contains the point
    pub fn input_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.fields.iter().position(|f| f.input.contains(position))
    }

    /// Field and suggestion index of the dropdown row under the point
    pub fn dropdown_row_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        self.fields
            .iter()
            .enumerate()
            .find_map(|(field, regions)| regions.row_at(column, row).map(|i| (field, i)))
    }
}
