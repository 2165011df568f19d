//! Suggestion dropdown rendering
//!
//! Draws the grouped suggestions directly below their input: a header line
//! per section followed by one line per suggestion, with the focused row
//! highlighted. Returns the screen row of every visible suggestion for
//! mouse hit-testing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::suggest::{SuggestionItem, SuggestionWidget};
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const ELLIPSIS: &str = "…";

/// One line of the dropdown body
#[derive(Debug, Clone, PartialEq, Eq)]
enum DropdownLine<'a> {
    Header(&'a str),
    Row { index: usize, item: &'a SuggestionItem },
}

/// Header and row lines of the widget's current results
fn dropdown_lines(widget: &SuggestionWidget) -> Vec<DropdownLine<'_>> {
    let mut lines = Vec::new();
    for (group, rows) in widget.results().rows() {
        lines.push(DropdownLine::Header(group.label));
        lines.extend(rows.into_iter().map(|(index, item)| DropdownLine::Row { index, item }));
    }
    lines
}

/// First visible line so that the focused row stays on screen
fn scroll_offset(lines: &[DropdownLine<'_>], focused: Option<usize>, viewport: usize) -> usize {
    let Some(focused) = focused else {
        return 0;
    };
    let Some(line) = lines
        .iter()
        .position(|l| matches!(l, DropdownLine::Row { index, .. } if *index == focused))
    else {
        return 0;
    };

    if line < viewport {
        0
    } else {
        line + 1 - viewport
    }
}

/// Cut `text` to `max_width` display columns, ending with an ellipsis if cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

fn row_line(item: &SuggestionItem, focused: bool, width: usize) -> Line<'static> {
    let prefix = if focused { "► " } else { "  " };
    let icon = format!("{} ", item.kind.icon());
    let label_width = width.saturating_sub(prefix.width() + icon.width());
    let label = truncate_to_width(&item.display, label_width);
    let padding = " ".repeat(label_width.saturating_sub(label.width()));

    if focused {
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(icon, style),
            Span::styled(format!("{}{}", label, padding), style),
        ])
    } else {
        Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::White)),
            Span::raw(icon),
            Span::styled(label, Style::default().fg(Color::White)),
        ])
    }
}

fn header_line(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", label),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Render the dropdown of `widget` below `input_area`
///
/// Returns the dropdown area and the screen row of each visible suggestion,
/// or `None` when nothing was drawn.
pub fn render_dropdown(
    widget: &SuggestionWidget,
    frame: &mut Frame,
    input_area: Rect,
    max_visible: usize,
) -> Option<(Rect, Vec<(u16, usize)>)> {
    if !widget.is_open() || widget.results().is_empty() {
        return None;
    }

    let lines = dropdown_lines(widget);
    // Section headers count against the visible height
    let visible_lines = lines.len().min(max_visible);
    let wanted_height = visible_lines as u16 + POPUP_BORDER_HEIGHT;

    let area = popup::popup_below_anchor(input_area, wanted_height, frame.area());
    if area.height <= POPUP_BORDER_HEIGHT || area.width <= 2 {
        return None;
    }
    let inner = popup::inset_rect(area, 1, 1);
    let viewport = inner.height as usize;

    let focused = widget.focus_index();
    let offset = scroll_offset(&lines, focused, viewport);
    let width = inner.width as usize;

    let mut rows = Vec::new();
    let rendered: Vec<Line> = lines
        .iter()
        .skip(offset)
        .take(viewport)
        .enumerate()
        .map(|(i, line)| match line {
            DropdownLine::Header(label) => header_line(label),
            DropdownLine::Row { index, item } => {
                rows.push((inner.y + i as u16, *index));
                row_line(item, focused == Some(*index), width)
            }
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);

    let title = format!(" {} ", widget.results().len());
    let dropdown = Paragraph::new(rendered).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(dropdown, area);

    Some((area, rows))
}

#[cfg(test)]
#[path = "dropdown_tests.rs"]
mod dropdown_tests;
