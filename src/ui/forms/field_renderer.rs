//! Field rendering utilities for the form sections

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::collections::BTreeSet;

/// Border/content colors for a field in its current state.
fn field_style(is_active: bool, error: Option<&str>) -> (Style, Style) {
    let border = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let content = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    (border, content)
}

/// Draw a single-line field with its label, value, and error message.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let (border_style, content_style) = field_style(is_active, error);

    let display = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let cursor = if is_active { "▌" } else { "" };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {message} "),
                Style::default().fg(Color::Red),
            ))
            .left_aligned(),
        );
    }

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display, content_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(content.block(block), area);
}

/// Draw a multi-line free-text field.
pub fn draw_multiline_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
) {
    let (border_style, content_style) = field_style(is_active, None);

    let mut lines: Vec<Line> = value
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), content_style)))
        .collect();
    if is_active {
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        match lines.last_mut() {
            Some(last) if !value.ends_with('\n') => last.spans.push(cursor),
            _ => lines.push(Line::from(cursor)),
        }
    } else if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Display line for a multi-select field.
///
/// Active: a spinner over the option under the cursor with its checked
/// state, plus a summary of everything selected. Inactive: the summary
/// alone.
pub fn options_display(
    choices: &[&str],
    selected: &BTreeSet<String>,
    cursor: usize,
    is_active: bool,
) -> String {
    let summary = if selected.is_empty() {
        "(none selected)".to_string()
    } else {
        selected.iter().cloned().collect::<Vec<_>>().join(", ")
    };

    if !is_active {
        return summary;
    }

    let option = choices[cursor.min(choices.len() - 1)];
    let mark = if selected.contains(option) { "x" } else { " " };
    format!("▲▼ [{mark}] {option}  —  {summary}")
}

/// Display line for a single-choice field.
pub fn select_display(value: &str, is_active: bool) -> String {
    let shown = if value.is_empty() { "(none)" } else { value };
    if is_active {
        format!("▲▼ {shown}")
    } else {
        shown.to_string()
    }
}

/// Display line for a boolean toggle.
pub fn flag_display(value: bool) -> &'static str {
    if value {
        "[x] Yes"
    } else {
        "[ ] No"
    }
}

/// Mask a secret value for display.
pub fn masked(value: &str) -> String {
    "•".repeat(value.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_display_inactive_summarizes() {
        let mut selected = BTreeSet::new();
        selected.insert("High Court".to_string());
        selected.insert("District Court".to_string());
        let display = options_display(&["District Court", "High Court"], &selected, 0, false);
        assert_eq!(display, "District Court, High Court");
    }

    #[test]
    fn test_options_display_active_shows_cursor_option() {
        let selected = BTreeSet::new();
        let display = options_display(&["District Court", "High Court"], &selected, 1, true);
        assert!(display.contains("[ ] High Court"));
        assert!(display.contains("(none selected)"));
    }

    #[test]
    fn test_select_display() {
        assert_eq!(select_display("", false), "(none)");
        assert_eq!(select_display("Goa", false), "Goa");
        assert_eq!(select_display("Goa", true), "▲▼ Goa");
    }

    #[test]
    fn test_flag_display() {
        assert_eq!(flag_display(true), "[x] Yes");
        assert_eq!(flag_display(false), "[ ] No");
    }

    #[test]
    fn test_masked_hides_length_only() {
        assert_eq!(masked(""), "");
        assert_eq!(masked("abc"), "•••");
    }
}
