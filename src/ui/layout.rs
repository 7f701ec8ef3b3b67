//! Page chrome: header, result banner, section tabs, status bar

use crate::app::App;
use crate::state::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the platform header.
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Dhundho Apna Lawyer (DAL)",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" — Advocate Registration", Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(header, area);
}

/// Draw the submission result banner, when there is one.
pub fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = &app.state.last_result else {
        return;
    };

    let (title, color) = if result.is_success() {
        (" Registration Submitted ", Color::Green)
    } else {
        (" Registration Failed ", Color::Red)
    };

    let banner = Paragraph::new(result.message().to_string())
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(banner, area);
}

/// Draw the section tab bar; sections holding validation errors are
/// marked so the advocate can find them from anywhere in the form.
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (i, &section) in Section::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }

        let has_errors = section
            .slots()
            .iter()
            .filter_map(|slot| slot.field_id())
            .any(|id| app.state.errors.contains_key(&id));

        let style = if section == app.state.section {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if has_errors {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(section.label(), style));
        if has_errors {
            spans.push(Span::styled(" !", Style::default().fg(Color::Red)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar: busy indicator, transient status, or key help.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.state.submission.is_busy() {
        Line::from(Span::styled(
            "Submitting Registration…",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(message) = &app.state.status_message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled("PgUp/PgDn", Style::default().fg(Color::Cyan)),
            Span::raw(": section  "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(": toggle  "),
            Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
            Span::raw(": submit  "),
            Span::styled("Ctrl+Q", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ])
    };
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
