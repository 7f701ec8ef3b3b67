//! Section screen rendering
//!
//! Walks the focusable slots of the current section and renders each
//! with the shared field renderer.

use super::field_renderer::{
    draw_field, draw_multiline_field, flag_display, masked, options_display, select_display,
};
use crate::app::App;
use crate::state::FieldSlot;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the currently selected section of the form.
pub fn draw_section(frame: &mut Frame, area: Rect, app: &App) {
    let slots = app.state.section.slots();

    let block = Block::default()
        .title(format!(" {} ", app.state.section.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = slots
        .iter()
        .map(|slot| match slot {
            FieldSlot::Multiline(_) => Constraint::Min(4),
            _ => Constraint::Length(3),
        })
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::vertical(constraints).margin(1).split(area);

    for (i, slot) in slots.iter().enumerate() {
        let is_active = app.state.active_field == i;
        let error = slot.field_id().and_then(|id| app.state.error_for(id));

        match *slot {
            FieldSlot::Text(field) => draw_field(
                frame,
                chunks[i],
                field.label(),
                app.state.form.text(field),
                is_active,
                error,
            ),
            FieldSlot::Secret(field) => draw_field(
                frame,
                chunks[i],
                field.label(),
                &masked(app.state.form.text(field)),
                is_active,
                error,
            ),
            FieldSlot::Multiline(field) => draw_multiline_field(
                frame,
                chunks[i],
                field.label(),
                app.state.form.text(field),
                is_active,
            ),
            FieldSlot::Select(field, _) => {
                let display = select_display(app.state.form.text(field), is_active);
                draw_field(frame, chunks[i], field.label(), &display, is_active, error);
            }
            FieldSlot::Options(field, choices) => {
                let display = options_display(
                    choices,
                    app.state.form.options(field),
                    app.state.option_cursor,
                    is_active,
                );
                draw_field(frame, chunks[i], field.label(), &display, is_active, error);
            }
            FieldSlot::Flag(field) => draw_field(
                frame,
                chunks[i],
                field.label(),
                flag_display(app.state.form.flag(field)),
                is_active,
                error,
            ),
            FieldSlot::File(field) => {
                let display = match app.state.form.file(field) {
                    Some(attachment) => format!(
                        "{} ({:.1} MB)",
                        attachment.file_name,
                        attachment.size_bytes as f64 / (1024.0 * 1024.0)
                    ),
                    None => app.state.file_input(field).to_string(),
                };
                draw_field(frame, chunks[i], field.label(), &display, is_active, error);
            }
            FieldSlot::Submit => draw_submit_button(frame, chunks[i], app, is_active),
        }
    }
}

/// The submit button, reflecting the busy flag while a submission is in
/// flight.
fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App, is_active: bool) {
    let busy = app.state.submission.is_busy();
    let label = if busy {
        "Submitting Registration…"
    } else {
        "Submit Registration"
    };

    let style = if busy {
        Style::default().fg(Color::Yellow)
    } else if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_active && !busy {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    frame.render_widget(
        Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
