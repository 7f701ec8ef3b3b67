//! UI module for rendering the TUI

mod forms;
mod layout;

use crate::app::App;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // The banner row collapses until there is a result to show
    let banner_height = if app.state.last_result.is_some() { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(3),             // Header
        Constraint::Length(banner_height), // Result banner
        Constraint::Length(1),             // Section tabs
        Constraint::Min(0),                // Section body
        Constraint::Length(1),             // Status bar
    ])
    .split(area);

    layout::draw_header(frame, chunks[0]);
    layout::draw_banner(frame, chunks[1], app);
    layout::draw_tabs(frame, chunks[2], app);
    forms::draw_section(frame, chunks[3], app);
    layout::draw_status_bar(frame, chunks[4], app);
}
