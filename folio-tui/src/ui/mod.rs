//! Top-level UI layout — progress bar, scrollable page, status bar, and the
//! navigation overlay on top.

pub mod nav_overlay;
pub mod page;
pub mod progress_bar;
pub mod sections;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::AppState;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    progress_bar::render(f, chunks[0], app);
    page::render(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    // Overlay presence is driven by the reveal animation, so the closing
    // transition stays visible after the boolean flips.
    if app.nav.reveal() > 0.0 {
        nav_overlay::render(f, chunks[1], app);
    }
}
