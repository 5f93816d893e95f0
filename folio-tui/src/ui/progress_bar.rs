//! Fixed-position scroll progress bar — filled width scales with the
//! smoothed progress fraction (0 = empty, 1 = full width).

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let width = area.width as usize;
    let filled = bar_cells(app.scroll.smoothed(), width);

    let line = Line::from(vec![
        Span::styled("█".repeat(filled), theme::accent()),
        Span::styled("░".repeat(width - filled), theme::muted()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn bar_cells(fraction: f64, width: usize) -> usize {
    ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width)
}
