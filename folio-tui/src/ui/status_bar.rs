//! Bottom status bar — key hints plus the transient status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::input;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(input::key_hints(), theme::muted()));
    spans.push(Span::styled(
        format!("  #{}", app.active_section().anchor()),
        theme::accent(),
    ));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.clone(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
